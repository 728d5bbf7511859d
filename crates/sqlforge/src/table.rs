//! Relation references: tables, aliased tables, and the columns they issue.
//!
//! A [`Table`] is created once at schema-definition time and reused across
//! queries. Aliasing a table produces a distinct [`AliasedTable`] value that
//! re-owns the table's columns under the alias identity, which is what keeps
//! the two sides of a self-join independently resolvable.

use crate::error::{SqlError, SqlResult};
use crate::render::{Render, SqlWriter};

/// A base table with an optional schema and database qualifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    schema: Option<String>,
    database: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            database: None,
        }
    }

    /// Qualify the table with a schema.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Qualify the table with a database.
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Issue a column owned by this table.
    pub fn column(&self, name: impl Into<String>) -> Column {
        Column {
            owner: TableRef::Table(self.clone()),
            name: name.into(),
        }
    }

    /// Alias this table for one FROM/JOIN occurrence.
    pub fn alias(&self, alias: impl Into<String>) -> AliasedTable {
        AliasedTable {
            table: self.clone(),
            alias: alias.into(),
        }
    }

    /// `database.schema.name` with absent qualifiers skipped.
    pub(crate) fn qualified_name(&self) -> String {
        let mut out = String::new();
        for part in [
            self.database.as_deref(),
            self.schema.as_deref(),
            Some(self.name.as_str()),
        ]
        .into_iter()
        .flatten()
        {
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(part);
        }
        out
    }
}

/// A table occurrence bound to an alias.
///
/// Each `AliasedTable` value is its own relation reference even when several
/// of them wrap the same underlying [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasedTable {
    table: Table,
    alias: String,
}

impl AliasedTable {
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn alias_name(&self) -> &str {
        &self.alias
    }

    /// Re-own a column of the underlying table under this alias.
    ///
    /// Fails when the column was issued by a different relation.
    pub fn col(&self, column: &Column) -> SqlResult<Column> {
        if column.owner.table() != &self.table {
            return Err(SqlError::ForeignColumn {
                column: column.name.clone(),
                relation: self.table.qualified_name(),
            });
        }
        Ok(Column {
            owner: TableRef::Aliased(self.clone()),
            name: column.name.clone(),
        })
    }
}

/// A relation reference as it appears in FROM or JOIN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRef {
    Table(Table),
    Aliased(AliasedTable),
}

impl TableRef {
    /// The underlying table.
    pub fn table(&self) -> &Table {
        match self {
            Self::Table(table) => table,
            Self::Aliased(aliased) => &aliased.table,
        }
    }

    /// The alias this occurrence introduces, if any.
    pub fn introduced_alias(&self) -> Option<&str> {
        match self {
            Self::Table(_) => None,
            Self::Aliased(aliased) => Some(&aliased.alias),
        }
    }

    /// The qualifier used for this reference's wildcard or columns:
    /// the alias when aliased, otherwise the single alias the surrounding
    /// statement bound to the table, otherwise the qualified table name.
    pub(crate) fn qualifier(&self, w: &SqlWriter<'_>) -> SqlResult<String> {
        match self {
            Self::Aliased(aliased) => Ok(aliased.alias.clone()),
            Self::Table(table) => Ok(w
                .alias_for_table(table)?
                .map(str::to_string)
                .unwrap_or_else(|| table.qualified_name())),
        }
    }
}

impl Render for TableRef {
    /// FROM/JOIN rendering: `name` or `name alias`.
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        match self {
            Self::Table(table) => w.push(&table.qualified_name()),
            Self::Aliased(aliased) => {
                w.push(&aliased.table.qualified_name());
                w.space();
                w.push(&aliased.alias);
            }
        }
        Ok(())
    }
}

impl From<Table> for TableRef {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

impl From<&Table> for TableRef {
    fn from(table: &Table) -> Self {
        Self::Table(table.clone())
    }
}

impl From<AliasedTable> for TableRef {
    fn from(aliased: AliasedTable) -> Self {
        Self::Aliased(aliased)
    }
}

impl From<&AliasedTable> for TableRef {
    fn from(aliased: &AliasedTable) -> Self {
        Self::Aliased(aliased.clone())
    }
}

/// A column reference: owning relation reference plus column name.
///
/// Two columns are equal iff they have the same owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    owner: TableRef,
    name: String,
}

impl Column {
    pub fn owner(&self) -> &TableRef {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Render for Column {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        let qualifier = self.owner.qualifier(w)?;
        w.push(&qualifier);
        w.push(".");
        w.push(&self.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_names() {
        assert_eq!(Table::new("customers").qualified_name(), "customers");
        assert_eq!(
            Table::new("orders").schema("sales").qualified_name(),
            "sales.orders"
        );
        assert_eq!(
            Table::new("reports")
                .schema("public")
                .database("analytics_db")
                .qualified_name(),
            "analytics_db.public.reports"
        );
    }

    #[test]
    fn column_equality_is_owner_and_name() {
        let customers = Table::new("customers");
        assert_eq!(customers.column("id"), customers.column("id"));
        assert_ne!(customers.column("id"), customers.column("email"));
        let aliased = customers.alias("c");
        let re_owned = aliased.col(&customers.column("id")).unwrap();
        assert_ne!(customers.column("id"), re_owned);
    }

    #[test]
    fn aliased_occurrences_are_distinct_references() {
        let customers = Table::new("customers");
        let employees = customers.alias("employees");
        let managers = customers.alias("managers");
        assert_ne!(TableRef::from(&employees), TableRef::from(&managers));
        assert_eq!(employees.table(), managers.table());
    }

    #[test]
    fn foreign_column_is_rejected() {
        let customers = Table::new("customers");
        let orders = Table::new("orders");
        let aliased = customers.alias("c");
        let err = aliased.col(&orders.column("id")).unwrap_err();
        assert_eq!(
            err,
            SqlError::ForeignColumn {
                column: "id".to_string(),
                relation: "customers".to_string(),
            }
        );
    }
}
