//! SELECT clause.

use crate::error::SqlResult;
use crate::func::SqlFunction;
use crate::render::{Keyword, Render, SqlWriter};
use crate::table::{AliasedTable, Column, Table, TableRef};
use crate::term::{AliasedTerm, Literal, Param, Term};

/// One expression of the SELECT list.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectExpr {
    /// `*`
    Star,
    /// `relation.*`
    Relation(TableRef),
    Column(Column),
    Function(SqlFunction),
    Literal(Literal),
    Param(Param),
    /// `term AS alias`
    Aliased(AliasedTerm),
}

/// The `*` select expression.
pub fn star() -> SelectExpr {
    SelectExpr::Star
}

impl From<Column> for SelectExpr {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<&Column> for SelectExpr {
    fn from(column: &Column) -> Self {
        Self::Column(column.clone())
    }
}

impl From<SqlFunction> for SelectExpr {
    fn from(function: SqlFunction) -> Self {
        Self::Function(function)
    }
}

impl From<&SqlFunction> for SelectExpr {
    fn from(function: &SqlFunction) -> Self {
        Self::Function(function.clone())
    }
}

impl From<Literal> for SelectExpr {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<&Literal> for SelectExpr {
    fn from(literal: &Literal) -> Self {
        Self::Literal(literal.clone())
    }
}

impl From<Param> for SelectExpr {
    fn from(param: Param) -> Self {
        Self::Param(param)
    }
}

impl From<&Param> for SelectExpr {
    fn from(param: &Param) -> Self {
        Self::Param(param.clone())
    }
}

impl From<AliasedTerm> for SelectExpr {
    fn from(aliased: AliasedTerm) -> Self {
        Self::Aliased(aliased)
    }
}

impl From<&AliasedTerm> for SelectExpr {
    fn from(aliased: &AliasedTerm) -> Self {
        Self::Aliased(aliased.clone())
    }
}

impl From<Table> for SelectExpr {
    fn from(table: Table) -> Self {
        Self::Relation(TableRef::Table(table))
    }
}

impl From<&Table> for SelectExpr {
    fn from(table: &Table) -> Self {
        Self::Relation(TableRef::Table(table.clone()))
    }
}

impl From<AliasedTable> for SelectExpr {
    fn from(aliased: AliasedTable) -> Self {
        Self::Relation(TableRef::Aliased(aliased))
    }
}

impl From<&AliasedTable> for SelectExpr {
    fn from(aliased: &AliasedTable) -> Self {
        Self::Relation(TableRef::Aliased(aliased.clone()))
    }
}

impl Render for SelectExpr {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        match self {
            Self::Star => w.push("*"),
            Self::Relation(relation) => {
                let qualifier = relation.qualifier(w)?;
                w.push(&qualifier);
                w.push(".*");
            }
            Self::Column(column) => column.render(w)?,
            Self::Function(function) => function.render(w)?,
            Self::Literal(literal) => Term::Literal(literal.clone()).render(w)?,
            Self::Param(param) => Term::Param(param.clone()).render(w)?,
            Self::Aliased(aliased) => {
                aliased.term().render(w)?;
                w.space();
                w.keyword(Keyword::As);
                w.space();
                w.push(aliased.alias_name());
            }
        }
        Ok(())
    }
}

/// The ordered SELECT list. An empty list renders as `SELECT *`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectClause {
    items: Vec<SelectExpr>,
}

impl SelectClause {
    pub fn new(items: Vec<SelectExpr>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[SelectExpr] {
        &self.items
    }

    /// The (alias, term) pairs this SELECT list introduces.
    pub(crate) fn term_aliases(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.items.iter().filter_map(|item| match item {
            SelectExpr::Aliased(aliased) => Some((aliased.alias_name(), aliased.term())),
            _ => None,
        })
    }
}

impl Render for SelectClause {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        w.keyword(Keyword::Select);
        w.space();
        if self.items.is_empty() {
            w.push("*");
            return Ok(());
        }
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                w.push(", ");
            }
            item.render(w)?;
        }
        Ok(())
    }
}
