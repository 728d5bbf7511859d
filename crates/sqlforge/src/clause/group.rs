//! GROUP BY clause.

use crate::error::{SqlError, SqlResult};
use crate::func::SqlFunction;
use crate::render::{Keyword, Render, SqlWriter};
use crate::table::Column;
use crate::term::{AliasRef, AliasedTerm, Term};

/// One GROUP BY expression.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupByExpr {
    Column(Column),
    /// Scalar function call; aggregates are rejected at render time.
    Function(SqlFunction),
    /// Grouping by the bare alias of a SELECT item.
    Aliased(AliasedTerm),
    /// Alias name resolved against the SELECT list at render time.
    Ref(AliasRef),
}

impl From<Column> for GroupByExpr {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<&Column> for GroupByExpr {
    fn from(column: &Column) -> Self {
        Self::Column(column.clone())
    }
}

impl From<SqlFunction> for GroupByExpr {
    fn from(function: SqlFunction) -> Self {
        Self::Function(function)
    }
}

impl From<&SqlFunction> for GroupByExpr {
    fn from(function: &SqlFunction) -> Self {
        Self::Function(function.clone())
    }
}

impl From<AliasedTerm> for GroupByExpr {
    fn from(aliased: AliasedTerm) -> Self {
        Self::Aliased(aliased)
    }
}

impl From<&AliasedTerm> for GroupByExpr {
    fn from(aliased: &AliasedTerm) -> Self {
        Self::Aliased(aliased.clone())
    }
}

impl From<AliasRef> for GroupByExpr {
    fn from(alias_ref: AliasRef) -> Self {
        Self::Ref(alias_ref)
    }
}

impl From<&AliasRef> for GroupByExpr {
    fn from(alias_ref: &AliasRef) -> Self {
        Self::Ref(alias_ref.clone())
    }
}

impl Render for GroupByExpr {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        match self {
            Self::Column(column) => column.render(w),
            Self::Function(function) => {
                if function.is_aggregate() {
                    return Err(SqlError::unsupported(format!(
                        "aggregate function {} in GROUP BY",
                        function.name()
                    )));
                }
                function.render(w)
            }
            Self::Aliased(aliased) => {
                w.push(aliased.alias_name());
                Ok(())
            }
            Self::Ref(alias_ref) => Term::from(alias_ref).render(w),
        }
    }
}

/// The GROUP BY clause: one or more grouping expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupByClause {
    items: Vec<GroupByExpr>,
}

impl GroupByClause {
    /// Fails with [`SqlError::EmptyClause`] when `items` is empty.
    pub fn new(items: Vec<GroupByExpr>) -> SqlResult<Self> {
        if items.is_empty() {
            return Err(SqlError::EmptyClause("GROUP BY"));
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[GroupByExpr] {
        &self.items
    }
}

impl Render for GroupByClause {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        w.keyword(Keyword::GroupBy);
        w.space();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                w.push(", ");
            }
            item.render(w)?;
        }
        Ok(())
    }
}
