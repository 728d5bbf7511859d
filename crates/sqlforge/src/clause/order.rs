//! ORDER BY clause.

use crate::error::{SqlError, SqlResult};
use crate::func::SqlFunction;
use crate::render::{Keyword, Render, SqlWriter};
use crate::table::Column;
use crate::term::{AliasRef, AliasedTerm, Term};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Placement of NULLs in the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

/// One ORDER BY expression: a term with optional direction and NULL
/// placement, e.g. `total DESC NULLS LAST`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    term: Term,
    direction: Option<SortDirection>,
    nulls: Option<NullsOrder>,
}

impl OrderByExpr {
    pub(crate) fn from_term(term: Term) -> Self {
        Self {
            term,
            direction: None,
            nulls: None,
        }
    }

    pub fn asc(mut self) -> Self {
        self.direction = Some(SortDirection::Asc);
        self
    }

    pub fn desc(mut self) -> Self {
        self.direction = Some(SortDirection::Desc);
        self
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullsOrder::First);
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullsOrder::Last);
        self
    }
}

impl From<Column> for OrderByExpr {
    fn from(column: Column) -> Self {
        Self::from_term(Term::Column(column))
    }
}

impl From<&Column> for OrderByExpr {
    fn from(column: &Column) -> Self {
        Self::from_term(Term::Column(column.clone()))
    }
}

impl From<SqlFunction> for OrderByExpr {
    fn from(function: SqlFunction) -> Self {
        Self::from_term(Term::Function(function))
    }
}

impl From<&SqlFunction> for OrderByExpr {
    fn from(function: &SqlFunction) -> Self {
        Self::from_term(Term::Function(function.clone()))
    }
}

impl From<AliasedTerm> for OrderByExpr {
    fn from(aliased: AliasedTerm) -> Self {
        Self::from_term(Term::from(aliased))
    }
}

impl From<&AliasedTerm> for OrderByExpr {
    fn from(aliased: &AliasedTerm) -> Self {
        Self::from_term(Term::from(aliased))
    }
}

impl From<AliasRef> for OrderByExpr {
    fn from(alias_ref: AliasRef) -> Self {
        Self::from_term(Term::from(alias_ref))
    }
}

impl From<&AliasRef> for OrderByExpr {
    fn from(alias_ref: &AliasRef) -> Self {
        Self::from_term(Term::from(alias_ref))
    }
}

impl Render for OrderByExpr {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        self.term.render(w)?;
        if let Some(direction) = self.direction {
            w.space();
            w.keyword(match direction {
                SortDirection::Asc => Keyword::Asc,
                SortDirection::Desc => Keyword::Desc,
            });
        }
        if let Some(nulls) = self.nulls {
            w.space();
            w.keyword(match nulls {
                NullsOrder::First => Keyword::NullsFirst,
                NullsOrder::Last => Keyword::NullsLast,
            });
        }
        Ok(())
    }
}

/// The ORDER BY clause: one or more sort expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByClause {
    items: Vec<OrderByExpr>,
}

impl OrderByClause {
    /// Fails with [`SqlError::EmptyClause`] when `items` is empty.
    pub fn new(items: Vec<OrderByExpr>) -> SqlResult<Self> {
        if items.is_empty() {
            return Err(SqlError::EmptyClause("ORDER BY"));
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[OrderByExpr] {
        &self.items
    }
}

impl Render for OrderByClause {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        w.keyword(Keyword::OrderBy);
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
