//! WHERE and HAVING clauses: a keyword plus one predicate tree.

use crate::error::SqlResult;
use crate::predicate::Predicate;
use crate::render::{Keyword, Render, SqlWriter};

/// The WHERE clause.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    predicate: Predicate,
}

impl WhereClause {
    pub fn new(predicate: Predicate) -> Self {
        Self { predicate }
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

impl Render for WhereClause {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        w.keyword(Keyword::Where);
        w.space();
        self.predicate.render(w)
    }
}

/// The HAVING clause.
#[derive(Debug, Clone, PartialEq)]
pub struct HavingClause {
    predicate: Predicate,
}

impl HavingClause {
    pub fn new(predicate: Predicate) -> Self {
        Self { predicate }
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

impl Render for HavingClause {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        w.keyword(Keyword::Having);
        w.space();
        self.predicate.render(w)
    }
}
