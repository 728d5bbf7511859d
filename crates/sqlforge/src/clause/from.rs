//! FROM clause.

use crate::error::SqlResult;
use crate::render::{Keyword, Render, SqlWriter};
use crate::table::TableRef;

/// The FROM clause: exactly one relation reference.
#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    relation: TableRef,
}

impl FromClause {
    pub fn new(relation: impl Into<TableRef>) -> Self {
        Self {
            relation: relation.into(),
        }
    }

    pub fn relation(&self) -> &TableRef {
        &self.relation
    }
}

impl Render for FromClause {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        w.keyword(Keyword::From);
        w.space();
        self.relation.render(w)
    }
}
