//! LIMIT and OFFSET clauses.

use crate::error::SqlResult;
use crate::render::{Keyword, Render, SqlWriter};
use crate::term::{Number, Param, Term};

/// Argument of LIMIT or OFFSET: a number literal or a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum PageArg {
    Count(Number),
    Param(Param),
}

impl From<i32> for PageArg {
    fn from(value: i32) -> Self {
        Self::Count(Number::from(value))
    }
}

impl From<i64> for PageArg {
    fn from(value: i64) -> Self {
        Self::Count(Number::from(value))
    }
}

impl From<u32> for PageArg {
    fn from(value: u32) -> Self {
        Self::Count(Number::from(value))
    }
}

impl From<Param> for PageArg {
    fn from(param: Param) -> Self {
        Self::Param(param)
    }
}

impl From<&Param> for PageArg {
    fn from(param: &Param) -> Self {
        Self::Param(param.clone())
    }
}

impl Render for PageArg {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        match self {
            Self::Count(number) => {
                w.push(&number.to_string());
                Ok(())
            }
            Self::Param(param) => Term::Param(param.clone()).render(w),
        }
    }
}

/// The LIMIT clause.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitClause {
    value: PageArg,
}

impl LimitClause {
    pub fn new(value: impl Into<PageArg>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Render for LimitClause {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        w.keyword(Keyword::Limit);
        w.space();
        self.value.render(w)
    }
}

/// The OFFSET clause.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetClause {
    value: PageArg,
}

impl OffsetClause {
    pub fn new(value: impl Into<PageArg>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Render for OffsetClause {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        w.keyword(Keyword::Offset);
        w.space();
        self.value.render(w)
    }
}
