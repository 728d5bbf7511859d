//! SQL function calls.
//!
//! Aggregates are legal in SELECT, HAVING and ORDER BY; scalar functions
//! additionally in GROUP BY. Function names are emitted verbatim and are not
//! subject to keyword casing.

use crate::error::SqlResult;
use crate::render::{Render, SqlWriter, render_list};
use crate::term::Term;

/// Whether a function aggregates rows or maps a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Aggregate,
    Scalar,
}

/// A function call over term arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFunction {
    name: String,
    args: Vec<Term>,
    kind: FunctionKind,
}

impl SqlFunction {
    /// Create an aggregate function call.
    pub fn aggregate(name: impl Into<String>, args: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            args,
            kind: FunctionKind::Aggregate,
        }
    }

    /// Create a scalar function call.
    pub fn scalar(name: impl Into<String>, args: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            args,
            kind: FunctionKind::Scalar,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    pub(crate) fn is_aggregate(&self) -> bool {
        self.kind == FunctionKind::Aggregate
    }
}

impl Render for SqlFunction {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        w.push(&self.name);
        w.push("(");
        render_list(&self.args, ", ", w)?;
        w.push(")");
        Ok(())
    }
}

/// `COUNT(*)`
pub fn count() -> SqlFunction {
    SqlFunction::aggregate("COUNT", vec![Term::Star])
}

/// `COUNT(expr)`
pub fn count_of(expr: impl Into<Term>) -> SqlFunction {
    SqlFunction::aggregate("COUNT", vec![expr.into()])
}

/// `SUM(expr)`
pub fn sum(expr: impl Into<Term>) -> SqlFunction {
    SqlFunction::aggregate("SUM", vec![expr.into()])
}

/// `AVG(expr)`
pub fn avg(expr: impl Into<Term>) -> SqlFunction {
    SqlFunction::aggregate("AVG", vec![expr.into()])
}

/// `MIN(expr)`
pub fn min(expr: impl Into<Term>) -> SqlFunction {
    SqlFunction::aggregate("MIN", vec![expr.into()])
}

/// `MAX(expr)`
pub fn max(expr: impl Into<Term>) -> SqlFunction {
    SqlFunction::aggregate("MAX", vec![expr.into()])
}

/// `LOWER(expr)`
pub fn lower(expr: impl Into<Term>) -> SqlFunction {
    SqlFunction::scalar("LOWER", vec![expr.into()])
}

/// `UPPER(expr)`
pub fn upper(expr: impl Into<Term>) -> SqlFunction {
    SqlFunction::scalar("UPPER", vec![expr.into()])
}

/// `LENGTH(expr)`
pub fn length(expr: impl Into<Term>) -> SqlFunction {
    SqlFunction::scalar("LENGTH", vec![expr.into()])
}
