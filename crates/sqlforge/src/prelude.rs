//! Convenience re-exports for building and rendering statements.

pub use crate::clause::join::JoinKind;
pub use crate::clause::select::{SelectExpr, star};
pub use crate::config::SqlConfig;
pub use crate::error::{SqlError, SqlResult};
pub use crate::func::{avg, count, count_of, length, lower, max, min, sum, upper};
pub use crate::predicate::{Predicate, exists};
pub use crate::query::{Query, select};
pub use crate::style::{KeywordStyle, ParameterStyle, QueryStyle};
pub use crate::table::{AliasedTable, Column, Table};
pub use crate::term::{NULL, Param, alias_ref, lit, param};
pub use crate::vendor::Vendor;
