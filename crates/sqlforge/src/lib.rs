//! # sqlforge
//!
//! A typed, staged SQL SELECT builder.
//!
//! ## Features
//!
//! - **Typed expression model**: columns, literals, parameters, functions
//!   and alias references compose into predicate trees with no string
//!   concatenation
//! - **Staged builder**: each step only exposes the clause operations SQL
//!   grammar allows next (Select → From → Join* → Where → GroupBy → Having
//!   → OrderBy → Limit → Offset)
//! - **Alias-aware rendering**: relation aliases and SELECT-list aliases are
//!   resolved per render; self-joins keep both sides independent
//! - **Configurable output**: parameter marker style (`?`, `?N`, `:name`,
//!   `$name`, `@name`) and keyword casing, validated against a vendor
//!   descriptor
//! - **Pretty printing**: a secondary multi-line rendering via `sqlformat`
//!
//! ## Usage
//!
//! ```ignore
//! use sqlforge::prelude::*;
//! use sqlforge::select;
//!
//! let customers = Table::new("customers");
//! let email = customers.column("email");
//! let sql = select!(&email)
//!     .from(&customers)?
//!     .where_(email.eq(param("email")?))?
//!     .limit(10)?
//!     .to_sql()?;
//! assert_eq!(
//!     sql,
//!     "SELECT customers.email FROM customers WHERE customers.email = @email LIMIT 10"
//! );
//! ```

pub mod clause;
pub mod config;
pub mod error;
pub mod func;
pub mod predicate;
pub mod prelude;
pub mod query;
pub mod style;
pub mod table;
pub mod term;
pub mod vendor;

mod ident;
mod render;

pub use clause::{
    GroupByExpr, JoinKind, NullsOrder, OrderByExpr, PageArg, SelectExpr, SortDirection, star,
};
pub use config::SqlConfig;
pub use error::{SqlError, SqlResult};
pub use func::{FunctionKind, SqlFunction, avg, count, count_of, length, lower, max, min, sum, upper};
pub use predicate::{BetweenBounds, CompareOp, Predicate, Quantifier, all, any, exists, some};
pub use query::{
    FromStep, GroupByStep, HavingStep, JoinStep, LimitStep, OffsetStep, OrderByStep, Query,
    QueryContext, SelectStep, WhereStep, select,
};
pub use style::{KeywordStyle, ParameterStyle, QueryStyle};
pub use table::{AliasedTable, Column, Table, TableRef};
pub use term::{AliasRef, AliasedTerm, Literal, NULL, Number, Param, Term, alias_ref, lit, param};
pub use vendor::Vendor;

#[cfg(test)]
pub(crate) mod fixtures;
