//! Terms: the atomic SQL values and references predicates are built from.
//!
//! A [`Term`] is a column reference, literal, parameter, function call,
//! alias reference, or the wildcard marker. Terms are immutable; schema
//! values like columns are created once and reused across many queries.
//!
//! Comparison builders (`eq`, `ne`, `lt`, ..., `like`, `is_in`, `between`,
//! `is_null`) are generated as inherent methods on every term-producing type
//! so symbolic operands (columns, functions, parameters) and plain literal
//! values compose uniformly: `col.eq(other_col)`, `col.eq("text")`,
//! `col.eq(param("email")?)`.

use std::fmt;

use crate::error::{SqlError, SqlResult};
use crate::func::SqlFunction;
use crate::ident::ensure_identifier;
use crate::render::{Keyword, Render, SqlWriter};
use crate::table::Column;

/// Numeric literal value.
///
/// Floats keep their fractional point in the output: `100.0` renders as
/// `100.0`, never `100`.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

/// A literal SQL value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Num(Number),
    Bool(bool),
    Null,
    /// Numeric text emitted verbatim, validated at construction.
    RawNumber(String),
}

/// The NULL literal.
pub const NULL: Literal = Literal::Null;

impl Literal {
    /// Create a raw numeric literal from pre-rendered text.
    ///
    /// Fails with [`SqlError::InvalidLiteral`] when the text is not numeric.
    pub fn raw_number(text: impl Into<String>) -> SqlResult<Self> {
        let text = text.into();
        crate::ident::ensure_numeric(&text)?;
        Ok(Self::RawNumber(text))
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Number> for Literal {
    fn from(value: Number) -> Self {
        Self::Num(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Num(Number::from(value))
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Num(Number::from(value))
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Self::Num(Number::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Num(Number::from(value))
    }
}

impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        Self::Num(Number::from(value))
    }
}

/// Shorthand literal constructor: `lit("Hello")`, `lit(42)`, `lit(true)`.
pub fn lit(value: impl Into<Literal>) -> Literal {
    value.into()
}

/// A bind parameter, named or positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    name: Option<String>,
}

impl Param {
    /// Create a named parameter. The name must be a valid identifier.
    pub fn named(name: impl Into<String>) -> SqlResult<Self> {
        let name = name.into();
        ensure_identifier(&name)?;
        Ok(Self { name: Some(name) })
    }

    /// Create an unnamed (positional) parameter.
    pub fn positional() -> Self {
        Self { name: None }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Shorthand for [`Param::named`].
pub fn param(name: impl Into<String>) -> SqlResult<Param> {
    Param::named(name)
}

/// A term bound to an output alias in the SELECT list.
///
/// In SELECT it renders `term AS alias`; everywhere else (GROUP BY,
/// ORDER BY, HAVING, predicates) it renders the bare alias name.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasedTerm {
    alias: String,
    term: Term,
}

impl AliasedTerm {
    pub fn new(alias: impl Into<String>, term: impl Into<Term>) -> Self {
        Self {
            alias: alias.into(),
            term: term.into(),
        }
    }

    pub fn alias_name(&self) -> &str {
        &self.alias
    }

    pub fn term(&self) -> &Term {
        &self.term
    }
}

/// A reference to a SELECT-list alias by bare name.
///
/// Resolution happens at render time; a name no SELECT item introduced fails
/// with [`SqlError::UnknownAlias`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRef {
    name: String,
}

impl AliasRef {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Reference a SELECT-list alias by name: `alias_ref("order_count")`.
pub fn alias_ref(name: impl Into<String>) -> AliasRef {
    AliasRef { name: name.into() }
}

/// An atomic renderable expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Column(Column),
    Literal(Literal),
    Param(Param),
    Function(SqlFunction),
    /// Bare alias name (from an [`AliasedTerm`] used as an operand).
    Alias(String),
    /// Alias name resolved against the SELECT list at render time.
    AliasRef(String),
    Star,
}

impl Term {
    pub(crate) fn is_null_literal(&self) -> bool {
        matches!(self, Self::Literal(Literal::Null))
    }
}

impl Render for Term {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        match self {
            Self::Column(column) => column.render(w)?,
            Self::Literal(Literal::Str(value)) => w.string_literal(value),
            Self::Literal(Literal::Num(value)) => w.push(&value.to_string()),
            Self::Literal(Literal::Bool(true)) => w.keyword(Keyword::True),
            Self::Literal(Literal::Bool(false)) => w.keyword(Keyword::False),
            Self::Literal(Literal::Null) => w.keyword(Keyword::Null),
            Self::Literal(Literal::RawNumber(text)) => w.push(text),
            Self::Param(param) => w.parameter(param.name()),
            Self::Function(function) => function.render(w)?,
            Self::Alias(alias) => w.push(alias),
            Self::AliasRef(name) => {
                if !w.has_term_alias(name) {
                    return Err(SqlError::UnknownAlias(name.clone()));
                }
                w.push(name);
            }
            Self::Star => w.push("*"),
        }
        Ok(())
    }
}

impl From<Column> for Term {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<&Column> for Term {
    fn from(column: &Column) -> Self {
        Self::Column(column.clone())
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<&Literal> for Term {
    fn from(literal: &Literal) -> Self {
        Self::Literal(literal.clone())
    }
}

impl From<Param> for Term {
    fn from(param: Param) -> Self {
        Self::Param(param)
    }
}

impl From<&Param> for Term {
    fn from(param: &Param) -> Self {
        Self::Param(param.clone())
    }
}

impl From<SqlFunction> for Term {
    fn from(function: SqlFunction) -> Self {
        Self::Function(function)
    }
}

impl From<&SqlFunction> for Term {
    fn from(function: &SqlFunction) -> Self {
        Self::Function(function.clone())
    }
}

impl From<AliasedTerm> for Term {
    fn from(aliased: AliasedTerm) -> Self {
        Self::Alias(aliased.alias)
    }
}

impl From<&AliasedTerm> for Term {
    fn from(aliased: &AliasedTerm) -> Self {
        Self::Alias(aliased.alias.clone())
    }
}

impl From<AliasRef> for Term {
    fn from(alias_ref: AliasRef) -> Self {
        Self::AliasRef(alias_ref.name)
    }
}

impl From<&AliasRef> for Term {
    fn from(alias_ref: &AliasRef) -> Self {
        Self::AliasRef(alias_ref.name.clone())
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Self::Literal(Literal::from(value))
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Self::Literal(Literal::from(value))
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Self::Literal(Literal::from(value))
    }
}

impl From<i32> for Term {
    fn from(value: i32) -> Self {
        Self::Literal(Literal::from(value))
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Self::Literal(Literal::from(value))
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Self::Literal(Literal::from(value))
    }
}

/// Generate the comparison/ordering surface as inherent methods.
///
/// Inherent methods keep `col.eq(...)` unambiguous next to the derived
/// `PartialEq` on the same types.
macro_rules! term_operators {
    ($($ty:ty),+ $(,)?) => {$(
        impl $ty {
            /// Bind this expression to an output alias.
            pub fn alias(&self, alias: impl Into<String>) -> $crate::term::AliasedTerm {
                $crate::term::AliasedTerm::new(alias, self.clone())
            }

            /// `self = other`; a NULL literal operand becomes `IS NULL`.
            pub fn eq(&self, other: impl Into<$crate::term::Term>) -> $crate::predicate::Predicate {
                $crate::predicate::Predicate::compare(
                    $crate::predicate::CompareOp::Eq,
                    self.clone().into(),
                    other.into(),
                )
            }

            /// `self <> other`; a NULL literal operand becomes `IS NOT NULL`.
            pub fn ne(&self, other: impl Into<$crate::term::Term>) -> $crate::predicate::Predicate {
                $crate::predicate::Predicate::compare(
                    $crate::predicate::CompareOp::Ne,
                    self.clone().into(),
                    other.into(),
                )
            }

            /// `self < other`
            pub fn lt(&self, other: impl Into<$crate::term::Term>) -> $crate::predicate::Predicate {
                $crate::predicate::Predicate::compare(
                    $crate::predicate::CompareOp::Lt,
                    self.clone().into(),
                    other.into(),
                )
            }

            /// `self <= other`
            pub fn le(&self, other: impl Into<$crate::term::Term>) -> $crate::predicate::Predicate {
                $crate::predicate::Predicate::compare(
                    $crate::predicate::CompareOp::Le,
                    self.clone().into(),
                    other.into(),
                )
            }

            /// `self > other`
            pub fn gt(&self, other: impl Into<$crate::term::Term>) -> $crate::predicate::Predicate {
                $crate::predicate::Predicate::compare(
                    $crate::predicate::CompareOp::Gt,
                    self.clone().into(),
                    other.into(),
                )
            }

            /// `self >= other`
            pub fn ge(&self, other: impl Into<$crate::term::Term>) -> $crate::predicate::Predicate {
                $crate::predicate::Predicate::compare(
                    $crate::predicate::CompareOp::Ge,
                    self.clone().into(),
                    other.into(),
                )
            }

            /// `self LIKE pattern`
            pub fn like(&self, pattern: impl Into<$crate::term::Term>) -> $crate::predicate::Predicate {
                $crate::predicate::Predicate::like(self.clone().into(), pattern.into())
            }

            /// `self IN (items...)`
            pub fn is_in<I>(&self, items: I) -> $crate::predicate::Predicate
            where
                I: IntoIterator,
                I::Item: Into<$crate::term::Term>,
            {
                $crate::predicate::Predicate::in_list(
                    self.clone().into(),
                    items.into_iter().map(Into::into).collect(),
                )
            }

            /// `self BETWEEN bounds`, with bounds built by
            /// [`and`](Self::and) on the lower bound.
            pub fn between(&self, bounds: $crate::predicate::BetweenBounds) -> $crate::predicate::Predicate {
                $crate::predicate::Predicate::between(self.clone().into(), bounds)
            }

            /// Chain a lower bound with an upper bound for BETWEEN.
            pub fn and(&self, upper: impl Into<$crate::term::Term>) -> $crate::predicate::BetweenBounds {
                $crate::predicate::BetweenBounds::new(self.clone().into(), upper.into())
            }

            /// `self IS NULL`
            pub fn is_null(&self) -> $crate::predicate::Predicate {
                $crate::predicate::Predicate::null_check(self.clone().into(), false)
            }

            /// `self IS NOT NULL`
            pub fn is_not_null(&self) -> $crate::predicate::Predicate {
                $crate::predicate::Predicate::null_check(self.clone().into(), true)
            }

            /// Order ascending.
            pub fn asc(&self) -> $crate::clause::order::OrderByExpr {
                $crate::clause::order::OrderByExpr::from_term(self.clone().into()).asc()
            }

            /// Order descending.
            pub fn desc(&self) -> $crate::clause::order::OrderByExpr {
                $crate::clause::order::OrderByExpr::from_term(self.clone().into()).desc()
            }

            /// Order with NULLs first.
            pub fn nulls_first(&self) -> $crate::clause::order::OrderByExpr {
                $crate::clause::order::OrderByExpr::from_term(self.clone().into()).nulls_first()
            }

            /// Order with NULLs last.
            pub fn nulls_last(&self) -> $crate::clause::order::OrderByExpr {
                $crate::clause::order::OrderByExpr::from_term(self.clone().into()).nulls_last()
            }
        }
    )+};
}

term_operators!(
    Column,
    Literal,
    Param,
    SqlFunction,
    AliasedTerm,
    AliasRef,
);
