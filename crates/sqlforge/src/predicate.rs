//! Predicates: the boolean expression tree used in WHERE, JOIN ON and
//! HAVING.
//!
//! AND/OR combination is a plain binary tree with no operator-precedence
//! inference: `a.and(b).or(c)` nests exactly as written, left to right.
//! Parenthesization is always explicit through [`Predicate::group`].

use crate::clause::select::SelectClause;
use crate::error::{SqlError, SqlResult};
use crate::render::{Keyword, Render, SqlWriter, render_list};
use crate::term::Term;

/// Operator of an operator-comparison predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

/// Quantifier wrapping a sub-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    Any,
    All,
    Some,
    Exists,
}

impl Quantifier {
    fn keyword(self) -> Keyword {
        match self {
            Self::Any => Keyword::Any,
            Self::All => Keyword::All,
            Self::Some => Keyword::Some,
            Self::Exists => Keyword::Exists,
        }
    }
}

/// Lower and upper bound of a BETWEEN predicate.
///
/// Built by chaining `low.and(high)` on the lower bound.
#[derive(Debug, Clone, PartialEq)]
pub struct BetweenBounds {
    low: Term,
    high: Term,
}

impl BetweenBounds {
    pub fn new(low: impl Into<Term>, high: impl Into<Term>) -> Self {
        Self {
            low: low.into(),
            high: high.into(),
        }
    }
}

/// A boolean expression tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    And(Box<Predicate>, Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
    Not(Box<Predicate>),
    Group(Box<Predicate>),
    Compare {
        op: CompareOp,
        left: Term,
        right: Term,
    },
    Like {
        left: Term,
        pattern: Term,
    },
    InList {
        left: Term,
        items: Vec<Term>,
    },
    NullCheck {
        term: Term,
        negated: bool,
    },
    Between {
        term: Term,
        low: Term,
        high: Term,
    },
    Quantified {
        quantifier: Quantifier,
        subquery: SelectClause,
    },
}

impl Predicate {
    /// Operator comparison over two terms.
    ///
    /// A NULL literal on the right of `=` / `<>` resolves to the null-check
    /// predicate instead of rendering `= NULL`.
    pub(crate) fn compare(op: CompareOp, left: Term, right: Term) -> Self {
        if right.is_null_literal() {
            match op {
                CompareOp::Eq => {
                    return Self::NullCheck {
                        term: left,
                        negated: false,
                    };
                }
                CompareOp::Ne => {
                    return Self::NullCheck {
                        term: left,
                        negated: true,
                    };
                }
                _ => {}
            }
        }
        Self::Compare { op, left, right }
    }

    pub(crate) fn like(left: Term, pattern: Term) -> Self {
        Self::Like { left, pattern }
    }

    pub(crate) fn in_list(left: Term, items: Vec<Term>) -> Self {
        Self::InList { left, items }
    }

    pub(crate) fn null_check(term: Term, negated: bool) -> Self {
        Self::NullCheck { term, negated }
    }

    pub(crate) fn between(term: Term, bounds: BetweenBounds) -> Self {
        Self::Between {
            term,
            low: bounds.low,
            high: bounds.high,
        }
    }

    /// Combine with AND. No precedence is inferred; nesting follows call
    /// order.
    pub fn and(self, other: Predicate) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Combine with OR. No precedence is inferred; nesting follows call
    /// order.
    pub fn or(self, other: Predicate) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Wrap in parentheses.
    pub fn group(self) -> Self {
        Self::Group(Box::new(self))
    }

    /// Negate with NOT.
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }
}

/// `EXISTS (subquery)`
pub fn exists(subquery: SelectClause) -> Predicate {
    Predicate::Quantified {
        quantifier: Quantifier::Exists,
        subquery,
    }
}

/// `ANY (subquery)`
pub fn any(subquery: SelectClause) -> Predicate {
    Predicate::Quantified {
        quantifier: Quantifier::Any,
        subquery,
    }
}

/// `ALL (subquery)`
pub fn all(subquery: SelectClause) -> Predicate {
    Predicate::Quantified {
        quantifier: Quantifier::All,
        subquery,
    }
}

/// `SOME (subquery)`
pub fn some(subquery: SelectClause) -> Predicate {
    Predicate::Quantified {
        quantifier: Quantifier::Some,
        subquery,
    }
}

/// Reject NULL literals in positions that cannot express them.
fn ensure_not_null(term: &Term, position: &str) -> SqlResult<()> {
    if term.is_null_literal() {
        return Err(SqlError::unsupported(format!(
            "NULL literal in {position}; use is_null()/is_not_null()"
        )));
    }
    Ok(())
}

impl Render for Predicate {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        match self {
            Self::And(left, right) => {
                left.render(w)?;
                w.space();
                w.keyword(Keyword::And);
                w.space();
                right.render(w)?;
            }
            Self::Or(left, right) => {
                left.render(w)?;
                w.space();
                w.keyword(Keyword::Or);
                w.space();
                right.render(w)?;
            }
            Self::Not(inner) => {
                w.keyword(Keyword::Not);
                w.space();
                inner.render(w)?;
            }
            Self::Group(inner) => {
                w.push("(");
                inner.render(w)?;
                w.push(")");
            }
            Self::Compare { op, left, right } => {
                ensure_not_null(left, "comparison")?;
                ensure_not_null(right, "comparison")?;
                left.render(w)?;
                w.space();
                w.push(op.symbol());
                w.space();
                right.render(w)?;
            }
            Self::Like { left, pattern } => {
                ensure_not_null(pattern, "LIKE pattern")?;
                left.render(w)?;
                w.space();
                w.keyword(Keyword::Like);
                w.space();
                pattern.render(w)?;
            }
            Self::InList { left, items } => {
                if items.is_empty() {
                    return Err(SqlError::EmptyClause("IN list"));
                }
                left.render(w)?;
                w.space();
                w.keyword(Keyword::In);
                w.space();
                w.push("(");
                render_list(items, ", ", w)?;
                w.push(")");
            }
            Self::NullCheck { term, negated } => {
                term.render(w)?;
                w.space();
                w.keyword(if *negated {
                    Keyword::IsNotNull
                } else {
                    Keyword::IsNull
                });
            }
            Self::Between { term, low, high } => {
                ensure_not_null(low, "BETWEEN bound")?;
                ensure_not_null(high, "BETWEEN bound")?;
                term.render(w)?;
                w.space();
                w.keyword(Keyword::Between);
                w.space();
                low.render(w)?;
                w.space();
                w.keyword(Keyword::And);
                w.space();
                high.render(w)?;
            }
            Self::Quantified {
                quantifier,
                subquery,
            } => {
                w.keyword(quantifier.keyword());
                w.space();
                w.push("(");
                subquery.render(w)?;
                w.push(")");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;
    use crate::term::NULL;

    #[test]
    fn eq_and_ne_against_null_rewrite_to_null_checks() {
        let t = Table::new("t");
        let x = t.column("x");
        assert_eq!(
            x.eq(NULL),
            Predicate::NullCheck {
                term: Term::Column(x.clone()),
                negated: false
            }
        );
        assert_eq!(
            x.ne(NULL),
            Predicate::NullCheck {
                term: Term::Column(x.clone()),
                negated: true
            }
        );
        assert!(matches!(x.lt(NULL), Predicate::Compare { .. }));
    }

    #[test]
    fn and_or_nest_in_call_order() {
        let t = Table::new("t");
        let a = t.column("a").eq(1);
        let b = t.column("b").eq(2);
        let c = t.column("c").eq(3);
        assert_eq!(
            a.clone().and(b.clone()).or(c.clone()),
            Predicate::Or(
                Box::new(Predicate::And(Box::new(a.clone()), Box::new(b.clone()))),
                Box::new(c.clone()),
            )
        );
        assert_eq!(
            a.clone().and(b.clone().or(c.clone()).group()),
            Predicate::And(
                Box::new(a),
                Box::new(Predicate::Group(Box::new(Predicate::Or(
                    Box::new(b),
                    Box::new(c),
                )))),
            )
        );
    }

    #[test]
    fn comparison_symbols() {
        assert_eq!(CompareOp::Eq.symbol(), "=");
        assert_eq!(CompareOp::Ne.symbol(), "<>");
        assert_eq!(CompareOp::Lt.symbol(), "<");
        assert_eq!(CompareOp::Le.symbol(), "<=");
        assert_eq!(CompareOp::Gt.symbol(), ">");
        assert_eq!(CompareOp::Ge.symbol(), ">=");
    }
}
