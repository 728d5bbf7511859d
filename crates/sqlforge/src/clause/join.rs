//! JOIN clauses.

use crate::error::{SqlError, SqlResult};
use crate::predicate::Predicate;
use crate::render::{Keyword, Render, SqlWriter};
use crate::table::TableRef;

/// Join kind.
///
/// `Join` and `Inner` are semantically synonymous; each renders its own
/// keyword (`JOIN` vs `INNER JOIN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum JoinKind {
    Join,
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    fn keyword(self) -> Keyword {
        match self {
            Self::Join => Keyword::Join,
            Self::Inner => Keyword::InnerJoin,
            Self::Left => Keyword::LeftJoin,
            Self::Right => Keyword::RightJoin,
            Self::Full => Keyword::FullJoin,
            Self::Cross => Keyword::CrossJoin,
        }
    }
}

/// One JOIN: kind, joined relation, and the ON condition for non-CROSS
/// kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    kind: JoinKind,
    relation: TableRef,
    condition: Option<Predicate>,
}

impl JoinClause {
    /// Create a join, validating the kind/condition pairing: CROSS takes no
    /// condition, every other kind requires one.
    pub fn new(
        kind: JoinKind,
        relation: impl Into<TableRef>,
        condition: Option<Predicate>,
    ) -> SqlResult<Self> {
        match (kind, &condition) {
            (JoinKind::Cross, Some(_)) => Err(SqlError::InvalidJoinCondition(
                "CROSS JOIN does not take an ON condition".to_string(),
            )),
            (JoinKind::Cross, None) => Ok(Self {
                kind,
                relation: relation.into(),
                condition,
            }),
            (_, None) => Err(SqlError::InvalidJoinCondition(format!(
                "{} requires an ON condition",
                kind.keyword().as_str()
            ))),
            (_, Some(_)) => Ok(Self {
                kind,
                relation: relation.into(),
                condition,
            }),
        }
    }

    pub fn kind(&self) -> JoinKind {
        self.kind
    }

    pub fn relation(&self) -> &TableRef {
        &self.relation
    }

    pub fn condition(&self) -> Option<&Predicate> {
        self.condition.as_ref()
    }
}

impl Render for JoinClause {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()> {
        w.keyword(self.kind.keyword());
        w.space();
        self.relation.render(w)?;
        if let Some(condition) = &self.condition {
            w.space();
            w.keyword(Keyword::On);
            w.space();
            condition.render(w)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;

    #[test]
    fn cross_join_rejects_condition() {
        let users = Table::new("users");
        let orders = Table::new("orders");
        let on = users.column("id").eq(orders.column("user_id"));
        let err = JoinClause::new(JoinKind::Cross, &orders, Some(on)).unwrap_err();
        assert!(matches!(err, SqlError::InvalidJoinCondition(_)));
    }

    #[test]
    fn non_cross_join_requires_condition() {
        let orders = Table::new("orders");
        for kind in [
            JoinKind::Join,
            JoinKind::Inner,
            JoinKind::Left,
            JoinKind::Right,
            JoinKind::Full,
        ] {
            let err = JoinClause::new(kind, &orders, None).unwrap_err();
            assert!(matches!(err, SqlError::InvalidJoinCondition(_)));
        }
    }

    #[test]
    fn cross_join_without_condition_is_fine() {
        let orders = Table::new("orders");
        assert!(JoinClause::new(JoinKind::Cross, &orders, None).is_ok());
    }
}
