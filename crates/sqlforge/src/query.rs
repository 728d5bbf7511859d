//! Query accumulation, the staged builder, and the printer.
//!
//! [`QueryContext`] is the single mutable accumulator: at most one instance
//! of each singular clause plus the ordered join list. Once a singular slot
//! is filled it can never be replaced ([`SqlError::ClauseAlreadyDefined`]).
//!
//! The staged step types wrap the context so that each point in the chain
//! only exposes the clause operations SQL grammar allows next:
//!
//! ```text
//! Select -> From -> Join* -> Where -> GroupBy -> Having -> OrderBy -> Limit -> Offset
//! ```
//!
//! The machine is a DAG, not a strict chain: `From` can go straight to
//! `OrderBy` or `Limit`, `GroupBy` straight to `OrderBy`, and so on. Every
//! step can finish with [`build`](SelectStep::build) or render directly with
//! `to_sql`.

use crate::clause::filter::{HavingClause, WhereClause};
use crate::clause::from::FromClause;
use crate::clause::group::{GroupByClause, GroupByExpr};
use crate::clause::join::{JoinClause, JoinKind};
use crate::clause::order::{OrderByClause, OrderByExpr};
use crate::clause::page::{LimitClause, OffsetClause, PageArg};
use crate::clause::select::{SelectClause, SelectExpr};
use crate::config::SqlConfig;
use crate::error::{SqlError, SqlResult};
use crate::predicate::Predicate;
use crate::render::{Render, RenderContext, SqlWriter};
use crate::table::TableRef;

/// Start a SELECT statement under the default configuration.
///
/// An empty item list renders as `SELECT *`. The [`select!`](crate::select!)
/// macro wraps this for mixed item types.
pub fn select<I>(items: I) -> SelectStep
where
    I: IntoIterator,
    I::Item: Into<SelectExpr>,
{
    SqlConfig::default().select(items)
}

/// Variadic entry point accepting mixed select expressions:
/// columns, functions, literals, parameters, aliased terms, relations.
///
/// ```ignore
/// let q = select!(&c.email, count().alias("n")).from(&customers)?;
/// ```
#[macro_export]
macro_rules! select {
    () => {
        $crate::query::select(::core::iter::empty::<$crate::SelectExpr>())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::query::select([$($crate::SelectExpr::from($item)),+])
    };
}

/// The accumulated clause set of one statement.
#[derive(Debug, Clone)]
pub(crate) struct QueryParts {
    pub(crate) select: SelectClause,
    pub(crate) from: Option<FromClause>,
    pub(crate) joins: Vec<JoinClause>,
    pub(crate) where_: Option<WhereClause>,
    pub(crate) group_by: Option<GroupByClause>,
    pub(crate) having: Option<HavingClause>,
    pub(crate) order_by: Option<OrderByClause>,
    pub(crate) limit: Option<LimitClause>,
    pub(crate) offset: Option<OffsetClause>,
}

impl QueryParts {
    fn new(select: SelectClause) -> Self {
        Self {
            select,
            from: None,
            joins: Vec::new(),
            where_: None,
            group_by: None,
            having: None,
            order_by: None,
            limit: None,
            offset: None,
        }
    }
}

/// Runtime-checked clause accumulator.
///
/// The staged steps drive this internally; it is public as the
/// tagged-state alternative for callers assembling clauses dynamically.
/// Every singular-clause setter rejects a second assignment.
#[derive(Debug, Clone)]
pub struct QueryContext {
    config: SqlConfig,
    parts: QueryParts,
}

impl QueryContext {
    pub fn new(config: SqlConfig, select: SelectClause) -> Self {
        Self {
            config,
            parts: QueryParts::new(select),
        }
    }

    pub fn set_from(&mut self, clause: FromClause) -> SqlResult<()> {
        if self.parts.from.is_some() {
            return Err(SqlError::ClauseAlreadyDefined("FROM"));
        }
        self.parts.from = Some(clause);
        Ok(())
    }

    /// Joins accumulate in attachment order; any number is allowed.
    pub fn add_join(&mut self, clause: JoinClause) {
        self.parts.joins.push(clause);
    }

    pub fn set_where(&mut self, clause: WhereClause) -> SqlResult<()> {
        if self.parts.where_.is_some() {
            return Err(SqlError::ClauseAlreadyDefined("WHERE"));
        }
        self.parts.where_ = Some(clause);
        Ok(())
    }

    pub fn set_group_by(&mut self, clause: GroupByClause) -> SqlResult<()> {
        if self.parts.group_by.is_some() {
            return Err(SqlError::ClauseAlreadyDefined("GROUP BY"));
        }
        self.parts.group_by = Some(clause);
        Ok(())
    }

    pub fn set_having(&mut self, clause: HavingClause) -> SqlResult<()> {
        if self.parts.having.is_some() {
            return Err(SqlError::ClauseAlreadyDefined("HAVING"));
        }
        self.parts.having = Some(clause);
        Ok(())
    }

    pub fn set_order_by(&mut self, clause: OrderByClause) -> SqlResult<()> {
        if self.parts.order_by.is_some() {
            return Err(SqlError::ClauseAlreadyDefined("ORDER BY"));
        }
        self.parts.order_by = Some(clause);
        Ok(())
    }

    pub fn set_limit(&mut self, clause: LimitClause) -> SqlResult<()> {
        if self.parts.limit.is_some() {
            return Err(SqlError::ClauseAlreadyDefined("LIMIT"));
        }
        self.parts.limit = Some(clause);
        Ok(())
    }

    pub fn set_offset(&mut self, clause: OffsetClause) -> SqlResult<()> {
        if self.parts.offset.is_some() {
            return Err(SqlError::ClauseAlreadyDefined("OFFSET"));
        }
        self.parts.offset = Some(clause);
        Ok(())
    }

    /// Freeze the accumulated clauses into a renderable query.
    pub fn into_query(self) -> Query {
        Query {
            config: self.config,
            parts: self.parts,
        }
    }

    fn render_sql(&self) -> SqlResult<String> {
        render_parts(&self.config, &self.parts)
    }
}

/// Walk the clause set in fixed order and emit single-line SQL.
///
/// Unset clauses are skipped without stray separators; no statement
/// terminator is appended. A failing render returns no partial text.
fn render_parts(config: &SqlConfig, parts: &QueryParts) -> SqlResult<String> {
    let mut table_aliases = Vec::new();
    if let Some(from) = &parts.from {
        collect_table_alias(from.relation(), &mut table_aliases);
    }
    for join in &parts.joins {
        collect_table_alias(join.relation(), &mut table_aliases);
    }
    let term_aliases = parts.select.term_aliases().collect();

    let ctx = RenderContext::new(table_aliases, term_aliases, config)?;
    let mut w = SqlWriter::new(ctx);

    parts.select.render(&mut w)?;
    if let Some(from) = &parts.from {
        w.space();
        from.render(&mut w)?;
    }
    for join in &parts.joins {
        w.space();
        join.render(&mut w)?;
    }
    if let Some(where_) = &parts.where_ {
        w.space();
        where_.render(&mut w)?;
    }
    if let Some(group_by) = &parts.group_by {
        w.space();
        group_by.render(&mut w)?;
    }
    if let Some(having) = &parts.having {
        w.space();
        having.render(&mut w)?;
    }
    if let Some(order_by) = &parts.order_by {
        w.space();
        order_by.render(&mut w)?;
    }
    if let Some(limit) = &parts.limit {
        w.space();
        limit.render(&mut w)?;
    }
    if let Some(offset) = &parts.offset {
        w.space();
        offset.render(&mut w)?;
    }

    let sql = w.finish();
    #[cfg(feature = "tracing")]
    tracing::debug!(
        joins = parts.joins.len(),
        vendor = config.vendor.name(),
        sql = %sql,
        "rendered statement"
    );
    Ok(sql)
}

fn collect_table_alias<'a>(
    relation: &'a TableRef,
    aliases: &mut Vec<(&'a crate::table::Table, &'a str)>,
) {
    if let Some(alias) = relation.introduced_alias() {
        aliases.push((relation.table(), alias));
    }
}

/// A completed, immutable statement.
///
/// Rendering builds a fresh per-call context and never mutates the clause
/// set, so one `Query` can be rendered concurrently from many threads.
#[derive(Debug, Clone)]
pub struct Query {
    config: SqlConfig,
    parts: QueryParts,
}

impl Query {
    /// Render to single-line parametrized SQL.
    pub fn to_sql(&self) -> SqlResult<String> {
        render_parts(&self.config, &self.parts)
    }

    /// Render and reformat into an indented multi-line form.
    ///
    /// Whitespace/case-normalized output equals [`to_sql`](Self::to_sql).
    pub fn to_pretty_sql(&self) -> SqlResult<String> {
        let sql = self.to_sql()?;
        let options = sqlformat::FormatOptions {
            indent: sqlformat::Indent::Spaces(2),
            uppercase: true,
            lines_between_queries: 2,
            ..Default::default()
        };
        Ok(sqlformat::format(&sql, &sqlformat::QueryParams::None, options))
    }
}

// ==================== Staged steps ====================

/// Post-SELECT: a FROM clause or a bare render (`SELECT *`).
#[derive(Debug, Clone)]
pub struct SelectStep {
    ctx: QueryContext,
}

impl SelectStep {
    pub(crate) fn new(ctx: QueryContext) -> Self {
        Self { ctx }
    }

    pub fn from(mut self, relation: impl Into<TableRef>) -> SqlResult<FromStep> {
        self.ctx.set_from(FromClause::new(relation))?;
        Ok(FromStep { ctx: self.ctx })
    }

    pub fn build(self) -> Query {
        self.ctx.into_query()
    }

    pub fn to_sql(&self) -> SqlResult<String> {
        self.ctx.render_sql()
    }
}

macro_rules! step_join_ops {
    () => {
        /// `JOIN relation ON condition` (synonym of INNER JOIN).
        pub fn join(
            mut self,
            relation: impl Into<TableRef>,
            on: Predicate,
        ) -> SqlResult<JoinStep> {
            self.ctx
                .add_join(JoinClause::new(JoinKind::Join, relation, Some(on))?);
            Ok(JoinStep { ctx: self.ctx })
        }

        /// `INNER JOIN relation ON condition`.
        pub fn inner_join(
            mut self,
            relation: impl Into<TableRef>,
            on: Predicate,
        ) -> SqlResult<JoinStep> {
            self.ctx
                .add_join(JoinClause::new(JoinKind::Inner, relation, Some(on))?);
            Ok(JoinStep { ctx: self.ctx })
        }

        /// `LEFT JOIN relation ON condition`.
        pub fn left_join(
            mut self,
            relation: impl Into<TableRef>,
            on: Predicate,
        ) -> SqlResult<JoinStep> {
            self.ctx
                .add_join(JoinClause::new(JoinKind::Left, relation, Some(on))?);
            Ok(JoinStep { ctx: self.ctx })
        }

        /// `RIGHT JOIN relation ON condition`.
        pub fn right_join(
            mut self,
            relation: impl Into<TableRef>,
            on: Predicate,
        ) -> SqlResult<JoinStep> {
            self.ctx
                .add_join(JoinClause::new(JoinKind::Right, relation, Some(on))?);
            Ok(JoinStep { ctx: self.ctx })
        }

        /// `FULL JOIN relation ON condition`.
        pub fn full_join(
            mut self,
            relation: impl Into<TableRef>,
            on: Predicate,
        ) -> SqlResult<JoinStep> {
            self.ctx
                .add_join(JoinClause::new(JoinKind::Full, relation, Some(on))?);
            Ok(JoinStep { ctx: self.ctx })
        }

        /// `CROSS JOIN relation`, never with a condition.
        pub fn cross_join(mut self, relation: impl Into<TableRef>) -> SqlResult<JoinStep> {
            self.ctx
                .add_join(JoinClause::new(JoinKind::Cross, relation, None)?);
            Ok(JoinStep { ctx: self.ctx })
        }

        /// Join with a runtime-chosen kind. Fails with
        /// [`SqlError::InvalidJoinCondition`] when the kind/condition pairing
        /// is wrong.
        pub fn join_with(
            mut self,
            kind: JoinKind,
            relation: impl Into<TableRef>,
            on: Option<Predicate>,
        ) -> SqlResult<JoinStep> {
            self.ctx.add_join(JoinClause::new(kind, relation, on)?);
            Ok(JoinStep { ctx: self.ctx })
        }
    };
}

macro_rules! step_where_op {
    () => {
        /// Attach the WHERE predicate.
        pub fn where_(mut self, predicate: Predicate) -> SqlResult<WhereStep> {
            self.ctx.set_where(WhereClause::new(predicate))?;
            Ok(WhereStep { ctx: self.ctx })
        }
    };
}

macro_rules! step_group_by_op {
    () => {
        /// Attach GROUP BY. Fails with [`SqlError::EmptyClause`] on an empty
        /// list.
        pub fn group_by<I>(mut self, items: I) -> SqlResult<GroupByStep>
        where
            I: IntoIterator,
            I::Item: Into<GroupByExpr>,
        {
            let clause = GroupByClause::new(items.into_iter().map(Into::into).collect())?;
            self.ctx.set_group_by(clause)?;
            Ok(GroupByStep { ctx: self.ctx })
        }
    };
}

macro_rules! step_order_by_op {
    () => {
        /// Attach ORDER BY. Fails with [`SqlError::EmptyClause`] on an empty
        /// list.
        pub fn order_by<I>(mut self, items: I) -> SqlResult<OrderByStep>
        where
            I: IntoIterator,
            I::Item: Into<OrderByExpr>,
        {
            let clause = OrderByClause::new(items.into_iter().map(Into::into).collect())?;
            self.ctx.set_order_by(clause)?;
            Ok(OrderByStep { ctx: self.ctx })
        }
    };
}

macro_rules! step_limit_op {
    () => {
        /// Attach LIMIT with a count or a parameter.
        pub fn limit(mut self, value: impl Into<PageArg>) -> SqlResult<LimitStep> {
            self.ctx.set_limit(LimitClause::new(value))?;
            Ok(LimitStep { ctx: self.ctx })
        }
    };
}

macro_rules! step_offset_op {
    () => {
        /// Attach OFFSET with a count or a parameter.
        pub fn offset(mut self, value: impl Into<PageArg>) -> SqlResult<OffsetStep> {
            self.ctx.set_offset(OffsetClause::new(value))?;
            Ok(OffsetStep { ctx: self.ctx })
        }
    };
}

macro_rules! step_finish_ops {
    () => {
        /// Freeze the statement.
        pub fn build(self) -> Query {
            self.ctx.into_query()
        }

        /// Render without freezing.
        pub fn to_sql(&self) -> SqlResult<String> {
            self.ctx.render_sql()
        }
    };
}

/// Post-FROM: joins, WHERE, or any later clause.
#[derive(Debug, Clone)]
pub struct FromStep {
    ctx: QueryContext,
}

impl FromStep {
    step_join_ops!();
    step_where_op!();
    step_group_by_op!();
    step_order_by_op!();
    step_limit_op!();
    step_offset_op!();
    step_finish_ops!();
}

/// Post-JOIN: further joins, WHERE, or any later clause.
#[derive(Debug, Clone)]
pub struct JoinStep {
    ctx: QueryContext,
}

impl JoinStep {
    step_join_ops!();
    step_where_op!();
    step_group_by_op!();
    step_order_by_op!();
    step_limit_op!();
    step_offset_op!();
    step_finish_ops!();
}

/// Post-WHERE: GROUP BY, ORDER BY, or pagination.
#[derive(Debug, Clone)]
pub struct WhereStep {
    ctx: QueryContext,
}

impl WhereStep {
    step_group_by_op!();
    step_order_by_op!();
    step_limit_op!();
    step_offset_op!();
    step_finish_ops!();
}

/// Post-GROUP-BY: HAVING or ORDER BY.
#[derive(Debug, Clone)]
pub struct GroupByStep {
    ctx: QueryContext,
}

impl GroupByStep {
    /// Attach the HAVING predicate.
    pub fn having(mut self, predicate: Predicate) -> SqlResult<HavingStep> {
        self.ctx.set_having(HavingClause::new(predicate))?;
        Ok(HavingStep { ctx: self.ctx })
    }

    step_order_by_op!();
    step_limit_op!();
    step_offset_op!();
    step_finish_ops!();
}

/// Post-HAVING: only ORDER BY continues the grammar.
#[derive(Debug, Clone)]
pub struct HavingStep {
    ctx: QueryContext,
}

impl HavingStep {
    step_order_by_op!();
    step_finish_ops!();
}

/// Post-ORDER-BY: pagination.
#[derive(Debug, Clone)]
pub struct OrderByStep {
    ctx: QueryContext,
}

impl OrderByStep {
    step_limit_op!();
    step_offset_op!();
    step_finish_ops!();
}

/// Post-LIMIT: OFFSET.
#[derive(Debug, Clone)]
pub struct LimitStep {
    ctx: QueryContext,
}

impl LimitStep {
    step_offset_op!();
    step_finish_ops!();
}

/// Post-OFFSET: terminal.
#[derive(Debug, Clone)]
pub struct OffsetStep {
    ctx: QueryContext,
}

impl OffsetStep {
    step_finish_ops!();
}
