//! Per-render state: keyword vocabulary, alias resolution, and the output
//! writer.
//!
//! A [`RenderContext`] is built once per render call from the final clause
//! set and discarded afterwards. It owns the alias maps collected from
//! FROM/JOIN and SELECT, the running parameter counter, and the effective
//! style (requested style reconciled with the vendor's accepted casings).
//! Rendering never mutates the clause set, so a completed query can be
//! rendered concurrently from many threads, each with its own context.

use crate::config::SqlConfig;
use crate::error::{SqlError, SqlResult};
use crate::style::QueryStyle;
use crate::table::Table;
use crate::term::Term;

/// Canonical SQL keywords. Stored uppercase; casing is applied per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
    And,
    Or,
    Not,
    In,
    IsNull,
    IsNotNull,
    True,
    False,
    Null,
    Like,
    Between,
    Exists,
    Any,
    All,
    Some,
    Select,
    From,
    Join,
    InnerJoin,
    LeftJoin,
    RightJoin,
    FullJoin,
    CrossJoin,
    On,
    Where,
    GroupBy,
    Having,
    OrderBy,
    Asc,
    Desc,
    Limit,
    Offset,
    As,
    NullsFirst,
    NullsLast,
}

impl Keyword {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Null => "NULL",
            Self::Like => "LIKE",
            Self::Between => "BETWEEN",
            Self::Exists => "EXISTS",
            Self::Any => "ANY",
            Self::All => "ALL",
            Self::Some => "SOME",
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Join => "JOIN",
            Self::InnerJoin => "INNER JOIN",
            Self::LeftJoin => "LEFT JOIN",
            Self::RightJoin => "RIGHT JOIN",
            Self::FullJoin => "FULL JOIN",
            Self::CrossJoin => "CROSS JOIN",
            Self::On => "ON",
            Self::Where => "WHERE",
            Self::GroupBy => "GROUP BY",
            Self::Having => "HAVING",
            Self::OrderBy => "ORDER BY",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::As => "AS",
            Self::NullsFirst => "NULLS FIRST",
            Self::NullsLast => "NULLS LAST",
        }
    }
}

/// Ephemeral alias/parameter/style state for one render call.
pub(crate) struct RenderContext<'a> {
    table_aliases: Vec<(&'a Table, &'a str)>,
    term_aliases: Vec<(&'a str, &'a Term)>,
    param_index: u32,
    style: QueryStyle,
}

impl<'a> RenderContext<'a> {
    /// Assemble the context from the alias pairs collected out of the final
    /// clause set. Fails when one alias name is bound more than once within
    /// its namespace.
    pub(crate) fn new(
        table_aliases: Vec<(&'a Table, &'a str)>,
        term_aliases: Vec<(&'a str, &'a Term)>,
        config: &SqlConfig,
    ) -> SqlResult<Self> {
        for (i, (_, alias)) in table_aliases.iter().enumerate() {
            if table_aliases[..i].iter().any(|(_, a)| a == alias) {
                return Err(SqlError::DuplicateAliasName(alias.to_string()));
            }
        }
        for (i, (alias, _)) in term_aliases.iter().enumerate() {
            if term_aliases[..i].iter().any(|(a, _)| a == alias) {
                return Err(SqlError::DuplicateAliasName(alias.to_string()));
            }
        }
        let style = QueryStyle {
            parameters: config.style.parameters,
            keywords: config.vendor.effective_casing(config.style.keywords),
        };
        Ok(Self {
            table_aliases,
            term_aliases,
            param_index: 0,
            style,
        })
    }

    /// Alias for a relation introduced without its own alias identity.
    ///
    /// Returns the single alias bound to the table, `None` when the table was
    /// introduced bare, and [`SqlError::DuplicateAlias`] when the table is
    /// reachable under more than one alias (the column must then be accessed
    /// through one aliased side explicitly).
    pub(crate) fn alias_for_table(&self, table: &Table) -> SqlResult<Option<&'a str>> {
        let mut found = None;
        for (candidate, alias) in &self.table_aliases {
            if *candidate == table {
                if found.is_some() {
                    return Err(SqlError::DuplicateAlias(table.qualified_name()));
                }
                found = Some(*alias);
            }
        }
        Ok(found)
    }

    /// Whether a SELECT item introduced the term alias.
    pub(crate) fn has_term_alias(&self, alias: &str) -> bool {
        self.term_aliases.iter().any(|(a, _)| *a == alias)
    }
}

/// Output accumulator. A failing render never leaks a partial string: the
/// writer is dropped along with the error.
pub(crate) struct SqlWriter<'a> {
    buf: String,
    ctx: RenderContext<'a>,
}

impl<'a> SqlWriter<'a> {
    pub(crate) fn new(ctx: RenderContext<'a>) -> Self {
        Self {
            buf: String::new(),
            ctx,
        }
    }

    pub(crate) fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub(crate) fn space(&mut self) {
        self.buf.push(' ');
    }

    pub(crate) fn keyword(&mut self, keyword: Keyword) {
        let cased = self.ctx.style.keywords.apply(keyword.as_str());
        self.buf.push_str(&cased);
    }

    /// Append a parameter marker, advancing the statement-wide counter.
    pub(crate) fn parameter(&mut self, name: Option<&str>) {
        self.ctx.param_index += 1;
        let marker = self
            .ctx
            .style
            .parameters
            .marker(name, self.ctx.param_index);
        self.buf.push_str(&marker);
    }

    /// Append a single-quoted string literal, doubling embedded quotes.
    pub(crate) fn string_literal(&mut self, value: &str) {
        self.buf.push('\'');
        for ch in value.chars() {
            if ch == '\'' {
                self.buf.push_str("''");
            } else {
                self.buf.push(ch);
            }
        }
        self.buf.push('\'');
    }

    pub(crate) fn alias_for_table(&self, table: &Table) -> SqlResult<Option<&'a str>> {
        self.ctx.alias_for_table(table)
    }

    pub(crate) fn has_term_alias(&self, alias: &str) -> bool {
        self.ctx.has_term_alias(alias)
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

/// Anything that can emit itself as SQL tokens into the writer.
pub(crate) trait Render {
    fn render(&self, w: &mut SqlWriter<'_>) -> SqlResult<()>;
}

/// Render a separated list.
pub(crate) fn render_list<T: Render>(
    items: &[T],
    separator: &str,
    w: &mut SqlWriter<'_>,
) -> SqlResult<()> {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            w.push(separator);
        }
        item.render(w)?;
    }
    Ok(())
}
