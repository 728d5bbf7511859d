//! Error types for sqlforge

use thiserror::Error;

/// Result type alias for sqlforge operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for statement construction and rendering.
///
/// Every variant is a contract violation (programmer error), not a transient
/// condition: nothing is retried and nothing is suppressed internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// Parameter or alias name is not a valid SQL identifier
    #[error("Invalid identifier: '{0}'")]
    InvalidIdentifier(String),

    /// Raw literal text failed validation
    #[error("Invalid literal: '{0}'")]
    InvalidLiteral(String),

    /// A singular clause slot was set twice
    #[error("{0} clause is already defined")]
    ClauseAlreadyDefined(&'static str),

    /// A clause that needs at least one expression got none
    #[error("{0} requires at least one expression")]
    EmptyClause(&'static str),

    /// Join kind and ON condition do not pair up
    #[error("Invalid join condition: {0}")]
    InvalidJoinCondition(String),

    /// One relation reference resolves to more than one alias
    #[error("More than one alias found for relation '{0}'")]
    DuplicateAlias(String),

    /// One alias name is bound to more than one relation or term
    #[error("Alias '{0}' is bound more than once")]
    DuplicateAliasName(String),

    /// Alias reference that no SELECT item introduces
    #[error("Unknown alias: '{0}'")]
    UnknownAlias(String),

    /// Expression used in a position that cannot render it
    #[error("Unsupported expression: {0}")]
    UnsupportedExpression(String),

    /// Vendor descriptor rejected at construction
    #[error("Invalid vendor: {0}")]
    InvalidVendor(String),

    /// Column used through a relation that did not declare it
    #[error("Column '{column}' does not belong to relation '{relation}'")]
    ForeignColumn { column: String, relation: String },
}

impl SqlError {
    /// Create an unsupported-expression error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedExpression(message.into())
    }

    /// Check if this is a clause-already-defined error.
    pub fn is_clause_already_defined(&self) -> bool {
        matches!(self, Self::ClauseAlreadyDefined(_))
    }

    /// Check if this is an unknown-alias error.
    pub fn is_unknown_alias(&self) -> bool {
        matches!(self, Self::UnknownAlias(_))
    }
}
