//! Error types for querykit

use thiserror::Error;

/// Result type alias for querykit operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while building a statement.
///
/// Grammar misuse (e.g. `having` before `group_by`) never reaches this type: the
/// statement's type-state simply does not expose the method.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A caller-supplied argument does not fit the statement built so far
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The model does not serialize to a map of named fields
    #[error("Invalid model '{type_name}': expected a struct or map, got {kind}")]
    InvalidModel {
        type_name: &'static str,
        kind: &'static str,
    },

    /// Serialization error while projecting or reconstituting a model
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QueryError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an error for a column that a `SELECT DISTINCT` list does not contain
    pub fn missing_select_column(column: &str) -> Self {
        Self::InvalidArgument(format!(
            "You have to provide {column} property in the SELECT"
        ))
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is an invalid model error
    pub fn is_invalid_model(&self) -> bool {
        matches!(self, Self::InvalidModel { .. })
    }
}
