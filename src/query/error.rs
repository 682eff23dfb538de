//! Error types for query parsing and evaluation.

use thiserror::Error;

/// Broad category of a failure, stable across error wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    NotFound,
    TypeMismatch,
    OutOfBounds,
    Conversion,
}

/// Errors that can occur while parsing or evaluating a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Malformed query syntax.
    #[error("invalid query: {reason} at position {position} ('{fragment}')")]
    Parse {
        query: String,
        position: usize,
        /// The offending part of the query text
        fragment: String,
        reason: String,
    },

    /// A segment did not resolve to any block, label or attribute.
    #[error("'{segment}' not found at '{path}'")]
    NotFound { segment: String, path: String },

    /// Brackets present on a scalar, missing on a list, or a block where a
    /// value was expected.
    #[error("wrong type at '{path}': expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Explicit index outside the list after negative-index adjustment.
    #[error("index {index} out of bounds at '{path}' (length {len})")]
    OutOfBounds { path: String, index: i64, len: usize },
}

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::Parse { .. } => ErrorKind::Parse,
            QueryError::NotFound { .. } => ErrorKind::NotFound,
            QueryError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            QueryError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
        }
    }
}
