use thiserror::Error;

use crate::query::{ErrorKind, QueryError};

/// Errors returned by the accessor methods on [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Parsing or evaluating the query failed.
    #[error("query '{query}' failed: {source}")]
    Query {
        query: String,
        #[source]
        source: QueryError,
    },

    /// The result could not be coerced to the requested type.
    #[error("cannot convert {value} at '{query}' to {target}")]
    Conversion {
        query: String,
        target: &'static str,
        value: String,
    },

    /// A list accessor was used on a query that returns a scalar.
    #[error("result of '{query}' is not a list (found {found})")]
    NotAList { query: String, found: &'static str },

    /// One element of a list result could not be coerced.
    #[error("element {index} of '{query}' ({element}) cannot be converted to {target}")]
    ElementConversion {
        query: String,
        target: &'static str,
        index: usize,
        element: String,
    },
}

impl AccessError {
    /// The category of the underlying failure.
    ///
    /// Wrapped query errors keep the kind of their source.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccessError::Query { source, .. } => source.kind(),
            AccessError::Conversion { .. }
            | AccessError::NotAList { .. }
            | AccessError::ElementConversion { .. } => ErrorKind::Conversion,
        }
    }
}
