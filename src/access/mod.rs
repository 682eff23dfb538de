//! Value accessors layered on top of query evaluation.
//!
//! [`Document::get`] collapses the matches of a query into one [`Value`]; the
//! `get_as_*` methods coerce that value into plain Rust types.
//!
//! # Example
//!
//! ```
//! use hclquill::document::parser::parse_document;
//!
//! let doc = parse_document(r#"
//!     server {
//!         port = "8080"
//!         hosts = ["a", "b"]
//!     }
//! "#).unwrap();
//!
//! assert_eq!(doc.get_as_int("server.port").unwrap(), 8080);
//! assert_eq!(doc.get_as_string_list("server.hosts[]").unwrap(), vec!["a", "b"]);
//! ```

mod error;

pub use error::AccessError;

use crate::document::node::{Document, Value};
use crate::query::{Evaluator, Parser, ResultPair};

impl Document {
    /// Parses and evaluates a query, returning every match.
    pub fn query(&self, query: &str) -> Result<Vec<ResultPair>, AccessError> {
        let parsed = Parser::parse(query).map_err(|source| AccessError::Query {
            query: query.to_string(),
            source,
        })?;
        Evaluator::new(self)
            .evaluate(&parsed)
            .map_err(|source| AccessError::Query {
                query: query.to_string(),
                source,
            })
    }

    /// Gets the value a query resolves to.
    ///
    /// A single match is returned as-is. Zero or several matches are
    /// returned as a list of the matched values, in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is malformed, an intermediate segment
    /// cannot be resolved, or a match has the wrong type.
    pub fn get(&self, query: &str) -> Result<Value, AccessError> {
        let pairs = self.query(query)?;
        Ok(collapse(pairs))
    }

    /// Returns true if the query resolves without error to at least one value.
    pub fn has(&self, query: &str) -> bool {
        self.query(query).is_ok_and(|pairs| !pairs.is_empty())
    }

    /// Gets an integer, parsing string values as decimal numbers.
    pub fn get_as_int(&self, query: &str) -> Result<i64, AccessError> {
        let value = self.get(query)?;
        coerce_int(&value).ok_or_else(|| AccessError::Conversion {
            query: query.to_string(),
            target: "an integer",
            value: value.to_string(),
        })
    }

    /// Gets a string. Integers are formatted as decimal; lists fall back to
    /// their compact rendering.
    pub fn get_as_string(&self, query: &str) -> Result<String, AccessError> {
        let value = self.get(query)?;
        Ok(coerce_string(value))
    }

    /// Gets a list without coercing its elements.
    pub fn get_as_list(&self, query: &str) -> Result<Vec<Value>, AccessError> {
        match self.get(query)? {
            Value::List(items) => Ok(items),
            other => Err(AccessError::NotAList {
                query: query.to_string(),
                found: other.type_name(),
            }),
        }
    }

    /// Gets a list with every element coerced as by [`Document::get_as_string`].
    pub fn get_as_string_list(&self, query: &str) -> Result<Vec<String>, AccessError> {
        let items = self.get_as_list(query)?;
        Ok(items.into_iter().map(coerce_string).collect())
    }

    /// Gets a list with every element coerced as by [`Document::get_as_int`].
    ///
    /// # Errors
    ///
    /// Fails on the first element that is neither an integer nor a string
    /// holding one; no partial list is returned.
    pub fn get_as_int_list(&self, query: &str) -> Result<Vec<i64>, AccessError> {
        let items = self.get_as_list(query)?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                coerce_int(item).ok_or_else(|| AccessError::ElementConversion {
                    query: query.to_string(),
                    target: "an integer",
                    index,
                    element: item.to_string(),
                })
            })
            .collect()
    }
}

fn collapse(mut pairs: Vec<ResultPair>) -> Value {
    if pairs.len() == 1 {
        if let Some(pair) = pairs.pop() {
            return pair.value;
        }
    }
    Value::List(pairs.into_iter().map(|pair| pair.value).collect())
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        Value::String(s) => s.parse().ok(),
        Value::List(_) => None,
    }
}

fn coerce_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Integer(i) => i.to_string(),
        list @ Value::List(_) => list.to_string(),
    }
}
