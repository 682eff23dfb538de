//! HCLQuill - query block-structured configuration documents.
//!
//! A [`Document`] is a tree of attributes and labeled blocks. Queries such as
//! `service.web.ports[-1]` are parsed by [`query::Parser`], evaluated by
//! [`query::Evaluator`], and wrapped by the accessor methods on [`Document`]
//! (`get`, `get_as_int`, `get_as_string_list`, ...).
//!
//! ```
//! use hclquill::{parse_document, Value};
//!
//! let doc = parse_document(r#"a "b" { c = [1] }"#).unwrap();
//! assert_eq!(doc.get("a.b.c[]").unwrap(), Value::List(vec![Value::Integer(1)]));
//! ```

pub mod access;
pub mod config;
pub mod document;
pub mod file;
pub mod output;
pub mod query;

pub use access::AccessError;
pub use document::node::{Block, Body, Document, Value};
pub use document::parser::{parse_document, SyntaxError};
pub use query::{ErrorKind, QueryError, ResultPair};
