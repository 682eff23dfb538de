//! Path queries over configuration documents.
//!
//! # Supported Syntax
//!
//! - `name` - a block type, block label or attribute name
//! - `a.b.c` - nested lookup, one name per level
//! - `name[]` - the whole list held by an attribute
//! - `name[i]` - one list element; negative indices count from the end
//!
//! An index on a non-final segment selects among the blocks matched at that
//! level (`service[0].port`).
//!
//! # Examples
//!
//! ```
//! use hclquill::document::parser::parse_document;
//! use hclquill::query::{Evaluator, Parser};
//!
//! let doc = parse_document("ports = [80, 443]").unwrap();
//! let query = Parser::parse("ports[-1]").unwrap();
//! let results = Evaluator::new(&doc).evaluate(&query).unwrap();
//! assert_eq!(results[0].path, "ports[1]");
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use ast::{IndexSpec, Query, Segment};
pub use error::{ErrorKind, QueryError};
pub use evaluator::{Evaluator, ResultPair};
pub use parser::Parser;
