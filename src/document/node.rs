//! Block and value representation for configuration documents.
//!
//! A document is a root [`Body`] holding attributes and blocks. Blocks carry a
//! type name, zero or more labels, and a nested body of their own. Documents
//! are built once (usually by [`parse_document`](super::parser::parse_document))
//! and are never mutated afterwards.
//!
//! # Example
//!
//! ```
//! use hclquill::document::node::{Block, Body, Document, Value};
//!
//! let doc = Document::new(
//!     Body::new()
//!         .with_attribute("region", Value::from("eu-west-1"))
//!         .with_block(
//!             Block::new("service")
//!                 .with_label("web")
//!                 .with_body(Body::new().with_attribute("port", Value::Integer(8080))),
//!         ),
//! );
//!
//! assert_eq!(doc.body().blocks().len(), 1);
//! assert_eq!(doc.body().attribute("region"), Some(&Value::from("eu-west-1")));
//! ```

use indexmap::IndexMap;
use serde::Serialize;

/// A configuration value.
///
/// Serializes untagged, so `Value::List(vec![Value::Integer(1)])` becomes `[1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A whole number
    Integer(i64),
    /// A string without quotes or escapes
    String(String),
    /// An ordered list of values, possibly empty
    List(Vec<Value>),
}

impl Value {
    /// Returns true for integers and strings.
    pub fn is_scalar(&self) -> bool {
        !self.is_list()
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::String(_) => "string",
            Value::List(_) => "list",
        }
    }
}

impl std::fmt::Display for Value {
    /// Compact JSON: strings quoted and escaped, lists as `["a","b"]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// The contents of a block, or of the document root.
///
/// Attributes are keyed by name (unique within one body) and keep insertion
/// order. Blocks are kept in a plain vector because several blocks may share
/// the same type name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    attributes: IndexMap<String, Value>,
    blocks: Vec<Block>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, replacing any previous attribute with the same name.
    pub fn with_attribute(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn attributes(&self) -> &IndexMap<String, Value> {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns all child blocks with the given type name, in document order.
    pub fn blocks_of_type<'a, 'k>(
        &'a self,
        kind: &'k str,
    ) -> impl Iterator<Item = &'a Block> + 'k
    where
        'a: 'k,
    {
        self.blocks.iter().filter(move |block| block.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.blocks.is_empty()
    }

    pub(crate) fn insert_attribute(&mut self, name: String, value: Value) -> Option<Value> {
        self.attributes.insert(name, value)
    }

    pub(crate) fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

/// A named, optionally labeled block: `service "web" { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    kind: String,
    labels: Vec<String>,
    body: Body,
}

impl Block {
    /// Creates an unlabeled block with an empty body.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            labels: Vec::new(),
            body: Body::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// The block type name, e.g. `service`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}

/// A complete configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    body: Body,
}

impl Document {
    pub fn new(body: Body) -> Self {
        Self { body }
    }

    /// The root body holding top-level attributes and blocks.
    pub fn body(&self) -> &Body {
        &self.body
    }
}
