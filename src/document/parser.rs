//! Parsing of HCL configuration text into a [`Document`].
//!
//! The text is parsed by the `hcl` crate and its body is converted into the
//! block/attribute model used by queries:
//!
//! - integers stay integers, strings and templates become strings
//! - arrays become lists
//! - an object assigned to an attribute (`name = { ... }`) becomes an unlabeled
//!   block of that name
//! - any other expression (booleans, floats, `null`, references, function
//!   calls) is kept as a string holding its HCL text
//!
//! # Example
//!
//! ```
//! use hclquill::document::parser::parse_document;
//!
//! let doc = parse_document(r#"service "web" { port = 8080 }"#).unwrap();
//! let service = &doc.body().blocks()[0];
//! assert_eq!(service.kind(), "service");
//! assert_eq!(service.labels(), ["web"]);
//! ```

use super::node::{Block, Body, Document, Value};
use hcl::{Expression, ObjectKey, Structure};
use thiserror::Error;

/// Error raised for configuration text that cannot be turned into a document.
#[derive(Debug, Error)]
pub enum SyntaxError {
    /// The text is not valid HCL
    #[error("syntax error: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("duplicate attribute '{name}'")]
    DuplicateAttribute { name: String },
}

/// Parses configuration text into a document.
pub fn parse_document(source: &str) -> Result<Document, SyntaxError> {
    let body = convert_body(hcl::parse(source)?)?;
    log::debug!(
        "parsed document: {} attributes, {} blocks",
        body.attributes().len(),
        body.blocks().len()
    );
    Ok(Document::new(body))
}

fn convert_body(source: hcl::Body) -> Result<Body, SyntaxError> {
    let mut body = Body::new();
    for structure in source {
        match structure {
            Structure::Attribute(attribute) => {
                convert_attribute(&mut body, attribute.key.into_inner(), attribute.expr)?;
            }
            Structure::Block(block) => {
                let mut converted = Block::new(block.identifier.into_inner())
                    .with_body(convert_body(block.body)?);
                for label in block.labels {
                    converted = converted.with_label(label.into_inner());
                }
                body.push_block(converted);
            }
        }
    }
    Ok(body)
}

/// Adds `name = expr` to `body`. Objects become unlabeled blocks.
fn convert_attribute(body: &mut Body, name: String, expr: Expression) -> Result<(), SyntaxError> {
    if let Expression::Object(object) = expr {
        let mut nested = Body::new();
        for (key, value) in object {
            convert_attribute(&mut nested, object_key(key)?, value)?;
        }
        body.push_block(Block::new(name).with_body(nested));
        return Ok(());
    }

    let value = convert_value(expr)?;
    if body.insert_attribute(name.clone(), value).is_some() {
        return Err(SyntaxError::DuplicateAttribute { name });
    }
    Ok(())
}

fn convert_value(expr: Expression) -> Result<Value, SyntaxError> {
    let value = match expr {
        Expression::String(s) => Value::String(s),
        Expression::TemplateExpr(template) => Value::String(template.to_string()),
        Expression::Number(number) => match number.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::String(number.to_string()),
        },
        Expression::Array(items) => Value::List(
            items
                .into_iter()
                .map(convert_value)
                .collect::<Result<_, _>>()?,
        ),
        other => {
            let text = hcl::format::to_string(&other)?;
            match text.parse::<i64>() {
                Ok(i) => Value::Integer(i),
                Err(_) => Value::String(text),
            }
        }
    };
    Ok(value)
}

fn object_key(key: ObjectKey) -> Result<String, SyntaxError> {
    match key {
        ObjectKey::Identifier(ident) => Ok(ident.into_inner()),
        ObjectKey::Expression(Expression::String(s)) => Ok(s),
        other => Ok(hcl::format::to_string(&other)?),
    }
}
