//! Rendering of query results for the command line.

use crate::document::node::Value;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a value is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact JSON: strings quoted, lists as `["a","b"]`
    #[default]
    Json,
    /// Strings unquoted, list elements joined with single spaces
    Raw,
}

/// Renders a value in the given format, without a trailing newline.
///
/// # Example
///
/// ```
/// use hclquill::document::node::Value;
/// use hclquill::output::{render, OutputFormat};
///
/// let value = Value::from(vec!["a", "b"]);
/// assert_eq!(render(&value, OutputFormat::Json), r#"["a","b"]"#);
/// assert_eq!(render(&value, OutputFormat::Raw), "a b");
/// ```
pub fn render(value: &Value, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => value.to_string(),
        OutputFormat::Raw => render_raw(value),
    }
}

fn render_raw(value: &Value) -> String {
    match value {
        Value::Integer(i) => i.to_string(),
        Value::String(s) => s.clone(),
        Value::List(items) => items.iter().map(render_raw).collect::<Vec<_>>().join(" "),
    }
}
