//! The document model and its text parser.

pub mod node;
pub mod parser;
