//! Reading configuration documents from disk or stdin.

pub mod loader;
