//! Syntax tree types for query expressions.

use std::fmt;

/// Bracket suffix on a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSpec {
    /// Empty brackets (`a[]`) - expect a list, select all of it
    All,
    /// Explicit index (`a[0]`, `a[-1]`) - select one element
    At(i64),
}

/// One dot-separated unit of a query, e.g. `ports[1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Matched against block types, block labels and attribute names
    pub name: String,
    /// `None` when the segment has no brackets (expect a scalar)
    pub index: Option<IndexSpec>,
}

impl Segment {
    pub fn new(name: impl Into<String>, index: Option<IndexSpec>) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }

    /// A segment without brackets.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        match self.index {
            None => Ok(()),
            Some(IndexSpec::All) => write!(f, "[]"),
            Some(IndexSpec::At(idx)) => write!(f, "[{}]", idx),
        }
    }
}

/// A parsed query: zero or more intermediate segments and a terminal one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    intermediate: Vec<Segment>,
    terminal: Segment,
}

impl Query {
    pub fn new(intermediate: Vec<Segment>, terminal: Segment) -> Self {
        Self {
            intermediate,
            terminal,
        }
    }

    /// Segments that must resolve to blocks, root first.
    pub fn intermediate(&self) -> &[Segment] {
        &self.intermediate
    }

    /// The last segment, whose index spec decides the shape of the result.
    pub fn terminal(&self) -> &Segment {
        &self.terminal
    }

    /// All segments in order, terminal last.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.intermediate.iter().chain(std::iter::once(&self.terminal))
    }

    /// Number of segments; at least one.
    pub fn depth(&self) -> usize {
        self.intermediate.len() + 1
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.intermediate {
            write!(f, "{}.", segment)?;
        }
        write!(f, "{}", self.terminal)
    }
}
