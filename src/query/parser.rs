//! Query string parser.
//!
//! Grammar:
//!
//! ```text
//! query   = segment ( "." segment )*
//! segment = ident index?
//! index   = "[" integer? "]"
//! ```

use super::ast::{IndexSpec, Query, Segment};
use super::error::QueryError;

/// Parser for query strings such as `a.b.c[0]`.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given query string.
    pub fn new(query: &'a str) -> Self {
        Self { input: query, position: 0 }
    }

    /// Parses the query string into a [`Query`].
    pub fn parse(query: &str) -> Result<Query, QueryError> {
        let mut parser = Parser::new(query);
        let parsed = parser.parse_query()?;
        log::debug!("parsed query '{}' into {} segments", query, parsed.depth());
        Ok(parsed)
    }

    fn parse_query(&mut self) -> Result<Query, QueryError> {
        self.skip_whitespace();
        if self.is_eof() {
            return Err(self.error("", "empty query"));
        }

        let mut intermediate = Vec::new();
        let mut terminal = self.parse_segment()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some('.') => {
                    self.next();
                    let next = self.parse_segment()?;
                    intermediate.push(std::mem::replace(&mut terminal, next));
                }
                Some(']') => return Err(self.error("]", "unbalanced ']'")),
                Some(ch) => {
                    return Err(self.error(&ch.to_string(), "unexpected character"));
                }
            }
        }

        Ok(Query::new(intermediate, terminal))
    }

    fn parse_segment(&mut self) -> Result<Segment, QueryError> {
        let name = self.parse_identifier()?;
        self.skip_whitespace();
        let index = if self.peek() == Some('[') {
            Some(self.parse_index_spec()?)
        } else {
            None
        };
        Ok(Segment::new(name, index))
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the next character and advances position.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.next();
            } else {
                break;
            }
        }
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn error(&self, fragment: &str, reason: &str) -> QueryError {
        QueryError::Parse {
            query: self.input.to_string(),
            position: self.position,
            fragment: fragment.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Parses an identifier (block type, label or attribute name).
    fn parse_identifier(&mut self) -> Result<String, QueryError> {
        self.skip_whitespace();
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' || ch == '-' {
                name.push(ch);
                self.next();
            } else {
                break;
            }
        }
        if !name.is_empty() {
            return Ok(name);
        }
        match self.peek() {
            Some(ch) => Err(self.error(&ch.to_string(), "expected identifier")),
            None => Err(self.error("", "expected identifier, found end of query")),
        }
    }

    /// Parses `[]` or `[integer]`.
    fn parse_index_spec(&mut self) -> Result<IndexSpec, QueryError> {
        let input = self.input;
        let start = self.position;
        self.next(); // '['

        let content_start = self.position;
        while let Some(ch) = self.peek() {
            if ch == ']' || ch == '[' {
                break;
            }
            self.next();
        }
        let content = &input[content_start..self.position];

        if self.peek() != Some(']') {
            let fragment = &input[start..self.position];
            self.position = start;
            return Err(self.error(fragment, "unbalanced '['"));
        }
        self.next();

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(IndexSpec::All);
        }
        match trimmed.parse::<i64>() {
            Ok(idx) => Ok(IndexSpec::At(idx)),
            Err(_) => {
                self.position = content_start;
                Err(self.error(content, "invalid index"))
            }
        }
    }
}
