use super::ast::{IndexSpec, Query, Segment};
use super::error::QueryError;
use crate::document::node::{Block, Body, Document, Value};

/// One match: the resolved path and the value found there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPair {
    /// Matched names joined with `.`, with the effective index appended when
    /// one was applied (`service.web.ports[1]`).
    pub path: String,
    pub value: Value,
}

impl ResultPair {
    fn new(path: String, value: Value) -> Self {
        Self { path, value }
    }
}

/// A traversal position.
#[derive(Debug, Clone, Copy)]
enum Node<'a> {
    /// The document root
    Root(&'a Body),
    /// A block, with its first `labels_consumed` labels already matched
    Block {
        block: &'a Block,
        labels_consumed: usize,
    },
    /// An attribute value; only valid as the final match
    Attribute(&'a Value),
}

impl<'a> Node<'a> {
    fn body(&self) -> Option<&'a Body> {
        match *self {
            Node::Root(body) => Some(body),
            Node::Block { block, .. } => Some(block.body()),
            Node::Attribute(_) => None,
        }
    }
}

pub struct Evaluator<'a> {
    root: &'a Document,
}

impl<'a> Evaluator<'a> {
    pub fn new(root: &'a Document) -> Self {
        Evaluator { root }
    }

    /// Evaluates a query and returns every match in document order.
    ///
    /// The first error on any branch aborts the whole evaluation. An
    /// intermediate segment that resolves nowhere is `NotFound`; a terminal
    /// segment that resolves nowhere yields no matches.
    pub fn evaluate(&self, query: &Query) -> Result<Vec<ResultPair>, QueryError> {
        let mut current: Vec<(String, Node<'a>)> =
            vec![(String::new(), Node::Root(self.root.body()))];
        let mut level_path = String::new();

        for segment in query.intermediate() {
            let matches = step(&current, segment);
            if matches.is_empty() {
                return Err(QueryError::NotFound {
                    segment: segment.name.clone(),
                    path: if level_path.is_empty() {
                        "(root)".to_string()
                    } else {
                        level_path
                    },
                });
            }
            level_path = join_path(&level_path, &segment.name);

            let mut next = Vec::with_capacity(matches.len());
            for (path, node) in matches {
                match node {
                    Node::Attribute(value) => {
                        return Err(QueryError::TypeMismatch {
                            path,
                            expected: "block",
                            found: value.type_name(),
                        });
                    }
                    _ => next.push((path, node)),
                }
            }

            current = select(next, segment.index, &level_path)?;
            log::trace!("segment '{}' resolved to {} nodes", segment, current.len());
        }

        let terminal = query.terminal();
        let mut results = Vec::new();
        for (path, node) in step(&current, terminal) {
            match node {
                Node::Attribute(value) => results.push(apply_index(path, value, terminal.index)?),
                Node::Root(_) | Node::Block { .. } => {
                    return Err(QueryError::TypeMismatch {
                        path,
                        expected: "attribute",
                        found: "block",
                    });
                }
            }
        }

        log::debug!("query '{}' matched {} values", query, results.len());
        Ok(results)
    }
}

/// Resolves one segment name from every current node. Nodes that cannot
/// resolve it contribute nothing.
fn step<'a>(current: &[(String, Node<'a>)], segment: &Segment) -> Vec<(String, Node<'a>)> {
    current
        .iter()
        .flat_map(|(path, node)| find_children(*node, &segment.name, path))
        .collect()
}

/// Finds what `name` refers to below `node`.
///
/// Precedence: child blocks of that type, then the block's next unmatched
/// label, then an attribute of that name. Labels passed over on the way into
/// the body still appear in the resolved path.
fn find_children<'a>(node: Node<'a>, name: &str, path: &str) -> Vec<(String, Node<'a>)> {
    let Some(body) = node.body() else {
        return vec![];
    };
    let child_path = join_path(&body_path(node, path), name);

    let blocks: Vec<(String, Node<'a>)> = body
        .blocks_of_type(name)
        .map(|block| {
            (
                child_path.clone(),
                Node::Block {
                    block,
                    labels_consumed: 0,
                },
            )
        })
        .collect();
    if !blocks.is_empty() {
        return blocks;
    }

    if let Node::Block {
        block,
        labels_consumed,
    } = node
    {
        if block.labels().get(labels_consumed).map(String::as_str) == Some(name) {
            return vec![(
                join_path(path, name),
                Node::Block {
                    block,
                    labels_consumed: labels_consumed + 1,
                },
            )];
        }
    }

    match body.attribute(name) {
        Some(value) => vec![(child_path, Node::Attribute(value))],
        None => vec![],
    }
}

/// The path of a node's body, with any unmatched labels appended.
fn body_path(node: Node<'_>, path: &str) -> String {
    match node {
        Node::Block {
            block,
            labels_consumed,
        } => block
            .labels()
            .iter()
            .skip(labels_consumed)
            .fold(path.to_string(), |acc, label| join_path(&acc, label)),
        Node::Root(_) | Node::Attribute(_) => path.to_string(),
    }
}

/// Applies an intermediate index spec to the set of blocks matched at one level.
fn select<'a>(
    nodes: Vec<(String, Node<'a>)>,
    index: Option<IndexSpec>,
    level_path: &str,
) -> Result<Vec<(String, Node<'a>)>, QueryError> {
    match index {
        None | Some(IndexSpec::All) => Ok(nodes),
        Some(IndexSpec::At(idx)) => {
            let len = nodes.len();
            let effective = resolve_index(idx, len).ok_or_else(|| QueryError::OutOfBounds {
                path: level_path.to_string(),
                index: idx,
                len,
            })?;
            Ok(nodes
                .into_iter()
                .nth(effective)
                .map(|(path, node)| (format!("{}[{}]", path, effective), node))
                .into_iter()
                .collect())
        }
    }
}

/// Applies the final segment's index spec to an attribute value.
fn apply_index(
    path: String,
    value: &Value,
    index: Option<IndexSpec>,
) -> Result<ResultPair, QueryError> {
    match (index, value) {
        (None, Value::List(_)) => Err(QueryError::TypeMismatch {
            path,
            expected: "scalar",
            found: "list",
        }),
        (None, scalar) => Ok(ResultPair::new(path, scalar.clone())),
        (Some(IndexSpec::All), Value::List(_)) => Ok(ResultPair::new(path, value.clone())),
        (Some(IndexSpec::At(idx)), Value::List(items)) => {
            match resolve_index(idx, items.len()) {
                Some(effective) => Ok(ResultPair::new(
                    format!("{}[{}]", path, effective),
                    items[effective].clone(),
                )),
                None => Err(QueryError::OutOfBounds {
                    path,
                    index: idx,
                    len: items.len(),
                }),
            }
        }
        (Some(_), scalar) => Err(QueryError::TypeMismatch {
            path,
            expected: "list",
            found: scalar.type_name(),
        }),
    }
}

/// Maps a possibly negative index onto `0..len`; `-1` is the last element.
pub fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let effective = if index < 0 { len + index } else { index };
    if effective < 0 || effective >= len {
        None
    } else {
        usize::try_from(effective).ok()
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}
