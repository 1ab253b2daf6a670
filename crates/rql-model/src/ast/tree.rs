use crate::ast::node::{Limit, RqlNode};
use serde::Serialize;

/// The top-level nodes of one query, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SyntaxTree {
    nodes: Vec<RqlNode>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: impl Into<RqlNode>) {
        self.nodes.push(node.into());
    }

    pub fn nodes(&self) -> &[RqlNode] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RqlNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The first top-level `Limit`, if the query has one.
    pub fn limit(&self) -> Option<&Limit> {
        self.nodes.iter().find_map(|node| match node {
            RqlNode::Limit(limit) => Some(limit),
            _ => None,
        })
    }
}

impl From<Vec<RqlNode>> for SyntaxTree {
    fn from(nodes: Vec<RqlNode>) -> Self {
        Self { nodes }
    }
}

impl FromIterator<RqlNode> for SyntaxTree {
    fn from_iter<T: IntoIterator<Item = RqlNode>>(iter: T) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SyntaxTree {
    type Item = &'a RqlNode;
    type IntoIter = std::slice::Iter<'a, RqlNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
