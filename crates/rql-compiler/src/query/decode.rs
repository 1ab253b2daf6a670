//! Decoding of the JSON document form of an RQL syntax tree.
//!
//! A node is an object tagged with `"kind"`; a tree is an array of nodes. The
//! kind is checked here rather than by serde so that a document from a newer
//! parser surfaces as [`RqlError::UnknownNode`] instead of a generic decode error.

use crate::error::RqlError;
use rql_model::{Filter, Limit, LogicOperator, Operator, RqlNode, Sort, SyntaxTree};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

#[derive(Deserialize)]
struct LogicDocument {
    token: Operator,
    children: Vec<Value>,
}

/// Decodes a single node.
pub fn decode_node(value: &Value) -> Result<RqlNode, RqlError> {
    let kind = value
        .get("kind")
        .and_then(Value::as_str)
        .ok_or_else(|| RqlError::Decode("node is missing a string \"kind\" field".into()))?;

    match kind {
        "filter" => Ok(RqlNode::Filter(from_value::<Filter>(kind, value)?)),
        "logic" => {
            let doc = from_value::<LogicDocument>(kind, value)?;
            let children = doc
                .children
                .iter()
                .map(decode_node)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(RqlNode::LogicOperator(LogicOperator::new(doc.token, children)))
        }
        "sort" => Ok(RqlNode::Sort(from_value::<Sort>(kind, value)?)),
        "limit" => Ok(RqlNode::Limit(from_value::<Limit>(kind, value)?)),
        "where" => Ok(RqlNode::Where),
        other => Err(RqlError::UnknownNode(other.to_string())),
    }
}

/// Decodes a tree from either an array of nodes or a single node.
pub fn decode_tree(value: &Value) -> Result<SyntaxTree, RqlError> {
    match value {
        Value::Array(nodes) => nodes.iter().map(decode_node).collect(),
        Value::Object(_) => Ok(SyntaxTree::from(vec![decode_node(value)?])),
        _ => Err(RqlError::Decode(
            "expected a node object or an array of nodes".into(),
        )),
    }
}

pub fn decode_str(json: &str) -> Result<SyntaxTree, RqlError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| RqlError::Decode(e.to_string()))?;
    decode_tree(&value)
}

fn from_value<T: DeserializeOwned>(kind: &str, value: &Value) -> Result<T, RqlError> {
    T::deserialize(value).map_err(|e| RqlError::Decode(format!("invalid {kind} node: {e}")))
}
