use serde::{Deserialize, Serialize};
use std::fmt;

/// Tokens carried by filter and logic nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
    Ne,
    Contains,
    Starts,
    In,
    Out,
    And,
    Or,
}

impl Operator {
    /// `true` for the tokens that combine child nodes.
    pub fn is_logical(&self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    /// `true` for the tokens that compare a column against a list.
    pub fn is_membership(&self) -> bool {
        matches!(self, Operator::In | Operator::Out)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::Eq => "eq",
            Operator::Lt => "lt",
            Operator::Le => "le",
            Operator::Gt => "gt",
            Operator::Ge => "ge",
            Operator::Ne => "ne",
            Operator::Contains => "contains",
            Operator::Starts => "starts",
            Operator::In => "in",
            Operator::Out => "out",
            Operator::And => "and",
            Operator::Or => "or",
        };
        f.write_str(name)
    }
}

/// How the right-hand side of a filter was written in the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// A quoted string; the raw text is unquoted.
    String,
    /// The `null` keyword.
    Null,
    IntegerArray,
    StringArray,
    /// An unquoted scalar: a number or a boolean keyword.
    Plain,
}

impl ValueType {
    pub fn is_array(&self) -> bool {
        matches!(self, ValueType::IntegerArray | ValueType::StringArray)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::String => "string",
            ValueType::Null => "null",
            ValueType::IntegerArray => "integer array",
            ValueType::StringArray => "string array",
            ValueType::Plain => "plain",
        };
        f.write_str(name)
    }
}
