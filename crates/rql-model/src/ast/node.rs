use crate::ast::operator::{Operator, ValueType};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;

/// A single node of a parsed RQL query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RqlNode {
    Filter(Filter),
    #[serde(rename = "logic")]
    LogicOperator(LogicOperator),
    Sort(Sort),
    Limit(Limit),
    /// Anchors the `WHERE` keyword in front of the first filter.
    Where,
}

impl RqlNode {
    /// The tag used for this node in the JSON document form.
    pub fn kind(&self) -> &'static str {
        match self {
            RqlNode::Filter(_) => "filter",
            RqlNode::LogicOperator(_) => "logic",
            RqlNode::Sort(_) => "sort",
            RqlNode::Limit(_) => "limit",
            RqlNode::Where => "where",
        }
    }
}

impl From<Filter> for RqlNode {
    fn from(filter: Filter) -> Self {
        RqlNode::Filter(filter)
    }
}

impl From<LogicOperator> for RqlNode {
    fn from(op: LogicOperator) -> Self {
        RqlNode::LogicOperator(op)
    }
}

impl From<Sort> for RqlNode {
    fn from(sort: Sort) -> Self {
        RqlNode::Sort(sort)
    }
}

impl From<Limit> for RqlNode {
    fn from(limit: Limit) -> Self {
        RqlNode::Limit(limit)
    }
}

/// A comparison between a field and a literal (or list of literals).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub left_field: String,
    pub token: Operator,
    pub right_value: ValueType,
    #[serde(default)]
    pub right_raw: String,
    #[serde(default)]
    pub right_array: Vec<String>,
}

impl Filter {
    pub fn new(
        left_field: impl Into<String>,
        token: Operator,
        right_value: ValueType,
        right_raw: impl Into<String>,
    ) -> Self {
        Self {
            left_field: left_field.into(),
            token,
            right_value,
            right_raw: right_raw.into(),
            right_array: Vec::new(),
        }
    }

    pub fn string(left_field: impl Into<String>, token: Operator, raw: impl Into<String>) -> Self {
        Self::new(left_field, token, ValueType::String, raw)
    }

    pub fn plain(left_field: impl Into<String>, token: Operator, raw: impl Into<String>) -> Self {
        Self::new(left_field, token, ValueType::Plain, raw)
    }

    pub fn null(left_field: impl Into<String>, token: Operator) -> Self {
        Self::new(left_field, token, ValueType::Null, "null")
    }

    pub fn integers<I, S>(left_field: impl Into<String>, token: Operator, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::array(left_field, token, ValueType::IntegerArray, values)
    }

    pub fn strings<I, S>(left_field: impl Into<String>, token: Operator, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::array(left_field, token, ValueType::StringArray, values)
    }

    fn array<I, S>(
        left_field: impl Into<String>,
        token: Operator,
        kind: ValueType,
        values: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            left_field: left_field.into(),
            token,
            right_value: kind,
            right_raw: String::new(),
            right_array: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// `and(...)` / `or(...)` over an ordered list of child nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogicOperator {
    pub token: Operator,
    pub children: Vec<RqlNode>,
}

impl LogicOperator {
    pub fn new(token: Operator, children: Vec<RqlNode>) -> Self {
        Self { token, children }
    }

    pub fn and(children: Vec<RqlNode>) -> Self {
        Self::new(Operator::And, children)
    }

    pub fn or(children: Vec<RqlNode>) -> Self {
        Self::new(Operator::Or, children)
    }

    /// Nesting depth of this group, counting itself.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| match child {
                RqlNode::LogicOperator(op) => op.depth(),
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortSign {
    #[serde(rename = "+")]
    Asc,
    #[serde(rename = "-")]
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    pub field: String,
    pub sign: SortSign,
}

impl SortField {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            sign: SortSign::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            sign: SortSign::Desc,
        }
    }
}

/// Ordered sort keys; the first entry is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub fields: Vec<SortField>,
}

impl Sort {
    pub fn new(fields: Vec<SortField>) -> Self {
        Self { fields }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    pub start: u64,
    pub count: NonZeroU64,
}

impl Limit {
    /// Returns `None` when `count` is zero.
    pub fn new(start: u64, count: u64) -> Option<Self> {
        NonZeroU64::new(count).map(|count| Self { start, count })
    }
}
