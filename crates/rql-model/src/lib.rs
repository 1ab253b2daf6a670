pub mod ast;

pub use ast::{
    node::{Filter, Limit, LogicOperator, RqlNode, Sort, SortField, SortSign},
    operator::{Operator, ValueType},
    tree::SyntaxTree,
};
