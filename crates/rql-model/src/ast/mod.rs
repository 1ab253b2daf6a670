//! Dialect-neutral AST produced by the RQL parser.

pub mod node;
pub mod operator;
pub mod tree;
