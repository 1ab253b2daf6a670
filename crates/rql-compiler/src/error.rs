use rql_model::{Operator, ValueType};
use thiserror::Error;

/// All errors coming from AST decoding, compilation and the dialect registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RqlError {
    /// The AST carries a node kind this compiler does not know about.
    /// Indicates a parser/compiler version mismatch.
    #[error("Unknown node kind in compiler: {0}")]
    UnknownNode(String),

    /// A filter's value type does not fit its operator (e.g. `in` without a list).
    #[error("Invalid operand for '{token}': got {got}, expected {expected}")]
    InvalidOperandType {
        token: Operator,
        got: ValueType,
        expected: &'static str,
    },

    /// A token was used in a node that cannot carry it.
    #[error("Token '{token}' is not valid in a {node} node")]
    UnexpectedToken { token: Operator, node: &'static str },

    /// A literal could not be rendered safely for the target dialect.
    #[error("Invalid literal {value:?}: {reason}")]
    InvalidLiteral { value: String, reason: &'static str },

    /// A node that needs at least one element has none.
    #[error("Empty {0}")]
    EmptyNode(&'static str),

    /// The AST document is structurally malformed.
    #[error("AST decode error: {0}")]
    Decode(String),

    #[error("Dialect already registered: {0}")]
    DuplicateDialect(String),

    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse grouping of [`RqlError`] so callers can tell bugs from bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Should be unreachable with a correctly versioned parser; log as a bug.
    Defect,
    /// The query itself is malformed; report as a validation failure.
    InvalidInput,
    /// Dialect registry misuse.
    Registry,
    Configuration,
}

impl RqlError {
    pub fn class(&self) -> ErrorClass {
        match self {
            RqlError::UnknownNode(_) => ErrorClass::Defect,
            RqlError::InvalidOperandType { .. }
            | RqlError::UnexpectedToken { .. }
            | RqlError::InvalidLiteral { .. }
            | RqlError::EmptyNode(_)
            | RqlError::Decode(_) => ErrorClass::InvalidInput,
            RqlError::DuplicateDialect(_) | RqlError::UnknownDialect(_) => ErrorClass::Registry,
            RqlError::Config(_) => ErrorClass::Configuration,
        }
    }

    pub fn invalid_literal(value: impl Into<String>, reason: &'static str) -> Self {
        RqlError::InvalidLiteral {
            value: value.into(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        assert_eq!(
            RqlError::UnknownNode("having".into()).class(),
            ErrorClass::Defect
        );
        assert_eq!(
            RqlError::InvalidOperandType {
                token: Operator::In,
                got: ValueType::String,
                expected: "integer array or string array",
            }
            .class(),
            ErrorClass::InvalidInput
        );
        assert_eq!(
            RqlError::DuplicateDialect("postgresql".into()).class(),
            ErrorClass::Registry
        );
    }

    #[test]
    fn test_error_messages() {
        let err = RqlError::InvalidOperandType {
            token: Operator::Out,
            got: ValueType::Null,
            expected: "integer array or string array",
        };
        assert_eq!(
            err.to_string(),
            "Invalid operand for 'out': got null, expected integer array or string array"
        );
        assert_eq!(RqlError::EmptyNode("sort").to_string(), "Empty sort");
    }
}
