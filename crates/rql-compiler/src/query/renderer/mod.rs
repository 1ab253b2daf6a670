//! Defines the core rendering trait and context for converting AST to SQL.

use crate::{
    error::RqlError,
    query::{dialect::Dialect, resolver::FieldResolver},
};

pub mod filter;
pub mod limit;
pub mod logic;
pub mod node;
pub mod sort;

/// A trait for any AST node that can be rendered into a SQL fragment.
pub trait Render {
    fn render(&self, renderer: &mut Renderer) -> Result<(), RqlError>;
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and provides access to the dialect for
/// syntax-specific details and to the resolver for column names.
pub struct Renderer<'a> {
    pub sql: String,
    pub dialect: &'a dyn Dialect,
    pub resolver: &'a dyn FieldResolver,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect, resolver: &'a dyn FieldResolver) -> Self {
        Self {
            sql: String::new(),
            dialect,
            resolver,
        }
    }

    /// Consumes the renderer and returns the final SQL fragment.
    pub fn finish(self) -> String {
        self.sql
    }

    /// Resolves a logical field name and quotes it for the dialect. Fails on
    /// names that would render as an empty identifier.
    pub fn column(&self, logical: &str) -> Result<String, RqlError> {
        let physical = self.resolver.database_field_name(logical, true);
        self.dialect.quote_identifier(&physical)
    }
}
