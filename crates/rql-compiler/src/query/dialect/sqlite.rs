use crate::{
    error::RqlError,
    query::{dialect::Dialect, registry::CompilerRegistry},
};

pub const NAME: &str = "sqlite";

#[derive(Debug, Clone, Copy, Default)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn name(&self) -> &'static str {
        NAME
    }

    // Booleans are stored as integers.
    fn boolean_literal(&self, value: bool) -> &'static str {
        if value { "1" } else { "0" }
    }
}

fn factory() -> Box<dyn Dialect> {
    Box::new(Sqlite)
}

pub fn register(registry: &CompilerRegistry) -> Result<(), RqlError> {
    registry.register(NAME, factory)
}

pub fn unregister(registry: &CompilerRegistry) -> Result<(), RqlError> {
    registry.unregister(NAME)
}
