use crate::{
    error::RqlError,
    query::{dialect::Dialect, literal, registry::CompilerRegistry},
};

pub const NAME: &str = "mysql";

#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn name(&self) -> &'static str {
        NAME
    }

    fn identifier_quotes(&self) -> (char, char) {
        ('`', '`')
    }

    // MySQL treats backslash as an escape inside string literals unless
    // NO_BACKSLASH_ESCAPES is set, so it is doubled too.
    fn quote_string(&self, value: &str) -> Result<String, RqlError> {
        literal::quote_string(value, '\'', true)
    }
}

fn factory() -> Box<dyn Dialect> {
    Box::new(MySql)
}

pub fn register(registry: &CompilerRegistry) -> Result<(), RqlError> {
    registry.register(NAME, factory)
}

pub fn unregister(registry: &CompilerRegistry) -> Result<(), RqlError> {
    registry.unregister(NAME)
}
