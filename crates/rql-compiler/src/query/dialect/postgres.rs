use crate::{
    error::RqlError,
    query::{
        dialect::{CaseInsensitiveMatch, Dialect},
        registry::CompilerRegistry,
    },
};

pub const NAME: &str = "postgresql";

#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn name(&self) -> &'static str {
        NAME
    }

    fn case_insensitive_match(&self) -> CaseInsensitiveMatch {
        CaseInsensitiveMatch::ILike
    }
}

fn factory() -> Box<dyn Dialect> {
    Box::new(Postgres)
}

pub fn register(registry: &CompilerRegistry) -> Result<(), RqlError> {
    registry.register(NAME, factory)
}

pub fn unregister(registry: &CompilerRegistry) -> Result<(), RqlError> {
    registry.unregister(NAME)
}
