use crate::{
    error::RqlError,
    query::{
        dialect::{CaseInsensitiveMatch, Dialect},
        literal,
        registry::CompilerRegistry,
    },
};
use rql_model::Limit;

pub const NAME: &str = "firebird";

#[derive(Debug, Clone, Copy, Default)]
pub struct Firebird;

impl Dialect for Firebird {
    fn name(&self) -> &'static str {
        NAME
    }

    fn case_insensitive_match(&self) -> CaseInsensitiveMatch {
        CaseInsensitiveMatch::FoldUpper
    }

    /// Firebird paginates with `ROWS <first> TO <last>`, both 1-based and inclusive.
    fn render_limit(&self, limit: &Limit) -> Result<String, RqlError> {
        let overflow =
            || RqlError::invalid_literal(limit.start.to_string(), "row range overflows");
        let first = limit.start.checked_add(1).ok_or_else(overflow)?;
        let last = limit
            .start
            .checked_add(limit.count.get())
            .ok_or_else(overflow)?;
        let first = literal::bigint_literal(first)?;
        let last = literal::bigint_literal(last)?;
        Ok(format!(" /*limit*/ ROWS {first} TO {last}"))
    }
}

fn factory() -> Box<dyn Dialect> {
    Box::new(Firebird)
}

pub fn register(registry: &CompilerRegistry) -> Result<(), RqlError> {
    registry.register(NAME, factory)
}

pub fn unregister(registry: &CompilerRegistry) -> Result<(), RqlError> {
    registry.unregister(NAME)
}
