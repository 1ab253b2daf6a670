use crate::{
    error::RqlError,
    query::{
        dialect::{CaseInsensitiveMatch, Dialect, Firebird},
        registry::CompilerRegistry,
    },
};
use rql_model::Limit;

pub const NAME: &str = "interbase";

/// Firebird syntax, except that Interbase has no boolean literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interbase;

impl Dialect for Interbase {
    fn name(&self) -> &'static str {
        NAME
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value { "1" } else { "0" }
    }

    fn identifier_quotes(&self) -> (char, char) {
        Firebird.identifier_quotes()
    }

    fn quote_string(&self, value: &str) -> Result<String, RqlError> {
        Firebird.quote_string(value)
    }

    fn case_insensitive_match(&self) -> CaseInsensitiveMatch {
        Firebird.case_insensitive_match()
    }

    fn render_limit(&self, limit: &Limit) -> Result<String, RqlError> {
        Firebird.render_limit(limit)
    }
}

fn factory() -> Box<dyn Dialect> {
    Box::new(Interbase)
}

pub fn register(registry: &CompilerRegistry) -> Result<(), RqlError> {
    registry.register(NAME, factory)
}

pub fn unregister(registry: &CompilerRegistry) -> Result<(), RqlError> {
    registry.unregister(NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interbase_differs_from_firebird_only_in_booleans() {
        assert_eq!(Interbase.boolean_literal(true), "1");
        assert_eq!(Interbase.boolean_literal(false), "0");

        let limit = Limit::new(5, 5).unwrap();
        assert_eq!(
            Interbase.render_limit(&limit).unwrap(),
            Firebird.render_limit(&limit).unwrap()
        );
        assert_eq!(
            Interbase.case_insensitive_match(),
            Firebird.case_insensitive_match()
        );
    }
}
