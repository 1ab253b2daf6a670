//! Process-wide mapping from dialect name to compiler factory.

use crate::{
    error::RqlError,
    query::{
        compiler::RqlCompiler,
        dialect::{Dialect, firebird, interbase, mysql, postgres, sqlite},
    },
};
use lazy_static::lazy_static;
use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use tracing::{info, warn};

/// Builds a fresh dialect strategy for one compiler.
pub type DialectFactory = fn() -> Box<dyn Dialect>;

lazy_static! {
    static ref GLOBAL_REGISTRY: CompilerRegistry = CompilerRegistry::new();
}

/// Dialect names are matched case-insensitively (`"PostgreSQL"` == `"postgresql"`).
#[derive(Default)]
pub struct CompilerRegistry {
    factories: RwLock<HashMap<String, DialectFactory>>,
}

impl CompilerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by the whole process. Starts empty; see
    /// [`register_builtin_dialects`].
    pub fn global() -> &'static CompilerRegistry {
        &GLOBAL_REGISTRY
    }

    /// Fails with `DuplicateDialect` if the name is taken; the existing entry is kept.
    pub fn register(&self, name: &str, factory: DialectFactory) -> Result<(), RqlError> {
        let key = normalize(name);
        let mut factories = self.write();
        if factories.contains_key(&key) {
            warn!("Rejected duplicate registration of dialect '{}'", key);
            return Err(RqlError::DuplicateDialect(key));
        }
        info!("Registered RQL compiler for dialect '{}'", key);
        factories.insert(key, factory);
        Ok(())
    }

    pub fn unregister(&self, name: &str) -> Result<(), RqlError> {
        let key = normalize(name);
        match self.write().remove(&key) {
            Some(_) => {
                info!("Unregistered RQL compiler for dialect '{}'", key);
                Ok(())
            }
            None => Err(RqlError::UnknownDialect(key)),
        }
    }

    /// Builds a compiler for `name`.
    pub fn resolve(&self, name: &str) -> Result<RqlCompiler, RqlError> {
        let key = normalize(name);
        let factory = self
            .read()
            .get(&key)
            .copied()
            .ok_or(RqlError::UnknownDialect(key))?;
        Ok(RqlCompiler::from_boxed(factory()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(&normalize(name))
    }

    /// Registered dialect names, sorted.
    pub fn dialects(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    // The map only holds function pointers, so a writer that panicked cannot
    // leave it half-updated; poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, DialectFactory>> {
        self.factories.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, DialectFactory>> {
        self.factories.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Registers every compiled-in dialect, in a fixed order.
pub fn register_builtin_dialects(registry: &CompilerRegistry) -> Result<(), RqlError> {
    postgres::register(registry)?;
    firebird::register(registry)?;
    interbase::register(registry)?;
    mysql::register(registry)?;
    sqlite::register(registry)?;
    Ok(())
}

/// Reverse of [`register_builtin_dialects`].
pub fn unregister_builtin_dialects(registry: &CompilerRegistry) -> Result<(), RqlError> {
    sqlite::unregister(registry)?;
    mysql::unregister(registry)?;
    interbase::unregister(registry)?;
    firebird::unregister(registry)?;
    postgres::unregister(registry)?;
    Ok(())
}
