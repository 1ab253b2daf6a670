//! Mapping of logical field names to physical column names.

use crate::error::RqlError;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

/// Resolves the field names used in a query to database column names.
///
/// Implemented by the entity layer, which knows the column mapping of the
/// queried type. `for_sql` is `true` when the name is going into generated SQL.
pub trait FieldResolver: Send + Sync {
    fn database_field_name(&self, logical: &str, for_sql: bool) -> String;
}

impl<F> FieldResolver for F
where
    F: Fn(&str, bool) -> String + Send + Sync,
{
    fn database_field_name(&self, logical: &str, for_sql: bool) -> String {
        self(logical, for_sql)
    }
}

/// Uses field names unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl FieldResolver for IdentityResolver {
    fn database_field_name(&self, logical: &str, _for_sql: bool) -> String {
        logical.to_string()
    }
}

/// A fixed logical → physical map. Unmapped names are used unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(HashMap<String, String>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, logical: impl Into<String>, physical: impl Into<String>) {
        self.0.insert(logical.into(), physical.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds every entry of `other`, replacing existing mappings.
    pub fn extend(&mut self, other: FieldMap) {
        self.0.extend(other.0);
    }

    /// Loads a JSON object of `"logical": "physical"` pairs.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RqlError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RqlError::Config(format!(
                "Failed to read field map {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            RqlError::Config(format!(
                "Failed to parse field map {}: {}",
                path.display(),
                e
            ))
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (logical, physical) in iter {
            map.insert(logical, physical);
        }
        map
    }
}

impl FieldResolver for FieldMap {
    fn database_field_name(&self, logical: &str, _for_sql: bool) -> String {
        self.0
            .get(logical)
            .cloned()
            .unwrap_or_else(|| logical.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_closure_resolver() {
        let resolver = |name: &str, _for_sql: bool| name.to_uppercase();
        assert_eq!(resolver.database_field_name("name", true), "NAME");
    }

    #[test]
    fn test_field_map_falls_back_to_logical_name() {
        let map: FieldMap = [("firstName", "first_name")].into_iter().collect();

        assert_eq!(map.database_field_name("firstName", true), "first_name");
        assert_eq!(map.database_field_name("age", true), "age");
    }

    #[test]
    fn test_field_map_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"createdAt": "created_at"}}"#).unwrap();

        let map = FieldMap::from_file(file.path()).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.database_field_name("createdAt", true), "created_at");
    }

    #[test]
    fn test_field_map_from_missing_file() {
        let err = FieldMap::from_file("/nonexistent/fields.json").unwrap_err();
        assert!(matches!(err, RqlError::Config(_)));
    }
}
