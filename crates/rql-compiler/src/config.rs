use crate::{
    error::RqlError,
    query::{compiler::CompileOptions, dialect::postgres, resolver::FieldMap},
};
use serde::Deserialize;
use std::{fs, num::NonZeroU64, path::Path};

/// Settings for compiling queries against one database.
///
/// ```json
/// { "dialect": "firebird", "max_record_count": 1000, "fields": { "firstName": "FIRST_NAME" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    pub dialect: String,
    pub max_record_count: Option<NonZeroU64>,
    pub fields: FieldMap,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            dialect: postgres::NAME.to_string(),
            max_record_count: None,
            fields: FieldMap::new(),
        }
    }
}

impl CompilerConfig {
    pub fn from_json(content: &str) -> Result<Self, RqlError> {
        serde_json::from_str(content).map_err(|e| RqlError::Config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RqlError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RqlError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    pub fn options(&self) -> CompileOptions {
        CompileOptions {
            max_record_count: self.max_record_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::resolver::FieldResolver;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CompilerConfig::from_json("{}").unwrap();
        assert_eq!(config, CompilerConfig::default());
        assert_eq!(config.dialect, "postgresql");
        assert_eq!(config.options(), CompileOptions::default());
    }

    #[test]
    fn test_full_config() {
        let config = CompilerConfig::from_json(
            r#"{
                "dialect": "interbase",
                "max_record_count": 250,
                "fields": { "firstName": "FIRST_NAME" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.dialect, "interbase");
        assert_eq!(
            config.options().max_record_count.map(NonZeroU64::get),
            Some(250)
        );
        assert_eq!(
            config.fields.database_field_name("firstName", true),
            "FIRST_NAME"
        );
    }

    #[test]
    fn test_invalid_config() {
        for bad in [
            r#"{"max_record_count": 0}"#,
            r#"{"dialect": 3}"#,
            r#"{"dialekt": "mysql"}"#,
        ] {
            assert!(
                matches!(CompilerConfig::from_json(bad), Err(RqlError::Config(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dialect": "sqlite"}}"#).unwrap();

        let config = CompilerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.dialect, "sqlite");
    }
}
