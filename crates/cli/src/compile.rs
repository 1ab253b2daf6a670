use crate::error::CliError;
use rql_compiler::{
    CompilerRegistry, ErrorClass, FieldMap, RqlError, config::CompilerConfig, decode_str,
};
use rql_model::SyntaxTree;
use std::{fs, num::NonZeroU64};
use tracing::{error, info, warn};

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub dialect: Option<String>,
    pub fields: Option<String>,
    pub max_records: Option<u64>,
}

pub fn load_config(path: Option<&str>, overrides: Overrides) -> Result<CompilerConfig, CliError> {
    let mut config = match path {
        Some(path) => CompilerConfig::from_file(path)?,
        None => CompilerConfig::default(),
    };

    if let Some(dialect) = overrides.dialect {
        config.dialect = dialect;
    }
    if let Some(fields) = overrides.fields {
        config.fields.extend(FieldMap::from_file(fields)?);
    }
    if let Some(max) = overrides.max_records {
        let max = NonZeroU64::new(max).ok_or_else(|| {
            CliError::InvalidArgument("--max-records must be greater than zero".into())
        })?;
        config.max_record_count = Some(max);
    }

    Ok(config)
}

/// Decodes and compiles one AST document.
pub fn compile_document(
    registry: &CompilerRegistry,
    config: &CompilerConfig,
    source: &str,
) -> Result<String, CliError> {
    let result = decode_str(source).and_then(|tree: SyntaxTree| {
        let compiler = registry.resolve(&config.dialect)?;
        info!(
            "Compiling {} top-level nodes for dialect '{}'",
            tree.len(),
            compiler.name()
        );
        compiler.compile_tree(&tree, &config.fields, &config.options())
    });

    result.map_err(|e| {
        log_failure(&e);
        CliError::Compile(e)
    })
}

pub fn compile_file(
    registry: &CompilerRegistry,
    config: &CompilerConfig,
    input: &str,
) -> Result<String, CliError> {
    let source = fs::read_to_string(input)?;
    compile_document(registry, config, &source)
}

fn log_failure(err: &RqlError) {
    match err.class() {
        ErrorClass::Defect => error!("Compiler defect (parser/compiler version mismatch?): {err}"),
        ErrorClass::InvalidInput => warn!("Rejected query: {err}"),
        ErrorClass::Registry | ErrorClass::Configuration => error!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rql_compiler::register_builtin_dialects;
    use std::io::Write;

    fn registry() -> CompilerRegistry {
        let registry = CompilerRegistry::new();
        register_builtin_dialects(&registry).unwrap();
        registry
    }

    #[test]
    fn test_compile_document() {
        let config = CompilerConfig::default();
        let sql = compile_document(
            &registry(),
            &config,
            r#"[{"kind": "where"}, {"kind": "filter", "left_field": "id",
                "token": "out", "right_value": "integer_array", "right_array": ["4", "5"]}]"#,
        )
        .unwrap();
        assert_eq!(sql, " WHERE (id NOT IN (4,5))");
    }

    #[test]
    fn test_unknown_dialect() {
        let config = load_config(
            None,
            Overrides {
                dialect: Some("oracle".into()),
                ..Default::default()
            },
        )
        .unwrap();

        let err = compile_document(&registry(), &config, r#"{"kind": "where"}"#).unwrap_err();
        assert!(matches!(
            err,
            CliError::Compile(RqlError::UnknownDialect(_))
        ));
    }

    #[test]
    fn test_overrides_win_over_config_file() {
        let mut config_file = tempfile::NamedTempFile::new().unwrap();
        write!(
            config_file,
            r#"{{"dialect": "mysql", "max_record_count": 10, "fields": {{"a": "col_a"}}}}"#
        )
        .unwrap();
        let mut fields_file = tempfile::NamedTempFile::new().unwrap();
        write!(fields_file, r#"{{"b": "col_b"}}"#).unwrap();

        let config = load_config(
            config_file.path().to_str(),
            Overrides {
                dialect: Some("firebird".into()),
                fields: fields_file.path().to_str().map(String::from),
                max_records: Some(3),
            },
        )
        .unwrap();

        let sql = compile_document(
            &registry(),
            &config,
            r#"{"kind": "sort", "fields": [{"field": "a", "sign": "+"}, {"field": "b", "sign": "-"}]}"#,
        )
        .unwrap();
        assert_eq!(
            sql,
            " /*sort*/ ORDER BY col_a ASC, col_b DESC /*limit*/ ROWS 1 TO 3"
        );
    }

    #[test]
    fn test_zero_max_records_is_rejected() {
        let err = load_config(
            None,
            Overrides {
                max_records: Some(0),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }
}
