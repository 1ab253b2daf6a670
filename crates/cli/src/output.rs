use crate::error::CliError;
use std::fs;

/// Writes `text` to `path`, or prints it to stdout when no path is given.
pub fn emit(text: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, text)?,
        None => println!("{text}"),
    }
    Ok(())
}

pub fn dialect_list(names: &[String], json: bool) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string_pretty(names)?)
    } else {
        Ok(names.join("\n"))
    }
}
