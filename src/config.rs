//! Configuration handling for pingen.
//! Loads the pin-mapping configuration file into the tree every template is rendered against.

use crate::error::{Error, Result};
use log::debug;
use std::io;
use std::path::Path;

/// Reads and parses the configuration file.
///
/// # Arguments
/// * `config_path` - Path to the YAML configuration file
///
/// # Returns
/// * `Result<serde_json::Value>` - The configuration tree, always a mapping at the root
///
/// # Errors
/// * `Error::ConfigNotFoundError` if the file does not exist
/// * `Error::ConfigParseError` if the contents are not UTF-8, not well-formed YAML or the root is not a mapping
/// * `Error::ConfigReadError` if the file exists but cannot be read
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<serde_json::Value> {
    let config_path = config_path.as_ref();
    if !config_path.is_file() {
        return Err(Error::ConfigNotFoundError { path: config_path.to_path_buf() });
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(config_path).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => Error::ConfigParseError {
            path: config_path.to_path_buf(),
            reason: "file is not valid UTF-8".to_string(),
        },
        _ => Error::ConfigReadError { path: config_path.to_path_buf(), source: e },
    })?;
    parse_config(&content).map_err(|reason| Error::ConfigParseError {
        path: config_path.to_path_buf(),
        reason,
    })
}

/// Parses configuration content. An empty document is an empty mapping.
///
/// YAML merge keys (`<<: *anchor`) are resolved before the tree is returned.
pub fn parse_config(content: &str) -> std::result::Result<serde_json::Value, String> {
    if content.trim().is_empty() {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }

    let mut yaml: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    yaml.apply_merge().map_err(|e| e.to_string())?;
    let value = serde_json::to_value(yaml).map_err(|e| e.to_string())?;

    match value {
        serde_json::Value::Object(_) => Ok(value),
        serde_json::Value::Null => Ok(serde_json::Value::Object(serde_json::Map::new())),
        other => Err(format!("expected a mapping at the top level, found {}", kind_of(&other))),
    }
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a sequence",
        serde_json::Value::Object(_) => "a mapping",
    }
}
