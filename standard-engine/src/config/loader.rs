//! Configuration file loading.
//!
//! A project config file holds a partial engine configuration (the
//! `baseConfig` layer). JSON and YAML documents are both accepted and parsed
//! into the same [`ConfigObject`] tree.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::merger::ConfigObject;
use crate::error::{Error, Result};

/// Syntax of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json` files.
    Json,
    /// `.yaml` and `.yml` files.
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from the file extension; unknown extensions read as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use standard_engine::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_file(Path::new(".eslintrc.json")).unwrap();
/// println!("{} top-level keys", config.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or its
    /// top level is not a mapping.
    pub fn load_file(path: &Path) -> Result<ConfigObject> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        Self::parse(&contents, ConfigFormat::from_path(path)).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: e.to_string(),
        })
    }

    /// Parse configuration text in the given format.
    ///
    /// An empty YAML document is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse or is not a mapping.
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<ConfigObject> {
        let value: Value = match format {
            ConfigFormat::Json => serde_json::from_str(contents)?,
            ConfigFormat::Yaml if contents.trim().is_empty() => Value::Null,
            ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
        };

        match value {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(ConfigObject::new()),
            other => Err(Error::Validation {
                field: "config".to_string(),
                message: format!("expected a mapping at the top level, found {}", kind(&other)),
            }),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
