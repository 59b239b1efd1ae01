//! Conversion of command-line flags into a configuration layer.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use crate::config::ignore::ignore_patterns_from_file;
use crate::config::merger::ConfigObject;
use crate::project::ProjectRoot;

/// Ignore file consulted for command-line runs unless disabled.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Command-line flags that affect the engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Apply fixes.
    pub fix: bool,
    /// Do not read `.gitignore` at the project root.
    pub disable_gitignore: bool,
    /// Enable an environment, e.g. `mocha`.
    pub env: Option<String>,
    /// Lint an additional file extension.
    pub ext: Option<String>,
    /// Declare a global variable.
    pub globals: Option<String>,
    /// Use a custom parser.
    pub parser: Option<String>,
    /// Use an additional plugin.
    pub plugins: Option<String>,
}

/// Turns [`ParsedArgs`] into a partial engine configuration.
///
/// Flags that were not given are left out of the layer entirely, so merging
/// it never clobbers values from lower layers.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use standard_engine::{ArgvNormalizer, ParsedArgs};
///
/// let args = ParsedArgs {
///     ext: Some(".vue".to_string()),
///     disable_gitignore: true,
///     ..Default::default()
/// };
/// let layer = ArgvNormalizer::new(".").normalize(&args);
/// assert_eq!(layer["extensions"], json!([".vue"]));
/// ```
#[derive(Debug, Clone)]
pub struct ArgvNormalizer {
    cwd: PathBuf,
    project_root: ProjectRoot,
}

impl ArgvNormalizer {
    /// Create a normalizer that resolves `.gitignore` from `cwd`.
    #[must_use]
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
            project_root: ProjectRoot::new(),
        }
    }

    /// Use a custom project root finder.
    #[must_use]
    pub fn with_project_root(mut self, project_root: ProjectRoot) -> Self {
        self.project_root = project_root;
        self
    }

    /// Build the configuration layer for `args`.
    #[must_use]
    pub fn normalize(&self, args: &ParsedArgs) -> ConfigObject {
        let mut base = ConfigObject::new();

        if let Some(env) = &args.env {
            base.insert("env".to_string(), flag_map(env));
        }
        if !args.disable_gitignore {
            let patterns =
                ignore_patterns_from_file(&self.project_root, &self.cwd, Path::new(GITIGNORE_FILE));
            base.insert("ignorePatterns".to_string(), json!(patterns));
        }
        if let Some(globals) = &args.globals {
            base.insert("globals".to_string(), flag_map(globals));
        }
        if let Some(parser) = &args.parser {
            base.insert("parser".to_string(), json!(parser));
        }
        if let Some(plugin) = &args.plugins {
            base.insert("plugins".to_string(), json!([plugin]));
        }

        let mut layer = ConfigObject::new();
        if let Some(ext) = &args.ext {
            layer.insert("extensions".to_string(), json!([ext]));
        }
        layer.insert("baseConfig".to_string(), Value::Object(base));
        if args.fix {
            layer.insert("fix".to_string(), json!(true));
        }
        layer
    }
}

/// `{ name: true }`
fn flag_map(name: &str) -> Value {
    let mut map = ConfigObject::new();
    map.insert(name.to_string(), Value::Bool(true));
    Value::Object(map)
}
