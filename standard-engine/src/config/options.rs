//! Linter options and the builder that assembles them.
//!
//! The effective engine configuration is layered, lowest precedence first:
//!
//! 1. Built-in defaults (extensions, cache location, identity)
//! 2. The project config file, if any
//! 3. `baseConfig` from caller-provided engine options
//! 4. Ignore patterns collected from defaults and git-ignore files
//! 5. Caller-provided engine options
//!
//! Command-line overrides are applied afterwards with
//! [`LinterOptions::apply_overrides`].

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::cache::cache_location;
use crate::config::defaults::{
    DEFAULT_BUGS, DEFAULT_CMD, DEFAULT_EXTENSIONS, DEFAULT_HOMEPAGE, DEFAULT_TAGLINE,
    DEFAULT_VERSION,
};
use crate::config::ignore::{collect_ignore_patterns, IgnoreSettings};
use crate::config::loader::ConfigLoader;
use crate::config::merger::{ConfigMerger, ConfigObject};
use crate::error::Result;
use crate::logging::Logger;
use crate::project::ProjectRoot;

/// Options supplied by a linter built on this engine.
///
/// Every field is optional; unset fields fall back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvidedOptions {
    /// Command name.
    pub cmd: Option<String>,
    /// Linter version.
    pub version: Option<String>,
    /// One-line description.
    pub tagline: Option<String>,
    /// Project homepage.
    pub homepage: Option<String>,
    /// Bug tracker URL.
    pub bugs: Option<String>,

    /// Working directory; defaults to the process working directory.
    pub cwd: Option<PathBuf>,
    /// Extensions linted in addition to the defaults.
    pub extensions: Option<Vec<String>>,
    /// Extra ignore patterns.
    pub ignore: Option<Vec<String>>,
    /// Whether git-ignore files contribute patterns (default true).
    pub use_git_ignore: Option<bool>,
    /// Git-ignore files to read instead of the defaults.
    pub git_ignore_files: Option<Vec<PathBuf>>,

    /// Project config file; relative paths resolve against `cwd`.
    pub config_file: Option<PathBuf>,

    /// Apply fixes.
    pub fix: Option<bool>,

    /// Engine options merged over everything else.
    pub engine_options: Option<ConfigObject>,
}

/// Fully resolved linter options.
#[derive(Debug, Clone, PartialEq)]
pub struct LinterOptions {
    /// Command name.
    pub cmd: String,
    /// Linter version.
    pub version: String,
    /// One-line description.
    pub tagline: String,
    /// Project homepage.
    pub homepage: String,
    /// Bug tracker URL.
    pub bugs: String,
    /// The merged configuration handed to the linting engine.
    pub engine_options: ConfigObject,
}

impl LinterOptions {
    /// Merge an override layer (for example, from the command line) on top.
    pub fn apply_overrides(&mut self, layer: &ConfigObject) {
        self.engine_options = ConfigMerger::merge(&self.engine_options, &[Some(layer)]);
    }

    /// Whether fixes should be applied.
    #[must_use]
    pub fn fix(&self) -> bool {
        self.engine_options
            .get("fix")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Extensions the engine lints when given directories.
    #[must_use]
    pub fn extensions(&self) -> Vec<String> {
        self.string_list("extensions")
    }

    /// Working directory the engine runs in.
    #[must_use]
    pub fn cwd(&self) -> Option<PathBuf> {
        self.engine_options
            .get("cwd")
            .and_then(Value::as_str)
            .map(PathBuf::from)
    }

    /// The rule configuration layer.
    #[must_use]
    pub fn base_config(&self) -> Option<&ConfigObject> {
        self.engine_options.get("baseConfig").and_then(Value::as_object)
    }

    /// A boolean engine option, if set.
    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.engine_options.get(key).and_then(Value::as_bool)
    }

    /// A string engine option, if set.
    #[must_use]
    pub fn string(&self, key: &str) -> Option<&str> {
        self.engine_options.get(key).and_then(Value::as_str)
    }

    fn string_list(&self, key: &str) -> Vec<String> {
        self.engine_options
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Builder for [`LinterOptions`].
///
/// # Examples
///
/// ```no_run
/// use standard_engine::config::{OptionsBuilder, ProvidedOptions};
///
/// let options = OptionsBuilder::new()
///     .with_provided(ProvidedOptions {
///         cmd: Some("my-standard".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(options.cmd, "my-standard");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    provided: ProvidedOptions,
    project_root: ProjectRoot,
    logger: Logger,
}

impl OptionsBuilder {
    /// Create a builder with no provided options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given provided options.
    #[must_use]
    pub fn with_provided(mut self, provided: ProvidedOptions) -> Self {
        self.provided = provided;
        self
    }

    /// Override the working directory.
    #[must_use]
    pub fn with_working_dir(mut self, cwd: &Path) -> Self {
        self.provided.cwd = Some(cwd.to_path_buf());
        self
    }

    /// Use a custom project root finder.
    #[must_use]
    pub fn with_project_root(mut self, project_root: ProjectRoot) -> Self {
        self.project_root = project_root;
        self
    }

    /// Log configuration assembly through `logger`.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Assemble the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined or the
    /// config file cannot be loaded.
    pub fn build(self) -> Result<LinterOptions> {
        let provided = self.provided;

        let cmd = non_empty_or(provided.cmd, DEFAULT_CMD);
        let version = non_empty_or(provided.version, DEFAULT_VERSION);
        let tagline = non_empty_or(provided.tagline, DEFAULT_TAGLINE);
        let homepage = non_empty_or(provided.homepage, DEFAULT_HOMEPAGE);
        let bugs = non_empty_or(provided.bugs, DEFAULT_BUGS);

        let cwd = match provided.cwd {
            Some(cwd) => cwd,
            None => env::current_dir()?,
        };

        let config_file = provided.config_file.map(|path| {
            if path.is_absolute() {
                path
            } else {
                cwd.join(path)
            }
        });

        let file_config = match &config_file {
            Some(path) => {
                self.logger
                    .debug(&format!("loading config file {}", path.display()));
                ConfigLoader::load_file(path)?
            }
            None => ConfigObject::new(),
        };

        let ignore_settings = IgnoreSettings {
            ignore: provided.ignore.unwrap_or_default(),
            use_git_ignore: provided.use_git_ignore.unwrap_or(true),
            git_ignore_files: provided
                .git_ignore_files
                .unwrap_or_else(|| IgnoreSettings::default().git_ignore_files),
        };
        let ignore_patterns = collect_ignore_patterns(&self.project_root, &cwd, &ignore_settings);
        self.logger
            .debug(&format!("collected {} ignore patterns", ignore_patterns.len()));

        let mut ignore_layer = ConfigObject::new();
        ignore_layer.insert("ignorePatterns".to_string(), json!(ignore_patterns));

        let provided_base = provided
            .engine_options
            .as_ref()
            .and_then(|options| options.get("baseConfig"))
            .and_then(Value::as_object);
        let base_config =
            ConfigMerger::merge(&file_config, &[provided_base, Some(&ignore_layer)]);

        let mut extensions: Vec<String> =
            DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect();
        extensions.extend(provided.extensions.unwrap_or_default());

        let mut defaults = ConfigObject::new();
        defaults.insert("cwd".to_string(), json!(path_string(&cwd)));
        defaults.insert("extensions".to_string(), json!(extensions));
        defaults.insert("baseConfig".to_string(), Value::Object(base_config));
        if let Some(dir) = config_file.as_deref().and_then(Path::parent) {
            defaults.insert("resolvePluginsRelativeTo".to_string(), json!(path_string(dir)));
        }
        defaults.insert("useEslintrc".to_string(), json!(config_file.is_some()));
        defaults.insert("fix".to_string(), json!(provided.fix.unwrap_or(false)));
        defaults.insert("cache".to_string(), json!(true));
        defaults.insert(
            "cacheLocation".to_string(),
            json!(path_string(&cache_location(&version, &cmd))),
        );

        let engine_options = ConfigMerger::merge(&defaults, &[provided.engine_options.as_ref()]);

        Ok(LinterOptions {
            cmd,
            version,
            tagline,
            homepage,
            bugs,
            engine_options,
        })
    }
}

/// An empty identity string counts as not provided.
fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
