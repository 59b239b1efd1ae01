//! Configuration system for standard-engine.
//!
//! This module assembles the single configuration object handed to the
//! linting engine, from:
//! - built-in defaults (extensions, ignore patterns, cache location)
//! - an optional project config file (JSON or YAML)
//! - ignore patterns from git-ignore files at the project root
//! - options provided by the embedding linter
//! - command-line overrides
//!
//! All layers are combined with [`ConfigMerger`], a structural deep merge
//! that unions collection arrays, replaces rule entries atomically and merges
//! nested mappings recursively.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use standard_engine::config::{ConfigMerger, ConfigObject};
//!
//! let defaults: ConfigObject = serde_json::from_value(json!({
//!     "rules": {"semi": ["error", "always"]},
//!     "plugins": ["import"]
//! })).unwrap();
//! let project: ConfigObject = serde_json::from_value(json!({
//!     "rules": {"semi": ["off"]},
//!     "plugins": ["jest"]
//! })).unwrap();
//!
//! let merged = ConfigMerger::merge(&defaults, &[Some(&project)]);
//! assert_eq!(merged["rules"]["semi"], json!(["off"]));
//! assert_eq!(merged["plugins"], json!(["import", "jest"]));
//! ```

pub mod cache;
pub mod defaults;
pub mod ignore;
pub mod loader;
pub mod merger;
pub mod options;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use cache::{cache_location, cache_location_in};
pub use ignore::{collect_ignore_patterns, ignore_patterns_from_file, parse_ignore_file, IgnoreSettings};
pub use loader::{ConfigFormat, ConfigLoader};
pub use merger::{equals, is_rule_entry, ConfigMerger, ConfigObject};
pub use options::{LinterOptions, OptionsBuilder, ProvidedOptions};
