#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # standard-engine
//!
//! Building blocks for zero-configuration linters in the style of
//! `standard`: a linter names itself, ships a base rule configuration and
//! gets option assembly, ignore handling, a terminal report and a CLI.
//!
//! ## Core Types
//!
//! - [`ConfigMerger`]: structural deep merge of configuration layers
//! - [`OptionsBuilder`] and [`LinterOptions`]: layered option assembly
//! - [`ArgvNormalizer`]: command-line flags as an override layer
//! - [`LintEngine`] and [`ProcessEngine`]: the linting engine seam
//! - [`Linter`] and [`Report`]: running the engine and printing results
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use serde_json::json;
//! use standard_engine::{ConfigMerger, ConfigObject};
//!
//! let base: ConfigObject = serde_json::from_value(json!({
//!     "extensions": [".js"],
//!     "baseConfig": {"rules": {"semi": ["error", "never"]}}
//! })).unwrap();
//! let overrides: ConfigObject = serde_json::from_value(json!({
//!     "extensions": [".ts"],
//!     "baseConfig": {"rules": {"semi": ["warn"]}}
//! })).unwrap();
//!
//! let merged = ConfigMerger::merge(&base, &[Some(&overrides)]);
//! assert_eq!(merged["extensions"], json!([".js", ".ts"]));
//! assert_eq!(merged["baseConfig"]["rules"]["semi"], json!(["warn"]));
//! ```

pub mod argv;
pub mod config;
pub mod engine;
pub mod error;
pub mod linter;
pub mod logging;
pub mod project;
pub mod report;

// Re-export key types at crate root for convenience
pub use argv::{ArgvNormalizer, ParsedArgs};
pub use config::{ConfigMerger, ConfigObject, LinterOptions, OptionsBuilder, ProvidedOptions};
pub use engine::{LintEngine, LintMessage, LintResult, ProcessEngine};
pub use error::{Error, Result};
pub use linter::Linter;
pub use logging::{init_logger, LogLevel, Logger};
pub use project::ProjectRoot;
pub use report::Report;
