//! Contract with the external linting engine.
//!
//! The engine lints text or files against a [`LinterOptions`] configuration
//! and reports structured diagnostics. [`ProcessEngine`] drives an
//! eslint-compatible executable; other engines only need to implement
//! [`LintEngine`].

mod process;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::LinterOptions;
use crate::error::Result;

pub use process::{ProcessEngine, ESLINT_BIN_ENV};

/// Engine severity of a warning.
pub const SEVERITY_WARNING: u8 = 1;
/// Engine severity of an error.
pub const SEVERITY_ERROR: u8 = 2;

/// A suggested text replacement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Fix {
    /// Byte range replaced, `[start, end)`.
    pub range: (usize, usize),
    /// Replacement text.
    pub text: String,
}

/// One diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    /// Rule that produced the message; `None` for parse errors.
    #[serde(default)]
    pub rule_id: Option<String>,
    /// [`SEVERITY_WARNING`] or [`SEVERITY_ERROR`].
    pub severity: u8,
    /// Human-readable description.
    pub message: String,
    /// 1-based line.
    #[serde(default)]
    pub line: usize,
    /// 1-based column.
    #[serde(default)]
    pub column: usize,
    /// Automatic fix, if the rule offers one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl LintMessage {
    /// Whether this diagnostic is an error rather than a warning.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity >= SEVERITY_ERROR
    }
}

/// Diagnostics for one file (or one piece of text).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    /// File the diagnostics belong to; `<text>` for anonymous input.
    pub file_path: String,
    /// Diagnostics in source order.
    #[serde(default)]
    pub messages: Vec<LintMessage>,
    /// Number of error diagnostics.
    #[serde(default)]
    pub error_count: usize,
    /// Number of warning diagnostics.
    #[serde(default)]
    pub warning_count: usize,
    /// Fixed source, present only when fixing changed something.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl LintResult {
    /// Whether any diagnostic carries an automatic fix.
    #[must_use]
    pub fn is_fixable(&self) -> bool {
        self.messages.iter().any(|m| m.fix.is_some())
    }
}

/// File path the engine reports for text linted without a name.
pub const ANONYMOUS_TEXT_PATH: &str = "<text>";

/// Capability contract of a linting engine.
#[cfg_attr(test, mockall::automock)]
pub trait LintEngine {
    /// Lint `code`, optionally attributing it to `file_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot be run or its report is unusable.
    fn lint_text(
        &self,
        code: &str,
        file_path: Option<PathBuf>,
        options: &LinterOptions,
    ) -> Result<Vec<LintResult>>;

    /// Lint files and directories matching `patterns`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot be run or its report is unusable.
    fn lint_files(&self, patterns: &[String], options: &LinterOptions) -> Result<Vec<LintResult>>;

    /// Write fixed output back to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if a fixed file cannot be written.
    fn output_fixes(&self, results: &[LintResult]) -> Result<()> {
        write_fixes(results)
    }
}

/// Write every result's fixed `output` to its file.
///
/// Results without output or without a real file are skipped.
///
/// # Errors
///
/// Returns an error if a file cannot be written.
pub fn write_fixes(results: &[LintResult]) -> Result<()> {
    for result in results {
        if let Some(output) = &result.output {
            if result.file_path != ANONYMOUS_TEXT_PATH {
                fs::write(Path::new(&result.file_path), output)?;
            }
        }
    }
    Ok(())
}
