//! The linter: resolved options bound to a linting engine.

use std::path::Path;

use crate::config::LinterOptions;
use crate::engine::{LintEngine, LintResult};
use crate::error::Result;
use crate::logging::Logger;

/// Pattern linted when no files are given.
pub const DEFAULT_PATTERN: &str = ".";

/// Runs a [`LintEngine`] with a fixed set of [`LinterOptions`].
///
/// # Examples
///
/// ```no_run
/// use standard_engine::config::OptionsBuilder;
/// use standard_engine::{Linter, ProcessEngine};
///
/// let options = OptionsBuilder::new().build().unwrap();
/// let linter = Linter::new(options, ProcessEngine::new());
/// let results = linter.lint_text("var x = 1\n", None).unwrap();
/// assert_eq!(results.len(), 1);
/// ```
#[derive(Debug)]
pub struct Linter<E: LintEngine> {
    engine: E,
    options: LinterOptions,
    logger: Logger,
}

impl<E: LintEngine> Linter<E> {
    /// Bind `options` to `engine`.
    pub fn new(options: LinterOptions, engine: E) -> Self {
        Self {
            engine,
            options,
            logger: Logger::default(),
        }
    }

    /// Log through `logger`.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// The resolved options.
    pub fn options(&self) -> &LinterOptions {
        &self.options
    }

    /// Lint source text.
    ///
    /// Fixed output, if any, is returned in the results and never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails.
    pub fn lint_text(&self, code: &str, file_path: Option<&Path>) -> Result<Vec<LintResult>> {
        self.logger.debug(&format!(
            "linting {} bytes of text as {}",
            code.len(),
            file_path.map_or_else(|| "<text>".to_string(), |p| p.display().to_string())
        ));
        self.engine
            .lint_text(code, file_path.map(Path::to_path_buf), &self.options)
    }

    /// Lint files, writing fixes back when fixing is enabled.
    ///
    /// An empty pattern list lints the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails or fixes cannot be written.
    pub fn lint_files(&self, patterns: &[String]) -> Result<Vec<LintResult>> {
        let default_patterns = [DEFAULT_PATTERN.to_string()];
        let patterns = if patterns.is_empty() {
            &default_patterns[..]
        } else {
            patterns
        };
        self.logger
            .debug(&format!("linting files: {}", patterns.join(" ")));

        let results = self.engine.lint_files(patterns, &self.options)?;

        if self.options.fix() {
            let fixed = results.iter().filter(|r| r.output.is_some()).count();
            self.logger.info(&format!("writing fixes to {fixed} files"));
            self.engine.output_fixes(&results)?;
        }

        Ok(results)
    }
}
