//! Terminal report for lint results.
//!
//! The headline and fix hint go to stdout; one line per problem goes to
//! stderr, with a blank line after each file's last problem. No colors.

use std::io::{self, Write};

use crate::config::LinterOptions;
use crate::engine::LintResult;

/// `"{cmd}: {tagline} ({homepage})"`.
///
/// # Examples
///
/// ```
/// use standard_engine::report::headline;
///
/// assert_eq!(
///     headline("standard", "JavaScript Standard Style", "https://standardjs.com"),
///     "standard: JavaScript Standard Style (https://standardjs.com)"
/// );
/// ```
#[must_use]
pub fn headline(cmd: &str, tagline: &str, homepage: &str) -> String {
    format!("{cmd}: {tagline} ({homepage})")
}

/// Process exit code for a set of results: 1 if any result has errors.
#[must_use]
pub fn exit_code(results: &[LintResult]) -> i32 {
    i32::from(error_count(results) > 0)
}

fn error_count(results: &[LintResult]) -> usize {
    results.iter().map(|r| r.error_count).sum()
}

fn warning_count(results: &[LintResult]) -> usize {
    results.iter().map(|r| r.warning_count).sum()
}

/// Renders lint results for the terminal.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    options: &'a LinterOptions,
    verbose: bool,
    prefix_cmd: bool,
}

impl<'a> Report<'a> {
    /// A report using the linter's identity.
    #[must_use]
    pub fn new(options: &'a LinterOptions) -> Self {
        Self {
            options,
            verbose: false,
            prefix_cmd: false,
        }
    }

    /// Append the rule id to each problem line.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Prefix problem lines with the command name, used when stdout carries
    /// fixed source text.
    #[must_use]
    pub fn prefix_cmd(mut self, prefix_cmd: bool) -> Self {
        self.prefix_cmd = prefix_cmd;
        self
    }

    /// Problem lines, without trailing blank lines.
    #[must_use]
    pub fn problem_lines(&self, results: &[LintResult]) -> Vec<String> {
        results
            .iter()
            .flat_map(|result| {
                result
                    .messages
                    .iter()
                    .map(move |message| self.problem_line(&result.file_path, message))
            })
            .collect()
    }

    fn problem_line(&self, file_path: &str, message: &crate::engine::LintMessage) -> String {
        let path = if self.prefix_cmd {
            format!("{}: {file_path}", self.options.cmd)
        } else {
            file_path.to_string()
        };
        let rule = match (&message.rule_id, self.verbose) {
            (Some(rule_id), true) => format!(" ({rule_id})"),
            _ => String::new(),
        };
        format!(
            "  {path}:{}:{}: {}{rule}",
            message.line, message.column, message.message
        )
    }

    /// Write the report. Nothing is written when there are no problems.
    ///
    /// # Errors
    ///
    /// Returns an error if either stream cannot be written.
    pub fn write<O: Write, E: Write>(
        &self,
        results: &[LintResult],
        out: &mut O,
        err: &mut E,
    ) -> io::Result<()> {
        if error_count(results) + warning_count(results) == 0 {
            return Ok(());
        }

        let LinterOptions {
            cmd,
            tagline,
            homepage,
            ..
        } = self.options;

        writeln!(out, "{}\n", headline(cmd, tagline, homepage))?;
        if results.iter().any(LintResult::is_fixable) {
            writeln!(out, "  Run `{cmd} --fix` to automatically fix some problems.\n")?;
        }
        out.flush()?;

        for result in results {
            let count = result.messages.len();
            for (index, message) in result.messages.iter().enumerate() {
                writeln!(err, "{}", self.problem_line(&result.file_path, message))?;
                if index + 1 == count {
                    writeln!(err)?;
                }
            }
        }
        err.flush()
    }
}
