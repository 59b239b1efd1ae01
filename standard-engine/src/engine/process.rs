//! Linting engine backed by an eslint-compatible executable.

use std::env;
use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::thread;

use serde_json::Value;
use tempfile::NamedTempFile;

use super::{LintEngine, LintResult};
use crate::config::LinterOptions;
use crate::error::{Error, Result};
use crate::logging::Logger;

/// Environment variable naming the engine executable.
pub const ESLINT_BIN_ENV: &str = "STANDARD_ENGINE_ESLINT";

const DEFAULT_PROGRAM: &str = "eslint";

/// Runs an eslint-compatible executable with a generated config file.
///
/// `baseConfig` is written to a temporary JSON file passed with `--config`;
/// the remaining engine options become command-line flags. Fixes are always
/// computed with `--fix-dry-run` so that writing them back stays with
/// [`LintEngine::output_fixes`].
///
/// # Examples
///
/// ```no_run
/// use standard_engine::config::OptionsBuilder;
/// use standard_engine::{LintEngine, ProcessEngine};
///
/// let options = OptionsBuilder::new().build().unwrap();
/// let engine = ProcessEngine::new();
/// let results = engine.lint_files(&[".".to_string()], &options).unwrap();
/// println!("{} files linted", results.len());
/// ```
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    program: PathBuf,
    logger: Logger,
}

impl Default for ProcessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessEngine {
    /// Use the program named by `STANDARD_ENGINE_ESLINT`, or `eslint`.
    #[must_use]
    pub fn new() -> Self {
        let program = env::var_os(ESLINT_BIN_ENV)
            .filter(|value| !value.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_PROGRAM), PathBuf::from);
        Self::with_program(program)
    }

    /// Use a specific engine executable.
    #[must_use]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            logger: Logger::default(),
        }
    }

    /// Log engine invocations through `logger`.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// The executable this engine runs.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Flags derived from the engine options, shared by text and file runs.
    #[must_use]
    pub fn option_args(options: &LinterOptions, config_path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["--format".into(), "json".into()];

        if options.flag("useEslintrc") != Some(true) {
            args.push("--no-eslintrc".into());
        }
        args.push("--config".into());
        args.push(config_path.into());

        for ext in options.extensions() {
            args.push("--ext".into());
            args.push(ext.into());
        }

        if options.flag("cache") == Some(true) {
            args.push("--cache".into());
            if let Some(location) = options.string("cacheLocation") {
                args.push("--cache-location".into());
                args.push(location.into());
            }
        }

        if let Some(dir) = options.string("resolvePluginsRelativeTo") {
            args.push("--resolve-plugins-relative-to".into());
            args.push(dir.into());
        }

        if options.fix() {
            args.push("--fix-dry-run".into());
        }

        args
    }

    fn write_config(options: &LinterOptions) -> Result<NamedTempFile> {
        let base = options
            .base_config()
            .cloned()
            .map_or(Value::Object(serde_json::Map::new()), Value::Object);

        let mut file = tempfile::Builder::new()
            .prefix(".standard-engine-")
            .suffix(".json")
            .tempfile()?;
        serde_json::to_writer_pretty(file.as_file_mut(), &base)?;
        file.as_file_mut().flush()?;
        Ok(file)
    }

    fn command(&self, options: &LinterOptions, config_path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(Self::option_args(options, config_path));
        if let Some(cwd) = options.cwd() {
            command.current_dir(cwd);
        }
        command
    }

    fn run(&self, mut command: Command, stdin: Option<&str>) -> Result<Vec<LintResult>> {
        self.logger.debug(&format!("running {command:?}"));

        let output = match stdin {
            Some(text) => {
                let mut child = command
                    .stdin(Stdio::piped())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .spawn()
                    .map_err(|e| self.spawn_error(&e))?;
                // Feed stdin from its own thread while the output is drained.
                let writer = child.stdin.take().map(|mut pipe| {
                    let bytes = text.as_bytes().to_vec();
                    thread::spawn(move || pipe.write_all(&bytes))
                });
                let output = child.wait_with_output()?;
                if let Some(Ok(Err(err))) = writer.map(thread::JoinHandle::join) {
                    // An engine that exits early stops reading; its status decides.
                    if err.kind() != ErrorKind::BrokenPipe {
                        return Err(err.into());
                    }
                    self.logger.debug("engine closed stdin before reading all input");
                }
                output
            }
            None => command.output().map_err(|e| self.spawn_error(&e))?,
        };

        Self::parse_output(&output)
    }

    fn spawn_error(&self, err: &std::io::Error) -> Error {
        Error::Engine {
            message: format!("could not start {}: {err}", self.program.display()),
        }
    }

    /// Interpret the engine's exit status and JSON report.
    ///
    /// Status 0 (clean) and 1 (lint errors) carry a report; anything else is
    /// an engine failure.
    fn parse_output(output: &Output) -> Result<Vec<LintResult>> {
        match output.status.code() {
            Some(0 | 1) => serde_json::from_slice(&output.stdout).map_err(|e| Error::Engine {
                message: format!("unreadable report: {e}"),
            }),
            code => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let status = code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}"));
                Err(Error::Engine {
                    message: format!("exited with {status}: {}", stderr.trim()),
                })
            }
        }
    }
}

impl LintEngine for ProcessEngine {
    fn lint_text(
        &self,
        code: &str,
        file_path: Option<PathBuf>,
        options: &LinterOptions,
    ) -> Result<Vec<LintResult>> {
        let config = Self::write_config(options)?;
        let mut command = self.command(options, config.path());
        command.arg("--stdin");
        if let Some(path) = file_path {
            command.arg("--stdin-filename").arg(path);
        }
        self.run(command, Some(code))
    }

    fn lint_files(&self, patterns: &[String], options: &LinterOptions) -> Result<Vec<LintResult>> {
        let config = Self::write_config(options)?;
        let mut command = self.command(options, config.path());
        command.arg("--").args(patterns);
        self.run(command, None)
    }
}
