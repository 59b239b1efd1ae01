//! Diagnostics for option assembly and engine runs.
//!
//! Lint reports and fixed source text own stdout. Everything written here
//! goes to stderr, tagged with its severity, so piping `--stdin --fix`
//! output into a file never picks up a log line.

use std::env;
use std::fmt;

/// Environment variable consulted when no CLI verbosity flag is given.
pub const LOG_MODE_ENV: &str = "STANDARD_ENGINE_LOG_MODE";

/// How much the library says about what it is doing.
///
/// `Normal` only reports problems. `Verbose` also traces config layers,
/// the engine command line and fix writing.
///
/// # Examples
///
/// ```
/// use standard_engine::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing but the lint report.
    Quiet,
    /// Problems with the configuration or engine.
    Normal,
    /// Layer assembly and engine invocations as well.
    Verbose,
}

impl LogLevel {
    const NAMES: [(&'static str, Self); 3] = [
        ("quiet", Self::Quiet),
        ("normal", Self::Normal),
        ("verbose", Self::Verbose),
    ];

    /// Reads a level name as found in `STANDARD_ENGINE_LOG_MODE`.
    ///
    /// Names are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns the offending text if it names no level.
    ///
    /// # Examples
    ///
    /// ```
    /// use standard_engine::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(_, level)| *level)
            .ok_or_else(|| format!("invalid log level: {s}"))
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Writes tagged diagnostics to stderr when the level allows them.
///
/// The logger is `Copy` so that the options builder, the linter and the
/// process engine can each hold their own.
///
/// # Examples
///
/// ```
/// use standard_engine::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("could not read .git/info/exclude");
/// logger.debug("not printed at Normal");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger that prints messages up to `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    fn emit(&self, needed: LogLevel, tag: &str, message: &str) {
        if self.level >= needed {
            eprintln!("{tag}: {message}");
        }
    }

    /// Reports a failure that does not abort the run.
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Normal, "ERROR", message);
    }

    /// Reports a questionable input.
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "WARN", message);
    }

    /// Reports a step with visible effects, such as writing fixes.
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "INFO", message);
    }

    /// Traces layer assembly and engine command lines.
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "DEBUG", message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Picks the logger for a CLI run.
///
/// `--verbose` beats `--quiet`, and either flag beats
/// `STANDARD_ENGINE_LOG_MODE`. An unset or unreadable variable means
/// `Normal`.
///
/// # Examples
///
/// ```
/// use standard_engine::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = match (verbose, quiet) {
        (true, _) => LogLevel::Verbose,
        (false, true) => LogLevel::Quiet,
        (false, false) => env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|value| LogLevel::parse(&value).ok())
            .unwrap_or(LogLevel::Normal),
    };
    Logger::new(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Runs `f` with the log-mode variable set (or cleared), restoring it afterwards.
    fn with_log_mode<F: FnOnce()>(value: Option<&str>, f: F) {
        let saved = env::var(LOG_MODE_ENV).ok();
        match value {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
        f();
        match saved {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
    }

    #[test]
    fn test_log_level_names_round_trip() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            assert_eq!(LogLevel::parse(&level.to_string()).unwrap(), level);
        }
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse(" verbose\n").unwrap(), LogLevel::Verbose);
        assert!(LogLevel::parse("").is_err());
        assert!(LogLevel::parse("debug").is_err());
    }

    #[test]
    fn test_logger_default() {
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    #[serial]
    fn test_init_logger_defaults() {
        with_log_mode(None, || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
        });
    }

    #[test]
    #[serial]
    fn test_init_logger_flags() {
        with_log_mode(None, || {
            assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
            assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
            assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
        });
    }

    #[test]
    #[serial]
    fn test_init_logger_from_env() {
        with_log_mode(Some("quiet"), || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Quiet);
        });
        with_log_mode(Some("invalid"), || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
        });
        with_log_mode(Some("quiet"), || {
            assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        });
    }
}
