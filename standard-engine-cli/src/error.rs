//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use standard_engine::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// The linting engine failed; reported with a pointer to the bug tracker.
    Unexpected {
        /// Command name of the linter.
        cmd: String,
        /// Bug tracker URL.
        bugs: String,
        /// The underlying failure.
        source: LibError,
    },

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Lint errors found, or the linting engine failed
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Unexpected { .. } => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::Engine { .. } => 1,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }

    /// Wrap engine failures so they are reported as unexpected linter output.
    pub fn unexpected(cmd: &str, bugs: &str, source: LibError) -> Self {
        if source.is_engine_failure() {
            CliError::Unexpected {
                cmd: cmd.to_string(),
                bugs: bugs.to_string(),
                source,
            }
        } else {
            CliError::from(source)
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Unexpected { cmd, bugs, source } => write!(
                f,
                "{cmd}: Unexpected linter output:\n\n{source}\n\n\
                 If you think this is a bug in `{cmd}`, open an issue: {bugs}"
            ),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) | CliError::Unexpected { source: e, .. } => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Io(io) => CliError::Io(io),
            LibError::InvalidPath { .. }
            | LibError::Validation { .. }
            | LibError::Configuration(_) => CliError::Config(e.to_string()),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
