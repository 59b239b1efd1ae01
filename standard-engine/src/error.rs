//! Error types for the standard-engine library.
//!
//! The merge core itself never fails; errors come from the collaborators
//! around it: reading config files, parsing them, and driving the external
//! linting engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a standard-engine error.
///
/// # Examples
///
/// ```
/// use standard_engine::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(6)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the standard-engine library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be used (missing, unreadable, not a file).
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML configuration document could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field or file that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The external linting engine failed or produced unusable output.
    #[error("linting engine failed: {message}")]
    Engine {
        /// What went wrong.
        message: String,
    },
}

impl Error {
    /// Check if the error originates in the linting engine.
    ///
    /// # Examples
    ///
    /// ```
    /// use standard_engine::Error;
    ///
    /// let err = Error::Engine { message: "exit status 2".to_string() };
    /// assert!(err.is_engine_failure());
    /// ```
    #[must_use]
    pub fn is_engine_failure(&self) -> bool {
        matches!(self, Self::Engine { .. })
    }
}
