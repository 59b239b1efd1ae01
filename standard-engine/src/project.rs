//! Project root discovery.
//!
//! Ignore files and relative config paths are resolved against the project
//! root: the nearest directory, walking up from the working directory, that
//! contains every root marker.

use std::fs;
use std::path::{Path, PathBuf};

/// Files that must all be present for a directory to count as a project root.
pub const DEFAULT_ROOT_MARKERS: [&str; 2] = ["package.json", "node_modules"];

/// Locates the project root and reads files relative to it.
///
/// # Examples
///
/// ```no_run
/// use standard_engine::ProjectRoot;
/// use std::path::Path;
///
/// let finder = ProjectRoot::new();
/// if let Some(root) = finder.discover(Path::new(".")) {
///     println!("project root: {}", root.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ProjectRoot {
    markers: Vec<String>,
}

impl Default for ProjectRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectRoot {
    /// Create a finder using [`DEFAULT_ROOT_MARKERS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_markers(DEFAULT_ROOT_MARKERS)
    }

    /// Create a finder with custom root markers.
    #[must_use]
    pub fn with_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `dir` contains every marker.
    #[must_use]
    pub fn is_root(&self, dir: &Path) -> bool {
        self.markers.iter().all(|marker| dir.join(marker).exists())
    }

    /// Walk up from `start` and return the first directory that is a root.
    #[must_use]
    pub fn discover(&self, start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if self.is_root(&current) {
                return Some(current);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Read `file` from the project root above `start`.
    ///
    /// Absolute paths are read as given. Returns `None` when no root is found
    /// or the file cannot be read.
    #[must_use]
    pub fn read_file(&self, start: &Path, file: &Path) -> Option<String> {
        let path = if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.discover(start)?.join(file)
        };
        fs::read_to_string(path).ok()
    }
}
