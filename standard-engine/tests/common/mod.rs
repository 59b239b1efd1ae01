//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for throwaway JavaScript projects
//! laid out on disk the way the option builder expects to find them.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temporary project directory.
///
/// The project root is marked with a `package.json` and a `node_modules`
/// directory; everything else is opt-in.
///
/// # Examples
///
/// ```no_run
/// # use common::ProjectFixture;
/// let project = ProjectFixture::new()
///     .with_gitignore("dist/\n")
///     .with_file("src/index.js", "var x = 1\n")
///     .build();
/// ```
#[allow(dead_code)]
pub struct ProjectFixture {
    files: Vec<(PathBuf, String)>,
}

#[allow(dead_code)]
impl ProjectFixture {
    /// Creates a fixture holding only the root markers.
    pub fn new() -> Self {
        Self {
            files: vec![(PathBuf::from("package.json"), "{}\n".to_string())],
        }
    }

    /// Adds a `.gitignore` at the root.
    pub fn with_gitignore(self, contents: &str) -> Self {
        self.with_file(".gitignore", contents)
    }

    /// Adds an arbitrary file, creating parent directories.
    pub fn with_file(mut self, relative: impl AsRef<Path>, contents: &str) -> Self {
        self.files
            .push((relative.as_ref().to_path_buf(), contents.to_string()));
        self
    }

    /// Writes the project to a new temporary directory.
    pub fn build(self) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("node_modules")).unwrap();
        for (relative, contents) in self.files {
            let path = temp_dir.path().join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, contents).unwrap();
        }
        temp_dir
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}
