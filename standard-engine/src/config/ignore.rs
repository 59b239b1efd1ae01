//! Ignore-pattern collection.
//!
//! Patterns come from three places, in order: the built-in
//! [`DEFAULT_IGNORE`](crate::config::defaults::DEFAULT_IGNORE) list, patterns
//! supplied by the embedding linter, and git-ignore files found at the
//! project root.

use std::path::{Path, PathBuf};

use crate::config::defaults::{DEFAULT_GIT_IGNORE_FILES, DEFAULT_IGNORE};
use crate::project::ProjectRoot;

/// Which ignore sources to consult.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSettings {
    /// Extra patterns supplied by the caller.
    pub ignore: Vec<String>,
    /// Whether git-ignore files are read.
    pub use_git_ignore: bool,
    /// Git-ignore files, relative to the project root unless absolute.
    pub git_ignore_files: Vec<PathBuf>,
}

impl Default for IgnoreSettings {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            use_git_ignore: true,
            git_ignore_files: DEFAULT_GIT_IGNORE_FILES.iter().map(PathBuf::from).collect(),
        }
    }
}

/// Parse ignore-file contents into patterns.
///
/// Empty lines and `#` comments are dropped.
///
/// # Examples
///
/// ```
/// use standard_engine::config::parse_ignore_file;
///
/// let patterns = parse_ignore_file("# build output\ndist/\n\n*.tgz\n");
/// assert_eq!(patterns, vec!["dist/", "*.tgz"]);
/// ```
#[must_use]
pub fn parse_ignore_file(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Read ignore patterns from `file` at the project root above `start`.
///
/// A missing root or file yields no patterns.
#[must_use]
pub fn ignore_patterns_from_file(root: &ProjectRoot, start: &Path, file: &Path) -> Vec<String> {
    root.read_file(start, file)
        .map(|contents| parse_ignore_file(&contents))
        .unwrap_or_default()
}

/// Collect every ignore pattern for a project, without duplicates.
#[must_use]
pub fn collect_ignore_patterns(
    root: &ProjectRoot,
    start: &Path,
    settings: &IgnoreSettings,
) -> Vec<String> {
    let mut patterns: Vec<String> = DEFAULT_IGNORE.iter().map(|p| (*p).to_string()).collect();
    patterns.extend(settings.ignore.iter().cloned());

    if settings.use_git_ignore {
        for file in &settings.git_ignore_files {
            patterns.extend(ignore_patterns_from_file(root, start, file));
        }
    }

    let mut unique = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        if !unique.contains(&pattern) {
            unique.push(pattern);
        }
    }
    unique
}
