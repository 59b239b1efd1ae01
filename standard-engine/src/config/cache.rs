//! Cache location for the linting engine.
//!
//! Each linter gets its own cache directory, split by major version so that
//! upgrading the rule set never reuses stale results.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the user cache directory.
pub const XDG_CACHE_HOME: &str = "XDG_CACHE_HOME";

/// Returns the cache location for `cmd` at `version`.
///
/// The base directory is `$XDG_CACHE_HOME`, falling back to `~/.cache` and,
/// when no home directory is known, the system temp directory.
#[must_use]
pub fn cache_location(version: &str, cmd: &str) -> PathBuf {
    cache_location_in(&cache_base_dir(), version, cmd)
}

/// Returns the cache location for `cmd` at `version` under `base`.
///
/// A version starting with `<digits>.` yields `<base>/<cmd>/v<major>/`;
/// anything else yields `<base>/<cmd>`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use standard_engine::config::cache_location_in;
///
/// let location = cache_location_in(Path::new("/cache"), "14.2.0", "standard");
/// assert_eq!(location, PathBuf::from("/cache/standard/v14/"));
/// ```
#[must_use]
pub fn cache_location_in(base: &Path, version: &str, cmd: &str) -> PathBuf {
    let dir = base.join(cmd);
    match major_version(version) {
        Some(major) => dir.join(format!("v{major}/")),
        None => dir,
    }
}

fn cache_base_dir() -> PathBuf {
    if let Some(dir) = env::var_os(XDG_CACHE_HOME).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    home::home_dir().map_or_else(env::temp_dir, |home| home.join(".cache"))
}

/// Leading digits of `version` when they are followed by a dot.
fn major_version(version: &str) -> Option<&str> {
    let (major, _) = version.split_once('.')?;
    if !major.is_empty() && major.bytes().all(|b| b.is_ascii_digit()) {
        Some(major)
    } else {
        None
    }
}
