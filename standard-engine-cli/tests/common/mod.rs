//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - A temporary project directory marked with `package.json` and `node_modules`
//! - A fake eslint executable whose report and exit status tests control
//! - Command builders with an isolated environment

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Shell script standing in for eslint.
///
/// It records its arguments, stdin and generated config file, prints
/// `report.json` and exits with `$FAKE_ESLINT_STATUS`.
const FAKE_ESLINT: &str = r#"#!/bin/sh
dir="$FAKE_ESLINT_DIR"
printf '%s\n' "$@" > "$dir/args.txt"
prev=""
for arg in "$@"; do
  if [ "$prev" = "--config" ]; then cp "$arg" "$dir/config.json"; fi
  if [ "$arg" = "--stdin" ]; then cat > "$dir/stdin.txt"; fi
  prev="$arg"
done
if [ -f "$dir/stderr.txt" ]; then cat "$dir/stderr.txt" >&2; fi
cat "$dir/report.json"
exit "${FAKE_ESLINT_STATUS:-0}"
"#;

/// Test environment with an isolated project and engine.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// The project being linted
    pub project: PathBuf,
    /// Where the fake engine keeps its script and recordings
    pub engine_dir: PathBuf,
    /// Cache base directory
    pub cache_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// This creates:
    /// - `project/` with a `package.json` and an empty `node_modules/`
    /// - `engine/` with the fake eslint script and an empty report
    /// - `cache/` for the engine cache location
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let project = temp_dir.path().join("project");
        let engine_dir = temp_dir.path().join("engine");
        let cache_dir = temp_dir.path().join("cache");
        for dir in [&project, &engine_dir, &cache_dir] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }
        fs::write(project.join("package.json"), "{}\n").expect("Failed to write package.json");
        fs::create_dir(project.join("node_modules")).expect("Failed to create node_modules");

        let env = Self {
            temp_dir,
            project,
            engine_dir,
            cache_dir,
        };
        env.install_engine();
        env.set_report(&serde_json::json!([]));
        env
    }

    #[cfg(unix)]
    fn install_engine(&self) {
        use std::os::unix::fs::PermissionsExt;

        let script = self.engine_path();
        fs::write(&script, FAKE_ESLINT).expect("Failed to write fake eslint");
        let mut permissions = fs::metadata(&script).unwrap().permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(&script, permissions).expect("Failed to make fake eslint executable");
    }

    #[cfg(not(unix))]
    fn install_engine(&self) {}

    /// Path of the fake eslint script.
    pub fn engine_path(&self) -> PathBuf {
        self.engine_dir.join("eslint")
    }

    /// Get a command builder running in the project directory.
    pub fn command(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("standard-engine").expect("Failed to find standard-engine binary");
        cmd.current_dir(&self.project)
            .env("STANDARD_ENGINE_ESLINT", self.engine_path())
            .env("FAKE_ESLINT_DIR", &self.engine_dir)
            .env("XDG_CACHE_HOME", &self.cache_dir)
            .env_remove("STANDARD_ENGINE_CONFIG")
            .env_remove("STANDARD_ENGINE_LOG_MODE")
            .env_remove("FAKE_ESLINT_STATUS");
        cmd
    }

    /// Write a file in the project, creating parent directories.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.project.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write project file");
        path
    }

    /// Set the JSON report the fake engine prints.
    pub fn set_report(&self, report: &Value) {
        fs::write(self.engine_dir.join("report.json"), report.to_string())
            .expect("Failed to write report");
    }

    /// Make the fake engine print `text` to stderr.
    pub fn set_engine_stderr(&self, text: &str) {
        fs::write(self.engine_dir.join("stderr.txt"), text).expect("Failed to write stderr");
    }

    /// Arguments the fake engine received on its last run.
    pub fn engine_args(&self) -> Vec<String> {
        fs::read_to_string(self.engine_dir.join("args.txt"))
            .expect("Engine was not run")
            .lines()
            .map(String::from)
            .collect()
    }

    /// Stdin the fake engine received on its last run.
    pub fn engine_stdin(&self) -> String {
        fs::read_to_string(self.engine_dir.join("stdin.txt")).expect("Engine read no stdin")
    }

    /// Config file the fake engine received on its last run.
    pub fn engine_config(&self) -> Value {
        let text = fs::read_to_string(self.engine_dir.join("config.json"))
            .expect("Engine received no config");
        serde_json::from_str(&text).expect("Config is not JSON")
    }

    /// The project directory.
    pub fn path(&self) -> &Path {
        &self.project
    }
}
