//! Utility functions for CLI operations.
//!
//! This module provides the helpers the lint command is assembled from:
//! working directory resolution, option loading and stdin handling.

use crate::cli::Cli;
use crate::error::CliError;
use standard_engine::config::{OptionsBuilder, ProvidedOptions};
use standard_engine::{LinterOptions, Logger, ParsedArgs};
use std::env;
use std::io::{self, Read};
use std::path::PathBuf;

/// Global CLI options shared across the run.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Logger configured from `--verbose`, `--quiet` and the environment.
    pub logger: Logger,
}

/// The directory the linter runs in.
pub fn resolve_cwd() -> Result<PathBuf, CliError> {
    Ok(env::current_dir()?)
}

/// Load linter options for this binary.
///
/// The linter identity comes from the built-in defaults and this crate's
/// version; `config` names an optional project config file. With
/// `disable_gitignore`, no git-ignore file contributes patterns.
pub fn load_options(
    cwd: PathBuf,
    config: Option<PathBuf>,
    disable_gitignore: bool,
    global: &GlobalOptions,
) -> Result<LinterOptions, CliError> {
    let provided = ProvidedOptions {
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        config_file: config,
        use_git_ignore: Some(!disable_gitignore),
        ..Default::default()
    };

    OptionsBuilder::new()
        .with_provided(provided)
        .with_working_dir(&cwd)
        .with_logger(global.logger)
        .build()
        .map_err(CliError::from)
}

/// The flags that become an engine configuration layer.
pub fn parsed_args(cli: &Cli) -> ParsedArgs {
    ParsedArgs {
        fix: cli.fix,
        disable_gitignore: cli.disable_gitignore,
        env: cli.env.clone(),
        ext: cli.ext.clone(),
        globals: cli.globals.clone(),
        parser: cli.parser.clone(),
        plugins: cli.plugins.clone(),
    }
}

/// Read all of stdin as UTF-8.
pub fn read_stdin() -> Result<String, CliError> {
    read_all(io::stdin().lock())
}

fn read_all(mut reader: impl Read) -> Result<String, CliError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parsed_args_from_cli() {
        let cli = Cli::try_parse_from([
            "standard-engine",
            "--disable-gitignore",
            "--ext",
            ".vue",
            "--parser",
            "vue-eslint-parser",
        ])
        .unwrap();

        let args = parsed_args(&cli);
        assert!(args.disable_gitignore);
        assert!(!args.fix);
        assert_eq!(args.ext.as_deref(), Some(".vue"));
        assert_eq!(args.parser.as_deref(), Some("vue-eslint-parser"));
        assert_eq!(args.env, None);
    }

    #[test]
    fn test_read_all() {
        let text = read_all(&b"var a = 1\n"[..]).unwrap();
        assert_eq!(text, "var a = 1\n");
    }

    #[test]
    fn test_read_all_rejects_invalid_utf8() {
        let err = read_all(&[0xff, 0xfe][..]).unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_load_options_uses_crate_version() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("package.json"), "{}").unwrap();
        let global = GlobalOptions {
            verbose: false,
            logger: Logger::default(),
        };

        let options = load_options(temp_dir.path().to_path_buf(), None, false, &global).unwrap();
        assert_eq!(options.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(options.cmd, "standard-engine");
    }

    #[test]
    fn test_load_options_missing_config_is_config_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let global = GlobalOptions {
            verbose: false,
            logger: Logger::default(),
        };

        let err = load_options(
            temp_dir.path().to_path_buf(),
            Some(PathBuf::from("nope.yml")),
            false,
            &global,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 7);
    }
}
