//! CLI structure and flag definitions.
//!
//! The linter takes no subcommands: positional arguments are files or globs,
//! and flags adjust the engine configuration for this run.

use clap::{CommandFactory, FromArgMatches, Parser};
use standard_engine::config::defaults::{DEFAULT_CMD, DEFAULT_HOMEPAGE, DEFAULT_TAGLINE};
use standard_engine::report::headline;
use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line front end for standard-style linters.
#[derive(Parser, Debug)]
#[command(name = "standard-engine")]
#[command(about = "Lint JavaScript with zero configuration", long_about = None)]
#[command(disable_version_flag = true)]
#[command(after_help = "When no files are given, all files in the current directory are linted. \
Paths in .gitignore at the project root are ignored, along with node_modules, \
coverage, vendor and minified files.")]
pub struct Cli {
    /// Files, directories or globs to lint (`-` reads from stdin)
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// Automatically fix problems
    #[arg(long)]
    pub fix: bool,

    /// Show rule names for errors (to ignore specific rules)
    #[arg(long)]
    pub verbose: bool,

    /// Suppress diagnostic logging
    #[arg(long)]
    pub quiet: bool,

    /// Read source from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Disable use of .gitignore by default
    #[arg(long)]
    pub disable_gitignore: bool,

    /// Use custom eslint environment
    #[arg(long, value_name = "ENV", alias = "envs")]
    pub env: Option<String>,

    /// Specify JavaScript file extensions
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Declare global variable
    #[arg(long = "global", value_name = "NAME", visible_alias = "globals")]
    pub globals: Option<String>,

    /// Use custom js parser (e.g. babel-eslint)
    #[arg(long, value_name = "PARSER")]
    pub parser: Option<String>,

    /// Use custom eslint plugin
    #[arg(long = "plugin", value_name = "NAME", visible_alias = "plugins")]
    pub plugins: Option<String>,

    /// Project config file (JSON or YAML)
    #[arg(long, value_name = "PATH", env = "STANDARD_ENGINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show current version
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Cli {
    /// The clap command, with the linter headline printed above the help.
    pub fn command_with_headline() -> clap::Command {
        Self::command().before_help(headline(DEFAULT_CMD, DEFAULT_TAGLINE, DEFAULT_HOMEPAGE))
    }

    /// Parse `args` against [`Cli::command_with_headline`].
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = Self::command_with_headline();
        let matches = command.try_get_matches_from_mut(args)?;
        Self::from_arg_matches(&matches).map_err(|e| e.format(&mut command))
    }

    /// Treat a leading `-` file as `--stdin`.
    pub fn normalize_stdin_marker(&mut self) {
        if self.files.first().map(String::as_str) == Some("-") {
            self.files.remove(0);
            self.stdin = true;
        }
    }
}
