//! Main entry point for the standard-engine CLI.
//!
//! Lints the given files (or stdin) with an eslint-compatible engine and
//! prints a compact report. Exits 1 when errors are found.

mod cli;
mod commands;
mod error;
mod utils;

use clap::error::ErrorKind;
use cli::Cli;
use commands::LintCommand;
use error::CliError;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments; help output keeps clap's own handling
    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => e.exit(),
        Err(e) => {
            let err = CliError::InvalidArguments(e.to_string());
            eprintln!("{}", e.render());
            std::process::exit(err.exit_code());
        }
    };

    // Initialize logging based on verbosity
    let logger = standard_engine::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        logger,
    };

    match LintCommand::from_cli(cli).execute(&global) {
        Ok(code) => std::process::exit(code),
        Err(e @ CliError::Unexpected { .. }) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
