//! Command implementations for the CLI.

pub mod lint;

pub use lint::LintCommand;
