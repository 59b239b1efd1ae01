//! Build script for standard-engine-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    let flag = |name: &'static str, help: &'static str| {
        Arg::new(name)
            .long(name)
            .help(help)
            .action(ArgAction::SetTrue)
    };
    let value = |name: &'static str, value_name: &'static str, help: &'static str| {
        Arg::new(name).long(name).value_name(value_name).help(help)
    };

    Command::new("standard-engine")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lint JavaScript with zero configuration")
        .long_about(
            "Lints files, directories or globs with an eslint-compatible engine and \
             prints a compact report. Exits with status 1 when errors are found.",
        )
        .arg(
            Arg::new("files")
                .value_name("FILES")
                .num_args(0..)
                .help("Files, directories or globs to lint (`-` reads from stdin)"),
        )
        .arg(flag("fix", "Automatically fix problems"))
        .arg(flag("verbose", "Show rule names for errors (to ignore specific rules)"))
        .arg(flag("quiet", "Suppress diagnostic logging"))
        .arg(flag("stdin", "Read source from stdin"))
        .arg(flag("disable-gitignore", "Disable use of .gitignore by default"))
        .arg(value("env", "ENV", "Use custom eslint environment"))
        .arg(value("ext", "EXT", "Specify JavaScript file extensions"))
        .arg(value("global", "NAME", "Declare global variable").visible_alias("globals"))
        .arg(value("parser", "PARSER", "Use custom js parser (e.g. babel-eslint)"))
        .arg(value("plugin", "NAME", "Use custom eslint plugin").visible_alias("plugins"))
        .arg(
            value("config", "PATH", "Project config file (JSON or YAML)")
                .env("STANDARD_ENGINE_CONFIG"),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Show current version")
                .action(ArgAction::SetTrue),
        )
        .disable_version_flag(true)
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("standard-engine.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
