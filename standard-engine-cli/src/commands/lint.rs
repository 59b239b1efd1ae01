//! The lint command: the only thing this binary does.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::{load_options, parsed_args, read_stdin, resolve_cwd, GlobalOptions};
use standard_engine::report::exit_code;
use standard_engine::{ArgvNormalizer, Linter, LinterOptions, ParsedArgs, ProcessEngine, Report};
use std::io::{self, Write};
use std::path::PathBuf;

/// Lint files or stdin and report the results.
#[derive(Debug, Clone)]
pub struct LintCommand {
    /// Files, directories or globs.
    pub files: Vec<String>,
    /// Lint stdin instead of files.
    pub stdin: bool,
    /// Print the linter version and exit.
    pub version: bool,
    /// Project config file.
    pub config: Option<PathBuf>,
    /// Flags that override the engine configuration.
    pub args: ParsedArgs,
}

impl LintCommand {
    /// Build the command from parsed flags.
    pub fn from_cli(mut cli: Cli) -> Self {
        cli.normalize_stdin_marker();
        let args = parsed_args(&cli);
        Self {
            files: cli.files,
            stdin: cli.stdin,
            version: cli.version,
            config: cli.config,
            args,
        }
    }

    /// Run the command, returning the process exit code.
    pub fn execute(self, global: &GlobalOptions) -> Result<i32, CliError> {
        let cwd = resolve_cwd()?;
        let mut options = load_options(
            cwd.clone(),
            self.config.clone(),
            self.args.disable_gitignore,
            global,
        )?;

        if self.version {
            println!("{}: v{}", options.cmd, options.version);
            return Ok(0);
        }

        let layer = ArgvNormalizer::new(&cwd).normalize(&self.args);
        options.apply_overrides(&layer);
        global.logger.debug(&format!(
            "engine options: {}",
            serde_json::Value::Object(options.engine_options.clone())
        ));

        let (cmd, bugs) = (options.cmd.clone(), options.bugs.clone());
        let engine = ProcessEngine::new().with_logger(global.logger);
        let linter = Linter::new(options, engine).with_logger(global.logger);

        self.run(&linter, global)
            .map_err(|e| match e {
                CliError::Library(source) => CliError::unexpected(&cmd, &bugs, source),
                other => other,
            })
    }

    fn run(&self, linter: &Linter<ProcessEngine>, global: &GlobalOptions) -> Result<i32, CliError> {
        let stdout = io::stdout();
        let stderr = io::stderr();

        if self.stdin {
            let code = read_stdin()?;
            let results = linter.lint_text(&code, None)?;

            if self.args.fix {
                let fixed = results
                    .first()
                    .and_then(|r| r.output.as_deref())
                    .unwrap_or(&code);
                let mut out = stdout.lock();
                out.write_all(fixed.as_bytes())?;
                out.flush()?;

                // stdout carries source text, so the report goes to stderr
                report(linter.options(), global, true)
                    .write(&results, &mut stderr.lock(), &mut stderr.lock())?;
                return Ok(exit_code(&results));
            }

            report(linter.options(), global, false)
                .write(&results, &mut stdout.lock(), &mut stderr.lock())?;
            return Ok(exit_code(&results));
        }

        let results = linter.lint_files(&self.files)?;
        report(linter.options(), global, false)
            .write(&results, &mut stdout.lock(), &mut stderr.lock())?;
        Ok(exit_code(&results))
    }
}

fn report<'a>(options: &'a LinterOptions, global: &GlobalOptions, prefix_cmd: bool) -> Report<'a> {
    Report::new(options)
        .verbose(global.verbose)
        .prefix_cmd(prefix_cmd)
}
