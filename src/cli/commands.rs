//! CLI command handlers.

use std::io::{self, Write};
use std::process::ExitCode;

use crate::config::{DemoConfig, DemoKind};
use crate::demos::{DemoRunner, Transcript};
use crate::error::{DemoError, DemoResult};

use super::output::{format_checks_json, print_demo_list, print_help, print_version};
use super::{Args, Command, RunOptions};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run(opts) => run_demos(&opts),
        Command::List => {
            print_demo_list();
            ExitCode::SUCCESS
        }
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Run demos, writing the transcript (or JSON checks) to stdout.
#[must_use]
pub fn run_demos(opts: &RunOptions) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(opts, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = error_hint(&e) {
                eprintln!("{hint}");
            }
            ExitCode::from(1)
        }
    }
}

/// Follow-up advice for errors the user can fix by changing their input.
#[must_use]
pub fn error_hint(err: &DemoError) -> Option<&'static str> {
    err.is_config_error()
        .then_some("hint: check the demo names and config file; `aliasing list` shows the available demos")
}

/// Run demos into any writer.
///
/// # Errors
///
/// Returns error if the configuration cannot be resolved or the output
/// cannot be written.
pub fn execute<W: Write>(opts: &RunOptions, out: &mut W) -> DemoResult<()> {
    let config = resolve_config(opts)?;
    log::debug!("resolved config: {config:?}");
    let runner = DemoRunner::new(config);

    if opts.json {
        let mut transcript = Transcript::new();
        runner.run(&mut transcript);
        writeln!(out, "{}", format_checks_json(transcript.checks())?)?;
        out.flush()?;
    } else {
        runner.run_to_writer(out)?;
    }
    Ok(())
}

/// Merge the config file (if any) with command-line overrides.
///
/// Precedence: explicit demo names, then `--all`, then the file, then
/// defaults. `--verbose` only ever turns banners on.
///
/// # Errors
///
/// Returns error if the file cannot be loaded or a demo name is unknown.
pub fn resolve_config(opts: &RunOptions) -> DemoResult<DemoConfig> {
    let mut config = match &opts.config_path {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    if !opts.demos.is_empty() {
        config.demos = opts
            .demos
            .iter()
            .map(|name| name.parse::<DemoKind>())
            .collect::<DemoResult<Vec<_>>>()?;
    } else if opts.all {
        config.demos = DemoKind::ALL.to_vec();
    }

    config.verbose |= opts.verbose;

    Ok(config)
}
