//! aliasing CLI - reference vs value semantics demo.
//!
//! With no arguments, runs the default demos and exits successfully.

use std::io::Write;
use std::process::ExitCode;

use aliasing::cli::{run_cli, Args};
use env_logger::Env;

fn main() -> ExitCode {
    // stdout carries the demo transcript; diagnostics stay on stderr.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format(format_log_record)
        .init();

    log::info!("aliasing v{} starting", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    log::debug!("parsed arguments: {args:?}");
    run_cli(args)
}

fn format_log_record(
    buf: &mut env_logger::fmt::Formatter,
    record: &log::Record,
) -> std::io::Result<()> {
    writeln!(
        buf,
        "[{:>5} {}] {}",
        record.level(),
        record.target(),
        record.args()
    )
}
