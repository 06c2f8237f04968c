//! CLI output formatting.

use crate::config::DemoKind;
use crate::demos::EqualityCheck;
use crate::error::DemoResult;

/// Print version information.
pub fn print_version() {
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => {
            println!("aliasing {} ({hash})", env!("CARGO_PKG_VERSION"));
        }
        _ => println!("aliasing {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Print help message.
pub fn print_help() {
    println!(
        r"aliasing - reference vs value semantics, step by step

USAGE:
    aliasing                    Run the default demos
    aliasing <COMMAND> [OPTIONS]

COMMANDS:
    run [DEMO...]               Run demos (default: boxed-number string-map)
        --all                   Run every demo
        -c, --config <FILE>     Load settings from a YAML file
        -v, --verbose           Print a banner before each demo
        --json                  Print equality checks as JSON

    list                        List available demos

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    aliasing
    aliasing run handle-slots
    aliasing run --all --verbose
    aliasing run --config demo.yaml --json

LOGGING:
    Diagnostics go to stderr; set RUST_LOG=debug to trace each step.
"
    );
}

/// Format the demo list, one demo per line.
#[must_use]
pub fn format_demo_list() -> String {
    DemoKind::ALL
        .iter()
        .map(|kind| format!("  {:<14}{}\n", kind.name(), kind.description()))
        .collect()
}

/// Print the demo list.
pub fn print_demo_list() {
    println!("Available demos:");
    print!("{}", format_demo_list());
}

/// Render equality checks as pretty JSON.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn format_checks_json(checks: &[EqualityCheck]) -> DemoResult<String> {
    Ok(serde_json::to_string_pretty(checks)?)
}
