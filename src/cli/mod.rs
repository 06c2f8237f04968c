//! CLI module for aliasing.
//!
//! All CLI logic lives here rather than in main.rs so it can be tested. The
//! entry point `run_cli` is called from main.rs with parsed arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, RunOptions};
pub use commands::{error_hint, execute, resolve_config, run_cli, run_demos};
pub use output::{format_checks_json, format_demo_list, print_demo_list, print_help, print_version};
