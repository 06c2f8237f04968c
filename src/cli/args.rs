//! CLI argument parsing.
//!
//! Hand-rolled parser over any iterator of strings, so parsing is testable
//! without touching `std::env::args()`.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run demos (the default with no arguments).
    Run(RunOptions),
    /// List available demos
    List,
    /// Show help
    Help,
    /// Show version
    Version,
}

/// Options for the `run` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Demo names given on the command line, unresolved.
    pub demos: Vec<String>,
    /// Run every available demo.
    pub all: bool,
    /// Optional YAML configuration file.
    pub config_path: Option<PathBuf>,
    /// Print a banner before each demo.
    pub verbose: bool,
    /// Print recorded equality checks as JSON instead of the transcript.
    pub json: bool,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// The first item is the program name.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Run(RunOptions::default()),
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(&args[2..]),
            "list" => Command::List,
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'run' command arguments.
    fn parse_run_command(rest: &[String]) -> Command {
        let mut opts = RunOptions::default();

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "--all" => {
                    opts.all = true;
                    i += 1;
                }
                "-c" | "--config" => {
                    if i + 1 < rest.len() {
                        opts.config_path = Some(PathBuf::from(&rest[i + 1]));
                        i += 2;
                    } else {
                        eprintln!("Error: '--config' requires a file path");
                        return Command::Help;
                    }
                }
                "-v" | "--verbose" => {
                    opts.verbose = true;
                    i += 1;
                }
                "--json" => {
                    opts.json = true;
                    i += 1;
                }
                flag if flag.starts_with('-') => {
                    eprintln!("Error: unknown option '{flag}' for 'run'");
                    return Command::Help;
                }
                name => {
                    opts.demos.push(name.to_string());
                    i += 1;
                }
            }
        }

        Command::Run(opts)
    }
}
