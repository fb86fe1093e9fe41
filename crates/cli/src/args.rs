use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for flexver
#[derive(Parser, Debug, Clone)]
#[command(
    name = "flexver",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect and compare loosely formatted version strings",
    long_about = "flexver parses major.minor[.build[.revision]] version strings, recovering what it can from malformed input and reporting whatever it had to leave behind."
)]
pub struct CliArgs {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset (overrides the config file)
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Parse one or more version strings and report what was recovered
    Parse(ParseArgs),
    /// Decide whether a registry version is newer than the installed one
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ParseArgs {
    /// Version strings to parse
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,

    /// Approximate overflowing components with f64 instead of big integers
    #[arg(long)]
    pub float: bool,

    /// Print one JSON object per input instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CheckArgs {
    /// Installed version (must be well formed)
    #[arg(long, value_name = "VERSION")]
    pub installed: String,

    /// Version string reported by the registry
    #[arg(long, value_name = "RAW")]
    pub available: String,

    /// Refuse partially parsed registry versions
    #[arg(long)]
    pub strict: bool,

    /// Approximate overflowing components with f64 instead of big integers
    #[arg(long)]
    pub float: bool,
}

/// Log level enumeration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace level logging
    Trace,
    /// Debug level logging
    Debug,
    /// Info level logging
    Info,
    /// Warning level logging
    Warn,
    /// Error level logging
    Error,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
