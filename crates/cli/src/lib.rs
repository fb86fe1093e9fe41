//! flexver CLI Library
//!
//! Argument definitions, configuration discovery and subcommand handlers for
//! the `flexver` binary.

pub mod args;
pub mod commands;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flexver_config::{FlexverConfig, DEFAULT_CONFIG_FILE};
use tracing::debug;

use crate::args::{CliArgs, Command};

/// The configuration file to read: `--config` when given, else
/// `flexver.toml` in the working directory if it exists.
pub fn config_source(args: &CliArgs) -> Option<PathBuf> {
    args.config.clone().or_else(|| {
        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        fallback.exists().then_some(fallback)
    })
}

/// Loads the configuration at `source`, or the built-in defaults.
pub fn load_config(source: Option<&Path>) -> Result<FlexverConfig> {
    FlexverConfig::load_or_default(source).context("failed to load configuration")
}

/// Logs where the configuration came from.
///
/// Call after the subscriber is installed; its filter depends on the
/// configuration being reported.
pub fn report_config(source: Option<&Path>, config: &FlexverConfig) {
    match source {
        Some(path) => debug!(path = %path.display(), ?config, "configuration loaded"),
        None => debug!(?config, "no configuration file, using defaults"),
    }
}

/// Runs the selected subcommand and returns the process exit code.
pub fn run<W: Write>(args: &CliArgs, config: &FlexverConfig, out: &mut W) -> Result<u8> {
    match &args.command {
        Command::Parse(parse) => commands::run_parse(parse, config, out),
        Command::Check(check) => commands::run_check(check, config, out),
    }
}
