//! Subcommand handlers.
//!
//! Handlers write their report to the given writer and return the process
//! exit code, so they can be driven from tests without spawning a process.

use std::io::Write;

use anyhow::{Context, Result};
use flexver_config::FlexverConfig;
use flexver_version::{check_update, Precision, UpdateCheck, Version, VersionParser};
use tracing::{debug, info};

use crate::args::{CheckArgs, ParseArgs};

/// The installed version is current (also the success code for `parse`).
pub const EXIT_OK: u8 = 0;
/// The registry string could not be used for a decision.
pub const EXIT_UNKNOWN: u8 = 2;
/// The registry offers a newer version.
pub const EXIT_UPDATE_AVAILABLE: u8 = 10;

fn precision(config: &FlexverConfig, float: bool) -> Precision {
    if float {
        Precision::Float
    } else {
        config.parser.precision()
    }
}

/// Parses every input and prints one report line per input.
pub fn run_parse<W: Write>(args: &ParseArgs, config: &FlexverConfig, out: &mut W) -> Result<u8> {
    let parser = VersionParser::new(precision(config, args.float));
    debug!(precision = %parser.precision(), count = args.versions.len(), "parsing versions");

    for raw in &args.versions {
        let outcome = parser.parse(raw);
        if args.json {
            let mut value = serde_json::to_value(&outcome)?;
            value["input"] = serde_json::Value::from(raw.as_str());
            serde_json::to_writer(&mut *out, &value)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{raw}\t{outcome}")?;
        }
    }
    Ok(EXIT_OK)
}

/// Compares the installed version with the registry string.
pub fn run_check<W: Write>(args: &CheckArgs, config: &FlexverConfig, out: &mut W) -> Result<u8> {
    let installed: Version = args
        .installed
        .parse()
        .with_context(|| format!("installed version {:?} is not well formed", args.installed))?;

    let mut policy = config.update_policy();
    policy.precision = precision(config, args.float);
    if args.strict {
        policy.accept_partial = false;
    }

    let check = check_update(&installed, &args.available, &policy);
    let code = match &check {
        UpdateCheck::UpToDate { available, status } => {
            writeln!(out, "up to date: installed {installed}, registry {available} ({status})")?;
            EXIT_OK
        }
        UpdateCheck::UpdateAvailable { available, status } => {
            writeln!(out, "update available: {installed} -> {available} ({status})")?;
            EXIT_UPDATE_AVAILABLE
        }
        UpdateCheck::Rejected { outcome } => {
            writeln!(out, "registry version rejected: {outcome}")?;
            EXIT_UNKNOWN
        }
        UpdateCheck::Unknown { raw } => {
            writeln!(out, "registry version unparseable: {raw:?}")?;
            EXIT_UNKNOWN
        }
    };

    info!(
        %installed,
        available = %args.available,
        update = check.is_update_available(),
        "update check finished"
    );
    Ok(code)
}
