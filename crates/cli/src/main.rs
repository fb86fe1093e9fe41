use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use flexver_cli::args::{CliArgs, LogLevel};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<ExitCode> {
    let cli = CliArgs::parse();
    let source = flexver_cli::config_source(&cli);
    let config = flexver_cli::load_config(source.as_deref())?;

    let default_directive = cli
        .log_level
        .map(LogLevel::as_directive)
        .unwrap_or(config.logging.level.as_str());
    init_tracing(default_directive);
    flexver_cli::report_config(source.as_deref(), &config);

    let stdout = io::stdout();
    let code = flexver_cli::run(&cli, &config, &mut stdout.lock())?;
    Ok(ExitCode::from(code))
}

fn init_tracing(default_directive: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}
