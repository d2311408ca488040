mod args;
mod handlers;

use crate::args::Cli;
use anyhow::Context;
use clap::Parser;
use std::io;
use tracing::info;
use wmon::domain::config::{LoggingConfig, MonitorConfig};
use wmon::kernel::config::load_config;
use wmon_logger::{Logger, LoggerBuilder};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config: MonitorConfig =
        load_config(cli.config.as_deref()).context("Configuration is malformed")?;
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }

    let _log = init_logger(&config.logging)?;

    // Loading happens before a subscriber exists, so its outcome is reported here.
    info!(
        path = ?cli.config,
        variant = %config.variant,
        overrides = config.features.len(),
        "Configuration loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    handlers::run(cli.command, &config, stdin.lock(), &mut stdout.lock())
}

/// Logging is skipped entirely when both console and file output are off.
fn init_logger(settings: &LoggingConfig) -> anyhow::Result<Option<Logger>> {
    if !settings.console && settings.directory.is_none() {
        return Ok(None);
    }
    LoggerBuilder::from_config(env!("CARGO_PKG_NAME"), settings)?
        .init()
        .map(Some)
        .context("Failed to initialize logging")
}
