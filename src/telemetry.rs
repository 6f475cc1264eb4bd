//! `tracing` subscriber setup.

use crate::config::Config;
use anyhow::{Context, Result};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// Records go to stderr so that stdout carries only the reversed word.
/// ANSI styling is used only when stderr is a terminal.
/// `LOG_FORMAT=json` switches to one JSON object per line.
///
/// # Errors
///
/// Returns an error if `RUST_LOG` is not a valid filter or a global
/// subscriber is already installed.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal());

    if config.log_format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;
    }

    Ok(())
}
