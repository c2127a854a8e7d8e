//! Voluntar
//!
//! Client for browsing social actions: masked form inputs, client-side
//! filtering and slide pagination over the backend collection.

pub mod bootstrap;
pub mod cli;
pub mod commands;

use anyhow::{Context, Result};
use serde::Serialize;
use vt_core::config::AppConfig;

use crate::cli::{Cli, Command};

/// Resolves configuration: file first, then command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => bootstrap::load_config(path)?,
        None => AppConfig::empty(),
    };
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    Ok(config)
}

/// Runs one CLI command and prints its JSON result on stdout.
pub async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    match &cli.command {
        Command::Mask { kind, raw } => print_json(&commands::mask_value((*kind).into(), raw)),
        Command::Actions(args) => {
            let deps = bootstrap::wire_dependencies(&config)?;
            let output =
                commands::browse_actions(&deps.load_actions(), args, config.viewport_width).await;
            print_json(&output)
        }
        Command::Notifications { command } => {
            let deps = bootstrap::wire_dependencies(&config)?;
            let output = commands::run_notifications(&deps, command).await?;
            print_json(&output)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
