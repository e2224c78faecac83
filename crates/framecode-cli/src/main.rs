//! Framecode - SMPTE timecode calculator
//!
//! Entry point: parses arguments, loads configuration and runs one command.

mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use commands::Settings;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = config::load_config_or_default(cli.config.as_deref())?;
    tracing::debug!(?config, "loaded configuration");

    let settings = Settings::resolve(&cli, &config);
    let output = commands::run(&cli.command, &settings)?;
    println!("{}", output);

    Ok(())
}
