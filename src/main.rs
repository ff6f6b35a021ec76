use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cvking_tools::cli::Cli;
use cvking_tools::commands;
use cvking_tools::config::{Config, DEFAULT_CONFIG_PATH};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // --- Configuration ---
    // An explicitly named file must exist; the default location is optional.
    let (config_path, required) = match cli.config.clone().or_else(|| env::var("CONFIG_PATH").ok().map(PathBuf::from)) {
        Some(path) => (path, true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };
    debug!("Loading configuration from: {:?}", config_path);
    let config = Config::load(&config_path, required)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;

    // The error chain is printed once, by the `Result` returned from main.
    commands::run(cli.command, &config).await
}
