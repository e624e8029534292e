//! Address Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout.

use address_book::{Config, JsonFileRepository};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can come from .env
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to keep stdout for the conversation)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using database file: {}", config.database_path.display());

    let repository = JsonFileRepository::new(config.database_path.clone());
    let stdin = io::stdin();
    let session = address_book::run(stdin.lock(), io::stdout(), &repository, &config)?;

    info!(?session, "Address book session finished");
    Ok(())
}
