#![forbid(unsafe_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use marvel_roster::app::AppState;
use marvel_roster::cli::{self, Cli};
use marvel_roster::config::AppConfig;
use marvel_roster::constants;
use marvel_roster::marvel::{CharacterSource, MarvelClient, OfflineSource};
use marvel_roster::store::{FileStore, KeyValueStore, MemoryStore};

fn init_logging() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var(constants::env::LOG_LEVEL)
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    // stderr keeps stdout clean for command output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to install log subscriber")
}

fn build_source(config: &AppConfig) -> Arc<dyn CharacterSource> {
    match MarvelClient::new(config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            warn!(error = %e, "Marvel API client unavailable, catalog commands will fail");
            Arc::new(OfflineSource::new(e.to_string()))
        }
    }
}

fn build_store(cli: &Cli, config: &AppConfig) -> Arc<dyn KeyValueStore> {
    if cli.ephemeral {
        info!("Using in-memory storage");
        return Arc::new(MemoryStore::new());
    }
    let store = FileStore::new(config.storage_path());
    info!(path = %store.path().display(), "Using file storage");
    Arc::new(store)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    info!(config = ?config, "Loaded configuration");

    let app = AppState::new(build_source(&config), build_store(&cli, &config));
    cli::run(&cli, &app).await
}
