//! blaene-server binary
//!
//! Serves the storefront's static files and answers every unknown path with
//! the index document.

use anyhow::{Context, Result};
use blaene_core::config::ConfigLoader;
use blaene_server::{ServerConfig, StaticServer};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Blaene static site server with single-page app fallback")]
struct Cli {
    #[clap(long, short, help = "Port to listen on (overrides PORT and the config file)")]
    port: Option<u16>,

    #[clap(long, short, help = "Directory to serve files from")]
    root: Option<PathBuf>,

    #[clap(long, help = "Document returned for unmatched paths, relative to the root")]
    index: Option<String>,

    #[clap(long, short, help = "YAML configuration file")]
    config: Option<PathBuf>,

    #[clap(long, short, help = "Log level (defaults to logging.level from the config, then info)")]
    log_level: Option<String>,

    #[clap(long, help = "Disable permissive CORS headers")]
    no_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;

    // Initialize logger
    let log_level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let log_level_filter = log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(root) = cli.root {
        config.server.root = root;
    }
    if let Some(index) = cli.index {
        config.server.index_file = index;
    }
    if cli.no_cors {
        config.server.enable_cors = false;
    }
    config
        .server
        .validate()
        .context("Invalid server settings")?;

    let server_config = ServerConfig::from_settings(&config.server)?;

    log::info!("Starting Blaene server...");
    log::info!("Configuration:");
    log::info!("  Bind address: {}", server_config.bind_addr);
    log::info!("  Root: {}", server_config.root.display());
    log::info!("  Index document: {}", server_config.index_file);
    log::info!("  CORS enabled: {}", server_config.enable_cors);
    log::info!("  Logging enabled: {}", server_config.enable_logging);

    StaticServer::new(server_config).serve().await?;

    Ok(())
}
