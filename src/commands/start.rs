use anyhow::Result;
use cloud_price_calculator::{config, server};
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Execute the start command
///
/// Loads configuration, applies the `--host`/`--port` overrides and runs the
/// server until SIGINT/SIGTERM.
pub async fn execute(config_path: &Path, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut cfg = config::load_config(config_path)?;

    if let Some(host) = host {
        cfg.server.host = host;
    }
    if let Some(port) = port {
        cfg.server.port = port;
    }

    println!(
        "{} {}:{}",
        "Starting Cloud Price Calculator on".green(),
        cfg.server.host,
        cfg.server.port
    );
    info!(config = %config_path.display(), "Starting Cloud Price Calculator");

    // Blocks until shutdown
    server::start_server(cfg).await?;

    Ok(())
}
