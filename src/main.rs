use anyhow::Result;
use bookshelf_core::{config::Config, server, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Initialize tracing (and the Prometheus recorder when enabled)
    let prometheus_handle = telemetry::init(&config.telemetry);

    info!("Starting Bookshelf Core Service");
    info!("HTTP server listening on {}", config.http_addr());

    // Run the server
    server::run(config, prometheus_handle).await
}
