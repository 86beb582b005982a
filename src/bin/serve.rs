//! Proxy server binary.
//!
//! Loads the companion configuration (optional TOML path as the first
//! argument), starts the gateway proxy, and serves until interrupted.

use sahay::config::CompanionConfig;
use sahay::llm::GatewayClient;
use sahay::server::ProxyServer;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => CompanionConfig::load(Path::new(&path))?,
        None => CompanionConfig::default(),
    };

    let client = Arc::new(GatewayClient::new(&config.gateway)?);
    let server = ProxyServer::start(client, &config.server).await?;
    tracing::info!("sahay-serve listening on {}", server.addr());

    tokio::signal::ctrl_c().await?;
    tracing::info!("sahay-serve shutting down");
    server.shutdown();
    Ok(())
}
