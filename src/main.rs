//! dnsnet - domain resolution over HTTP

use dnsnet::config::ServerConfig;
use dnsnet::http::ResolveServer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dnsnet=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        bind = %config.bind_addr(),
        strategy = %config.strategy(),
        timeout_ms = config.timeout().as_millis() as u64,
        "starting dnsnet"
    );

    let server = ResolveServer::bind(config.bind_addr(), config.resolver()).await?;
    server.serve(shutdown_signal()).await?;

    tracing::info!("dnsnet stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
