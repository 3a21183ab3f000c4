//! `summarizer-server`: HTTP front end for the Gemini summarizer.

use anyhow::Context;
use integrations_summarizer::{create_summarizer, server, SummarizerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server_config =
        server::ServerConfig::from_env().context("failed to load server configuration")?;
    let config = SummarizerConfig::from_env().context("failed to load Gemini configuration")?;
    tracing::info!(model = %config.model, "Loaded configuration");

    let summarizer = create_summarizer(config).context("failed to create summarizer")?;
    let app = server::router(summarizer);

    let listener = tokio::net::TcpListener::bind(server_config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", server_config.bind_addr))?;

    tracing::info!("listening on http://{}", server_config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
