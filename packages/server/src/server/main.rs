// Main entry point for the Design Assist API server

use anyhow::{Context, Result};
use design_assist_core::{
    config::mask_secret, kernel::ServerDeps, server::build_app, Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,design_assist_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Design Assist API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        figma_token = %mask_secret(&config.figma_token),
        openai_api_key = %mask_secret(&config.openai_api_key),
        model = %config.openai_model,
        timeout_secs = config.upstream_timeout.as_secs(),
        "Configuration loaded"
    );

    // Build upstream clients and application
    let deps = ServerDeps::from_config(&config).context("Failed to build upstream clients")?;
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
