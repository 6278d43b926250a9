// API Server Binary Entry Point
//
// Purpose: Start the Axum API server over the crop and disease catalogs
// Usage: cargo run --features api --bin api_server

use anyhow::Context;
use crop_advisor::{create_router, AppState, ServerConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "crop_advisor=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = ServerConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  CATALOG_PATH: {}", config.catalog_path.display());
    tracing::info!("  DISEASE_CATALOG_PATH: {}", config.disease_catalog_path.display());
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  TOP_N: {}", config.top_n);
    tracing::info!("  CACHE_TTL_SECS: {}", config.cache_ttl.as_secs());

    let state = AppState::new(&config)?;
    tracing::info!(
        "Application state initialized ({} crops, {} diseases)",
        state.catalog.len(),
        state.diseases.len()
    );

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!("Server listening on {}", addr);
    tracing::info!("API URL: http://localhost:{}/api", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
