// API Server Binary Entry Point
//
// Purpose: Start the hitzone API server
// Usage: cargo run --features api --bin api_server

use hitzone_api::{create_router, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "hitzone_api=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = ServerConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  DATA_PATH: {}", config.data_path);
    tracing::info!("  BIND_ADDR: {}", config.bind_addr);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  CACHE_CAPACITY: {}", config.cache_capacity);
    tracing::info!("  CACHE_TTL_SECS: {}", config.cache_ttl.as_secs());

    // Initialize application state (loads data, builds index)
    tracing::info!("Initializing application state...");
    let state = AppState::new(&config).await?;
    tracing::info!(
        "Application state initialized ({} monsters)",
        state.dataset.len()
    );

    let app = create_router(state);

    let addr = config.socket_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
