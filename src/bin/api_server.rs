// API Server Binary Entry Point
//
// Purpose: Start the Axum growth calculator API
// Usage: cargo run --bin api_server

use growth_scorer_rust::reference::validate_reference_tables;
use growth_scorer_rust::{create_router, AppConfig, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "growth_scorer_rust=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = AppConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  BIND: {}", config.socket_addr());
    tracing::info!("  GENDER_FALLBACK: {:?}", config.gender_fallback);
    if config.allowed_origins.is_empty() {
        tracing::info!("  ALLOWED_ORIGINS: any");
    } else {
        tracing::info!("  ALLOWED_ORIGINS: {}", config.allowed_origins.join(", "));
    }

    if config.validate_tables {
        validate_reference_tables()?;
        tracing::info!("Reference tables validated");
    } else {
        tracing::warn!("Skipping reference table validation (VALIDATE_TABLES=false)");
    }

    let addr = config.socket_addr();
    let app = create_router(AppState::new(config));

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
