//! KodEstudio API Server
//!
//! Main entry point for the KodEstudio backend service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kodestudio_api::{AppState, create_router};
use kodestudio_db::{SessionRepository, connect_with};
use kodestudio_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kodestudio=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database
    let db = connect_with(&config.database).await?;
    info!("Connected to database");

    match SessionRepository::new(db.clone()).cleanup_expired().await {
        Ok(removed) => info!(removed, "Expired sessions cleaned up"),
        Err(e) => warn!(error = %e, "Failed to clean up expired sessions"),
    }

    info!(
        token_ttl_hours = config.session.token_ttl_hours,
        cors_origins = config.cors.allowed_origins.len(),
        "Session and CORS settings loaded"
    );

    // Create router
    let app = create_router(AppState::new(db, &config));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
