//! Centi-Tenka HTTP Server
//!
//! Axum-based server that serves the static site and proxies oracle
//! consultations to Gemini, so the API key never reaches the browser.

mod handlers;
mod state;

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oracle_core::{LlmProvider, OracleConfig};
use oracle_runtime::{GeminiConfig, GeminiProvider};

use crate::handlers::{consult_handler, health_check};
use crate::state::AppState;

/// Build the router for the given state
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/oracle", post(consult_handler))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let gemini = GeminiConfig::from_env();
    if gemini.api_key.is_none() {
        tracing::warn!("⚠ GEMINI_API_KEY not set - every consultation will fail");
        tracing::warn!("  Set GEMINI_API_KEY (or API_KEY) in .env");
    }

    let provider: Arc<dyn LlmProvider> = Arc::new(GeminiProvider::from_config(gemini)?);
    let config = OracleConfig::from_env();

    match provider.health_check().await {
        Ok(true) => tracing::info!("✓ Connected to {}", provider.name()),
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ {} not reachable - the oracle will report a disruption", provider.name());
        }
    }
    tracing::info!("Model: {}", config.model);

    let state = AppState {
        provider,
        config: Arc::new(config),
    };

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());
    let app = build_router(state, Path::new(&static_dir));

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Centi-Tenka running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health      - Health check");
    tracing::info!("  POST /api/oracle  - Consult the oracle");
    tracing::info!("  GET  /*           - Static site from {}", static_dir);

    axum::serve(listener, app).await?;

    Ok(())
}
