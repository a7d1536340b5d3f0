//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use oracle_core::{Outcome, consult};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider: String,
    pub model: String,
    pub provider_reachable: bool,
}

#[derive(Debug, Deserialize)]
pub struct OracleRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct OracleResponse {
    pub text: String,
    /// `answered`, or `silent` when the fallback text stands in for an empty reply
    pub outcome: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider_reachable = state.provider.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        provider: state.provider.name().to_string(),
        model: state.config.model.clone(),
        provider_reachable,
    })
}

/// Consult the oracle with one prompt
pub async fn consult_handler(
    State(state): State<AppState>,
    Json(payload): Json<OracleRequest>,
) -> Result<Json<OracleResponse>, ApiError> {
    if payload.prompt.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "The oracle needs a question.".into(),
                code: "EMPTY_QUERY".into(),
            }),
        ));
    }

    let span = tracing::info_span!(
        "consult",
        request_id = %uuid::Uuid::new_v4(),
        prompt_chars = payload.prompt.chars().count()
    );
    let outcome = consult(state.provider.as_ref(), &state.config, &payload.prompt)
        .instrument(span)
        .await;

    match outcome {
        Outcome::Answered(text) => Ok(Json(OracleResponse {
            text,
            outcome: "answered",
        })),
        Outcome::Silent(text) => Ok(Json(OracleResponse {
            text,
            outcome: "silent",
        })),
        Outcome::Disrupted(message) => Err((
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: message,
                code: "ORACLE_DISRUPTED".into(),
            }),
        )),
    }
}
