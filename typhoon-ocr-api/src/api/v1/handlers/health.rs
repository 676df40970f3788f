//! v1 Health handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::state::AppState;

/// Health report returned by `GET /health`.
///
/// `api_key_configured` tells deploy tooling whether the Typhoon
/// credential made it into the environment without leaking the key
/// itself.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` while the server is able to answer.
    pub status: String,
    /// Whether a non-empty Typhoon API key is loaded.
    pub api_key_configured: bool,
    /// Processing mode of this server instance.
    pub mode: String,
}

/// `GET /health`
///
/// Liveness probe. Reports whether the Typhoon API key is configured
/// and which processing mode this instance runs in.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    operation_id = "health_check",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        api_key_configured: !state.config.ocr.api_key.is_empty(),
        mode: state.mode.as_str().to_string(),
    })
}
