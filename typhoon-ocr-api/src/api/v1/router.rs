use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

/// OCR routes for the synchronous (file-based) server.
///
/// Paths are spelled out in full because `GET /api/v1/` is a distinct
/// route from `GET /api/v1`, and nesting would collapse the two.
pub fn v1_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/", get(handlers::ocr::recognize_url_get))
        .route(
            "/api/v1/ocr/url/sync",
            post(handlers::ocr::recognize_url_sync),
        )
        .route(
            "/api/v1/ocr/supported-formats",
            get(handlers::ocr::supported_formats),
        )
}

/// OCR routes for the in-memory server.
pub fn memory_v1_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/ocr", post(handlers::ocr::recognize_in_memory))
        .route(
            "/api/v1/ocr/supported-formats",
            get(handlers::ocr::supported_formats),
        )
}
