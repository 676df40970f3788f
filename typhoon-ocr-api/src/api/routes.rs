use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::v1;
use super::AppState;

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Router for the synchronous (file-based) server.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(v1::handlers::meta::service_metadata))
        .route("/health", get(v1::handlers::health_check))
        .route("/openapi.json", get(v1::openapi::openapi_json))
        .merge(v1::openapi::redoc_router())
        .merge(v1::router::v1_router())
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router for the in-memory server.
pub fn create_memory_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(v1::handlers::meta::service_metadata))
        .route("/health", get(v1::handlers::health_check))
        .route("/openapi.json", get(v1::openapi::memory_openapi_json))
        .merge(v1::openapi::memory_redoc_router())
        .merge(v1::router::memory_v1_router())
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
