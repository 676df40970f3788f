//! v1 Service metadata handler.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::state::{AppState, ServerMode};

/// Service banner returned by `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceMetadata {
    /// Human-readable service name.
    pub message: String,
    /// Crate version.
    pub version: String,
    /// Route summary, keyed by `"<METHOD> <path>"`.
    pub endpoints: BTreeMap<String, String>,
}

/// `GET /`
///
/// Service banner with a route summary. The advertised OCR routes
/// depend on the processing mode of this instance.
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    operation_id = "service_metadata",
    responses(
        (status = 200, description = "Service name, version and routes", body = ServiceMetadata)
    )
)]
pub async fn service_metadata(State(state): State<AppState>) -> Json<ServiceMetadata> {
    let routes: &[(&str, &str)] = match state.mode {
        ServerMode::Synchronous => &[
            ("GET /api/v1/", "OCR from a URL (query parameter)"),
            ("POST /api/v1/ocr/url/sync", "OCR from a URL or base64 (JSON body)"),
            ("GET /health", "Server health check"),
            ("GET /api/v1/ocr/supported-formats", "Supported file formats"),
        ],
        ServerMode::InMemory => &[
            ("POST /api/v1/ocr", "OCR from a URL or base64 (JSON body)"),
            ("GET /health", "Server health check"),
            ("GET /api/v1/ocr/supported-formats", "Supported file formats"),
        ],
    };

    Json(ServiceMetadata {
        message: "Typhoon OCR API Server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: routes
            .iter()
            .map(|(route, description)| (route.to_string(), description.to_string()))
            .collect(),
    })
}
