use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::models;

use super::dto;
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Typhoon OCR API",
        version = "1.0.0",
        description = "HTTP front end for the Typhoon OCR engine. Accepts documents by URL or base64 and returns recognized text.",
    ),
    paths(
        handlers::meta::service_metadata,
        handlers::health::health_check,
        handlers::ocr::recognize_url_get,
        handlers::ocr::recognize_url_sync,
        handlers::ocr::supported_formats,
    ),
    components(schemas(
        // Requests
        dto::OcrRequest,
        dto::UrlOcrQuery,
        // Responses
        dto::OcrResponse,
        dto::UrlOcrResponse,
        models::FileKind,
        // Handler-local types
        handlers::health::HealthResponse,
        handlers::meta::ServiceMetadata,
        handlers::ocr::SupportedFormatsResponse,
        handlers::ocr::FormatCatalog,
    )),
    tags(
        (name = "meta", description = "Service metadata"),
        (name = "health", description = "Health check"),
        (name = "ocr", description = "Document and image recognition"),
    ),
)]
pub struct ApiDoc;

/// OpenAPI document for the in-memory server variant, which swaps the
/// file-based OCR routes for the single buffered one.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Typhoon OCR API (in-memory)",
        version = "1.0.0",
        description = "HTTP front end for the Typhoon OCR engine. In-memory variant: images are processed from a buffer and never staged on disk.",
    ),
    paths(
        handlers::meta::service_metadata,
        handlers::health::health_check,
        handlers::ocr::recognize_in_memory,
        handlers::ocr::supported_formats,
    ),
    components(schemas(
        dto::OcrRequest,
        dto::OcrResponse,
        models::FileKind,
        handlers::health::HealthResponse,
        handlers::meta::ServiceMetadata,
        handlers::ocr::SupportedFormatsResponse,
        handlers::ocr::FormatCatalog,
    )),
    tags(
        (name = "meta", description = "Service metadata"),
        (name = "health", description = "Health check"),
        (name = "ocr", description = "Document and image recognition"),
    ),
)]
pub struct MemoryApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn memory_openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(MemoryApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}

pub fn memory_redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", MemoryApiDoc::openapi()).into()
}
