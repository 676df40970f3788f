//! v1 OCR handlers.
//!
//! Three recognition entry points share one pipeline: validate the
//! request into an [`OcrJob`], resolve the document (download or
//! base64 decode), run the Typhoon engine, shape the response.
//!
//! The file-based endpoints (`GET /api/v1/` and `POST
//! /api/v1/ocr/url/sync`) stage the document on disk and fold engine
//! failures into a `200` envelope with an `error` field, so polling
//! clients do not have to special-case HTTP errors for bad scans. The
//! in-memory endpoint (`POST /api/v1/ocr`) keeps the bytes off disk
//! and surfaces engine failures as `500`.

use std::time::Instant;

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::state::AppState;
use crate::api::v1::dto::{OcrRequest, OcrResponse, UrlOcrQuery, UrlOcrResponse};
use crate::error::{OcrApiError, Result};
use crate::models::FileKind;
use crate::resolver::{DocumentSource, OcrJob};

/// Recognized text plus the file facts reported alongside it.
struct OcrOutcome {
    text: String,
    file_size: u64,
    file_type: FileKind,
}

/// Validates the request, stages the document in a temp file and runs
/// the engine on it. The temp file is deleted when the returned
/// outcome (or error) leaves this function.
async fn run_file_ocr(state: &AppState, request: &OcrRequest) -> Result<OcrOutcome> {
    let job = OcrJob::from_request(request)?;
    match &job.source {
        DocumentSource::Url(url) => info!("starting OCR from URL: {}", url),
        DocumentSource::Base64(_) => info!("starting OCR from base64 image"),
    }

    let document = job.materialize(&state.fetcher).await?;
    let text = state
        .engine
        .recognize_file(document.path(), job.task_type, job.page_num)
        .await?;

    Ok(OcrOutcome {
        text,
        file_size: document.size(),
        file_type: document.kind(),
    })
}

/// `GET /api/v1/`
///
/// Minimal URL-driven recognition. Returns `{"text": ...}` on success
/// and `{"error": ...}` when the engine fails on the document, both at
/// `200`. Invalid parameters and unreachable URLs are `400`.
#[utoipa::path(
    get,
    path = "/api/v1/",
    tag = "ocr",
    operation_id = "recognize_url_get",
    params(UrlOcrQuery),
    responses(
        (status = 200, description = "Recognized text, or an engine error message", body = UrlOcrResponse),
        (status = 400, description = "Invalid parameters or the URL could not be fetched")
    )
)]
pub async fn recognize_url_get(
    State(state): State<AppState>,
    Query(query): Query<UrlOcrQuery>,
) -> Result<Json<UrlOcrResponse>> {
    let request = query.into_request();
    match run_file_ocr(&state, &request).await {
        Ok(outcome) => Ok(Json(UrlOcrResponse::text(outcome.text))),
        Err(OcrApiError::Ocr(message)) => {
            error!("OCR failed: {}", message);
            Ok(Json(UrlOcrResponse::error(message)))
        }
        Err(err) => Err(err),
    }
}

/// `POST /api/v1/ocr/url/sync`
///
/// Full synchronous recognition. Accepts a URL or a base64 image in
/// the JSON body and blocks until the engine answers. Engine failures
/// come back as `{"success": false, "error": ...}` at `200`.
#[utoipa::path(
    post,
    path = "/api/v1/ocr/url/sync",
    tag = "ocr",
    operation_id = "recognize_url_sync",
    request_body = OcrRequest,
    responses(
        (status = 200, description = "Recognition result envelope", body = OcrResponse),
        (status = 400, description = "Invalid request, unreachable URL or undecodable base64")
    )
)]
pub async fn recognize_url_sync(
    State(state): State<AppState>,
    Json(request): Json<OcrRequest>,
) -> Result<Json<OcrResponse>> {
    let started = Instant::now();
    match run_file_ocr(&state, &request).await {
        Ok(outcome) => {
            let processing_time = started.elapsed().as_secs_f64();
            info!("OCR completed in {:.2}s", processing_time);
            Ok(Json(OcrResponse::completed(
                outcome.text,
                processing_time,
                outcome.file_size,
                outcome.file_type,
            )))
        }
        Err(OcrApiError::Ocr(message)) => {
            error!("OCR failed: {}", message);
            Ok(Json(OcrResponse::failed(
                message,
                started.elapsed().as_secs_f64(),
            )))
        }
        Err(err) => Err(err),
    }
}

/// `POST /api/v1/ocr`
///
/// In-memory recognition. The document is fetched or decoded into a
/// buffer and handed to the engine without touching disk, so only
/// image payloads are supported. Engine failures are `500`.
#[utoipa::path(
    post,
    path = "/api/v1/ocr",
    tag = "ocr",
    operation_id = "recognize_in_memory",
    request_body = OcrRequest,
    responses(
        (status = 200, description = "Recognition result envelope", body = OcrResponse),
        (status = 400, description = "Invalid request, unreachable URL or undecodable base64"),
        (status = 500, description = "The engine could not process the image")
    )
)]
pub async fn recognize_in_memory(
    State(state): State<AppState>,
    Json(request): Json<OcrRequest>,
) -> Result<Json<OcrResponse>> {
    let started = Instant::now();
    let job = OcrJob::from_request(&request)?;
    match &job.source {
        DocumentSource::Url(url) => info!("starting OCR from URL: {}", url),
        DocumentSource::Base64(_) => info!("starting OCR from base64 image"),
    }

    let bytes = job.load_bytes(&state.fetcher).await?;
    let file_size = bytes.len() as u64;
    let file_type = job.source.kind();

    let text = state
        .engine
        .recognize_bytes(&bytes, job.task_type, job.page_num)
        .await?;

    let processing_time = started.elapsed().as_secs_f64();
    info!("OCR completed in {:.2}s", processing_time);
    Ok(Json(OcrResponse::completed(
        text,
        processing_time,
        file_size,
        file_type,
    )))
}

/// File formats and task types accepted by the OCR endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct SupportedFormatsResponse {
    pub supported_formats: FormatCatalog,
}

/// The catalog itself, grouped the way clients consume it.
#[derive(Debug, Serialize, ToSchema)]
pub struct FormatCatalog {
    /// Image extensions recognized directly.
    pub images: Vec<String>,
    /// Document extensions that go through page rasterization.
    pub documents: Vec<String>,
    /// Valid values for the `task_type` field.
    pub task_types: Vec<String>,
}

/// `GET /api/v1/ocr/supported-formats`
#[utoipa::path(
    get,
    path = "/api/v1/ocr/supported-formats",
    tag = "ocr",
    operation_id = "supported_formats",
    responses(
        (status = 200, description = "Accepted file formats and task types", body = SupportedFormatsResponse)
    )
)]
pub async fn supported_formats() -> Json<SupportedFormatsResponse> {
    Json(SupportedFormatsResponse {
        supported_formats: FormatCatalog {
            images: vec![
                ".jpg".to_string(),
                ".jpeg".to_string(),
                ".png".to_string(),
                ".tiff".to_string(),
                ".bmp".to_string(),
            ],
            documents: vec![".pdf".to_string()],
            task_types: vec!["default".to_string(), "structure".to_string()],
        },
    })
}
