//! Request/response DTOs for the OCR API.
//!
//! These types define the wire format shared by the file-based and in-memory
//! server variants.

use serde::{Deserialize, Serialize};

use crate::models::FileKind;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Request body for the OCR endpoints.
///
/// Exactly one of `url` and `base64Image` must be set.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct OcrRequest {
    /// URL of the document to recognize.
    pub url: Option<String>,
    /// Base64-encoded image, with or without a `data:` URL prefix.
    #[serde(rename = "base64Image")]
    pub base64_image: Option<String>,
    /// Recognition mode: `"default"` or `"structure"`. Defaults to `"default"`.
    pub task_type: Option<String>,
    /// 1-based page number for PDFs. Defaults to 1.
    pub page_num: Option<i64>,
    /// Forwarded verbatim as the `Authorization` header when fetching by URL.
    pub authorization: Option<String>,
}

/// Query parameters for `GET /api/v1/`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
pub struct UrlOcrQuery {
    /// URL of the document to recognize.
    pub url: String,
    /// Recognition mode: `"default"` or `"structure"`.
    pub task_type: Option<String>,
    /// 1-based page number for PDFs.
    pub page_num: Option<i64>,
}

impl UrlOcrQuery {
    pub fn into_request(self) -> OcrRequest {
        OcrRequest {
            url: Some(self.url),
            task_type: self.task_type,
            page_num: self.page_num,
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

/// Full OCR result envelope.
///
/// Wire format on success:
/// ```json
/// { "success": true, "text": "…", "processing_time": 2.41,
///   "file_size": 102400, "file_type": "PDF" }
/// ```
/// and on an engine failure:
/// ```json
/// { "success": false, "error": "…", "processing_time": 0.87 }
/// ```
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct OcrResponse {
    /// Whether recognition produced text.
    pub success: bool,
    /// Recognized text; present iff `success` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Engine error message; present iff `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall-clock seconds from request entry to response assembly.
    pub processing_time: f64,
    /// Size of the fetched/decoded document in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Broad category of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileKind>,
}

impl OcrResponse {
    pub fn completed(text: String, processing_time: f64, file_size: u64, file_type: FileKind) -> Self {
        Self {
            success: true,
            text: Some(text),
            error: None,
            processing_time: round_secs(processing_time),
            file_size: Some(file_size),
            file_type: Some(file_type),
        }
    }

    pub fn failed(error: String, processing_time: f64) -> Self {
        Self {
            success: false,
            text: None,
            error: Some(error),
            processing_time: round_secs(processing_time),
            file_size: None,
            file_type: None,
        }
    }
}

/// Reduced result shape for `GET /api/v1/`: just the text, or just the
/// engine error, both at HTTP 200.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct UrlOcrResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UrlOcrResponse {
    pub fn text(text: String) -> Self {
        Self {
            text: Some(text),
            error: None,
        }
    }

    pub fn error(error: String) -> Self {
        Self {
            text: None,
            error: Some(error),
        }
    }
}

/// Round to two decimals, as the wire format reports seconds.
fn round_secs(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}
