use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("OCR error: {0}")]
    Ocr(String),
}

impl IntoResponse for OcrApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            OcrApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            OcrApiError::Fetch(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            OcrApiError::Decode(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            OcrApiError::Ocr(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, OcrApiError>;
