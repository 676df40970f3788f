//! Input Resolution Module
//!
//! Turns a wire-level OCR request into something the engine can consume:
//! validates the request into an [`OcrJob`], then materializes the document
//! either on disk ([`TempDocument`]) or as raw bytes for the diskless
//! variant. A document comes from exactly one place, a URL or an inline
//! base64 payload, and that choice is enforced structurally by
//! [`DocumentSource`].

mod fetch;
mod temp;

pub use fetch::UrlFetcher;
pub use temp::TempDocument;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use url::Url;

use crate::api::v1::dto::OcrRequest;
use crate::error::{OcrApiError, Result};
use crate::models::{extension_for_url, FileKind, TaskType};

/// Where the document bytes come from.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    Url(Url),
    Base64(String),
}

impl DocumentSource {
    /// Category reported to callers. Base64 payloads are always images.
    pub fn kind(&self) -> FileKind {
        match self {
            DocumentSource::Url(url) => FileKind::from_extension(extension_for_url(url.as_str())),
            DocumentSource::Base64(_) => FileKind::Image,
        }
    }
}

/// A validated OCR request, ready to be materialized and recognized.
#[derive(Debug, Clone)]
pub struct OcrJob {
    pub source: DocumentSource,
    pub task_type: TaskType,
    pub page_num: u32,
    pub authorization: Option<String>,
}

impl OcrJob {
    /// Validate a wire request. Checks run in a fixed order so callers get
    /// the same error regardless of how many fields are wrong. Empty strings
    /// count as absent.
    pub fn from_request(request: &OcrRequest) -> Result<Self> {
        let task_type = request
            .task_type
            .as_deref()
            .unwrap_or("default")
            .parse::<TaskType>()?;

        let page_num = request.page_num.unwrap_or(1);
        if page_num < 1 {
            return Err(OcrApiError::Validation(
                "page_num must be greater than 0".to_string(),
            ));
        }
        let page_num = u32::try_from(page_num)
            .map_err(|_| OcrApiError::Validation("page_num is too large".to_string()))?;

        let url = request.url.as_deref().filter(|s| !s.is_empty());
        let base64_image = request.base64_image.as_deref().filter(|s| !s.is_empty());
        let source = match (url, base64_image) {
            (None, None) => {
                return Err(OcrApiError::Validation(
                    "either url or base64Image must be provided".to_string(),
                ));
            }
            (Some(_), Some(_)) => {
                return Err(OcrApiError::Validation(
                    "only one of url or base64Image may be provided".to_string(),
                ));
            }
            (Some(url), None) => {
                let url = Url::parse(url)
                    .map_err(|e| OcrApiError::Validation(format!("invalid url: {e}")))?;
                DocumentSource::Url(url)
            }
            (None, Some(base64_image)) => DocumentSource::Base64(base64_image.to_string()),
        };

        Ok(Self {
            source,
            task_type,
            page_num,
            authorization: request.authorization.clone(),
        })
    }

    /// Stage the document in a temporary file, downloading or decoding as
    /// needed.
    pub async fn materialize(&self, fetcher: &UrlFetcher) -> Result<TempDocument> {
        match &self.source {
            DocumentSource::Url(url) => {
                fetcher
                    .download_to_temp(url, self.authorization.as_deref())
                    .await
            }
            DocumentSource::Base64(payload) => {
                let bytes = decode_base64_payload(payload)?;
                TempDocument::from_bytes(&bytes, ".jpg")
                    .map_err(|e| OcrApiError::Ocr(format!("failed to write temporary file: {e}")))
            }
        }
    }

    /// Fetch or decode the raw document bytes without touching disk.
    pub async fn load_bytes(&self, fetcher: &UrlFetcher) -> Result<Vec<u8>> {
        match &self.source {
            DocumentSource::Url(url) => {
                fetcher
                    .download_bytes(url, self.authorization.as_deref())
                    .await
            }
            DocumentSource::Base64(payload) => decode_base64_payload(payload),
        }
    }
}

/// Decode a base64 payload, tolerating a `data:` URL wrapper.
pub fn decode_base64_payload(payload: &str) -> Result<Vec<u8>> {
    let encoded = if payload.starts_with("data:") {
        match payload.split_once(',') {
            Some((_, rest)) => rest,
            None => {
                return Err(OcrApiError::Decode(
                    "failed to decode base64 image: data URL has no comma separator".to_string(),
                ));
            }
        }
    } else {
        payload
    };

    STANDARD
        .decode(encoded.trim())
        .map_err(|e| OcrApiError::Decode(format!("failed to decode base64 image: {e}")))
}
