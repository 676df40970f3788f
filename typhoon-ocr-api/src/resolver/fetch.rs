//! Download documents over HTTP into temporary files or memory.

use std::io::Write;

use futures::StreamExt;
use reqwest::Response;
use tracing::{error, info};
use url::Url;

use crate::error::{OcrApiError, Result};
use crate::models::extension_for_url;
use crate::resolver::temp::{self, TempDocument};

#[derive(Clone)]
pub struct UrlFetcher {
    http_client: reqwest::Client,
}

impl UrlFetcher {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .user_agent("TyphoonOcrApi/1.0")
                .build()
                .unwrap_or_default(),
        }
    }

    /// Download `url` into a temporary file, streaming the body to disk. The
    /// file keeps an extension inferred from the URL so the engine can tell
    /// PDFs from images.
    pub async fn download_to_temp(
        &self,
        url: &Url,
        authorization: Option<&str>,
    ) -> Result<TempDocument> {
        let response = self.get(url, authorization).await?;
        let extension = extension_for_url(url.as_str());

        let mut file = temp::create_temp_file(extension)
            .map_err(|e| OcrApiError::Ocr(format!("failed to create temporary file: {e}")))?;
        let mut size: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| self.download_error(url, e))?;
            file.write_all(&chunk)
                .map_err(|e| OcrApiError::Ocr(format!("failed to write temporary file: {e}")))?;
            size += chunk.len() as u64;
        }
        file.flush()
            .map_err(|e| OcrApiError::Ocr(format!("failed to write temporary file: {e}")))?;

        let doc = TempDocument::from_file(file, size, extension);
        info!(
            path = %doc.path().display(),
            size = doc.size(),
            "downloaded document"
        );
        Ok(doc)
    }

    /// Download `url` fully into memory, for the diskless server variant.
    pub async fn download_bytes(&self, url: &Url, authorization: Option<&str>) -> Result<Vec<u8>> {
        let response = self.get(url, authorization).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.download_error(url, e))?;
        info!(url = %url, size = bytes.len(), "downloaded document");
        Ok(bytes.to_vec())
    }

    async fn get(&self, url: &Url, authorization: Option<&str>) -> Result<Response> {
        let mut request = self.http_client.get(url.clone());
        if let Some(authorization) = authorization {
            request = request.header(reqwest::header::AUTHORIZATION, authorization);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.download_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            error!("download of {} returned HTTP {}", url, status);
            return Err(OcrApiError::Fetch(format!(
                "failed to download file: HTTP {status}"
            )));
        }
        Ok(response)
    }

    fn download_error(&self, url: &Url, err: reqwest::Error) -> OcrApiError {
        error!("download of {} failed: {}", url, err);
        OcrApiError::Fetch(format!("failed to download file: {err}"))
    }
}

impl Default for UrlFetcher {
    fn default() -> Self {
        Self::new()
    }
}
