use std::path::Path;

use tracing::{info, warn};

use crate::config::OcrConfig;
use crate::error::Result;
use crate::models::TaskType;

use super::client::TyphoonClient;
use super::pages;

/// Front door of the OCR pipeline: prepares one PNG page from whatever the
/// resolver staged, then sends it to Typhoon.
#[derive(Clone)]
pub struct OcrEngine {
    client: TyphoonClient,
}

impl OcrEngine {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let client = TyphoonClient::new(config)?;
        info!(model = %config.model, base_url = %config.base_url, "Typhoon OCR engine initialized");
        Ok(Self { client })
    }

    /// Recognize a staged document. PDFs are rasterized at the requested
    /// page; single images have no pages, so `page_num` is ignored for them.
    pub async fn recognize_file(
        &self,
        path: &Path,
        task_type: TaskType,
        page_num: u32,
    ) -> Result<String> {
        let png = if pages::is_pdf(path) {
            pages::render_pdf_page(path, page_num).await?
        } else {
            if page_num > 1 {
                warn!(page_num, "page_num ignored for single-image input");
            }
            pages::png_from_image_file(path)?
        };
        self.client.ocr(&png, task_type).await
    }

    /// Recognize in-memory image bytes without touching disk.
    pub async fn recognize_bytes(
        &self,
        bytes: &[u8],
        task_type: TaskType,
        page_num: u32,
    ) -> Result<String> {
        if page_num > 1 {
            warn!(page_num, "page_num ignored for single-image input");
        }
        let png = pages::png_from_image_bytes(bytes)?;
        self.client.ocr(&png, task_type).await
    }
}
