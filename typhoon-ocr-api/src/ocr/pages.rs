//! Page preparation: turn a staged document into one PNG-encoded page.
//!
//! PDFs are paged with poppler's CLI tools (`pdfinfo` for the page count,
//! `pdftocairo` to rasterize the requested page). Anything else is decoded
//! with the `image` crate and re-encoded as PNG.

use std::io::Cursor;
use std::path::Path;
use std::process::Output;

use image::ImageFormat;
use tokio::process::Command;
use tracing::debug;

use crate::error::{OcrApiError, Result};

/// Rasterization resolution for PDF pages.
const RASTER_DPI: u32 = 150;

/// Decide whether a staged file is a PDF. Content sniffing wins; the file
/// extension is only a fallback for unrecognized content.
pub(crate) fn is_pdf(path: &Path) -> bool {
    match infer::get_from_path(path) {
        Ok(Some(kind)) => kind.mime_type() == "application/pdf",
        Ok(None) | Err(_) => path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf")),
    }
}

/// Number of pages in a PDF, via `pdfinfo`.
pub(crate) async fn pdf_page_count(path: &Path) -> Result<u32> {
    let output = Command::new("pdfinfo")
        .arg(path)
        .output()
        .await
        .map_err(|e| OcrApiError::Ocr(format!("failed to run pdfinfo: {e}")))?;
    check_command("pdfinfo", &output)?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_pdfinfo_pages(&stdout)
        .ok_or_else(|| OcrApiError::Ocr("pdfinfo output has no page count".to_string()))
}

/// Pull the `Pages:` property out of `pdfinfo` output.
fn parse_pdfinfo_pages(output: &str) -> Option<u32> {
    output
        .lines()
        .find_map(|line| line.strip_prefix("Pages:"))
        .and_then(|rest| rest.trim().parse().ok())
}

/// Rasterize one page of a PDF to PNG. `page_num` is 1-based; a page beyond
/// the end of the document is an error, as the engine reports it.
pub(crate) async fn render_pdf_page(path: &Path, page_num: u32) -> Result<Vec<u8>> {
    let total_pages = pdf_page_count(path).await?;
    if page_num > total_pages {
        return Err(OcrApiError::Ocr(format!(
            "page {page_num} is out of range: document has {total_pages} page(s)"
        )));
    }

    let tmpdir = tempfile::TempDir::with_prefix("typhoon-ocr-pages")
        .map_err(|e| OcrApiError::Ocr(format!("failed to create scratch directory: {e}")))?;
    let out_prefix = tmpdir.path().join("page");

    let output = Command::new("pdftocairo")
        .arg("-png")
        .arg("-singlefile")
        .arg("-r")
        .arg(RASTER_DPI.to_string())
        .arg("-f")
        .arg(page_num.to_string())
        .arg("-l")
        .arg(page_num.to_string())
        .arg(path)
        .arg(&out_prefix)
        .output()
        .await
        .map_err(|e| OcrApiError::Ocr(format!("failed to run pdftocairo: {e}")))?;
    check_command("pdftocairo", &output)?;

    let png_path = out_prefix.with_extension("png");
    std::fs::read(&png_path)
        .map_err(|e| OcrApiError::Ocr(format!("failed to read rendered page: {e}")))
}

/// Decode an image file and re-encode it as PNG for the engine.
pub(crate) fn png_from_image_file(path: &Path) -> Result<Vec<u8>> {
    let image =
        image::open(path).map_err(|e| OcrApiError::Ocr(format!("unreadable image: {e}")))?;
    encode_png(&image)
}

/// Decode in-memory image bytes and re-encode them as PNG.
pub(crate) fn png_from_image_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| OcrApiError::Ocr(format!("unreadable image: {e}")))?;
    encode_png(&image)
}

fn encode_png(image: &image::DynamicImage) -> Result<Vec<u8>> {
    let mut png_bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| OcrApiError::Ocr(format!("failed to encode page as PNG: {e}")))?;
    Ok(png_bytes)
}

fn check_command(command_name: &str, output: &Output) -> Result<()> {
    let stderr = String::from_utf8_lossy(&output.stderr);
    debug!(
        command_name = command_name,
        status = %output.status,
        stderr = %stderr,
        "command finished"
    );

    if output.status.success() {
        return Ok(());
    }

    let detail = stderr.trim();
    if detail.is_empty() {
        Err(OcrApiError::Ocr(format!(
            "{command_name} failed with {}",
            output.status
        )))
    } else {
        Err(OcrApiError::Ocr(format!(
            "{command_name} failed: {detail}"
        )))
    }
}
