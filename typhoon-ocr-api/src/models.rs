//! Domain types shared across the resolver, engine, and API layers.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::OcrApiError;

/// Extensions the service recognizes when inferring a type from a URL.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = [".pdf", ".jpg", ".jpeg", ".png", ".tiff", ".bmp"];

/// Recognition mode passed through to the Typhoon engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskType {
    #[default]
    Default,
    Structure,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Default => "default",
            TaskType::Structure => "structure",
        }
    }
}

impl FromStr for TaskType {
    type Err = OcrApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(TaskType::Default),
            "structure" => Ok(TaskType::Structure),
            _ => Err(OcrApiError::Validation(
                "task_type must be either 'default' or 'structure'".to_string(),
            )),
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad file category reported back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub enum FileKind {
    #[serde(rename = "PDF")]
    Pdf,
    Image,
    Unknown,
}

impl FileKind {
    /// Categorize a file extension (leading dot, any case).
    pub fn from_extension(extension: &str) -> Self {
        let extension = extension.to_ascii_lowercase();
        match extension.as_str() {
            ".pdf" => FileKind::Pdf,
            ".jpg" | ".jpeg" | ".png" | ".tiff" | ".bmp" => FileKind::Image,
            _ => FileKind::Unknown,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::Pdf => "PDF",
            FileKind::Image => "Image",
            FileKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Infer a file extension from a URL by suffix match against the supported
/// list. URLs that match nothing (including ones with query strings after the
/// file name) are assumed to point at a JPEG image.
pub fn extension_for_url(url: &str) -> &'static str {
    let lower = url.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .find(|ext| lower.ends_with(*ext))
        .copied()
        .unwrap_or(".jpg")
}
