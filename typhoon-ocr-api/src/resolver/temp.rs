//! Temporary on-disk staging for documents handed to the OCR engine.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::warn;

use crate::models::FileKind;

/// A document staged in a temporary file. The file is deleted when the
/// value is dropped, including when OCR fails partway through.
#[derive(Debug)]
pub struct TempDocument {
    /// Released by [`Drop`].
    file: Option<NamedTempFile>,
    path: PathBuf,
    size: u64,
    extension: String,
}

impl TempDocument {
    /// Write `bytes` to a fresh temporary file carrying `extension` so that
    /// type detection by suffix still works.
    pub fn from_bytes(bytes: &[u8], extension: &str) -> io::Result<Self> {
        let mut file = create_temp_file(extension)?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self::from_file(file, bytes.len() as u64, extension))
    }

    /// Wrap an already-written temporary file.
    pub(crate) fn from_file(file: NamedTempFile, size: u64, extension: &str) -> Self {
        let path = file.path().to_owned();
        Self {
            file: Some(file),
            path,
            size,
            extension: extension.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the staged document in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Category reported back to callers, derived from the extension.
    pub fn kind(&self) -> FileKind {
        FileKind::from_extension(&self.extension)
    }
}

/// Create an empty temporary file whose name ends in `extension`.
pub(crate) fn create_temp_file(extension: &str) -> io::Result<NamedTempFile> {
    tempfile::Builder::new()
        .prefix("typhoon-ocr-")
        .suffix(extension)
        .tempfile()
}

impl Drop for TempDocument {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            let path = file.path().to_owned();
            if let Err(err) = file.close() {
                warn!(
                    path = %path.display(),
                    "failed to delete temporary document: {}",
                    err
                );
            }
        }
    }
}
