use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::ocr::OcrEngine;
use crate::resolver::UrlFetcher;

/// Which server variant is running. Reported by `/health` and the metadata
/// endpoint, and used to pick the informational payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerMode {
    /// Documents are staged in temporary files before recognition.
    Synchronous,
    /// Documents are held in memory end to end, never written to disk.
    InMemory,
}

impl ServerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerMode::Synchronous => "synchronous",
            ServerMode::InMemory => "in-memory",
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: UrlFetcher,
    pub engine: OcrEngine,
    pub mode: ServerMode,
}

impl AppState {
    pub fn new(config: Config, mode: ServerMode) -> Result<Self> {
        let engine = OcrEngine::new(&config.ocr)?;
        Ok(Self {
            config: Arc::new(config),
            fetcher: UrlFetcher::new(),
            engine,
            mode,
        })
    }
}
