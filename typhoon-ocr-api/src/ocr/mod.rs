//! OCR Module
//!
//! Recognition is delegated to the Typhoon OCR API, an OpenAI-style
//! chat-completions endpoint that reads one page image per call:
//! - [`OcrEngine`] is the entry point used by the HTTP handlers
//! - `pages` turns staged documents into single PNG pages (poppler for
//!   PDFs, the `image` crate for everything else)
//! - [`TyphoonClient`] speaks the wire protocol and unwraps Typhoon's
//!   `natural_text` answer container
//! - [`prompts`] holds the per-task instruction templates

pub mod prompts;

mod client;
mod engine;
mod pages;

pub use client::TyphoonClient;
pub use engine::OcrEngine;
