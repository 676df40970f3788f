use std::env;

use anyhow::anyhow;

pub const DEFAULT_TYPHOON_BASE_URL: &str = "https://api.opentyphoon.ai/v1";
pub const DEFAULT_TYPHOON_MODEL: &str = "typhoon-ocr-preview";

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct OcrConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl Config {
    /// Build the configuration from the process environment, failing when the
    /// Typhoon API key is missing.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("TYPHOON_OCR_API_KEY").map_err(|_| {
            anyhow!("TYPHOON_OCR_API_KEY is not set. Add it to config.env or export it, e.g. TYPHOON_OCR_API_KEY=your_api_key_here")
        })?;

        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("PORT", 8001),
            },
            ocr: OcrConfig {
                api_key,
                base_url: env::var("TYPHOON_OCR_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_TYPHOON_BASE_URL.to_string()),
                model: env::var("TYPHOON_OCR_MODEL")
                    .unwrap_or_else(|_| DEFAULT_TYPHOON_MODEL.to_string()),
            },
        })
    }
}
