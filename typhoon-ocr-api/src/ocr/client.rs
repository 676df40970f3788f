use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::OcrConfig;
use crate::error::{OcrApiError, Result};
use crate::models::TaskType;
use crate::ocr::prompts::prompt_for;

/// Client for the Typhoon OCR chat-completions endpoint.
#[derive(Clone, Debug)]
pub struct TyphoonClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: String,
}

impl TyphoonClient {
    /// Build a client from the OCR section of the config. No request timeout
    /// is set; recognition of large pages can legitimately take minutes.
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| OcrApiError::Ocr(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    /// Recognize one PNG-encoded page. Single attempt, no retries.
    pub async fn ocr(&self, png_bytes: &[u8], task_type: TaskType) -> Result<String> {
        let base64_image = STANDARD.encode(png_bytes);
        let data_url = format!("data:image/png;base64,{base64_image}");

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: prompt_for(task_type).to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: data_url },
                    },
                ],
            }],
            max_tokens: 16384,
            temperature: 0.1,
            top_p: 0.6,
        };

        let content = self.make_request(&request).await?;
        Ok(parse_natural_text(&content))
    }

    async fn make_request(&self, request: &ChatRequest) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| OcrApiError::Ocr(format!("API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OcrApiError::Ocr(format!(
                "API request failed: {status} - {body}"
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| OcrApiError::Ocr(format!("Failed to parse response: {e}")))?;

        chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| OcrApiError::Ocr("No response from API".to_string()))
    }
}

/// Typhoon answers with a JSON object holding a `natural_text` key. Unwrap
/// it when present; fall back to the raw completion otherwise.
fn parse_natural_text(content: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(content) {
        Ok(value) => match value.get("natural_text").and_then(|t| t.as_str()) {
            Some(text) => text.to_string(),
            None => content.to_string(),
        },
        Err(_) => content.to_string(),
    }
}
