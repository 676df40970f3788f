//! Command-line client that prints recognized text for a URL.
//!
//! Talks to a locally running synchronous server and reshapes the
//! response envelope into plain lines. Exits 0 even when recognition
//! fails so shell pipelines see the message instead of a crash.

use clap::Parser;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "extract-ocr-text")]
#[command(about = "Recognize a document or image URL and print the text")]
struct Args {
    /// Document or image URL to recognize
    url: String,

    /// OCR task type: "default" or "structure"
    #[arg(default_value = "default")]
    task_type: String,

    /// 1-based page number for PDF documents
    #[arg(default_value_t = 1)]
    page_num: u32,

    /// Server port, overriding the PORT environment variable
    #[arg(long)]
    port: Option<u16>,
}

async fn recognize(endpoint: &str, payload: &Value) -> String {
    let client = reqwest::Client::new();
    let response = match client.post(endpoint).json(payload).send().await {
        Ok(response) => response,
        Err(e) => return format!("Error: {}", e),
    };

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return format!("HTTP Error: {}", status.as_u16());
    }

    let data: Value = match response.json().await {
        Ok(data) => data,
        Err(e) => return format!("Error: {}", e),
    };

    if data["success"].as_bool().unwrap_or(false) {
        data["text"].as_str().unwrap_or_default().to_string()
    } else {
        format!("Error: {}", data["error"].as_str().unwrap_or("unknown error"))
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    dotenvy::from_filename("config.env").ok();

    let port = args.port.unwrap_or_else(|| {
        std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8001)
    });
    let endpoint = format!("http://localhost:{}/api/v1/ocr/url/sync", port);

    let payload = json!({
        "url": args.url,
        "task_type": args.task_type,
        "page_num": args.page_num,
    });

    println!("Recognizing: {}", args.url);
    println!("{}", recognize(&endpoint, &payload).await);
}
