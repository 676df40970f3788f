//! Command-line client that prints the OCR result as a single JSON
//! object, `{"text": ...}` on success or `{"error": ...}` otherwise.

use clap::Parser;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "extract-ocr-json")]
#[command(about = "Recognize a document or image URL and print the result as JSON")]
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

async fn recognize(endpoint: &str, payload: &Value) -> Value {
    let client = reqwest::Client::new();
    let response = match client.post(endpoint).json(payload).send().await {
        Ok(response) => response,
        Err(e) => return json!({ "error": e.to_string() }),
    };

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return json!({ "error": format!("HTTP Error: {}", status.as_u16()) });
    }

    let data: Value = match response.json().await {
        Ok(data) => data,
        Err(e) => return json!({ "error": e.to_string() }),
    };

    if data["success"].as_bool().unwrap_or(false) {
        json!({ "text": data["text"] })
    } else {
        json!({ "error": data["error"] })
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

    let result = recognize(&endpoint, &payload).await;
    match serde_json::to_string_pretty(&result) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => println!("{{\"error\": \"{}\"}}", e),
    }
}
