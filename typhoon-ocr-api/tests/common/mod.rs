#![allow(dead_code)]

use serde_json::{json, Value};
use std::io::Cursor;

use typhoon_ocr_api::config::{Config, OcrConfig, ServerConfig};

/// Build a config pointing the engine at a mock chat-completions server.
pub fn test_config(engine_base_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8001,
        },
        ocr: OcrConfig {
            api_key: "test-key".to_string(),
            base_url: engine_base_url.to_string(),
            model: "typhoon-ocr-preview".to_string(),
        },
    }
}

/// A small but fully decodable PNG.
pub fn sample_png() -> Vec<u8> {
    let image = image::DynamicImage::new_rgb8(4, 4);
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, image::ImageFormat::Png)
        .expect("encode sample PNG");
    cursor.into_inner()
}

/// Generate a minimal well-formed PDF with the given number of blank
/// pages. Offsets in the xref table are computed, so strict readers
/// accept it too.
pub fn sample_pdf(page_count: usize) -> Vec<u8> {
    let kids: Vec<String> = (0..page_count)
        .map(|index| format!("{} 0 R", index + 3))
        .collect();

    let mut objects = vec![
        "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n".to_string(),
        format!(
            "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
            kids.join(" "),
            page_count
        ),
    ];
    for index in 0..page_count {
        objects.push(format!(
            "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 200 200] >>\nendobj\n",
            index + 3
        ));
    }

    let mut body = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::new();
    for object in &objects {
        offsets.push(body.len());
        body.extend_from_slice(object.as_bytes());
    }

    let xref_offset = body.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{:010} 00000 n \n", offset));
    }
    body.extend_from_slice(xref.as_bytes());
    body.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    body
}

/// Chat-completions body the engine answers with: the recognized text
/// wrapped in the `natural_text` JSON envelope, itself carried as a
/// string in the message content.
pub fn engine_reply(text: &str) -> Value {
    json!({
        "choices": [
            {
                "message": {
                    "content": json!({ "natural_text": text }).to_string()
                }
            }
        ]
    })
}
