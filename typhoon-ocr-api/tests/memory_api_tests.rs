mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use typhoon_ocr_api::api::{create_memory_router, AppState, ServerMode};

use common::{engine_reply, sample_pdf, sample_png, test_config};

fn app(engine_base_url: &str) -> axum::Router {
    let state = AppState::new(test_config(engine_base_url), ServerMode::InMemory)
        .expect("build app state");
    create_memory_router(state)
}

fn post_ocr(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/ocr")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn mount_engine(server: &MockServer, reply: ResponseTemplate, expected: u64) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(reply)
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn memory_recognizes_a_base64_png() {
    let engine = MockServer::start().await;

    let png = sample_png();
    mount_engine(
        &engine,
        ResponseTemplate::new(200).set_body_json(engine_reply("buffered text")),
        1,
    )
    .await;

    let response = app(&engine.uri())
        .oneshot(post_ocr(json!({ "base64Image": STANDARD.encode(&png) })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["text"], "buffered text");
    assert_eq!(body["file_size"], png.len() as u64);
    assert_eq!(body["file_type"], "Image");
}

#[tokio::test]
async fn memory_recognizes_a_url_image() {
    let engine = MockServer::start().await;
    let documents = MockServer::start().await;

    let png = sample_png();
    Mock::given(method("GET"))
        .and(path("/scan.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(png.clone(), "image/png"))
        .mount(&documents)
        .await;
    mount_engine(
        &engine,
        ResponseTemplate::new(200).set_body_json(engine_reply("url text")),
        1,
    )
    .await;

    let response = app(&engine.uri())
        .oneshot(post_ocr(
            json!({ "url": format!("{}/scan.png", documents.uri()) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["text"], "url text");
    assert_eq!(body["file_size"], png.len() as u64);
    assert_eq!(body["file_type"], "Image");
}

#[tokio::test]
async fn memory_engine_failure_is_internal_error() {
    let engine = MockServer::start().await;

    mount_engine(
        &engine,
        ResponseTemplate::new(500).set_body_string("model exploded"),
        1,
    )
    .await;

    let response = app(&engine.uri())
        .oneshot(post_ocr(
            json!({ "base64Image": STANDARD.encode(sample_png()) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("API request failed"), "{message}");
    assert_eq!(body["code"], 500);
}

#[tokio::test]
async fn memory_unreadable_bytes_are_internal_error() {
    let engine = MockServer::start().await;
    mount_engine(&engine, ResponseTemplate::new(200), 0).await;

    let response = app(&engine.uri())
        .oneshot(post_ocr(
            json!({ "base64Image": STANDARD.encode(b"junk bytes") }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("unreadable image"), "{message}");
}

#[tokio::test]
async fn memory_pdf_bytes_are_internal_error() {
    let engine = MockServer::start().await;
    mount_engine(&engine, ResponseTemplate::new(200), 0).await;

    let response = app(&engine.uri())
        .oneshot(post_ocr(
            json!({ "base64Image": STANDARD.encode(sample_pdf(1)) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("unreadable image"), "{message}");
}

#[tokio::test]
async fn memory_fetch_failure_is_bad_request() {
    let engine = MockServer::start().await;
    let documents = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&documents)
        .await;
    mount_engine(&engine, ResponseTemplate::new(200), 0).await;

    let response = app(&engine.uri())
        .oneshot(post_ocr(
            json!({ "url": format!("{}/missing.png", documents.uri()) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("failed to download file"), "{message}");
}

#[tokio::test]
async fn memory_validation_failure_is_bad_request() {
    let engine = MockServer::start().await;
    mount_engine(&engine, ResponseTemplate::new(200), 0).await;

    let response = app(&engine.uri())
        .oneshot(post_ocr(json!({ "task_type": "default" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "either url or base64Image must be provided");
}
