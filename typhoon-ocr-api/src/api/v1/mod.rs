pub mod dto;
pub mod handlers;
pub mod openapi;
pub mod router;

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::api::routes::{create_memory_router, create_router};
    use crate::api::state::{AppState, ServerMode};
    use crate::config::{Config, OcrConfig, ServerConfig};

    fn test_state(mode: ServerMode) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8001,
            },
            ocr: OcrConfig {
                api_key: "test-key".to_string(),
                base_url: "http://127.0.0.1:9".to_string(),
                model: "typhoon-ocr-preview".to_string(),
            },
        };

        AppState::new(config, mode).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn root_describes_the_service() {
        let app = create_router(test_state(ServerMode::Synchronous));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Typhoon OCR API Server");
        assert_eq!(json["version"], "1.0.0");
        assert!(json["endpoints"].get("POST /api/v1/ocr/url/sync").is_some());
        assert!(json["endpoints"].get("GET /api/v1/").is_some());
    }

    #[tokio::test]
    async fn memory_root_advertises_the_buffered_route() {
        let app = create_memory_router(test_state(ServerMode::InMemory));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["endpoints"].get("POST /api/v1/ocr").is_some());
        assert!(json["endpoints"].get("POST /api/v1/ocr/url/sync").is_none());
    }

    #[tokio::test]
    async fn health_reports_key_and_mode() {
        let app = create_router(test_state(ServerMode::Synchronous));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["api_key_configured"], true);
        assert_eq!(json["mode"], "synchronous");
    }

    #[tokio::test]
    async fn memory_health_reports_its_mode() {
        let app = create_memory_router(test_state(ServerMode::InMemory));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["mode"], "in-memory");
    }

    #[tokio::test]
    async fn missing_source_is_rejected() {
        let app = create_router(test_state(ServerMode::Synchronous));

        let response = app
            .oneshot(post_json("/api/v1/ocr/url/sync", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "either url or base64Image must be provided");
        assert_eq!(json["code"], 400);
    }

    #[tokio::test]
    async fn ambiguous_source_is_rejected() {
        let app = create_router(test_state(ServerMode::Synchronous));

        let response = app
            .oneshot(post_json(
                "/api/v1/ocr/url/sync",
                json!({
                    "url": "http://example.com/scan.png",
                    "base64Image": "aGVsbG8="
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "only one of url or base64Image may be provided"
        );
    }

    #[tokio::test]
    async fn unknown_task_type_is_rejected_before_the_source() {
        let app = create_router(test_state(ServerMode::Synchronous));

        let response = app
            .oneshot(post_json(
                "/api/v1/ocr/url/sync",
                json!({ "task_type": "fancy" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "task_type must be either 'default' or 'structure'"
        );
    }

    #[tokio::test]
    async fn zero_page_num_is_rejected() {
        let app = create_router(test_state(ServerMode::Synchronous));

        let response = app
            .oneshot(post_json(
                "/api/v1/ocr/url/sync",
                json!({ "url": "http://example.com/doc.pdf", "page_num": 0 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "page_num must be greater than 0");
    }

    #[tokio::test]
    async fn undecodable_base64_is_rejected() {
        let app = create_router(test_state(ServerMode::Synchronous));

        let response = app
            .oneshot(post_json(
                "/api/v1/ocr/url/sync",
                json!({ "base64Image": "!!!not base64!!!" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let message = json["error"].as_str().unwrap();
        assert!(message.starts_with("failed to decode base64 image"), "{message}");
    }

    #[tokio::test]
    async fn get_route_requires_a_url() {
        let app = create_router(test_state(ServerMode::Synchronous));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_route_rejects_bad_urls() {
        let app = create_router(test_state(ServerMode::Synchronous));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/?url=not-a-url")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let message = json["error"].as_str().unwrap();
        assert!(message.starts_with("invalid url"), "{message}");
    }

    #[tokio::test]
    async fn memory_router_drops_the_file_routes() {
        let app = create_memory_router(test_state(ServerMode::InMemory));

        let response = app
            .oneshot(post_json("/api/v1/ocr/url/sync", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn memory_route_validates_like_the_sync_one() {
        let app = create_memory_router(test_state(ServerMode::InMemory));

        let response = app
            .oneshot(post_json("/api/v1/ocr", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "either url or base64Image must be provided");
    }

    #[tokio::test]
    async fn supported_formats_lists_the_catalog() {
        let app = create_router(test_state(ServerMode::Synchronous));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/ocr/supported-formats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let formats = &json["supported_formats"];
        assert_eq!(formats["documents"], json!([".pdf"]));
        assert_eq!(formats["task_types"], json!(["default", "structure"]));
        assert!(
            formats["images"]
                .as_array()
                .unwrap()
                .contains(&json!(".png"))
        );
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = create_router(test_state(ServerMode::Synchronous));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["info"]["title"], "Typhoon OCR API");
        assert!(json["paths"].get("/api/v1/ocr/url/sync").is_some());
    }
}
