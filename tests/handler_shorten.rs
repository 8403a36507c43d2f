mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use ttl_shortener::api::handlers::shorten_handler;
use ttl_shortener::domain::repositories::ShortenedUrlRepository;

fn server(state: ttl_shortener::state::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let (state, repository) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "ttl": 1 }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["alias"], "1xCrcw");
    assert_eq!(json["short_url"], "https://s.example.com/1xCrcw");
    assert_eq!(json["long_url"], "https://example.com");
    assert_eq!(json["ttl"], 1_704_153_600);

    assert_eq!(
        repository.get_by_alias("1xCrcw").await.unwrap(),
        Some("https://example.com".to_string())
    );
}

#[tokio::test]
async fn test_shorten_default_ttl_is_one_day() {
    let (state, _repository) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["ttl"], 1_704_153_600);
}

#[tokio::test]
async fn test_shorten_is_deterministic() {
    let (state, repository) = common::create_test_state();
    let server = server(state);

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://www.rust-lang.org", "ttl": 3 }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://www.rust-lang.org", "ttl": 5 }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["alias"], "b1q1lUv");
    assert_eq!(first["alias"], second["alias"]);
    assert_ne!(first["ttl"], second["ttl"]);
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_shorten_ttl_upper_bound_rejected() {
    let (state, repository) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "ttl": 30 }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["ttl"], 30);
    assert_eq!(json["error"]["details"]["upper_bound"], 30);
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_shorten_ttl_zero_rejected() {
    let (state, _repository) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "ttl": 0 }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (state, _repository) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not-a-url", "ttl": 1 }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_fractional_ttl_rejected() {
    let (state, repository) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "ttl": 1.5 }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid JSON body");
    assert!(json["error"]["details"]["reason"].is_string());
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_shorten_missing_url_rejected() {
    let (state, _repository) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "ttl": 1 }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_non_json_body_rejected() {
    let (state, _repository) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/api/shorten")
        .text("url=https://example.com")
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_unrepresentable_alias() {
    let (state, repository) = common::create_test_state();
    let server = server(state);

    // The digest of this URL contains a base-62 digit with no alias character
    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/0", "ttl": 1 }))
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "encoding_error");
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_shorten_store_failure() {
    let server = server(common::create_unavailable_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "ttl": 1 }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "repository_error");
}
