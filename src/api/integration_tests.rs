use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::api::server::{build_router, AppState};
use crate::config::Config;
use crate::storage::MemoryHistoryStore;
use crate::transforms::stub::FailingTransform;
use crate::transforms::TransformRegistry;

fn test_router() -> Router {
    let cfg = Config::default();
    let registry = TransformRegistry::from_config(&cfg).unwrap();
    let state = AppState::from_config(&cfg, Arc::new(MemoryHistoryStore::new()), registry);
    build_router(Arc::new(state))
}

fn test_router_with_failing_transform() -> Router {
    let cfg = Config::default();
    let registry = TransformRegistry::from_config(&cfg)
        .unwrap()
        .with_transform("failing", Arc::new(FailingTransform::new("failing".into())));
    let state = AppState::from_config(&cfg, Arc::new(MemoryHistoryStore::new()), registry);
    build_router(Arc::new(state))
}

async fn send_json(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn create_reversal(router: &Router, text: &str) -> Value {
    let (status, body) = send_json(
        router.clone(),
        Method::POST,
        "/api/reversed-texts",
        Some(json!({ "originalText": text })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn post_reversed_texts_reverses_and_saves() {
    let router = test_router();

    let body = create_reversal(&router, "hello world").await;

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["reversedText"], json!("olleh dlrow"));
    assert!(body["data"]["id"].is_string());
    assert_eq!(body["data"]["original_text"], json!("hello world"));
    assert_eq!(body["data"]["reversed_text"], json!("olleh dlrow"));
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn post_reversed_texts_handles_punctuation() {
    let router = test_router();

    let body = create_reversal(&router, "Hello, world!").await;
    assert_eq!(body["reversedText"], json!("olleH, dlrow!"));
}

#[tokio::test]
async fn post_reversed_texts_handles_multiline_text() {
    let router = test_router();

    let body = create_reversal(&router, "line1\nline2\nline3").await;
    assert_eq!(body["reversedText"], json!("1enil\n2enil\n3enil"));
}

#[tokio::test]
async fn post_reversed_texts_rejects_empty_text() {
    let router = test_router();

    let (status, body) = send_json(
        router,
        Method::POST,
        "/api/reversed-texts",
        Some(json!({ "originalText": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("originalText cannot be empty"));
}

#[tokio::test]
async fn post_reversed_texts_rejects_whitespace_only_text() {
    let router = test_router();

    let (status, body) = send_json(
        router,
        Method::POST,
        "/api/reversed-texts",
        Some(json!({ "originalText": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("originalText cannot be empty"));
}

#[tokio::test]
async fn post_reversed_texts_rejects_missing_original_text() {
    let router = test_router();

    let (status, body) = send_json(
        router,
        Method::POST,
        "/api/reversed-texts",
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("originalText is required"));
}

#[tokio::test]
async fn post_reversed_texts_rejects_non_string_original_text() {
    let router = test_router();

    let (status, body) = send_json(
        router,
        Method::POST,
        "/api/reversed-texts",
        Some(json!({ "originalText": 12345 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("must be a string"));
}

#[tokio::test]
async fn post_reversed_texts_rejects_oversized_text() {
    let router = test_router();

    let oversized = "a".repeat(5001);
    let (status, body) = send_json(
        router,
        Method::POST,
        "/api/reversed-texts",
        Some(json!({ "originalText": oversized })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("maximum length"));
}

#[tokio::test]
async fn get_reversed_texts_returns_recent_reversals_newest_first() {
    let router = test_router();

    create_reversal(&router, "first entry").await;
    create_reversal(&router, "second entry").await;

    let (status, body) = send_json(
        router,
        Method::GET,
        "/api/reversed-texts?limit=10",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let data = body["data"].as_array().unwrap();
    assert_eq!(body["count"], json!(data.len()));
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["original_text"], json!("second entry"));
    assert_eq!(data[1]["original_text"], json!("first entry"));

    for item in data {
        assert!(item["id"].is_string());
        assert!(item["original_text"].is_string());
        assert!(item["reversed_text"].is_string());
        assert!(item["created_at"].is_string());
    }
}

#[tokio::test]
async fn get_reversed_texts_respects_the_limit_parameter() {
    let router = test_router();

    for text in ["one", "two", "three"] {
        create_reversal(&router, text).await;
    }

    let (status, body) =
        send_json(router, Method::GET, "/api/reversed-texts?limit=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn get_reversed_texts_clamps_out_of_bounds_limits() {
    let router = test_router();

    create_reversal(&router, "only entry").await;

    // A zero limit is clamped up to one rather than rejected.
    let (status, body) =
        send_json(router.clone(), Method::GET, "/api/reversed-texts?limit=0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = send_json(
        router,
        Method::GET,
        "/api/reversed-texts?limit=100000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delete_reversed_texts_removes_a_reversal() {
    let router = test_router();

    let created = create_reversal(&router, "test for delete").await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        router.clone(),
        Method::DELETE,
        &format!("/api/reversed-texts/{}", id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    // The record is gone, so a second delete reports not found.
    let (status, body) = send_json(
        router.clone(),
        Method::DELETE,
        &format!("/api/reversed-texts/{}", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));

    let (_, body) = send_json(router, Method::GET, "/api/reversed-texts", None).await;
    assert_eq!(body["count"], json!(0));
}

#[tokio::test]
async fn delete_reversed_texts_rejects_malformed_ids() {
    let router = test_router();

    let (status, body) = send_json(
        router,
        Method::DELETE,
        "/api/reversed-texts/not-a-uuid",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("not a valid"));
}

#[tokio::test]
async fn invoke_dispatches_transforms_by_name() {
    let router = test_router();

    let (status, body) = send_json(
        router,
        Method::POST,
        "/api/invoke",
        Some(json!({
            "functionName": "reverse_words",
            "payload": { "text": "Hello" },
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["functionName"], json!("reverse_words"));
    assert_eq!(body["data"]["output"], json!("olleH"));
}

#[tokio::test]
async fn invoke_accepts_bare_string_payloads() {
    let router = test_router();

    let (status, body) = send_json(
        router,
        Method::POST,
        "/api/invoke",
        Some(json!({
            "functionName": "reverse_words",
            "payload": "don't",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["output"], json!("t'nod"));
}

#[tokio::test]
async fn invoke_requires_a_function_name() {
    let router = test_router();

    let (status, body) = send_json(
        router,
        Method::POST,
        "/api/invoke",
        Some(json!({ "payload": "text" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Function name is required"));
}

#[tokio::test]
async fn invoke_rejects_unknown_functions() {
    let router = test_router();

    let (status, body) = send_json(
        router,
        Method::POST,
        "/api/invoke",
        Some(json!({
            "functionName": "uppercase",
            "payload": "text",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Unknown function"));
}

#[tokio::test]
async fn invoke_rejects_malformed_payloads() {
    let router = test_router();

    let (status, body) = send_json(
        router,
        Method::POST,
        "/api/invoke",
        Some(json!({
            "functionName": "reverse_words",
            "payload": 42,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("payload must be"));
}

#[tokio::test]
async fn invoke_surfaces_transform_errors() {
    let router = test_router_with_failing_transform();

    let (status, body) = send_json(
        router,
        Method::POST,
        "/api/invoke",
        Some(json!({
            "functionName": "failing",
            "payload": "text",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("always fails"));
}

#[tokio::test]
async fn invoke_usage_hint_answers_get() {
    let router = test_router();

    let (status, body) = send_json(router, Method::GET, "/api/invoke", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Use POST"));
    assert_eq!(body["example"]["functionName"], json!("reverse_words"));
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let router = test_router();

    let (status, body) = send_json(router, Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}
