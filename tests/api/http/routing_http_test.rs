//! Route matching, health and metrics endpoint tests

use super::{build_test_router, get_json, send_raw, TestAppState};
use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::Value;

#[tokio::test]
async fn test_unknown_endpoint_returns_404() {
    let app = build_test_router(TestAppState::new());

    let (status, body): (StatusCode, Option<Value>) =
        get_json(&app, "/api/v1/nonExistentEndpoint").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.unwrap()["message"].is_string());
}

#[rstest]
#[case(Method::DELETE, "/api/v1/genres/1/books/1")]
#[case(Method::PUT, "/api/v1/genres/1/books/1")]
#[case(Method::POST, "/api/v1/books")]
#[case(Method::POST, "/api/v1/reset")]
#[case(Method::PATCH, "/api/v1/genres/1")]
#[tokio::test]
async fn test_undeclared_method_returns_404(#[case] method: Method, #[case] path: &str) {
    let app = build_test_router(TestAppState::new());

    let (status, _) = send_raw(&app, method, path, None, &[]).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_test_router(TestAppState::new());

    let (status, body): (StatusCode, Option<Value>) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["status"], "healthy");
}

#[tokio::test]
async fn test_ready_endpoint() {
    let app = build_test_router(TestAppState::new());

    let (status, bytes) = send_raw(&app, Method::GET, "/ready", None, &[]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"ready");
}

#[tokio::test]
async fn test_metrics_endpoint_disabled_by_default() {
    let app = build_test_router(TestAppState::new());

    let (status, _) = send_raw(&app, Method::GET, "/metrics", None, &[]).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = build_test_router(TestAppState::new());

    let request = axum::http::Request::builder()
        .uri("/api/v1/books")
        .header("x-request-id", "trace-me")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "trace-me");
}
