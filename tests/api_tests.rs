//! Integration tests for the HTTP surface.
//!
//! The router is exercised in-process via axum-test; no listener is bound.

use axum_test::TestServer;
use futures::future::join_all;

fn build_test_app() -> TestServer {
    TestServer::new(steady::routes::create_router()).unwrap()
}

#[tokio::test]
async fn root_returns_fixed_message() {
    let server = build_test_app();

    let resp = server.get("/").await;
    resp.assert_status_ok();
    resp.assert_json(&serde_json::json!({ "message": "Docker!" }));
}

#[tokio::test]
async fn health_returns_ok_payload() {
    let server = build_test_app();

    let resp = server.get("/health/").await;
    resp.assert_status_ok();
    resp.assert_json(&serde_json::json!({ "status": "OK" }));
}

#[tokio::test]
async fn health_works_without_trailing_slash() {
    let server = build_test_app();

    let resp = server.get("/health").await;
    resp.assert_status_ok();
    resp.assert_json(&serde_json::json!({ "status": "OK" }));
}

#[tokio::test]
async fn health_status_field_is_nonempty_string() {
    let server = build_test_app();

    let resp = server.get("/health/").await;
    let body: serde_json::Value = resp.json();
    let status = body["status"].as_str().expect("status must be a string");
    assert!(!status.is_empty());
}

#[tokio::test]
async fn cors_preflight_allows_arbitrary_origin_with_credentials() {
    let server = build_test_app();

    let resp = server
        .method(axum::http::Method::OPTIONS, "/health/")
        .add_header("Origin", "https://dashboard.example.com")
        .add_header("Access-Control-Request-Method", "GET")
        .await;

    assert!(resp.status_code().is_success());
    // Credentials rule out a wildcard, so the origin must be mirrored back.
    assert_eq!(
        resp.header("access-control-allow-origin"),
        "https://dashboard.example.com"
    );
    assert_eq!(resp.header("access-control-allow-credentials"), "true");
}

#[tokio::test]
async fn unknown_path_returns_not_found() {
    let server = build_test_app();

    let resp = server.get("/nope").await;
    resp.assert_status_not_found();
}

#[tokio::test]
async fn concurrent_health_checks_all_return_fixed_payload() {
    let server = build_test_app();

    let responses = join_all((0..100).map(|_| async { server.get("/health/").await })).await;

    for resp in responses {
        resp.assert_status_ok();
        resp.assert_json(&serde_json::json!({ "status": "OK" }));
    }
}
