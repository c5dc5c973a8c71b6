use std::path::PathBuf;
use std::sync::Arc;

use protocol::{ErrorBody, Submission};
use serde_json::json;

use super::*;
use crate::state::test_helpers::{self, FailingStore};

// =============================================================================
// Helpers
// =============================================================================

/// Serve `app` on an ephemeral port and return its base URL.
async fn spawn_app(state: AppState, config: ServerConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let router = app(state, &config);
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

async fn spawn_default() -> String {
    spawn_app(test_helpers::test_app_state(), ServerConfig::default()).await
}

fn static_dir_with_index(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rsvp-static-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create static dir");
    std::fs::write(dir.join("index.html"), "<h1>RSVP</h1>").expect("write index");
    dir
}

const RED_DOT: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR4nGP4z8DwHwAFAAH/iZk9HQAAAABJRU5ErkJggg==";

// =============================================================================
// Health + static
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let base = spawn_default().await;
    let res = reqwest::get(format!("{base}/healthz")).await.expect("request");
    assert_eq!(res.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn unmatched_paths_fall_through_to_static_dir() {
    let config = ServerConfig { static_dir: static_dir_with_index("fallback"), ..ServerConfig::default() };
    let base = spawn_app(test_helpers::test_app_state(), config).await;

    let res = reqwest::get(format!("{base}/")).await.expect("request");
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert_eq!(res.text().await.expect("body"), "<h1>RSVP</h1>");

    let missing = reqwest::get(format!("{base}/nope.css")).await.expect("request");
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}

// =============================================================================
// Create / list round trip
// =============================================================================

#[tokio::test]
async fn create_then_list_over_http() {
    let base = spawn_default().await;
    let http = reqwest::Client::new();

    let created: Submission = http
        .post(format!("{base}/api/rsvp"))
        .json(&json!({"name": "Sam", "drawing": RED_DOT}))
        .send()
        .await
        .expect("post")
        .error_for_status()
        .expect("2xx")
        .json()
        .await
        .expect("submission json");
    assert_eq!(created.name, "Sam");
    assert_eq!(created.drawing, RED_DOT);

    let listed: Vec<Submission> = http
        .get(format!("{base}/api/rsvp"))
        .send()
        .await
        .expect("get")
        .json()
        .await
        .expect("list json");
    assert_eq!(listed.first(), Some(&created));
}

#[tokio::test]
async fn create_accepts_json_sent_without_content_type() {
    let base = spawn_default().await;
    let res = reqwest::Client::new()
        .post(format!("{base}/api/rsvp"))
        .body(json!({"name": "Sam", "drawing": RED_DOT}).to_string())
        .send()
        .await
        .expect("post");
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let created: Submission = res.json().await.expect("submission json");
    assert_eq!(created.name, "Sam");
}

#[tokio::test]
async fn stored_record_uses_camel_case_fields() {
    let base = spawn_default().await;
    let http = reqwest::Client::new();
    let raw: serde_json::Value = http
        .post(format!("{base}/api/rsvp"))
        .json(&json!({"name": "Kai", "drawing": RED_DOT}))
        .send()
        .await
        .expect("post")
        .json()
        .await
        .expect("json");
    let obj = raw.as_object().expect("object");
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["createdAt", "drawing", "id", "name"]);
}

#[tokio::test]
async fn empty_store_lists_empty_array() {
    let base = spawn_default().await;
    let body = reqwest::get(format!("{base}/api/rsvp")).await.expect("get").text().await.expect("body");
    assert_eq!(body, "[]");
}

// =============================================================================
// Failures
// =============================================================================

async fn post_raw(base: &str, body: &str) -> (reqwest::StatusCode, ErrorBody) {
    let res = reqwest::Client::new()
        .post(format!("{base}/api/rsvp"))
        .header("content-type", "application/json")
        .body(body.to_owned())
        .send()
        .await
        .expect("post");
    let status = res.status();
    (status, res.json().await.expect("error body"))
}

#[tokio::test]
async fn malformed_json_is_generic_500() {
    let base = spawn_default().await;
    let (status, body) = post_raw(&base, "{not json").await;
    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Failed to create RSVP");
}

#[tokio::test]
async fn missing_field_is_generic_500() {
    let base = spawn_default().await;
    let (status, body) = post_raw(&base, r#"{"name":"NoDrawing"}"#).await;
    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Failed to create RSVP");
}

#[tokio::test]
async fn oversize_body_is_rejected() {
    let config = ServerConfig { max_body_bytes: 64, ..ServerConfig::default() };
    let base = spawn_app(test_helpers::test_app_state(), config).await;
    let big = json!({"name": "Big", "drawing": "x".repeat(1024)}).to_string();
    let (status, body) = post_raw(&base, &big).await;
    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Failed to create RSVP");

    let listed: Vec<Submission> =
        reqwest::get(format!("{base}/api/rsvp")).await.expect("get").json().await.expect("json");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn store_failure_hides_diagnostic() {
    let store = Arc::new(FailingStore::default());
    let base = spawn_app(test_helpers::test_app_state_with_store(store), ServerConfig::default()).await;
    let res = reqwest::get(format!("{base}/api/rsvp")).await.expect("get");
    assert_eq!(res.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = res.json().await.expect("error body");
    assert_eq!(body, ErrorBody::new("Failed to fetch RSVPs"));
}
