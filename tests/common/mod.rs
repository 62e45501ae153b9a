//! Test utilities: temp-dir backed app builder and request helpers.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use std::sync::Arc;
use tempfile::TempDir;
use tracker_admin::config::Config;
use tracker_admin::session::{AUTH_COOKIE, AUTH_MARKER};
use tracker_admin::{AppState, create_app};

/// Build a test app whose data files live in a fresh temp directory.
///
/// The returned `TempDir` must be kept alive for the duration of the test.
pub fn build_test_app() -> (axum::Router, Arc<AppState>, TempDir) {
    let dir = TempDir::new().expect("failed to create temp dir");

    let mut config = Config::test_default();
    config.accounts_file = dir.path().join("accounts-data.json");
    config.urls_file = dir.path().join("saved-urls.json");
    config.history_dir = dir.path().join("history");

    let state = Arc::new(AppState::new(config));
    let app = create_app(state.clone());
    (app, state, dir)
}

/// GET request without cookies.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// GET request carrying the valid auth cookie.
pub fn get_authed(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("Cookie", format!("{AUTH_COOKIE}={AUTH_MARKER}"))
        .body(Body::empty())
        .unwrap()
}

/// POST request with a JSON body, no cookies.
pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// POST request with a JSON body and the valid auth cookie.
pub fn post_json_authed(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Cookie", format!("{AUTH_COOKIE}={AUTH_MARKER}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
