//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use lecons_core::source::ContentSource;
use tower::ServiceExt;

use lecons_api::build_app;
use lecons_api::state::AppState;

/// The repository's static asset directory.
pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../static")
}

/// Build the full app router around `source`, serving the repository's
/// static assets.
pub fn build_test_app(source: Arc<dyn ContentSource>) -> Router {
    build_app(AppState::new(source), &static_dir())
}

/// Send a GET request and return status, headers and the raw body text.
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body_bytes.to_vec()).unwrap();

    (status, headers, text)
}

/// Send a GET request and return the response parsed as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, text) = get_text(app, uri).await;
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    (status, json)
}
