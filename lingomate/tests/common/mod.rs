#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use lingomate::services::providers::mock::MockTextProvider;
use lingomate::services::providers::GenerationParams;
use lingomate::services::LingoAgent;
use lingomate::startup::build_router;
use lingomate::AppState;
use service_core::middleware::create_unkeyed_rate_limiter;
use std::sync::Arc;

/// Router backed by `provider` with a generous agent quota.
pub fn app_with(provider: Arc<MockTextProvider>) -> Router {
    app_with_quota(provider, 1_000)
}

pub fn app_with_quota(provider: Arc<MockTextProvider>, requests_per_minute: u32) -> Router {
    let agent = LingoAgent::new(provider, GenerationParams::default());
    let limiter = create_unkeyed_rate_limiter(requests_per_minute, 60);
    build_router(AppState::new(agent, limiter))
}

pub fn form_request(body: &str, htmx: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/agent")
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn json_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/agent")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}
