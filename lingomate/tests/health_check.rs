mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{app_with, body_string};
use lingomate::services::providers::mock::MockTextProvider;
use std::sync::Arc;
use tower::util::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_check_works() {
    let app = app_with(Arc::new(MockTextProvider::echo()));

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "lingomate");
}

#[tokio::test]
async fn readiness_reflects_provider_health() {
    let ready = app_with(Arc::new(MockTextProvider::echo()))
        .oneshot(get("/ready"))
        .await
        .unwrap();
    assert_eq!(ready.status(), StatusCode::OK);

    let unavailable = app_with(Arc::new(MockTextProvider::failing("no key")))
        .oneshot(get("/ready"))
        .await
        .unwrap();
    assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn index_renders_form_with_all_choices() {
    let app = app_with(Arc::new(MockTextProvider::echo()));

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("LingoMate - Your AI Language Learning Buddy"));
    for lang in [
        "English",
        "Spanish",
        "French",
        "Urdu",
        "Roman Urdu",
        "Japanese",
        "Arabic",
    ] {
        assert!(html.contains(&format!(r#"value="{}""#, lang)), "missing {lang}");
    }
    assert!(html.contains(r#"value="Translate" checked"#));
    assert!(html.contains(r#"value="Quiz Me""#));
    assert!(html.contains("🚀 Run Agent"));
}

#[tokio::test]
async fn metrics_endpoint_responds() {
    let app = app_with(Arc::new(MockTextProvider::echo()));

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
