mod common;

use axum::http::StatusCode;
use common::{app_with, app_with_quota, body_string, form_request, json_request};
use lingomate::services::providers::mock::MockTextProvider;
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt;

#[tokio::test]
async fn blank_form_input_warns_without_provider_call() {
    let provider = Arc::new(MockTextProvider::echo());
    let app = app_with(provider.clone());

    let response = app
        .oneshot(form_request("text=+++&target_lang=English&task=Translate", true))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("⚠️ Please enter text."));
    assert!(html.contains("outcome-warning"));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn htmx_translate_returns_fragment_with_response() {
    let provider = Arc::new(MockTextProvider::replying("  Bonjour le monde  "));
    let app = app_with(provider.clone());

    let response = app
        .oneshot(form_request(
            "text=Hello+world&target_lang=French&task=Translate",
            true,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("🧠 Agent Response (Translate):"));
    assert!(html.contains("<pre><code>Bonjour le monde</code></pre>"));
    assert!(!html.contains("<form"), "htmx responses carry only the fragment");
    assert_eq!(
        provider.prompts(),
        vec!["Translate this to French:\nHello world".to_string()]
    );
}

#[tokio::test]
async fn plain_form_post_renders_full_page_with_selection_kept() {
    let provider = Arc::new(MockTextProvider::replying("Q1. ..."));
    let app = app_with(provider.clone());

    let response = app
        .oneshot(form_request(
            "text=I+eat+rice&target_lang=Japanese&task=Quiz+Me",
            false,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("<form"));
    assert!(html.contains(r#"value="Japanese" selected"#));
    assert!(html.contains(r#"value="Quiz Me" checked"#));
    assert!(html.contains("I eat rice</textarea>"));
    assert!(html.contains("🧠 Agent Response (Quiz Me):"));
    assert!(provider.prompts()[0].contains("You are a language tutor."));
}

#[tokio::test]
async fn provider_failure_is_rendered_not_raised() {
    let provider = Arc::new(MockTextProvider::failing("quota exceeded"));
    let app = app_with(provider.clone());

    let response = app
        .oneshot(form_request(
            "text=Python+decorators&target_lang=English&task=Quiz+Me",
            true,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("❌ Error: API error: quota exceeded"));
    assert!(html.contains("outcome-error"));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn response_text_is_html_escaped() {
    let provider = Arc::new(MockTextProvider::replying("<script>alert(1)</script>"));
    let app = app_with(provider);

    let response = app
        .oneshot(form_request("text=hi&target_lang=English&task=Translate", true))
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn over_long_form_input_is_refused_before_provider_call() {
    let provider = Arc::new(MockTextProvider::echo());
    let app = app_with(provider.clone());

    let body = format!(
        "text={}&target_lang=English&task=Translate",
        "a".repeat(10_001)
    );
    let response = app.oneshot(form_request(&body, true)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Text is too long"));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn api_quiz_reports_programming_template() {
    let provider = Arc::new(MockTextProvider::replying("Q1. What is HTML?"));
    let app = app_with(provider.clone());

    let response = app
        .oneshot(json_request(json!({
            "text": "Basics of HTML",
            "target_lang": "Urdu",
            "task": "Quiz Me"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["task"], "Quiz Me");
    assert_eq!(body["template"], "programming_quiz");
    assert_eq!(body["message"], "🧠 Agent Response (Quiz Me):");
    assert_eq!(body["text"], "Q1. What is HTML?");
}

#[tokio::test]
async fn api_blank_input_reports_warning() {
    let provider = Arc::new(MockTextProvider::echo());
    let app = app_with(provider.clone());

    let response = app
        .oneshot(json_request(json!({ "text": "", "target_lang": "Arabic", "task": "Translate" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "warning");
    assert_eq!(body["message"], "⚠️ Please enter text.");
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn api_rejects_over_long_text() {
    let provider = Arc::new(MockTextProvider::echo());
    let app = app_with(provider.clone());

    let response = app
        .oneshot(json_request(json!({
            "text": "a".repeat(10_001),
            "target_lang": "English",
            "task": "Translate"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn api_rejects_unknown_language() {
    let provider = Arc::new(MockTextProvider::echo());
    let app = app_with(provider.clone());

    let response = app
        .oneshot(json_request(json!({
            "text": "hello",
            "target_lang": "Klingon",
            "task": "Translate"
        })))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn agent_routes_are_rate_limited() {
    let provider = Arc::new(MockTextProvider::echo());
    let app = app_with_quota(provider.clone(), 1);

    let first = app
        .clone()
        .oneshot(form_request("text=hi&target_lang=English&task=Translate", true))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(json_request(json!({ "text": "hi", "target_lang": "English", "task": "Translate" })))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(second.headers().contains_key("retry-after"));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn rate_limited_htmx_form_renders_warning_fragment() {
    let provider = Arc::new(MockTextProvider::echo());
    let app = app_with_quota(provider.clone(), 1);

    let first = app
        .clone()
        .oneshot(form_request("text=hi&target_lang=English&task=Translate", true))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(form_request("text=hi&target_lang=English&task=Translate", true))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert!(second.headers().contains_key("retry-after"));

    let html = body_string(second).await;
    assert!(html.contains("outcome-warning"));
    assert!(html.contains("Too many requests"));
    assert_eq!(provider.calls(), 1);
}
