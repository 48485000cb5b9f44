use askama::Template;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::models::{AgentOutcome, AgentRequest, TargetLanguage, Task};
use crate::AppState;

/// One `<option>` / radio entry of the form.
pub struct Choice {
    pub value: &'static str,
    pub selected: bool,
}

/// Outcome as rendered into the page.
pub struct OutcomeView {
    pub status: &'static str,
    pub heading: String,
    pub body: Option<String>,
}

impl From<&AgentOutcome> for OutcomeView {
    fn from(outcome: &AgentOutcome) -> Self {
        Self {
            status: outcome.status(),
            heading: outcome.heading(),
            body: outcome.body().map(str::to_string),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub text: String,
    pub languages: Vec<Choice>,
    pub tasks: Vec<Choice>,
    pub outcome: Option<OutcomeView>,
}

impl IndexTemplate {
    /// Page with the form pre-filled from `request`.
    pub fn new(request: &AgentRequest, outcome: Option<&AgentOutcome>) -> Self {
        Self {
            text: request.text.clone(),
            languages: TargetLanguage::ALL
                .into_iter()
                .map(|lang| Choice {
                    value: lang.as_str(),
                    selected: lang == request.target_lang,
                })
                .collect(),
            tasks: Task::ALL
                .into_iter()
                .map(|task| Choice {
                    value: task.as_str(),
                    selected: task == request.task,
                })
                .collect(),
            outcome: outcome.map(OutcomeView::from),
        }
    }
}

pub async fn index() -> impl IntoResponse {
    IndexTemplate::new(&AgentRequest::default(), None)
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "lingomate",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness: the text-generation provider must be reachable.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let provider = state.agent.provider();
    match provider.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "ready", "provider": provider.name() })),
        ),
        Err(e) => {
            tracing::warn!(provider = provider.name(), error = %e, "Provider not ready");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unavailable",
                    "provider": provider.name(),
                    "error": e.to_string()
                })),
            )
        }
    }
}
