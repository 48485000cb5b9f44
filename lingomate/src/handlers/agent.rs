use askama::Template;
use axum::{
    extract::{Request, State},
    http::{header::RETRY_AFTER, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Form, Json,
};
use service_core::error::AppError;
use validator::Validate;

use super::app::{IndexTemplate, OutcomeView};
use crate::models::agent::MAX_INPUT_CHARS;
use crate::models::{AgentOutcome, AgentRequest, AgentResponseBody};
use crate::services::metrics::record_agent_run;
use crate::AppState;

#[derive(Template)]
#[template(path = "fragments/agent_response.html")]
pub struct AgentResponseTemplate {
    pub outcome: Option<OutcomeView>,
}

fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("hx-request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

fn too_long_warning() -> AgentOutcome {
    AgentOutcome::Warning(format!(
        "⚠️ Text is too long (maximum {} characters).",
        MAX_INPUT_CHARS
    ))
}

const RATE_LIMITED_WARNING: &str = "⚠️ Too many requests. Please wait a moment and try again.";

fn fragment(outcome: &AgentOutcome) -> Response {
    AgentResponseTemplate {
        outcome: Some(OutcomeView::from(outcome)),
    }
    .into_response()
}

/// Sits outside the agent rate limiter on the form route. htmx leaves the
/// page untouched on 4xx responses, so a rejected htmx submission is answered
/// with a warning fragment instead; `Retry-After` is kept.
pub async fn rate_limited_fragment(request: Request, next: Next) -> Response {
    let htmx = is_htmx(request.headers());
    let response = next.run(request).await;

    if !htmx || response.status() != StatusCode::TOO_MANY_REQUESTS {
        return response;
    }

    let mut notice = fragment(&AgentOutcome::Warning(RATE_LIMITED_WARNING.to_string()));
    if let Some(retry_after) = response.headers().get(RETRY_AFTER) {
        notice.headers_mut().insert(RETRY_AFTER, retry_after.clone());
    }
    notice
}

/// Form submission. Returns the outcome fragment for htmx requests and the
/// full page otherwise; every outcome renders with status 200.
pub async fn run_agent_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(request): Form<AgentRequest>,
) -> Response {
    let outcome = if request.validate().is_err() {
        tracing::info!(task = %request.task, "Rejected over-long input");
        record_agent_run(request.task.as_str(), "none", "warning");
        too_long_warning()
    } else {
        state.agent.run(&request).await
    };

    if is_htmx(&headers) {
        fragment(&outcome)
    } else {
        IndexTemplate::new(&request, Some(&outcome)).into_response()
    }
}

/// JSON variant of the form submission.
pub async fn run_agent_api(
    State(state): State<AppState>,
    Json(request): Json<AgentRequest>,
) -> Result<Json<AgentResponseBody>, AppError> {
    request.validate()?;

    let outcome = state.agent.run(&request).await;
    Ok(Json(AgentResponseBody::from(outcome)))
}
