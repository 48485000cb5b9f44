use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use service_core::middleware::{
    metrics::metrics_middleware, rate_limit_middleware, request_id_middleware,
    security_headers::security_headers_middleware, REQUEST_ID_HEADER,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    agent::{rate_limited_fragment, run_agent_api, run_agent_form},
    app::{health_check, index, readiness_check},
    metrics::metrics,
};
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    // Both agent routes draw from one quota since each submission costs a provider call.
    let form_routes = Router::new()
        .route("/agent", post(run_agent_form))
        .route_layer(from_fn_with_state(
            state.agent_rate_limiter.clone(),
            rate_limit_middleware,
        ))
        .route_layer(from_fn(rate_limited_fragment));

    let api_routes = Router::new()
        .route("/api/agent", post(run_agent_api))
        .route_layer(from_fn_with_state(
            state.agent_rate_limiter.clone(),
            rate_limit_middleware,
        ));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics))
        .merge(form_routes)
        .merge(api_routes)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
