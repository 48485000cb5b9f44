use axum::{extract::Request, http::header, middleware::Next, response::IntoResponse};

/// Script origin allowed on HTML pages (htmx is loaded from its CDN).
const SCRIPT_CDN: &str = "https://unpkg.com";

pub async fn security_headers_middleware(req: Request, next: Next) -> impl IntoResponse {
    let mut response = next.run(req).await;

    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/html"));

    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        header::HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        header::HeaderValue::from_static("no-referrer"),
    );
    headers.insert(
        header::X_FRAME_OPTIONS,
        header::HeaderValue::from_static("DENY"),
    );

    if is_html {
        let policy = format!(
            "default-src 'self'; script-src 'self' {SCRIPT_CDN}; \
             style-src 'self' 'unsafe-inline'; img-src 'self' data:; \
             frame-ancestors 'none'"
        );
        if let Ok(value) = header::HeaderValue::from_str(&policy) {
            headers.insert(header::CONTENT_SECURITY_POLICY, value);
        }
    } else {
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            header::HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
        );
    }

    response
}
