use std::time::Instant;

use axum::{
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use chainsight_core::UserId;

use crate::context::UserContext;

/// Header carrying the authenticated user id, set by the upstream gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

pub async fn user_context_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let user_id = extract_user_id(req.headers())?;

    req.extensions_mut().insert(UserContext::new(user_id));

    Ok(next.run(req).await)
}

/// Log one line per request with its outcome and latency.
pub async fn trace_requests(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );

    response
}

fn extract_user_id(headers: &HeaderMap) -> Result<UserId, StatusCode> {
    let header = headers
        .get(USER_ID_HEADER)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let value = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    value.trim().parse().map_err(|_| StatusCode::UNAUTHORIZED)
}
