//! Per-request plumbing wrapped around the receipt routes.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";
pub(crate) const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Tag every request with a fresh request id and a correlation id (taken from the caller when
/// supplied), record both on a tracing span, and echo them on the response.
pub(crate) async fn request_context(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let correlation_id = request
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        correlation_id = %correlation_id,
    );

    let mut response = next.run(request).instrument(span).await;

    for (name, value) in [
        (REQUEST_ID_HEADER, &request_id),
        (CORRELATION_ID_HEADER, &correlation_id),
    ] {
        if let Ok(value) = HeaderValue::from_str(value) {
            response.headers_mut().insert(name, value);
        }
    }

    response
}

/// Abandon the request once `deadline` elapses. The receipt core itself never observes it.
pub(crate) async fn enforce_deadline(
    State(deadline): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    match tokio::time::timeout(deadline, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!(?deadline, "request exceeded deadline");
            let payload = json!({ "error": "request timed out" });
            (StatusCode::REQUEST_TIMEOUT, Json(payload)).into_response()
        }
    }
}
