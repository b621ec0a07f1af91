//! Request handlers for the proxy surface
//! One file per concern: `agent` for pass-through endpoints, `chat` for the
//! streaming bridge, `models` for request envelopes.

pub mod agent;
pub mod chat;
pub mod models;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::proxy::upstream::UpstreamError;

/// Relay an upstream response to the client unchanged: status, content type,
/// and body bytes. Client-input errors (400s) detected by the agent service
/// pass through here unmodified.
pub(crate) async fn relay_response(response: reqwest::Response) -> Response {
    let status = response.status();
    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();

    match response.bytes().await {
        Ok(body) => {
            let mut builder = Response::builder().status(status);
            if let Some(ct) = content_type {
                builder = builder.header(header::CONTENT_TYPE, ct);
            }
            builder.body(Body::from(body)).unwrap_or_else(|_| {
                proxy_error("Failed to relay upstream response")
            })
        }
        Err(e) => {
            tracing::error!("Failed to read upstream response body: {}", e);
            proxy_error("Failed to read upstream response")
        }
    }
}

/// Generic 500 for transport failures. The message is deliberately vague;
/// the cause is logged, never exposed.
pub(crate) fn proxy_error(message: &str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": message }))).into_response()
}

/// Log the transport failure and surface the per-endpoint generic message.
pub(crate) fn upstream_failure(context: &str, message: &str, err: UpstreamError) -> Response {
    tracing::error!("{}: {}", context, err);
    proxy_error(message)
}
