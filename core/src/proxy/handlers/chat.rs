//! Chat handler and streaming bridge
//!
//! When `stream` is false the chat endpoint is a single blocking relay like
//! every other pass-through. When true, the bridge opens one upstream
//! streaming request and copies byte chunks to the client verbatim, in
//! order, translating only transport headers.

use axum::{
    body::Body,
    extract::{Json, State},
    http::{header, StatusCode},
    response::Response,
};
use bytes::Bytes;
use futures::StreamExt;
use serde_json::json;
use tracing::{debug, error, info};

use crate::proxy::handlers::models::ChatRequest;
use crate::proxy::handlers::{proxy_error, relay_response, upstream_failure};
use crate::proxy::server::AppState;

/// Short random id carried through one chat exchange's log lines
fn trace_id() -> String {
    use rand::Rng;
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(6)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

/// POST /api/agent/chat -> POST /chat (blocking or streamed)
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let trace_id = trace_id();

    info!(
        "[{}] Chat request | Stream: {} | Message bytes: {}",
        trace_id,
        request.stream,
        request.message.as_deref().map(str::len).unwrap_or(0)
    );

    // Serializing the envelope omits absent fields, matching the reference
    let stream = request.stream;
    let body = serde_json::to_value(&request).unwrap_or_else(|_| json!({}));

    if stream {
        handle_stream_chat(state, body, trace_id).await
    } else {
        match state.upstream.post_json("/chat", &body).await {
            Ok(resp) => relay_response(resp).await,
            Err(e) => upstream_failure(
                &format!("[{}] Error sending message to agent", trace_id),
                "Failed to send message to agent",
                e,
            ),
        }
    }
}

async fn handle_stream_chat(
    state: AppState,
    body: serde_json::Value,
    trace_id: String,
) -> Response {
    let response = match state.upstream.post_stream("/chat", &body).await {
        Ok(r) => r,
        Err(e) => {
            error!("[{}] Error initiating stream: {}", trace_id, e);
            return proxy_error("Failed to initiate stream");
        }
    };

    // Upstream refused before any stream bytes: the status line is still
    // ours to set, so pass its response through unchanged.
    if !response.status().is_success() {
        return relay_response(response).await;
    }

    let relay = async_stream::stream! {
        // The generator owns `response`, so a downstream disconnect drops
        // this stream and aborts the upstream request with it.
        let mut upstream = response.bytes_stream();
        while let Some(chunk) = upstream.next().await {
            match chunk {
                Ok(bytes) => yield Ok::<_, std::convert::Infallible>(bytes),
                Err(e) => {
                    // Headers are long gone; the only channel left is an
                    // in-band error event before closing the stream.
                    error!("[{}] Streaming error: {}", trace_id, e);
                    let frame = format!(
                        "event: error\ndata: {}\n\n",
                        json!({ "error": "Streaming error occurred" })
                    );
                    yield Ok(Bytes::from(frame));
                    break;
                }
            }
        }
        debug!("[{}] Stream closed", trace_id);
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .header(header::CONNECTION, "keep-alive")
        .header("x-accel-buffering", "no")
        .body(Body::from_stream(relay))
        .unwrap()
}
