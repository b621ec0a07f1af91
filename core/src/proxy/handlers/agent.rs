//! Pass-through handlers: status, skill, config, memory
//! Each maps one inbound route to exactly one upstream call and relays the
//! result unchanged. No retries, no proxy-side validation.

use axum::{
    extract::{Json, State},
    response::Response,
};
use serde_json::{json, Value};

use crate::proxy::handlers::models::SkillRequest;
use crate::proxy::handlers::{relay_response, upstream_failure};
use crate::proxy::server::AppState;

/// GET /api/agent/status -> GET /status
pub async fn get_status(State(state): State<AppState>) -> Response {
    match state.upstream.get("/status").await {
        Ok(resp) => relay_response(resp).await,
        Err(e) => upstream_failure("Error fetching agent status", "Failed to fetch agent status", e),
    }
}

/// POST /api/agent/skill -> POST /skill
pub async fn execute_skill(
    State(state): State<AppState>,
    Json(request): Json<SkillRequest>,
) -> Response {
    let body = serde_json::to_value(&request).unwrap_or_else(|_| json!({}));

    match state.upstream.post_json("/skill", &body).await {
        Ok(resp) => relay_response(resp).await,
        Err(e) => upstream_failure("Error executing skill", "Failed to execute skill", e),
    }
}

/// GET /api/agent/config -> GET /config
pub async fn get_config(State(state): State<AppState>) -> Response {
    match state.upstream.get("/config").await {
        Ok(resp) => relay_response(resp).await,
        Err(e) => upstream_failure("Error fetching agent config", "Failed to fetch agent config", e),
    }
}

/// PUT /api/agent/config -> PUT /config
/// Partial mappings are forwarded as-is; the upstream owns merge semantics.
pub async fn update_config(
    State(state): State<AppState>,
    Json(config): Json<Value>,
) -> Response {
    match state.upstream.put_json("/config", &config).await {
        Ok(resp) => relay_response(resp).await,
        Err(e) => upstream_failure("Error updating agent config", "Failed to update agent config", e),
    }
}

/// GET /api/agent/memory -> GET /memory
pub async fn get_memory(State(state): State<AppState>) -> Response {
    match state.upstream.get("/memory").await {
        Ok(resp) => relay_response(resp).await,
        Err(e) => upstream_failure("Error fetching memory", "Failed to fetch memory", e),
    }
}

/// DELETE /api/agent/memory -> DELETE /memory
pub async fn clear_memory(State(state): State<AppState>) -> Response {
    match state.upstream.delete("/memory").await {
        Ok(resp) => relay_response(resp).await,
        Err(e) => upstream_failure("Error clearing memory", "Failed to clear memory", e),
    }
}
