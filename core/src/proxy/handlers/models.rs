//! Request envelopes accepted from the browser UI
//!
//! Fields the agent service validates (message, skillName) are optional here:
//! the proxy never rejects a request itself, it forwards and lets the
//! upstream produce the 400.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    // Absent fields stay absent in the forwarded body, never null
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Opaque per-request agent configuration; merged by the upstream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_config: Option<Value>,

    #[serde(default)]
    pub stream: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}
