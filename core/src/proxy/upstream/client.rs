//! Upstream client for calling the AI agent service

use reqwest::{header, Client, Response};
use serde_json::Value;
use tokio::time::Duration;

use crate::config::UpstreamConfig;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Thin wrapper over one shared reqwest client pointed at the agent service.
///
/// The pool must admit enough concurrent connections that simultaneous
/// skill/chat calls never queue behind one another.
#[derive(Clone)]
pub struct UpstreamClient {
    http_client: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .pool_max_idle_per_host(16)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(Duration::from_secs(config.request_timeout))
            .user_agent("agent-ui-backend/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Result<Response, UpstreamError> {
        Ok(self.http_client.get(self.url(path)).send().await?)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Result<Response, UpstreamError> {
        Ok(self.http_client.post(self.url(path)).json(body).send().await?)
    }

    pub async fn put_json(&self, path: &str, body: &Value) -> Result<Response, UpstreamError> {
        Ok(self.http_client.put(self.url(path)).json(body).send().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<Response, UpstreamError> {
        Ok(self.http_client.delete(self.url(path)).send().await?)
    }

    /// Issue a streaming POST for the chat bridge.
    /// The response body is consumed incrementally via `bytes_stream()`.
    pub async fn post_stream(&self, path: &str, body: &Value) -> Result<Response, UpstreamError> {
        Ok(self
            .http_client
            .post(self.url(path))
            .header(header::ACCEPT, "text/event-stream")
            .json(body)
            .send()
            .await?)
    }
}
