//! Proxy Server - Axum HTTP server
//! Maps the browser-facing surface onto the agent service's API.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::proxy::handlers;
use crate::proxy::upstream::UpstreamClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

/// Proxy server instance
pub struct ProxyServer {
    config: Config,
    state: AppState,
}

impl ProxyServer {
    pub fn new(config: Config) -> Self {
        let upstream = Arc::new(UpstreamClient::new(&config.upstream));
        let state = AppState { upstream };
        Self { config, state }
    }

    /// Run the proxy server (blocking)
    pub async fn run(self) -> anyhow::Result<()> {
        let app = build_router(&self.config, self.state)?;

        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        tracing::info!("UI backend listening on {}", addr);
        tracing::info!(
            "Proxying requests to AI agent service at {}",
            self.config.upstream.base_url
        );

        // Handle graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("UI backend stopped");
        Ok(())
    }
}

/// Build the router. Split from `run` so tests can drive it without a socket.
pub fn build_router(config: &Config, state: AppState) -> anyhow::Result<Router> {
    let origin: HeaderValue = config.cors.origin.parse()?;

    // Credentials cannot be combined with wildcard CORS values, so the
    // origin, methods, and headers are all explicit.
    let mut cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);
    if config.cors.allow_credentials {
        cors = cors.allow_credentials(true);
    }

    Ok(Router::new()
        // Health check (local liveness, no upstream call)
        .route("/health", get(health_handler))
        // Agent service pass-through
        .route("/api/agent/status", get(handlers::agent::get_status))
        .route("/api/agent/chat", post(handlers::chat::handle_chat))
        .route("/api/agent/skill", post(handlers::agent::execute_skill))
        .route(
            "/api/agent/config",
            get(handlers::agent::get_config).put(handlers::agent::update_config),
        )
        .route(
            "/api/agent/memory",
            get(handlers::agent::get_memory).delete(handlers::agent::clear_memory),
        )
        .layer(DefaultBodyLimit::max(config.server.body_limit_mb * 1024 * 1024))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Health check handler. Reports local liveness only; a shallow check by
/// design, it never probes the upstream service.
async fn health_handler() -> Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "OK",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
        .into_response()
}

/// Shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
