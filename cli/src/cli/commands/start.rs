use std::path::PathBuf;

use agent_ui_core::config::load_config;
use agent_ui_core::proxy::ProxyServer;

pub async fn run(config_path: Option<PathBuf>, port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration (file, then PORT / AI_AGENT_SVC_URL / CORS_ORIGIN env overrides)
    let mut config = load_config(config_path)?;

    // Apply port override if provided
    if let Some(port) = port_override {
        config.server.port = port;
    }

    tracing::info!("Starting agent UI backend...");
    tracing::info!("  Host: {}", config.server.host);
    tracing::info!("  Port: {}", config.server.port);
    tracing::info!("  Upstream agent service: {}", config.upstream.base_url);
    tracing::info!("  CORS origin: {}", config.cors.origin);

    let server = ProxyServer::new(config);

    tracing::info!("Press Ctrl+C to stop");

    // Run server (blocks until shutdown)
    server.run().await?;

    Ok(())
}
