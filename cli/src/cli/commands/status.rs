use std::path::PathBuf;

use agent_ui_core::config::{default_config_path, load_config};

pub async fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    println!("Agent UI Backend Status");
    println!("=======================");
    println!();
    println!("Configuration:");
    println!("  Config file: {:?}", default_config_path());
    println!();
    println!("Server settings:");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  CORS origin: {}", config.cors.origin);
    println!();
    println!("Upstream agent service:");
    println!("  Base URL: {}", config.upstream.base_url);

    // Check if the server is reachable
    println!();
    let url = format!("http://{}:{}/health", config.server.host, config.server.port);
    match reqwest::get(&url).await {
        Ok(resp) if resp.status().is_success() => {
            println!("Server: RUNNING ✓");
            if let Ok(body) = resp.json::<serde_json::Value>().await {
                if let Some(ts) = body.get("timestamp").and_then(|v| v.as_str()) {
                    println!("  Reported at: {}", ts);
                }
            }
        }
        _ => {
            println!("Server: NOT RUNNING");
        }
    }

    Ok(())
}
