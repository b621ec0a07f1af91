use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// UI backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub cors: CorsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Request body cap in megabytes
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            body_limit_mb: default_body_limit_mb(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the AI agent service
    #[serde(default = "default_upstream_base_url")]
    pub base_url: String,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Whole-request timeout in seconds. Also bounds one streaming chat exchange.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_base_url(),
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_cors_origin")]
    pub origin: String,

    #[serde(default = "default_true")]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origin: default_cors_origin(),
            allow_credentials: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// Default value functions
fn default_port() -> u16 { 3001 }
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_body_limit_mb() -> usize { 10 }
fn default_upstream_base_url() -> String { "http://localhost:8080".to_string() }
fn default_connect_timeout() -> u64 { 20 }
fn default_request_timeout() -> u64 { 600 }
fn default_cors_origin() -> String { "http://localhost:3000".to_string() }
fn default_log_level() -> String { "info".to_string() }
fn default_true() -> bool { true }

/// Get default config file path
/// Uses ~/.config/agent-ui-backend/config.toml for Unix-like CLI experience
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("agent-ui-backend")
        .join("config.toml")
}

/// Load config from file, or return defaults if not found.
///
/// Loading order:
/// 1. Specified path (if provided)
/// 2. ./config.toml (if exists)
/// 3. default_config_path() (usually ~/.config/agent-ui-backend/config.toml)
///
/// Environment overrides (`PORT`, `AI_AGENT_SVC_URL`, `CORS_ORIGIN`) are
/// applied on top of whatever file was loaded; the variable names match the
/// reference deployment.
pub fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let mut config = load_config_file(path)?;
    apply_env_overrides(&mut config);
    Ok(config)
}

fn load_config_file(path: Option<PathBuf>) -> anyhow::Result<Config> {
    if let Some(config_path) = path {
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::info!("Loaded config from specified path {:?}", config_path);
            return Ok(config);
        } else {
            anyhow::bail!("Specified config file not found: {:?}", config_path);
        }
    }

    // Try current directory config.toml
    let local_config = PathBuf::from("config.toml");
    if local_config.exists() {
        match std::fs::read_to_string(&local_config) {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from current directory {:?}", local_config);
                    return Ok(config);
                }
                Err(e) => {
                    tracing::error!("Failed to parse ./config.toml: {}. Falling back to default path.", e);
                }
            },
            Err(e) => {
                tracing::error!("Failed to read ./config.toml: {}. Falling back to default path.", e);
            }
        }
    }

    let default_path = default_config_path();
    if default_path.exists() {
        let content = std::fs::read_to_string(&default_path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::info!("Loaded config from default path {:?}", default_path);
        Ok(config)
    } else {
        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }
}

/// Apply environment variable overrides: PORT, AI_AGENT_SVC_URL, CORS_ORIGIN.
pub fn apply_env_overrides(config: &mut Config) {
    if let Ok(port) = std::env::var("PORT") {
        match port.parse::<u16>() {
            Ok(p) => config.server.port = p,
            Err(_) => tracing::warn!("Ignoring invalid PORT value: {:?}", port),
        }
    }
    if let Ok(url) = std::env::var("AI_AGENT_SVC_URL") {
        if !url.is_empty() {
            config.upstream.base_url = url;
        }
    }
    if let Ok(origin) = std::env::var("CORS_ORIGIN") {
        if !origin.is_empty() {
            config.cors.origin = origin;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_deployment() {
        let config = Config::default();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.upstream.base_url, "http://localhost:8080");
        assert_eq!(config.cors.origin, "http://localhost:3000");
        assert!(config.cors.allow_credentials);
        assert_eq!(config.server.body_limit_mb, 10);
    }

    #[test]
    fn partial_toml_fills_missing_sections() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 4000

            [upstream]
            base_url = "http://agent:9999"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.upstream.base_url, "http://agent:9999");
        assert_eq!(config.upstream.request_timeout, 600);
        assert_eq!(config.cors.origin, "http://localhost:3000");
    }

    // Single test so the process-wide env vars are never touched concurrently.
    #[test]
    fn env_overrides_take_precedence() {
        std::env::set_var("PORT", "5005");
        std::env::set_var("AI_AGENT_SVC_URL", "http://upstream:8081");
        std::env::set_var("CORS_ORIGIN", "http://ui:3000");

        let mut config = Config::default();
        apply_env_overrides(&mut config);
        assert_eq!(config.server.port, 5005);
        assert_eq!(config.upstream.base_url, "http://upstream:8081");
        assert_eq!(config.cors.origin, "http://ui:3000");

        // An unparsable PORT is ignored, not an error
        std::env::set_var("PORT", "not-a-port");
        let mut config = Config::default();
        apply_env_overrides(&mut config);
        assert_eq!(config.server.port, 3001);

        std::env::remove_var("PORT");
        std::env::remove_var("AI_AGENT_SVC_URL");
        std::env::remove_var("CORS_ORIGIN");
    }
}
