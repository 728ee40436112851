//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally via a `.env` file) on top of defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Default base URL of the product API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Remote product API configuration.
    pub api: ApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the remote product API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is appended to (no trailing slash).
    pub base_url: String,

    /// Optional per-request timeout in seconds.
    /// `None` leaves requests unbounded.
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// Request timeout as a `Duration`, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mcp-tutorial".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            api: ApiConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_API_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("MCP_API_BASE_URL") {
            config.api.base_url = normalize_base_url(&base_url);
            info!("Product API base URL: {}", config.api.base_url);
        } else {
            warn!(
                "MCP_API_BASE_URL not set - using default product API at {}",
                DEFAULT_API_BASE_URL
            );
        }

        if let Ok(timeout) = std::env::var("MCP_API_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.api.timeout_secs = Some(secs),
                Err(_) => warn!("Ignoring invalid MCP_API_TIMEOUT_SECS value: {}", timeout),
            }
        }

        config.transport = TransportConfig::from_env();

        config
    }
}

/// Trim surrounding whitespace and trailing slashes so paths can be appended.
fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "mcp-tutorial");
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert!(config.api.timeout().is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_api_base_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_API_BASE_URL", "https://shop.example.com/api/");
        }
        let config = Config::from_env();
        assert_eq!(config.api.base_url, "https://shop.example.com/api");
        unsafe {
            std::env::remove_var("MCP_API_BASE_URL");
        }
    }

    #[test]
    fn test_api_timeout_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_API_TIMEOUT_SECS", "15");
        }
        let config = Config::from_env();
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(15)));

        unsafe {
            std::env::set_var("MCP_API_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert!(config.api.timeout_secs.is_none());
        unsafe {
            std::env::remove_var("MCP_API_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(" http://a:1// "), "http://a:1");
        assert_eq!(normalize_base_url("http://a:1"), "http://a:1");
    }
}
