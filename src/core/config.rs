//! Configuration management for the MCP server.
//!
//! A centralized configuration structure populated from environment
//! variables (prefixed `MCP_`) or defaults. Log level and destination
//! are resolved here and handed to the logging component; the logging
//! component itself never reads the environment.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

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

/// Configuration for the prompts domain.
///
/// Prompts are registered in `domains/prompts/registry.rs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level name (DEBUG, INFO, WARNING, ERROR, CRITICAL),
    /// case-insensitive; unrecognized names fall back to INFO.
    pub level: String,

    /// Log file destination. `None` selects the default location under
    /// `logs/`.
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "tobe-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            prompts: PromptsConfig::default(),
            logging: LoggingConfig {
                level: "INFO".to_string(),
                file: None,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_LOG_FILE`, `MCP_TRANSPORT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(file) = std::env::var("MCP_LOG_FILE") {
            config.logging.file = Some(PathBuf::from(file));
        }

        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "tobe-mcp");
        assert_eq!(config.logging.level, "INFO");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_log_settings_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
            std::env::set_var("MCP_LOG_FILE", "/tmp/tobe-test.log");
        }
        let config = Config::from_env();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.logging.file.as_deref(),
            Some(std::path::Path::new("/tmp/tobe-test.log"))
        );
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
            std::env::remove_var("MCP_LOG_FILE");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "renamed");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "renamed");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }
}
