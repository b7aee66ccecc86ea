//! Configuration management for the product server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::database::{DEFAULT_DATABASE_URL, StorageLocation};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the product server.
///
/// This struct contains all configurable aspects of the server, organized
/// by concern for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Storage location and pool settings.
    pub database: DatabaseConfig,

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

/// Storage configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string selecting the backend (`sqlite:` or `postgresql:`).
    pub url: String,

    /// Upper bound on pooled connections.
    pub max_connections: u32,

    /// Seed the product table at startup when it is empty.
    pub seed_on_startup: bool,
}

/// Custom Debug implementation to keep credentials out of logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let url = StorageLocation::parse(&self.url)
            .map(|location| location.redacted())
            .unwrap_or_else(|_| "[UNPARSEABLE]".to_string());
        f.debug_struct("DatabaseConfig")
            .field("url", &url)
            .field("max_connections", &self.max_connections)
            .field("seed_on_startup", &self.seed_on_startup)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            seed_on_startup: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "product-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            database: DatabaseConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
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
    /// `DATABASE_URL` selects the storage location; everything else is
    /// prefixed with `PRODUCTS_`, e.g. `PRODUCTS_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("PRODUCTS_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("PRODUCTS_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.trim().is_empty() {
                config.database.url = url;
            }
        }

        if let Some(max) = std::env::var("PRODUCTS_DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.database.max_connections = max;
        }

        if let Ok(seed) = std::env::var("PRODUCTS_SEED") {
            config.database.seed_on_startup = seed.to_lowercase() != "false" && seed != "0";
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
    fn test_database_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("DATABASE_URL", "postgres://app:secret@db:5432/shop");
        }
        let config = Config::from_env();
        assert_eq!(config.database.url, "postgres://app:secret@db:5432/shop");
        unsafe {
            std::env::remove_var("DATABASE_URL");
        }
    }

    #[test]
    fn test_database_url_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("DATABASE_URL");
        }
        let config = Config::from_env();
        assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_seed_flag_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("PRODUCTS_SEED", "false");
        }
        let config = Config::from_env();
        assert!(!config.database.seed_on_startup);
        unsafe {
            std::env::remove_var("PRODUCTS_SEED");
        }
    }

    #[test]
    fn test_database_url_redacted_in_debug() {
        let database = DatabaseConfig {
            url: "postgresql://app:super_secret@db:5432/shop".to_string(),
            ..Default::default()
        };
        let debug_str = format!("{:?}", database);
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("db:5432/shop"));
    }

    #[test]
    fn test_config_default_uses_embedded_store() {
        let config = Config::default();
        assert!(config.database.url.starts_with("sqlite:"));
        assert!(config.database.seed_on_startup);
    }
}
