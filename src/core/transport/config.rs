//! Transport configuration types.

use serde::{Deserialize, Serialize};

#[cfg(feature = "http")]
use super::{TransportError, TransportResult};

/// Paths already served by the REST routes and the health check.
#[cfg(feature = "http")]
const RESERVED_PATHS: &[&str] = &["/", "/products", "/health"];

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (MCP tools only).
    #[cfg(feature = "stdio")]
    Stdio,

    /// HTTP transport: REST product routes plus JSON-RPC tool endpoint.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for the JSON-RPC tool endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Allow every origin, method and header.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_port() -> u16 {
    8000
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "http")]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(all(not(feature = "http"), feature = "stdio"))]
        {
            return Self::Stdio;
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Check that the tool endpoint can be mounted next to the REST routes.
    pub fn validate(&self) -> TransportResult<()> {
        let path = self.rpc_path.as_str();
        if !path.starts_with('/') {
            return Err(TransportError::init(format!(
                "tool endpoint path '{}' must start with '/'",
                path
            )));
        }
        if path.contains(['{', '}', '*']) {
            return Err(TransportError::init(format!(
                "tool endpoint path '{}' must not contain route parameters",
                path
            )));
        }
        if RESERVED_PATHS.contains(&path) || path.starts_with("/products/") {
            return Err(TransportError::init(format!(
                "tool endpoint path '{}' collides with a product or health route",
                path
            )));
        }
        Ok(())
    }
}

impl TransportConfig {
    /// Create a STDIO transport config.
    #[cfg(feature = "stdio")]
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Create an HTTP transport config.
    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        let transport = std::env::var("PRODUCTS_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "http")]
            _ => {
                let port = std::env::var("PRODUCTS_HTTP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or_else(default_port);
                let host = std::env::var("PRODUCTS_HTTP_HOST").unwrap_or_else(|_| default_host());
                let rpc_path =
                    std::env::var("PRODUCTS_HTTP_PATH").unwrap_or_else(|_| default_rpc_path());
                let enable_cors = std::env::var("PRODUCTS_HTTP_CORS")
                    .map(|v| v.to_lowercase() != "false" && v != "0")
                    .unwrap_or(true);
                Self::Http(HttpConfig {
                    port,
                    host,
                    rpc_path,
                    enable_cors,
                })
            }
            #[cfg(not(feature = "http"))]
            _ => Self::Stdio,
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (MCP tools only)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!(
                "HTTP on {}:{} (tools at {})",
                cfg.host, cfg.port, cfg.rpc_path
            ),
        }
    }

    /// Check if this transport is the STDIO mode.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}
