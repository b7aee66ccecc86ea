//! Server handle and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the product tools, and that the HTTP transport
//! uses to reach the product operations.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The ToolRouter is built in `domains/tools/router.rs`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::database::Database;
use super::error::Result as ServerResult;
use crate::domains::products::{
    ProductRepository, ProductService, SqlProductRepository, seed_if_empty,
};
use crate::domains::tools::build_tool_router;

#[cfg(feature = "http")]
use crate::domains::tools::{ToolError, ToolRegistry};

/// Instructions advertised to MCP clients.
pub const INSTRUCTIONS: &str = "Product catalog server. Use display_products to list products, \
     get_product_by_id to fetch one, create_products to add one, update_products to replace one \
     and delete_products to remove one.";

/// The main server handle.
///
/// This struct implements the `ServerHandler` trait from rmcp and carries
/// the product operations shared by every transport.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The product operations.
    products: ProductService,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new server over the given product operations.
    pub fn new(config: Config, products: ProductService) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: build_tool_router::<Self>(products.clone()),
            products,
        }
    }

    /// Open the configured store, seed it if asked to, and build the server.
    pub async fn from_config(config: Config) -> ServerResult<Self> {
        let database = Database::connect(&config.database).await?;
        let repository: Arc<dyn ProductRepository> =
            Arc::new(SqlProductRepository::new(database));

        if config.database.seed_on_startup {
            let seeded = seed_if_empty(repository.as_ref()).await?;
            if seeded > 0 {
                info!("Initialized empty store with {} products", seeded);
            }
        }

        Ok(Self::new(config, ProductService::new(repository)))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the product operations.
    pub fn products(&self) -> &ProductService {
        &self.products
    }

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, ToolError> {
        let registry = ToolRegistry::new(self.products.clone());
        registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DatabaseConfig;
    use crate::domains::products::seed_catalog;

    fn memory_config(seed_on_startup: bool) -> Config {
        Config {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
                seed_on_startup,
            },
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_from_config_seeds_empty_store() {
        let server = McpServer::from_config(memory_config(true)).await.unwrap();
        let products = server.products().display_products().await.unwrap();
        assert_eq!(products.len(), seed_catalog().len());
    }

    #[tokio::test]
    async fn test_from_config_without_seed() {
        let server = McpServer::from_config(memory_config(false)).await.unwrap();
        assert!(server.products().display_products().await.unwrap().is_empty());
    }

    #[test]
    fn test_list_tools() {
        let server = McpServer::new(Config::default(), ProductService::in_memory());
        let tools = server.list_tools();
        assert_eq!(tools.len(), 5);
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[test]
    fn test_server_info_enables_tools() {
        let server = McpServer::new(Config::default(), ProductService::in_memory());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.instructions.as_deref(), Some(INSTRUCTIONS));
    }

    #[test]
    fn test_server_info_reports_configured_identity() {
        let mut config = Config::default();
        config.server.name = "catalog-under-test".to_string();
        let server = McpServer::new(config, ProductService::in_memory());

        let info = server.get_info();
        assert_eq!(info.server_info.name, "catalog-under-test");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }
}
