//! Product Catalog Server Library
//!
//! This crate exposes a product catalog (create, list, fetch, replace and
//! delete) over a REST API and as MCP tools that agents can call.
//!
//! # Architecture
//!
//! - **core**: configuration, storage bootstrap, error handling, the server handle and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **products**: records, repositories and the REST endpoints
//!   - **tools**: MCP tools delegating to the product operations
//!
//! # Example
//!
//! ```rust,no_run
//! use product_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::from_config(config.clone()).await?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Database, Error, McpServer, Result};
pub use domains::products::{Product, ProductCreate, ProductService};
