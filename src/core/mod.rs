//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the product
//! server, including error handling, configuration, storage bootstrap,
//! server lifecycle management and transport layer abstractions.

pub mod config;
pub mod database;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use database::Database;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
