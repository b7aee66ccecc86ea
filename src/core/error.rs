//! Error types and handling for the product server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies, providing consistent error handling
//! across the entire application.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the product server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the products domain.
    #[error("Product error: {0}")]
    Product(#[from] crate::domains::products::ProductError),

    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Storage bootstrap errors.
    #[error("Database error: {0}")]
    Database(#[from] super::database::DatabaseError),

    /// Transport failures.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
