//! Transport layer for the product server.
//!
//! This module provides different transport implementations:
//! - **HTTP**: REST product routes plus JSON-RPC tool calls over POST - feature: `http`
//! - **STDIO**: MCP tools over standard input/output - feature: `stdio`
//!
//! Each transport handles the connection lifecycle and delegates
//! to the shared server handle.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
