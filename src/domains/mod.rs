//! Domains module containing business logic organized by bounded contexts.
//!
//! - **products**: the product resource and its operations
//! - **tools**: MCP tool adapters over the product operations

pub mod products;
pub mod tools;
