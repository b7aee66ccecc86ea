//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::domains::products::ProductService;

#[cfg(feature = "http")]
use super::ToolError;
use super::definitions::{
    CreateProductsTool, DeleteProductsTool, DisplayProductsTool, GetProductByIdTool,
    UpdateProductsTool,
};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    service: ProductService,
}

impl ToolRegistry {
    /// Create a new tool registry over the product operations.
    pub fn new(service: ProductService) -> Self {
        Self { service }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            DisplayProductsTool::NAME,
            GetProductByIdTool::NAME,
            CreateProductsTool::NAME,
            UpdateProductsTool::NAME,
            DeleteProductsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            DisplayProductsTool::to_tool(),
            GetProductByIdTool::to_tool(),
            CreateProductsTool::to_tool(),
            UpdateProductsTool::to_tool(),
            DeleteProductsTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let service = &self.service;
        match name {
            DisplayProductsTool::NAME => DisplayProductsTool::http_handler(arguments, service).await,
            GetProductByIdTool::NAME => GetProductByIdTool::http_handler(arguments, service).await,
            CreateProductsTool::NAME => CreateProductsTool::http_handler(arguments, service).await,
            UpdateProductsTool::NAME => UpdateProductsTool::http_handler(arguments, service).await,
            DeleteProductsTool::NAME => DeleteProductsTool::http_handler(arguments, service).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
