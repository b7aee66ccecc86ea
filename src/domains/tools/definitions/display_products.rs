//! `display_products` tool definition.
//!
//! Lists every stored product.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{json_result, storage_failure};
use crate::domains::products::ProductService;

#[cfg(feature = "http")]
use super::common::{parse_arguments, to_http_value};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// The list tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct DisplayProductsParams {}

// ============================================================================
// Tool Definition
// ============================================================================

/// List tool - returns all products.
pub struct DisplayProductsTool;

impl DisplayProductsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "display_products";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all products in the catalog. Returns an array of products with id, name, description, price and quantity.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(_params: &DisplayProductsParams, service: &ProductService) -> CallToolResult {
        info!("Display products tool called");

        match service.display_products().await {
            Ok(products) => json_result(&products),
            Err(e) => storage_failure(&e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        service: &ProductService,
    ) -> Result<serde_json::Value, ToolError> {
        let params: DisplayProductsParams = parse_arguments(arguments)?;
        let result = Self::execute(&params, service).await;
        to_http_value(&result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DisplayProductsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(service: ProductService) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let service = service.clone();
            async move {
                let params: DisplayProductsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &service).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
