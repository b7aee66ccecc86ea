//! `get_product_by_id` tool definition.
//!
//! Fetches one product. A missing id yields the all-zero product.

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
use crate::domains::products::{Product, ProductService};

#[cfg(feature = "http")]
use super::common::{parse_arguments, to_http_value};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the get tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetProductByIdParams {
    /// Identifier of the product to fetch.
    pub product_id: i64,
}

/// Get tool - returns a single product by id.
pub struct GetProductByIdTool;

impl GetProductByIdTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_product_by_id";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a product by its id. If no product has that id, a product with id 0, empty name and description and zero price and quantity is returned.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(product_id = params.product_id))]
    pub async fn execute(params: &GetProductByIdParams, service: &ProductService) -> CallToolResult {
        info!("Get product tool called: {}", params.product_id);

        match service.get_product_by_id(params.product_id).await {
            Ok(product) => json_result(&product),
            Err(e) => storage_failure(&e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        service: &ProductService,
    ) -> Result<serde_json::Value, ToolError> {
        let params: GetProductByIdParams = parse_arguments(arguments)?;
        let result = Self::execute(&params, service).await;
        to_http_value(&result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetProductByIdParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<Product>()),
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
                let params: GetProductByIdParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &service).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::products::ProductCreate;

    #[tokio::test]
    async fn test_get_existing_product() {
        let service = ProductService::in_memory();
        let created = service
            .create_product(ProductCreate {
                name: "Pen".to_string(),
                description: "Blue ink".to_string(),
                price: 1.5,
                quantity: 100,
            })
            .await
            .unwrap();

        let params = GetProductByIdParams {
            product_id: created.id,
        };
        let result = GetProductByIdTool::execute(&params, &service).await;
        let structured = result.structured_content.expect("structured_content should exist");
        assert_eq!(structured, serde_json::to_value(&created).unwrap());
    }

    #[tokio::test]
    async fn test_get_missing_returns_zero_product() {
        let service = ProductService::in_memory();
        let params = GetProductByIdParams { product_id: 5 };
        let result = GetProductByIdTool::execute(&params, &service).await;

        assert_eq!(result.is_error, Some(false));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["id"], 0);
        assert_eq!(structured["name"], "");
        assert_eq!(structured["quantity"], 0);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_get_http_handler_missing_param() {
        let service = ProductService::in_memory();
        let result = GetProductByIdTool::http_handler(serde_json::json!({}), &service).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_get_http_handler_rejects_string_id() {
        let service = ProductService::in_memory();
        let args = serde_json::json!({ "product_id": "one" });
        let result = GetProductByIdTool::http_handler(args, &service).await;
        assert!(result.is_err());
    }
}
