//! `update_products` tool definition.
//!
//! Replaces every field of an existing product.

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
use crate::domains::products::{ProductCreate, ProductService};

#[cfg(feature = "http")]
use super::common::{parse_arguments, to_http_value};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the update tool: the target id plus the replacement fields.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateProductsParams {
    /// Identifier of the product to replace.
    pub product_id: i64,

    #[serde(flatten)]
    pub product: ProductCreate,
}

/// Update tool - overwrites a product in place.
pub struct UpdateProductsTool;

impl UpdateProductsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_products";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Replace the name, description, price and quantity of the product with the given id. Returns the updated product, or the text \"No Product Found\" if the id does not exist.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(product_id = params.product_id))]
    pub async fn execute(params: &UpdateProductsParams, service: &ProductService) -> CallToolResult {
        info!("Update product tool called: {}", params.product_id);

        match service
            .update_product(params.product_id, params.product.clone())
            .await
        {
            Ok(reply) => json_result(&reply),
            Err(e) => storage_failure(&e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        service: &ProductService,
    ) -> Result<serde_json::Value, ToolError> {
        let params: UpdateProductsParams = parse_arguments(arguments)?;
        let result = Self::execute(&params, service).await;
        to_http_value(&result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateProductsParams>(),
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
                let params: UpdateProductsParams =
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

    fn pen() -> ProductCreate {
        ProductCreate {
            name: "Pen".to_string(),
            description: "Blue ink".to_string(),
            price: 1.5,
            quantity: 100,
        }
    }

    #[test]
    fn test_params_accept_flat_arguments() {
        let params: UpdateProductsParams = serde_json::from_value(serde_json::json!({
            "product_id": 3, "name": "Pen", "description": "Blue ink", "price": 1.5, "quantity": 100
        }))
        .unwrap();
        assert_eq!(params.product_id, 3);
        assert_eq!(params.product, pen());
    }

    #[tokio::test]
    async fn test_update_existing_product() {
        let service = ProductService::in_memory();
        let created = service.create_product(pen()).await.unwrap();

        let params = UpdateProductsParams {
            product_id: created.id,
            product: ProductCreate {
                name: "Pencil".to_string(),
                description: "HB".to_string(),
                price: 0.5,
                quantity: 10,
            },
        };
        let result = UpdateProductsTool::execute(&params, &service).await;
        let structured = result.structured_content.expect("structured_content should exist");
        assert_eq!(structured["id"], created.id);
        assert_eq!(structured["name"], "Pencil");
        assert_eq!(structured["quantity"], 10);
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let service = ProductService::in_memory();
        let params = UpdateProductsParams {
            product_id: 12,
            product: pen(),
        };
        let result = UpdateProductsTool::execute(&params, &service).await;

        assert_eq!(result.is_error, Some(false));
        assert!(result.structured_content.is_none());
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "No Product Found");
        assert!(service.display_products().await.unwrap().is_empty());
    }
}
