//! `delete_products` tool definition.

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

/// Parameters for the delete tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteProductsParams {
    /// Identifier of the product to delete.
    pub product_id: i64,
}

/// Delete tool - removes a product permanently.
pub struct DeleteProductsTool;

impl DeleteProductsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_products";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete the product with the given id. Returns a confirmation naming the id, or \"No Product Found\" if the id does not exist.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(product_id = params.product_id))]
    pub async fn execute(params: &DeleteProductsParams, service: &ProductService) -> CallToolResult {
        info!("Delete product tool called: {}", params.product_id);

        match service.delete_product(params.product_id).await {
            Ok(message) => json_result(&message),
            Err(e) => storage_failure(&e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        service: &ProductService,
    ) -> Result<serde_json::Value, ToolError> {
        let params: DeleteProductsParams = parse_arguments(arguments)?;
        let result = Self::execute(&params, service).await;
        to_http_value(&result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DeleteProductsParams>(),
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
                let params: DeleteProductsParams =
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

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_delete_then_repeat() {
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
        let params = DeleteProductsParams {
            product_id: created.id,
        };

        let first = DeleteProductsTool::execute(&params, &service).await;
        assert_eq!(text_of(&first), format!("ID-'{}' has been Deleted!", created.id));

        let second = DeleteProductsTool::execute(&params, &service).await;
        assert_eq!(text_of(&second), "No Product Found");
        assert_eq!(second.is_error, Some(false));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_delete_http_handler_missing_product() {
        let service = ProductService::in_memory();
        let value = DeleteProductsTool::http_handler(serde_json::json!({ "product_id": 9 }), &service)
            .await
            .unwrap();
        assert_eq!(value["content"][0]["text"], "No Product Found");
    }
}
