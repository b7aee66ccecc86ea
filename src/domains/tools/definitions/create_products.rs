//! `create_products` tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{info, instrument};

use super::common::{json_result, storage_failure};
use crate::domains::products::{Product, ProductCreate, ProductService};

#[cfg(feature = "http")]
use super::common::{parse_arguments, to_http_value};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Create tool - stores a new product. Its arguments are the Create-shape fields.
pub struct CreateProductsTool;

impl CreateProductsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_products";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new product from a name, description, price and quantity. Returns the stored product including its assigned id.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name))]
    pub async fn execute(params: &ProductCreate, service: &ProductService) -> CallToolResult {
        info!("Create product tool called: '{}'", params.name);

        match service.create_product(params.clone()).await {
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
        let params: ProductCreate = parse_arguments(arguments)?;
        let result = Self::execute(&params, service).await;
        to_http_value(&result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ProductCreate>(),
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
                let params: ProductCreate =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &service).await)
            }
            .boxed()
        })
    }
}
