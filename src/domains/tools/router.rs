//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::products::ProductService;

use super::definitions::{
    CreateProductsTool, DeleteProductsTool, DisplayProductsTool, GetProductByIdTool,
    UpdateProductsTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(service: ProductService) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(DisplayProductsTool::create_route(service.clone()))
        .with_route(GetProductByIdTool::create_route(service.clone()))
        .with_route(CreateProductsTool::create_route(service.clone()))
        .with_route(UpdateProductsTool::create_route(service.clone()))
        .with_route(DeleteProductsTool::create_route(service))
}
