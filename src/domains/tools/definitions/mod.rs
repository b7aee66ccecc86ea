//! Tool definitions module.
//!
//! One file per product tool. Each tool republishes a single product
//! operation under its stable identifier.

pub mod common;
pub mod create_products;
pub mod delete_products;
pub mod display_products;
pub mod get_product_by_id;
pub mod update_products;

pub use create_products::CreateProductsTool;
pub use delete_products::{DeleteProductsParams, DeleteProductsTool};
pub use display_products::{DisplayProductsParams, DisplayProductsTool};
pub use get_product_by_id::{GetProductByIdParams, GetProductByIdTool};
pub use update_products::{UpdateProductsParams, UpdateProductsTool};
