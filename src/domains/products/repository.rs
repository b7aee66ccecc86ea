//! Storage capability used by the product handlers.

use async_trait::async_trait;

use super::{Product, ProductCreate, ProductResult};

/// Single-table product storage.
///
/// Absence is reported as `None` / `false`, never as an error. Every method
/// performs exactly one query or mutation.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product.
    async fn all(&self) -> ProductResult<Vec<Product>>;

    /// The product with the given id, if any.
    async fn find(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Store a new product and return it with its assigned id.
    async fn insert(&self, input: &ProductCreate) -> ProductResult<Product>;

    /// Overwrite every mutable field of an existing product.
    async fn replace(&self, id: i64, input: &ProductCreate) -> ProductResult<Option<Product>>;

    /// Delete a product. Returns whether a row was removed.
    async fn remove(&self, id: i64) -> ProductResult<bool>;

    /// Number of stored products.
    async fn count(&self) -> ProductResult<i64>;
}
