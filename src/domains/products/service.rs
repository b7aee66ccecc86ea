//! Product operations shared by the HTTP routes and the MCP tools.
//!
//! The repository reports absence uniformly; this layer turns it into the
//! reply shapes clients already depend on: the zero product for a missing
//! lookup and the plain "No Product Found" message for update and delete.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::{
    InMemoryProductRepository, NOT_FOUND_MESSAGE, Product, ProductCreate, ProductRepository,
    ProductResult, UpdateReply, deleted_message,
};

/// Handle to the product operations. Cheap to clone.
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Create a service over the given storage.
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Create a service over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductRepository::new()))
    }

    /// List every stored product.
    #[instrument(skip(self))]
    pub async fn display_products(&self) -> ProductResult<Vec<Product>> {
        let products = self.repository.all().await?;
        info!("Listing {} products", products.len());
        Ok(products)
    }

    /// Fetch one product, or the zero product when the id does not exist.
    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, product_id: i64) -> ProductResult<Product> {
        match self.repository.find(product_id).await? {
            Some(product) => Ok(product),
            None => {
                info!("Product {} not found, returning empty product", product_id);
                Ok(Product::sentinel())
            }
        }
    }

    /// Store a new product.
    #[instrument(skip_all, fields(name = %input.name))]
    pub async fn create_product(&self, input: ProductCreate) -> ProductResult<Product> {
        let product = self.repository.insert(&input).await?;
        info!("Created product {}", product.id);
        Ok(product)
    }

    /// Replace all fields of an existing product.
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        product_id: i64,
        input: ProductCreate,
    ) -> ProductResult<UpdateReply> {
        match self.repository.replace(product_id, &input).await? {
            Some(product) => {
                info!("Updated product {}", product_id);
                Ok(UpdateReply::Updated(product))
            }
            None => {
                warn!("Cannot update product {}: {}", product_id, NOT_FOUND_MESSAGE);
                Ok(UpdateReply::not_found())
            }
        }
    }

    /// Delete a product and report the outcome as a message.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, product_id: i64) -> ProductResult<String> {
        if self.repository.remove(product_id).await? {
            info!("Deleted product {}", product_id);
            Ok(deleted_message(product_id))
        } else {
            warn!("Cannot delete product {}: {}", product_id, NOT_FOUND_MESSAGE);
            Ok(NOT_FOUND_MESSAGE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    fn pen() -> ProductCreate {
        ProductCreate {
            name: "Pen".to_string(),
            description: "Blue ink".to_string(),
            price: 1.5,
            quantity: 100,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_identical_record() {
        let service = ProductService::in_memory();
        let created = assert_ok!(service.create_product(pen()).await);
        assert_eq!(created, Product::from_create(1, pen()));

        let fetched = assert_ok!(service.get_product_by_id(created.id).await);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_returns_sentinel() {
        let service = ProductService::in_memory();
        let product = assert_ok!(service.get_product_by_id(99).await);
        assert!(product.is_sentinel());
    }

    #[tokio::test]
    async fn test_display_empty_store() {
        let service = ProductService::in_memory();
        assert!(assert_ok!(service.display_products().await).is_empty());
    }

    #[tokio::test]
    async fn test_update_existing_keeps_id() {
        let service = ProductService::in_memory();
        let created = service.create_product(pen()).await.unwrap();
        let replacement = ProductCreate {
            name: "Pencil".to_string(),
            description: "HB".to_string(),
            price: 0.25,
            quantity: 12,
        };

        let reply = assert_ok!(service.update_product(created.id, replacement.clone()).await);
        assert_eq!(
            reply,
            UpdateReply::Updated(Product::from_create(created.id, replacement))
        );
    }

    #[tokio::test]
    async fn test_update_missing_returns_message_and_mutates_nothing() {
        let service = ProductService::in_memory();
        let created = service.create_product(pen()).await.unwrap();

        let reply = assert_ok!(service.update_product(created.id + 10, pen()).await);
        assert_eq!(reply, UpdateReply::NotFound("No Product Found".to_string()));
        assert_eq!(service.display_products().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let service = ProductService::in_memory();
        let created = service.create_product(pen()).await.unwrap();

        let first = assert_ok!(service.delete_product(created.id).await);
        assert!(first.contains(&created.id.to_string()));
        assert!(service.get_product_by_id(created.id).await.unwrap().is_sentinel());

        for _ in 0..2 {
            let again = assert_ok!(service.delete_product(created.id).await);
            assert_eq!(again, "No Product Found");
        }
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_store_unchanged() {
        let service = ProductService::in_memory();
        let created = service.create_product(pen()).await.unwrap();
        let reply = service.delete_product(created.id + 1).await.unwrap();
        assert_eq!(reply, "No Product Found");
        assert_eq!(service.display_products().await.unwrap().len(), 1);
    }
}
