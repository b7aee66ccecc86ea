//! In-memory product repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Product, ProductCreate, ProductRepository, ProductResult};

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    rows: BTreeMap<i64, Product>,
}

/// Process-local product storage. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> ProductResult<Option<Product>> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, input: &ProductCreate) -> ProductResult<Product> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let product = Product::from_create(state.last_id, input.clone());
        state.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn replace(&self, id: i64, input: &ProductCreate) -> ProductResult<Option<Product>> {
        let mut state = self.state.write().await;
        Ok(state.rows.get_mut(&id).map(|slot| {
            *slot = Product::from_create(id, input.clone());
            slot.clone()
        }))
    }

    async fn remove(&self, id: i64) -> ProductResult<bool> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }

    async fn count(&self) -> ProductResult<i64> {
        Ok(self.state.read().await.rows.len() as i64)
    }
}
