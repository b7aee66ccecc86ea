//! SQL-backed product repository.
//!
//! Runs on whichever backend the [`Database`] was opened against. Each call
//! checks out its own session and drops it before returning.

use async_trait::async_trait;
use sqlx::FromRow;
use tracing::debug;

use super::{Product, ProductCreate, ProductRepository, ProductResult};
use crate::core::database::Database;

const SELECT_ALL: &str = "SELECT id, name, description, price, quantity FROM products ORDER BY id";

const SELECT_ONE: &str = "SELECT id, name, description, price, quantity FROM products WHERE id = $1";

const INSERT: &str = "INSERT INTO products (name, description, price, quantity) \
     VALUES ($1, $2, $3, $4) \
     RETURNING id, name, description, price, quantity";

const UPDATE: &str = "UPDATE products SET name = $1, description = $2, price = $3, quantity = $4 \
     WHERE id = $5 \
     RETURNING id, name, description, price, quantity";

const DELETE: &str = "DELETE FROM products WHERE id = $1";

const COUNT: &str = "SELECT COUNT(*) FROM products";

/// A row of the `products` table.
#[derive(Debug, FromRow)]
struct ProductRecord {
    id: i64,
    name: String,
    description: String,
    price: f64,
    quantity: i64,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
            quantity: record.quantity,
        }
    }
}

/// Product repository over the shared connection factory.
#[derive(Clone)]
pub struct SqlProductRepository {
    database: Database,
}

impl SqlProductRepository {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn all(&self) -> ProductResult<Vec<Product>> {
        let mut session = self.database.session().await?;
        let records = sqlx::query_as::<_, ProductRecord>(SELECT_ALL)
            .fetch_all(&mut *session)
            .await?;
        debug!("Loaded {} product rows", records.len());
        Ok(records.into_iter().map(Product::from).collect())
    }

    async fn find(&self, id: i64) -> ProductResult<Option<Product>> {
        let mut session = self.database.session().await?;
        let record = sqlx::query_as::<_, ProductRecord>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&mut *session)
            .await?;
        Ok(record.map(Product::from))
    }

    async fn insert(&self, input: &ProductCreate) -> ProductResult<Product> {
        let mut session = self.database.session().await?;
        let record = sqlx::query_as::<_, ProductRecord>(INSERT)
            .bind(input.name.as_str())
            .bind(input.description.as_str())
            .bind(input.price)
            .bind(input.quantity)
            .fetch_one(&mut *session)
            .await?;
        Ok(record.into())
    }

    async fn replace(&self, id: i64, input: &ProductCreate) -> ProductResult<Option<Product>> {
        let mut session = self.database.session().await?;
        let record = sqlx::query_as::<_, ProductRecord>(UPDATE)
            .bind(input.name.as_str())
            .bind(input.description.as_str())
            .bind(input.price)
            .bind(input.quantity)
            .bind(id)
            .fetch_optional(&mut *session)
            .await?;
        Ok(record.map(Product::from))
    }

    async fn remove(&self, id: i64) -> ProductResult<bool> {
        let mut session = self.database.session().await?;
        let result = sqlx::query(DELETE).bind(id).execute(&mut *session).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> ProductResult<i64> {
        let mut session = self.database.session().await?;
        let count: i64 = sqlx::query_scalar(COUNT).fetch_one(&mut *session).await?;
        Ok(count)
    }
}
