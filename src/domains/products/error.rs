//! Product handler error types.

use thiserror::Error;

use crate::core::database::DatabaseError;

/// Result type for product operations.
pub type ProductResult<T> = Result<T, ProductError>;

/// Failures a product operation can surface. Absence is not an error.
#[derive(Debug, Error)]
pub enum ProductError {
    /// A query or mutation failed inside the driver.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// No session could be obtained from the store.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}
