//! Storage bootstrap error types.

use thiserror::Error;

/// Result type for storage bootstrap operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Errors raised while locating, opening or preparing the product store.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The configured location string is empty or malformed.
    #[error("Invalid database location: {0}")]
    InvalidLocation(String),

    /// The location names a backend this server cannot drive.
    #[error("Unsupported database scheme '{0}' (expected sqlite or postgresql)")]
    UnsupportedScheme(String),

    /// Failed to open the connection pool.
    #[error("Failed to connect to {location}: {source}")]
    Connect {
        location: String,
        #[source]
        source: sqlx::Error,
    },

    /// Failed to create the product table.
    #[error("Schema initialization failed: {0}")]
    Schema(#[source] sqlx::Error),

    /// Failed to check a session out of the pool.
    #[error("Failed to acquire a database session: {0}")]
    Session(#[source] sqlx::Error),
}

impl DatabaseError {
    /// Create an invalid location error.
    pub fn invalid_location(msg: impl Into<String>) -> Self {
        Self::InvalidLocation(msg.into())
    }

    /// Create a connection error.
    pub fn connect(location: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Connect {
            location: location.into(),
            source,
        }
    }
}
