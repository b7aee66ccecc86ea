//! Storage location parsing.
//!
//! A single connection string selects the backend. Hosted Postgres providers
//! still hand out `postgres://` URLs; those are rewritten to the
//! `postgresql://` form before the driver sees them.

use std::fmt;
use std::str::FromStr;

use super::{DatabaseError, DatabaseResult};

/// Embedded file-backed store used when no location is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.db";

const LEGACY_POSTGRES_PREFIX: &str = "postgres://";
const POSTGRES_PREFIX: &str = "postgresql://";

/// Storage backend selected by the location scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Embedded SQLite (file or memory).
    Sqlite,
    /// External PostgreSQL server.
    Postgres,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Postgres => write!(f, "postgresql"),
        }
    }
}

/// A validated, normalized storage location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    url: String,
    backend: Backend,
}

impl StorageLocation {
    /// Parse and normalize a configured location string.
    pub fn parse(raw: &str) -> DatabaseResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DatabaseError::invalid_location("database URL is empty"));
        }

        let url = normalize_scheme(raw);

        if url.starts_with("sqlite:") {
            Ok(Self {
                url: with_create_mode(&url),
                backend: Backend::Sqlite,
            })
        } else if url.starts_with(POSTGRES_PREFIX) {
            Ok(Self {
                url,
                backend: Backend::Postgres,
            })
        } else {
            let scheme = url.split(':').next().unwrap_or_default().to_string();
            Err(DatabaseError::UnsupportedScheme(scheme))
        }
    }

    /// Private in-memory SQLite store.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            backend: Backend::Sqlite,
        }
    }

    /// The URL handed to the driver.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The backend this location selects.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Whether the store lives only as long as its connection.
    pub fn is_in_memory(&self) -> bool {
        self.backend == Backend::Sqlite
            && (self.url.contains(":memory:") || self.url.contains("mode=memory"))
    }

    /// The URL with any password replaced, for logs.
    pub fn redacted(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        match rest.rsplit_once('@') {
            Some((userinfo, host)) => match userinfo.split_once(':') {
                Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
                None => self.url.clone(),
            },
            None => self.url.clone(),
        }
    }
}

impl FromStr for StorageLocation {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn normalize_scheme(url: &str) -> String {
    match url.strip_prefix(LEGACY_POSTGRES_PREFIX) {
        Some(rest) => format!("{POSTGRES_PREFIX}{rest}"),
        None => url.to_string(),
    }
}

/// SQLite files are created on first use unless the URL already picks a mode.
fn with_create_mode(url: &str) -> String {
    if url.contains(":memory:") || url.contains("mode=") {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}mode=rwc")
}
