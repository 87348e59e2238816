//! Repository implementations for different backends
//!
//! [`connect`] picks the backend from the database URL scheme.

#[cfg(feature = "in-memory")]
pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "in-memory")]
pub use in_memory::InMemoryOrderRepository;
#[cfg(feature = "postgres")]
pub use postgres::PostgresOrderRepository;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteOrderRepository;

use crate::config::DatabaseConfig;
use crate::core::{AppError, ConfigError, OrderRepository};
use std::sync::Arc;

/// Backend named by a database URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Memory,
    Sqlite,
    Postgres,
}

impl Backend {
    /// Classify a database URL by its scheme
    pub fn from_url(url: &str) -> Option<Self> {
        if url == "memory" {
            Some(Backend::Memory)
        } else if url.starts_with("sqlite:") {
            Some(Backend::Sqlite)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Backend::Postgres)
        } else {
            None
        }
    }
}

/// Open the configured backend, create its schema, and return it as a repository
pub async fn connect(config: &DatabaseConfig) -> Result<Arc<dyn OrderRepository>, AppError> {
    let unsupported = || ConfigError::UnsupportedDatabase {
        url: config.url.clone(),
    };
    let backend = Backend::from_url(&config.url).ok_or_else(unsupported)?;

    let repository: Arc<dyn OrderRepository> = match backend {
        #[cfg(feature = "in-memory")]
        Backend::Memory => Arc::new(InMemoryOrderRepository::new()),
        #[cfg(feature = "sqlite")]
        Backend::Sqlite => {
            let pool = sqlite::connect(&config.url, config.max_connections).await?;
            sqlite::ensure_schema(&pool).await?;
            Arc::new(SqliteOrderRepository::new(pool))
        }
        #[cfg(feature = "postgres")]
        Backend::Postgres => {
            let pool = postgres::connect(&config.url, config.max_connections).await?;
            postgres::ensure_schema(&pool).await?;
            Arc::new(PostgresOrderRepository::new(pool))
        }
        #[allow(unreachable_patterns)]
        _ => return Err(unsupported().into()),
    };

    tracing::info!(backend = repository.backend(), "Order repository ready");
    Ok(repository)
}
