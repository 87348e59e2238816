//! SQLite storage backend using sqlx.
//!
//! Provides `SqliteOrderRepository`, backed by a `sqlx::SqlitePool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `sqlite` feature flag (enabled by default).
//!
//! # Schema
//!
//! A single `Pedido` table. The date is stored as `TEXT` in `YYYY-MM-DD`
//! form, which is how sqlx encodes `chrono::NaiveDate` for SQLite.

use crate::core::{NewPedido, OrderRepository, Pedido, StorageError};
use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

const BACKEND: &str = "sqlite";

// ---------------------------------------------------------------------------
// Schema management
// ---------------------------------------------------------------------------

/// Create the `Pedido` table if it does not exist.
///
/// Safe to call on every startup.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS Pedido (
            id_pedido INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            direccion TEXT NOT NULL,
            numero TEXT NOT NULL,
            cantidad_bidones INTEGER NOT NULL,
            fecha TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::query(BACKEND, format!("Failed to create Pedido table: {}", e)))?;

    Ok(())
}

/// Open a pool for `url`
///
/// `sqlite::memory:` databases live per connection, so they get a single
/// connection that is never recycled.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, StorageError> {
    let options = if url.contains(":memory:") {
        // the database disappears with its last connection
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    options
        .connect(url)
        .await
        .map_err(|e| StorageError::connection(BACKEND, e))
}

// ---------------------------------------------------------------------------
// SqliteOrderRepository
// ---------------------------------------------------------------------------

/// Order repository backed by SQLite.
///
/// # Example
///
/// ```rust,ignore
/// let pool = pedidos::storage::sqlite::connect("sqlite://pedidos.db?mode=rwc", 5).await?;
/// pedidos::storage::sqlite::ensure_schema(&pool).await?;
/// let repo = SqliteOrderRepository::new(pool);
/// ```
#[derive(Clone, Debug)]
pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn insert(&self, pedido: &NewPedido) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO Pedido (nombre, direccion, numero, cantidad_bidones, fecha) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&pedido.nombre)
        .bind(&pedido.direccion)
        .bind(&pedido.numero)
        .bind(pedido.cantidad_bidones)
        .bind(pedido.fecha)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::query(BACKEND, format!("Failed to insert order: {}", e)))?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Pedido>, StorageError> {
        sqlx::query_as::<_, Pedido>(
            "SELECT id_pedido, nombre, direccion, numero, cantidad_bidones, fecha FROM Pedido",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::query(BACKEND, format!("Failed to list orders: {}", e)))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Pedido>, StorageError> {
        sqlx::query_as::<_, Pedido>(
            "SELECT id_pedido, nombre, direccion, numero, cantidad_bidones, fecha \
             FROM Pedido WHERE id_pedido = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::query(BACKEND, format!("Failed to get order: {}", e)))
    }

    async fn update(&self, id: i64, pedido: &NewPedido) -> Result<(), StorageError> {
        sqlx::query(
            "UPDATE Pedido \
             SET nombre = ?, direccion = ?, numero = ?, cantidad_bidones = ?, fecha = ? \
             WHERE id_pedido = ?",
        )
        .bind(&pedido.nombre)
        .bind(&pedido.direccion)
        .bind(&pedido.numero)
        .bind(pedido.cantidad_bidones)
        .bind(pedido.fecha)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::query(BACKEND, format!("Failed to update order: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM Pedido WHERE id_pedido = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::query(BACKEND, format!("Failed to delete order: {}", e)))?;

        Ok(())
    }

    fn backend(&self) -> &'static str {
        BACKEND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    async fn memory_repo() -> SqliteOrderRepository {
        let pool = connect("sqlite::memory:", 5).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        SqliteOrderRepository::new(pool)
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let repo = memory_repo().await;
        ensure_schema(repo.pool()).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_values_are_bound_not_interpolated() {
        let repo = memory_repo().await;
        let hostile = NewPedido {
            nombre: "x'); DROP TABLE Pedido; --".to_string(),
            direccion: "Calle 1".to_string(),
            numero: "987654321".to_string(),
            cantidad_bidones: 1,
            fecha: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
        };
        repo.insert(&hostile).await.unwrap();

        let rows = repo.list_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].nombre, hostile.nombre);
    }

    #[tokio::test]
    async fn test_missing_table_is_a_storage_error() {
        let pool = connect("sqlite::memory:", 1).await.unwrap();
        let repo = SqliteOrderRepository::new(pool);
        let err = repo.list_all().await.unwrap_err();
        assert!(matches!(err, StorageError::QueryError { .. }));
    }
}
