//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresOrderRepository`, backed by a `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! pedidos = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Differences from the SQLite backend
//!
//! - `$1`, `$2` placeholders instead of `?`
//! - `BIGSERIAL` id and native `DATE` column
//! - The unquoted table name folds to `pedido`

use crate::core::{NewPedido, OrderRepository, Pedido, StorageError};
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const BACKEND: &str = "postgres";

/// Create the `Pedido` table if it does not exist (idempotent).
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS Pedido (
            id_pedido BIGSERIAL PRIMARY KEY,
            nombre TEXT NOT NULL,
            direccion TEXT NOT NULL,
            numero TEXT NOT NULL,
            cantidad_bidones BIGINT NOT NULL,
            fecha DATE NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::query(BACKEND, format!("Failed to create Pedido table: {}", e)))?;

    Ok(())
}

/// Open a pool for `url`
pub async fn connect(url: &str, max_connections: u32) -> Result<PgPool, StorageError> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
        .map_err(|e| StorageError::connection(BACKEND, e))
}

/// Order repository backed by PostgreSQL.
#[derive(Clone, Debug)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Create a new `PostgresOrderRepository` with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn insert(&self, pedido: &NewPedido) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO Pedido (nombre, direccion, numero, cantidad_bidones, fecha) \
             VALUES ($1, $2, $3, $4, $5)",
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
             FROM Pedido WHERE id_pedido = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::query(BACKEND, format!("Failed to get order: {}", e)))
    }

    async fn update(&self, id: i64, pedido: &NewPedido) -> Result<(), StorageError> {
        sqlx::query(
            "UPDATE Pedido \
             SET nombre = $1, direccion = $2, numero = $3, cantidad_bidones = $4, fecha = $5 \
             WHERE id_pedido = $6",
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
        sqlx::query("DELETE FROM Pedido WHERE id_pedido = $1")
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
