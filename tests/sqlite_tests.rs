//! Integration tests for the SQLite order repository.
//!
//! Every test gets its own `sqlite::memory:` database, so no cleanup is
//! needed between tests.

#![cfg(feature = "sqlite")]

#[macro_use]
mod repository_harness;

use pedidos::core::OrderRepository;
use pedidos::storage::SqliteOrderRepository;
use pedidos::storage::sqlite::{connect, ensure_schema};
use repository_harness::*;

/// Fresh repository over an empty in-memory database
async fn memory_repository() -> SqliteOrderRepository {
    let pool = connect("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory SQLite");
    ensure_schema(&pool).await.expect("Failed to create schema");
    SqliteOrderRepository::new(pool)
}

order_repository_tests!(memory_repository().await);

#[tokio::test]
async fn test_file_database_survives_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("pedidos.db").display());

    {
        let pool = connect(&url, 2).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        let repo = SqliteOrderRepository::new(pool.clone());
        repo.insert(&sample_pedido("Ana Gomez")).await.unwrap();
        pool.close().await;
    }

    let pool = connect(&url, 2).await.unwrap();
    ensure_schema(&pool).await.unwrap();
    let repo = SqliteOrderRepository::new(pool);
    let rows = repo.list_all().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].nombre, "Ana Gomez");
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let repo = memory_repository().await;
    repo.insert(&sample_pedido("Ana Gomez")).await.unwrap();
    let first = repo.list_all().await.unwrap()[0].id_pedido;
    repo.delete(first).await.unwrap();

    repo.insert(&sample_pedido("Luis Perez")).await.unwrap();
    let second = repo.list_all().await.unwrap()[0].id_pedido;
    assert_ne!(first, second);
}
