//! In-memory implementation of OrderRepository for testing and development

use crate::core::{NewPedido, OrderRepository, Pedido, StorageError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Pedido>,
    last_id: i64,
}

/// In-memory order repository
///
/// Ids are assigned from a counter and never reused, like an
/// auto-increment column. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryOrderRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> StorageError {
    StorageError::QueryError {
        backend: "memory".to_string(),
        message: format!("Failed to acquire lock: {}", err),
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert(&self, pedido: &NewPedido) -> Result<(), StorageError> {
        let mut table = self.table.write().map_err(poisoned)?;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, Pedido::from_new(id, pedido.clone()));
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Pedido>, StorageError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Pedido>, StorageError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(&self, id: i64, pedido: &NewPedido) -> Result<(), StorageError> {
        let mut table = self.table.write().map_err(poisoned)?;
        if let Some(row) = table.rows.get_mut(&id) {
            *row = Pedido::from_new(id, pedido.clone());
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StorageError> {
        let mut table = self.table.write().map_err(poisoned)?;
        table.rows.remove(&id);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_pedido(nombre: &str) -> NewPedido {
        NewPedido {
            nombre: nombre.to_string(),
            direccion: "Calle 1".to_string(),
            numero: "987654321".to_string(),
            cantidad_bidones: 2,
            fecha: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryOrderRepository::new();
        repo.insert(&new_pedido("Ana")).await.unwrap();
        repo.insert(&new_pedido("Luis")).await.unwrap();
        repo.delete(2).await.unwrap();
        repo.insert(&new_pedido("Marta")).await.unwrap();

        let ids: Vec<i64> = repo
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id_pedido)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemoryOrderRepository::new();
        let other = repo.clone();
        repo.insert(&new_pedido("Ana")).await.unwrap();
        assert_eq!(other.list_all().await.unwrap().len(), 1);
    }
}
