//! Repository trait for order persistence

use crate::core::error::StorageError;
use crate::core::order::{NewPedido, Pedido};
use async_trait::async_trait;

/// Storage operations for the `Pedido` table
///
/// Implementations own all persistence state. Each operation is a single
/// statement; missing ids on `update`/`delete` are not errors.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Append a new order; the id is assigned by the store
    async fn insert(&self, pedido: &NewPedido) -> Result<(), StorageError>;

    /// Every stored order, in no particular order
    async fn list_all(&self) -> Result<Vec<Pedido>, StorageError>;

    /// Fetch one order by id
    async fn get_by_id(&self, id: i64) -> Result<Option<Pedido>, StorageError>;

    /// Overwrite all five fields of the order with this id
    ///
    /// Does nothing when no such order exists.
    async fn update(&self, id: i64, pedido: &NewPedido) -> Result<(), StorageError>;

    /// Remove the order with this id, if any
    async fn delete(&self, id: i64) -> Result<(), StorageError>;

    /// Short backend name used in logs
    fn backend(&self) -> &'static str;
}
