//! Shared test harness for order repository backends
//!
//! Provides sample orders and the `order_repository_tests!` macro, which
//! generates the `OrderRepository` contract suite for any backend.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod repository_harness;
//!
//! use repository_harness::*;
//! use pedidos::storage::InMemoryOrderRepository;
//!
//! order_repository_tests!(InMemoryOrderRepository::new());
//! ```

#![allow(dead_code)]

pub mod contract_tests;

use chrono::NaiveDate;
use pedidos::core::NewPedido;

/// A valid order with the given name
pub fn sample_pedido(nombre: &str) -> NewPedido {
    NewPedido {
        nombre: nombre.to_string(),
        direccion: "Calle 1".to_string(),
        numero: "987654321".to_string(),
        cantidad_bidones: 3,
        fecha: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
    }
}

/// `count` valid orders with distinct names
pub fn sample_batch(count: usize) -> Vec<NewPedido> {
    const NAMES: &[&str] = &["Ana", "Luis", "Marta", "Pedro", "Sofia", "Tomas"];
    (0..count)
        .map(|i| sample_pedido(&format!("{} {}", NAMES[i % NAMES.len()], "Gomez")))
        .collect()
}
