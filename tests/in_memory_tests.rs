//! Integration tests for the in-memory order repository.
//!
//! Invokes `order_repository_tests!` to check that `InMemoryOrderRepository`
//! conforms to the `OrderRepository` contract.

#![cfg(feature = "in-memory")]

#[macro_use]
mod repository_harness;

use pedidos::storage::InMemoryOrderRepository;
use repository_harness::*;

order_repository_tests!(InMemoryOrderRepository::new());
