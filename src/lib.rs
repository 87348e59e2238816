//! # pedidos
//!
//! A small order-management web application. Orders ("pedidos") are
//! submitted, listed, updated and deleted through server-rendered HTML forms
//! backed by parameterized SQL.
//!
//! ## Features
//!
//! - **Validated creation**: name, phone, date and quantity rules checked
//!   before any write, with every failure reported back on the form
//! - **Plain SQL**: one bound-parameter statement per operation, SQLite by
//!   default and PostgreSQL behind the `postgres` feature
//! - **Injected repository**: handlers receive an `Arc<dyn OrderRepository>`,
//!   with an in-memory implementation for development and tests
//! - **Flash messages**: success and error messages survive the
//!   post/redirect/get cycle in a cookie
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pedidos::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_repository(InMemoryOrderRepository::new())
//!         .serve("127.0.0.1:8000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        AppError, Level, Message, Messages, NewPedido, OrderRepository, Pedido, PedidoForm,
        StorageError, validate_pedido, validate_pedido_today,
    };

    // === Storage ===
    #[cfg(feature = "in-memory")]
    pub use crate::storage::InMemoryOrderRepository;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresOrderRepository;
    #[cfg(feature = "sqlite")]
    pub use crate::storage::SqliteOrderRepository;

    // === Config ===
    pub use crate::config::{AppConfig, DatabaseConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{AppState, LIST_ROUTE, ServerBuilder, Views};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
}
