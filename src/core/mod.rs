//! Core module containing the order model, validation and the repository seam

pub mod error;
pub mod messages;
pub mod order;
pub mod service;
pub mod validation;

pub use error::{AppError, ConfigError, RenderError, RequestError, StorageError};
pub use messages::{Level, Message, Messages};
pub use order::{NewPedido, Pedido, PedidoForm};
pub use service::OrderRepository;
pub use validation::{validate_pedido, validate_pedido_today};
