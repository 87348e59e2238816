//! Server module: handlers, routes, templates and the `ServerBuilder`
//!
//! The router exposes the four order workflows (create, list, update,
//! delete) plus the static pages, all rendered as HTML.

pub mod builder;
pub mod handlers;
pub mod router;
pub mod views;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use router::{LIST_ROUTE, build_routes};
pub use views::Views;
