//! Route table for the order workflows and static pages

use crate::server::handlers::{
    AppState, actualizar_pedido, actualizar_pedido_form, certificados, crear_pedido,
    crear_pedido_form, eliminar_pedido, galeria, index, listar_pedidos, productos,
    sobre_nosotros,
};
use axum::{
    Router,
    routing::{any, get},
};

/// Route every successful mutation redirects to
pub const LIST_ROUTE: &str = "/listar-pedidos";

/// Build the application routes
///
/// - GET / /productos /certificados /galeria /sobre-nosotros - static pages
/// - GET, POST /crear-pedido - order form, create
/// - GET /listar-pedidos - order list
/// - GET, POST /actualizar-pedido/{id} - pre-filled form, update
/// - ANY /eliminar-pedido/{id} - delete
pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/productos", get(productos))
        .route("/certificados", get(certificados))
        .route("/galeria", get(galeria))
        .route("/sobre-nosotros", get(sobre_nosotros))
        .route("/crear-pedido", get(crear_pedido_form).post(crear_pedido))
        .route(LIST_ROUTE, get(listar_pedidos))
        .route(
            "/actualizar-pedido/{id}",
            get(actualizar_pedido_form).post(actualizar_pedido),
        )
        .route("/eliminar-pedido/{id}", any(eliminar_pedido))
        .with_state(state)
}
