//! HTTP handlers for the order workflows and the static pages
//!
//! Each workflow is a plain handler: read the form, maybe validate, run one
//! repository operation, then render or redirect. Nothing is kept between
//! requests besides the shared [`AppState`].

use axum::{
    Form,
    extract::{
        FromRef, Path, State,
        rejection::{FormRejection, PathRejection},
    },
    http::Uri,
    response::Response,
};
use axum_extra::extract::cookie::Key;
use std::sync::Arc;
use tera::Context;

use crate::core::{
    AppError, Messages, OrderRepository, PedidoForm, RequestError, validate_pedido_today,
};
use crate::server::router::LIST_ROUTE;
use crate::server::views::{self, Views, redirect};

/// Message queued after a successful create
pub const CREATED_MESSAGE: &str = "Pedido registrado exitosamente.";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn OrderRepository>,
    pub views: Views,
    /// Signs the message cookie
    pub key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

/// Order id from the path; anything that is not an integer is a 404
fn order_id(path: Result<Path<i64>, PathRejection>, uri: &Uri) -> Result<i64, AppError> {
    let Path(id) = path.map_err(|_| RequestError::NotFound {
        path: uri.path().to_string(),
    })?;
    Ok(id)
}

/// Unwrap the urlencoded body, turning a rejection into our error page
fn form_body(payload: Result<Form<PedidoForm>, FormRejection>) -> Result<PedidoForm, AppError> {
    let Form(form) = payload.map_err(|rejection| RequestError::InvalidBody {
        message: rejection.body_text(),
    })?;
    Ok(form)
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// GET /crear-pedido: empty order form
pub async fn crear_pedido_form(
    State(state): State<AppState>,
    messages: Messages,
) -> Result<Response, AppError> {
    state.views.page(views::REGISTRAR, Context::new(), messages)
}

/// POST /crear-pedido: validate, insert, redirect to the list
///
/// On validation failure the form is rendered again with the submitted
/// (trimmed) values and one error message per failed rule.
pub async fn crear_pedido(
    State(state): State<AppState>,
    mut messages: Messages,
    payload: Result<Form<PedidoForm>, FormRejection>,
) -> Result<Response, AppError> {
    let form = form_body(payload)?.trimmed();
    let errors = validate_pedido_today(&form);

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "Order form rejected");
        for error in errors {
            messages.error(error);
        }
        let mut context = Context::new();
        context.insert("nombre", &form.nombre);
        context.insert("direccion", &form.direccion);
        context.insert("numero", &form.numero);
        context.insert("cantidad_bidones", &form.cantidad_bidones);
        context.insert("fecha", &form.fecha);
        return state.views.page(views::REGISTRAR, context, messages);
    }

    let pedido = form.to_new_pedido()?;
    state.repository.insert(&pedido).await?;
    tracing::info!(nombre = %pedido.nombre, fecha = %pedido.fecha, "Order created");

    messages.success(CREATED_MESSAGE);
    Ok(redirect(LIST_ROUTE, messages))
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// GET /listar-pedidos: every stored order
pub async fn listar_pedidos(
    State(state): State<AppState>,
    messages: Messages,
) -> Result<Response, AppError> {
    let pedidos = state.repository.list_all().await?;

    let mut context = Context::new();
    context.insert("pedidos", &pedidos);
    state.views.page(views::LISTAR_PEDIDOS, context, messages)
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// GET /actualizar-pedido/{id}: form pre-filled with the stored order
///
/// An unknown id renders the page without an order.
pub async fn actualizar_pedido_form(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<i64>, PathRejection>,
    messages: Messages,
) -> Result<Response, AppError> {
    let id = order_id(path, &uri)?;
    let pedido = state.repository.get_by_id(id).await?;

    let mut context = Context::new();
    context.insert("pedido", &pedido);
    state.views.page(views::ACTUALIZAR_PEDIDO, context, messages)
}

/// POST /actualizar-pedido/{id}: overwrite the order as submitted
///
/// The field rules are not applied here; values are only converted to their
/// column types. An unknown id is a silent no-op.
pub async fn actualizar_pedido(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<i64>, PathRejection>,
    messages: Messages,
    payload: Result<Form<PedidoForm>, FormRejection>,
) -> Result<Response, AppError> {
    let id = order_id(path, &uri)?;
    let form = form_body(payload)?;
    let existing = state.repository.get_by_id(id).await?;

    let pedido = form.to_new_pedido()?;
    state.repository.update(id, &pedido).await?;
    tracing::info!(id, found = existing.is_some(), "Order updated");

    Ok(redirect(LIST_ROUTE, messages))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// ANY /eliminar-pedido/{id}: delete without confirmation
pub async fn eliminar_pedido(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<i64>, PathRejection>,
    messages: Messages,
) -> Result<Response, AppError> {
    let id = order_id(path, &uri)?;
    state.repository.delete(id).await?;
    tracing::info!(id, "Order deleted");

    Ok(redirect(LIST_ROUTE, messages))
}

// ---------------------------------------------------------------------------
// Static pages
// ---------------------------------------------------------------------------

fn shell(state: &AppState, template: &str, messages: Messages) -> Result<Response, AppError> {
    state.views.page(template, Context::new(), messages)
}

pub async fn index(State(state): State<AppState>, messages: Messages) -> Result<Response, AppError> {
    shell(&state, views::INDEX, messages)
}

pub async fn productos(
    State(state): State<AppState>,
    messages: Messages,
) -> Result<Response, AppError> {
    shell(&state, views::PRODUCTOS, messages)
}

pub async fn certificados(
    State(state): State<AppState>,
    messages: Messages,
) -> Result<Response, AppError> {
    shell(&state, views::CERTIFICADOS, messages)
}

pub async fn galeria(
    State(state): State<AppState>,
    messages: Messages,
) -> Result<Response, AppError> {
    shell(&state, views::GALERIA, messages)
}

pub async fn sobre_nosotros(
    State(state): State<AppState>,
    messages: Messages,
) -> Result<Response, AppError> {
    shell(&state, views::SOBRE_NOSOTROS, messages)
}
