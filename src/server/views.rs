//! Template rendering and response helpers
//!
//! Templates are compiled into the binary from `templates/`; a directory can
//! replace them at startup (`templates_dir` in the configuration).

use crate::core::{AppError, Messages, RenderError};
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;
use tera::{Context, Tera};

pub const INDEX: &str = "index.html";
pub const PRODUCTOS: &str = "productos.html";
pub const CERTIFICADOS: &str = "certificados.html";
pub const GALERIA: &str = "galeria.html";
pub const SOBRE_NOSOTROS: &str = "sobrenosotros.html";
pub const REGISTRAR: &str = "registrar.html";
pub const LISTAR_PEDIDOS: &str = "listar_pedidos.html";
pub const ACTUALIZAR_PEDIDO: &str = "actualizar_pedido.html";

const EMBEDDED: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    (INDEX, include_str!("../../templates/index.html")),
    (PRODUCTOS, include_str!("../../templates/productos.html")),
    (CERTIFICADOS, include_str!("../../templates/certificados.html")),
    (GALERIA, include_str!("../../templates/galeria.html")),
    (SOBRE_NOSOTROS, include_str!("../../templates/sobrenosotros.html")),
    (REGISTRAR, include_str!("../../templates/registrar.html")),
    (LISTAR_PEDIDOS, include_str!("../../templates/listar_pedidos.html")),
    (ACTUALIZAR_PEDIDO, include_str!("../../templates/actualizar_pedido.html")),
];

/// Shared template engine
#[derive(Clone)]
pub struct Views {
    tera: Arc<Tera>,
}

impl Views {
    /// Templates compiled into the binary
    pub fn embedded() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(EMBEDDED.iter().copied())
            .map_err(|e| RenderError::LoadError {
                message: e.to_string(),
            })?;
        Ok(Self::from_tera(tera))
    }

    /// Every `*.html` file under `dir`
    pub fn from_dir(dir: &str) -> Result<Self, RenderError> {
        let glob = format!("{}/**/*.html", dir.trim_end_matches('/'));
        let tera = Tera::new(&glob).map_err(|e| RenderError::LoadError {
            message: e.to_string(),
        })?;
        Ok(Self::from_tera(tera))
    }

    pub fn from_tera(tera: Tera) -> Self {
        Self {
            tera: Arc::new(tera),
        }
    }

    /// Render a template to a string
    pub fn render(&self, template: &str, context: &Context) -> Result<String, RenderError> {
        self.tera
            .render(template, context)
            .map_err(|e| RenderError::TemplateError {
                template: template.to_string(),
                message: render_error_chain(&e),
            })
    }

    /// Render a full page, consuming every queued message
    pub fn page(
        &self,
        template: &str,
        mut context: Context,
        messages: Messages,
    ) -> Result<Response, AppError> {
        let (messages, jar) = messages.drain_for_render();
        context.insert("messages", &messages);
        let body = self.render(template, &context)?;

        Ok((jar, Html(body)).into_response())
    }
}

/// `303 See Other` to `to`, carrying queued messages to the next page
pub fn redirect(to: &str, messages: Messages) -> Response {
    (messages.into_jar(), Redirect::to(to)).into_response()
}

fn render_error_chain(err: &tera::Error) -> String {
    use std::error::Error;

    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
