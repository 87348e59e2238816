//! Typed error handling for the order application
//!
//! Each failure category has its own enum so handlers and tests can match on
//! the specific case instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`StorageError`]: Errors raised by a repository backend
//! - [`ConfigError`]: Errors related to configuration loading
//! - [`RenderError`]: Errors raised by the template engine
//! - [`RequestError`]: Errors caused by a malformed request
//!
//! Field validation failures are not errors in this sense: the create workflow
//! turns them into user-facing messages and re-renders the form.
//!
//! # Example
//!
//! ```rust,ignore
//! async fn show(repo: &dyn OrderRepository, id: i64) -> Result<Pedido, AppError> {
//!     repo.get_by_id(id).await?.ok_or(AppError::Internal("gone".into()))
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::fmt;

/// The main error type of the application
///
/// Every handler returns `Result<Response, AppError>`; the error is turned
/// into an HTML error page by its [`IntoResponse`] impl.
#[derive(Debug)]
pub enum AppError {
    /// Repository backend errors
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),

    /// Template rendering errors
    Render(RenderError),

    /// HTTP/Request errors
    Request(RequestError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Storage(e) => write!(f, "{}", e),
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Render(e) => write!(f, "{}", e),
            AppError::Request(e) => write!(f, "{}", e),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Storage(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Render(e) => Some(e),
            AppError::Request(e) => Some(e),
            AppError::Internal(_) => None,
        }
    }
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Request(e) => e.status_code(),
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Render(_) => "RENDER_ERROR",
            AppError::Request(e) => e.error_code(),
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message shown to the end user
    ///
    /// Server-side failures never leak backend details into the page.
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "El servidor no pudo completar la solicitud.".to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.error_code(), error = %self, "request rejected");
        }

        let body = format!(
            "<!DOCTYPE html>\n<html><head><title>{status}</title></head>\
             <body><h1>{status}</h1><p>{message}</p><p><code>{code}</code></p>\
             <p><a href=\"/\">Volver al inicio</a></p></body></html>",
            status = status,
            message = tera::escape_html(&self.public_message()),
            code = self.error_code(),
        );
        (status, Html(body)).into_response()
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to repository backends
#[derive(Debug)]
pub enum StorageError {
    /// Connection error
    ConnectionError { backend: String, message: String },

    /// Query execution error
    QueryError { backend: String, message: String },

    /// Data integrity error (row could not be decoded, constraint violated)
    IntegrityError { message: String },

    /// Backend not compiled in or not reachable
    Unavailable { backend: String },
}

impl StorageError {
    /// Wrap a driver error raised while executing a statement
    pub fn query(backend: &str, err: impl fmt::Display) -> Self {
        StorageError::QueryError {
            backend: backend.to_string(),
            message: err.to_string(),
        }
    }

    /// Wrap a driver error raised while opening a connection
    pub fn connection(backend: &str, err: impl fmt::Display) -> Self {
        StorageError::ConnectionError {
            backend: backend.to_string(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ConnectionError { backend, message } => {
                write!(f, "Failed to connect to {}: {}", backend, message)
            }
            StorageError::QueryError { backend, message } => {
                write!(f, "{} query error: {}", backend, message)
            }
            StorageError::IntegrityError { message } => {
                write!(f, "Data integrity error: {}", message)
            }
            StorageError::Unavailable { backend } => {
                write!(f, "Storage backend '{}' is unavailable", backend)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Database URL names a backend this build does not support
    #[error("Unsupported database URL '{url}' (enable the matching cargo feature)")]
    UnsupportedDatabase { url: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_deref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

// =============================================================================
// Render Errors
// =============================================================================

/// Errors raised while loading or rendering templates
#[derive(Debug)]
pub enum RenderError {
    /// Templates could not be parsed or loaded
    LoadError { message: String },

    /// A template failed to render
    TemplateError { template: String, message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::LoadError { message } => {
                write!(f, "Failed to load templates: {}", message)
            }
            RenderError::TemplateError { template, message } => {
                write!(f, "Failed to render '{}': {}", template, message)
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::Render(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug)]
pub enum RequestError {
    /// A submitted field could not be converted to its column type
    UnconvertibleField { field: String, value: String },

    /// Invalid request body
    InvalidBody { message: String },

    /// The path does not name an order (non-numeric id)
    NotFound { path: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::UnconvertibleField { field, value } => {
                write!(f, "El campo '{}' tiene un valor no válido: '{}'", field, value)
            }
            RequestError::InvalidBody { message } => {
                write!(f, "Formulario no válido: {}", message)
            }
            RequestError::NotFound { path } => write!(f, "Página no encontrada: {}", path),
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::UnconvertibleField { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::UnconvertibleField { .. } => "UNCONVERTIBLE_FIELD",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::NotFound { .. } => "NOT_FOUND",
        }
    }
}

impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        AppError::Request(err)
    }
}
