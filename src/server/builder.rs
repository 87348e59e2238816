//! ServerBuilder for fluent API to build the HTTP server

use super::handlers::AppState;
use super::router::build_routes;
use super::views::Views;
use crate::core::{AppError, OrderRepository};
use axum::Router;
use axum_extra::extract::cookie::Key;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Builder for the application router
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_repository(InMemoryOrderRepository::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    repository: Option<Arc<dyn OrderRepository>>,
    views: Option<Views>,
    key: Option<Key>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            repository: None,
            views: None,
            key: None,
        }
    }

    /// Set the order repository (required)
    pub fn with_repository(mut self, repository: impl OrderRepository + 'static) -> Self {
        self.repository = Some(Arc::new(repository));
        self
    }

    /// Set an already shared order repository (required)
    pub fn with_shared_repository(mut self, repository: Arc<dyn OrderRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Use these templates instead of the embedded ones
    pub fn with_views(mut self, views: Views) -> Self {
        self.views = Some(views);
        self
    }

    /// Key signing the message cookie
    ///
    /// Without one a random key is generated, so queued messages do not
    /// survive a restart.
    pub fn with_session_key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }

    /// Build the final router
    pub fn build(self) -> Result<Router, AppError> {
        let repository = self.repository.ok_or_else(|| {
            AppError::Internal("OrderRepository is required. Call .with_repository()".to_string())
        })?;
        let views = match self.views {
            Some(views) => views,
            None => Views::embedded()?,
        };

        let key = self.key.unwrap_or_else(|| {
            tracing::warn!("No session key configured, using a random one");
            Key::generate()
        });

        let app = build_routes(AppState {
            repository,
            views,
            key,
        });

        Ok(app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> anyhow::Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
