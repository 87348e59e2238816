//! `pedidos` web server
//!
//! Configuration: `PEDIDOS_CONFIG` (YAML file), `DATABASE_URL`,
//! `PEDIDOS_HOST`, `PEDIDOS_PORT`, `PEDIDOS_SESSION_KEY`. Log filtering via `RUST_LOG`.

use anyhow::Result;
use pedidos::config::AppConfig;
use pedidos::server::{ServerBuilder, Views};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pedidos=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::load()?;

    let views = match &config.templates_dir {
        Some(dir) => {
            tracing::info!(dir = %dir, "Loading templates from directory");
            Views::from_dir(dir)?
        }
        None => Views::embedded()?,
    };

    let repository = pedidos::storage::connect(&config.database).await?;

    let mut builder = ServerBuilder::new()
        .with_shared_repository(repository)
        .with_views(views);
    if let Some(key) = config.session_key()? {
        builder = builder.with_session_key(key);
    }

    builder.serve(&config.server.bind_addr()).await
}
