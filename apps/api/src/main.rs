mod config;
mod errors;
mod routes;
mod schema;
mod state;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::schema::generator::KeywordSchemaGenerator;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Schema Extraction Server v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState {
        config: config.clone(),
        generator: Arc::new(KeywordSchemaGenerator),
    };

    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Listening on http://{addr}");
    info!("API:    http://{addr}/api/generate-schema");
    info!("Health: http://{addr}/health");
    info!("Dev tool served from {}", config.dev_tool_path);

    axum::serve(listener, app).await?;

    Ok(())
}
