//! HTTP surface for station uploads
//!
//! Stations push readings with plain GET requests. Each request runs the
//! normalization pipeline on its own parameters and writes the resulting point;
//! the only shared state is the immutable pipeline and the writer.
//!
//! # Endpoints
//!
//! - `GET /` - Ambient Weather / generic custom-server upload
//! - `GET /weatherstation/updateweatherstation.php` - Wunderground-style upload
//! - `GET /health` - Liveness probe

pub mod handlers;
pub mod routes;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::app::adapters::influx_writer::PointWriter;
use crate::app::services::pipeline::TelemetryPipeline;
use crate::config::ServerConfig;
use crate::{Error, Result};

/// Shared application state
pub struct AppState<W> {
    /// Normalization pipeline (immutable)
    pub pipeline: TelemetryPipeline,

    /// Storage collaborator
    pub writer: W,
}

impl<W: PointWriter> AppState<W> {
    pub fn new(pipeline: TelemetryPipeline, writer: W) -> Self {
        Self { pipeline, writer }
    }
}

/// Build the router with request tracing
pub fn build_router<W: PointWriter>(state: Arc<AppState<W>>) -> Router {
    routes::ingest_routes::<W>()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve until Ctrl-C
pub async fn serve<W: PointWriter>(config: &ServerConfig, state: Arc<AppState<W>>) -> Result<()> {
    let addr = config.socket_addr();

    info!("pws-ingest v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Dialects: {}",
        state.pipeline.mapper().dialect_names().join(", ")
    );
    info!("Storage: {}", state.writer.describe());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::io(format!("Failed to bind {}", addr), e))?;
    info!("HTTP server: http://{}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::io("HTTP server error", e))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl-C, shutting down gracefully");
}
