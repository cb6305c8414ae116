//! Route definitions for station uploads

use axum::{Router, routing::get};
use std::sync::Arc;

use super::{AppState, handlers};
use crate::app::adapters::influx_writer::PointWriter;
use crate::constants::routes;

/// Upload and health routes
pub fn ingest_routes<W: PointWriter>() -> Router<Arc<AppState<W>>> {
    Router::new()
        .route(routes::INGEST_ROOT, get(handlers::ingest::<W>))
        .route(routes::WUNDERGROUND_UPLOAD, get(handlers::ingest::<W>))
        .route(routes::HEALTH, get(handlers::health))
}
