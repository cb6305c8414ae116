//! HTTP request handlers for station uploads.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::AppState;
use crate::Error;
use crate::app::adapters::influx_writer::PointWriter;
use crate::app::services::telemetry_parser::RawParameters;
use crate::constants::SUCCESS_BODY;

/// Error response: 400 for station mistakes, 500 for storage failures
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_client_error() {
            (StatusCode::BAD_REQUEST, format!("Bad Request: {}", self.0)).into_response()
        } else {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// GET / - accept one station reading
pub async fn ingest<W: PointWriter>(
    State(state): State<Arc<AppState<W>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let arrival = Utc::now();
    let params: RawParameters = pairs.into_iter().collect();

    let processed = state.pipeline.process(&params, arrival).map_err(|e| {
        warn!("Failed to parse weather data: {}", e);
        e
    })?;

    state
        .writer
        .write_point(&processed.point)
        .await
        .map_err(|e| {
            error!("Failed to write point: {}", e);
            e
        })?;

    info!(
        passkey = %processed.reading.station_key,
        timestamp = %processed.reading.observed_at,
        "Data processed successfully"
    );

    Ok((StatusCode::OK, SUCCESS_BODY).into_response())
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
