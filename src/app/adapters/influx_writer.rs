//! Storage writers for time-series points
//!
//! [`PointWriter`] is the seam between the HTTP layer and storage. The
//! production implementation posts line protocol to the InfluxDB v2 write API;
//! [`MemoryWriter`] logs points for dry runs and can keep them for tests. Writers do
//! not retry: a failed write is reported once and surfaces as HTTP 500.

use serde::Deserialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::app::models::TimeSeriesPoint;
use crate::app::services::point_builder::encode_line;
use crate::config::InfluxConfig;
use crate::{Error, Result};

/// Destination for normalized points
pub trait PointWriter: Send + Sync + 'static {
    /// Persist a single point
    fn write_point(&self, point: &TimeSeriesPoint) -> impl Future<Output = Result<()>> + Send;

    /// Short description for startup logging
    fn describe(&self) -> String;
}

/// InfluxDB v2 HTTP writer
#[derive(Debug, Clone)]
pub struct InfluxWriter {
    client: reqwest::Client,
    write_url: reqwest::Url,
    token: String,
}

/// Error body returned by the InfluxDB write API
#[derive(Debug, Deserialize)]
struct InfluxErrorBody {
    message: String,
}

impl InfluxWriter {
    /// Create a writer for the configured bucket
    pub fn new(config: &InfluxConfig) -> Result<Self> {
        let write_url = build_write_url(config)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.write_timeout_secs))
            .build()
            .map_err(|e| Error::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            write_url,
            token: config.token.clone(),
        })
    }

    /// Full write endpoint including org, bucket and precision
    pub fn write_url(&self) -> &reqwest::Url {
        &self.write_url
    }
}

impl PointWriter for InfluxWriter {
    async fn write_point(&self, point: &TimeSeriesPoint) -> Result<()> {
        let body = encode_line(point);
        debug!("Writing line: {}", body);

        let mut request = self
            .client
            .post(self.write_url.clone())
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(body);
        if !self.token.is_empty() {
            request = request.header(
                reqwest::header::AUTHORIZATION,
                format!("Token {}", self.token),
            );
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::storage_write("InfluxDB request failed", e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<InfluxErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);

        Err(Error::storage_status(
            status.as_u16(),
            format!("InfluxDB returned {}: {}", status, message),
        ))
    }

    fn describe(&self) -> String {
        let mut url = self.write_url.clone();
        url.set_query(None);
        format!("InfluxDB at {}", url)
    }
}

/// Build `{url}/api/v2/write?org=..&bucket=..&precision=s`
pub fn build_write_url(config: &InfluxConfig) -> Result<reqwest::Url> {
    let base = config.url.trim_end_matches('/');
    let mut url = reqwest::Url::parse(&format!("{}/api/v2/write", base)).map_err(|e| {
        Error::configuration(format!("Invalid InfluxDB URL '{}': {}", config.url, e))
    })?;

    url.query_pairs_mut()
        .append_pair("org", &config.org)
        .append_pair("bucket", &config.bucket)
        .append_pair("precision", "s");

    Ok(url)
}

/// In-memory writer used for dry runs and tests
///
/// [`MemoryWriter::new`] only logs, so a long-running dry run holds no
/// points. [`MemoryWriter::recording`] keeps every point for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    points: Arc<Mutex<Vec<TimeSeriesPoint>>>,
    retain: bool,
}

impl MemoryWriter {
    /// Create a writer that logs points without keeping them
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer that keeps every point written
    pub fn recording() -> Self {
        Self {
            retain: true,
            ..Self::default()
        }
    }

    /// Snapshot of every point written so far
    pub async fn points(&self) -> Vec<TimeSeriesPoint> {
        self.points.lock().await.clone()
    }

    /// Number of points written so far
    pub async fn len(&self) -> usize {
        self.points.lock().await.len()
    }

    /// True when nothing has been written
    pub async fn is_empty(&self) -> bool {
        self.points.lock().await.is_empty()
    }
}

impl PointWriter for MemoryWriter {
    async fn write_point(&self, point: &TimeSeriesPoint) -> Result<()> {
        info!("Dry run, not written: {}", encode_line(point));
        if self.retain {
            self.points.lock().await.push(point.clone());
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory writer (dry run)".to_string()
    }
}
