//! Personal Weather Station Ingestion Library
//!
//! Receives the key-value uploads that personal weather stations push over
//! HTTP and turns each one into a validated, enriched InfluxDB point.
//!
//! This library provides tools for:
//! - Mapping Ambient Weather and Wunderground parameter names onto one closed field set
//! - Strict, all-or-nothing decoding of every reported value
//! - Resolving the observation time, falling back to arrival time when absent
//! - Deriving indoor and outdoor dew point
//! - Building and encoding the time-series point, and writing it to InfluxDB v2

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod derived_metrics;
        pub mod pipeline;
        pub mod point_builder;
        pub mod telemetry_parser;
    }
    pub mod adapters {
        pub mod influx_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

pub mod server;

// Re-export commonly used types
pub use app::models::{Field, FieldValue, Reading, TimeSeriesPoint};
pub use app::services::pipeline::{ProcessedReading, TelemetryPipeline};
pub use app::services::telemetry_parser::RawParameters;
pub use config::IngestConfig;
pub use error::{Error, Result};
