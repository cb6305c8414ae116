//! Application constants for the weather station ingestion service
//!
//! Wire names, output record layout and runtime defaults shared across
//! the parser, the point builder and the CLI.

// =============================================================================
// Station Protocol
// =============================================================================

/// Format of the station-supplied `dateutc` value (always UTC, no offset)
pub const STATION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wunderground stations send this literal instead of a date to mean "now"
pub const DATE_NOW_LITERAL: &str = "now";

/// Response body returned to the station on success
pub const SUCCESS_BODY: &str = "Data posted to InfluxDB successfully!";

/// Paths that accept station uploads
pub mod routes {
    /// Ambient Weather / generic custom-server path
    pub const INGEST_ROOT: &str = "/";

    /// Wunderground-compatible upload path
    pub const WUNDERGROUND_UPLOAD: &str = "/weatherstation/updateweatherstation.php";

    /// Liveness probe
    pub const HEALTH: &str = "/health";
}

// =============================================================================
// Time-Series Output
// =============================================================================

/// Measurement name of every emitted point
pub const MEASUREMENT_NAME: &str = "weather";

/// Tag key carrying the station key
pub const STATION_TAG_KEY: &str = "passkey";

/// Dew point approximation: degrees of depression per 25 points of humidity deficit
pub const DEW_POINT_SLOPE_NUMERATOR: f64 = 9.0;
pub const DEW_POINT_SLOPE_DENOMINATOR: f64 = 25.0;

// =============================================================================
// Runtime Defaults
// =============================================================================

/// Default bind address for the HTTP listener
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8080;

/// Default timeout for a single storage write
pub const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 10;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
