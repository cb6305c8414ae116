//! Configuration management and validation.
//!
//! Provides configuration structures for the HTTP listener, the InfluxDB
//! write target and dialect selection, built from CLI arguments (which
//! themselves fall back to environment variables).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::app::services::telemetry_parser::{DialectKind, DialectMapper};
use crate::constants::{DEFAULT_BIND_ADDRESS, DEFAULT_PORT, DEFAULT_WRITE_TIMEOUT_SECS};
use crate::{Error, Result};

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub bind: String,

    /// TCP port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `bind:port` string for the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// InfluxDB v2 write target
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluxConfig {
    /// Base URL, e.g. `http://localhost:8086`
    pub url: String,

    /// API token (never serialized or logged)
    #[serde(skip_serializing, default)]
    pub token: String,

    /// Organization name
    pub org: String,

    /// Destination bucket
    pub bucket: String,

    /// Timeout for a single write request
    pub write_timeout_secs: u64,
}

impl Default for InfluxConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            org: String::new(),
            bucket: String::new(),
            write_timeout_secs: DEFAULT_WRITE_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for InfluxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfluxConfig")
            .field("url", &self.url)
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .field("org", &self.org)
            .field("bucket", &self.bucket)
            .field("write_timeout_secs", &self.write_timeout_secs)
            .finish()
    }
}

/// Global configuration for the ingestion service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// HTTP listener settings
    pub server: ServerConfig,

    /// Storage target
    pub influx: InfluxConfig,

    /// Enabled dialects, in precedence order
    pub dialects: Vec<DialectKind>,

    /// Log points instead of writing them
    pub dry_run: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            influx: InfluxConfig::default(),
            dialects: DialectKind::ALL.to_vec(),
            dry_run: false,
        }
    }
}

impl IngestConfig {
    /// Set the listener address
    pub fn with_server(mut self, bind: impl Into<String>, port: u16) -> Self {
        self.server = ServerConfig {
            bind: bind.into(),
            port,
        };
        self
    }

    /// Set the InfluxDB target
    pub fn with_influx(mut self, influx: InfluxConfig) -> Self {
        self.influx = influx;
        self
    }

    /// Restrict the enabled dialects
    pub fn with_dialects(mut self, dialects: Vec<DialectKind>) -> Self {
        self.dialects = dialects;
        self
    }

    /// Enable dry-run mode
    pub fn with_dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Dialect mapper for the enabled dialects
    pub fn dialect_mapper(&self) -> DialectMapper {
        DialectMapper::from_kinds(&self.dialects)
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::configuration("Port must be non-zero"));
        }

        if self.dialects.is_empty() {
            return Err(Error::configuration("At least one dialect must be enabled"));
        }

        if self.dry_run {
            return Ok(());
        }

        let required = [
            ("InfluxDB URL (--influx-url / INFLUXDB_URL)", &self.influx.url),
            ("InfluxDB org (--influx-org / INFLUXDB_ORG)", &self.influx.org),
            (
                "InfluxDB bucket (--influx-bucket / INFLUXDB_BUCKET)",
                &self.influx.bucket,
            ),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::configuration(format!("{} is required", name)));
            }
        }

        if self.influx.write_timeout_secs == 0 {
            return Err(Error::configuration("Write timeout must be at least 1 second"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn influx() -> InfluxConfig {
        InfluxConfig {
            url: "http://localhost:8086".to_string(),
            token: "tok".to_string(),
            org: "home".to_string(),
            bucket: "weather".to_string(),
            write_timeout_secs: 10,
        }
    }

    #[test]
    fn test_defaults() {
        let config = IngestConfig::default();
        assert_eq!(config.server.socket_addr(), "0.0.0.0:8080");
        assert_eq!(config.dialects, DialectKind::ALL.to_vec());
        assert_eq!(config.influx.write_timeout_secs, 10);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_valid_config() {
        let config = IngestConfig::default().with_influx(influx());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_influx_settings_rejected() {
        let err = IngestConfig::default().validate().unwrap_err();
        assert!(err.to_string().contains("InfluxDB URL"));

        let mut target = influx();
        target.bucket = " ".to_string();
        let err = IngestConfig::default()
            .with_influx(target)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("bucket"));
    }

    #[test]
    fn test_dry_run_needs_no_influx() {
        assert!(IngestConfig::default().with_dry_run().validate().is_ok());
    }

    #[test]
    fn test_zero_port_and_no_dialects_rejected() {
        let config = IngestConfig::default().with_dry_run().with_server("127.0.0.1", 0);
        assert!(config.validate().is_err());

        let config = IngestConfig::default().with_dry_run().with_dialects(vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_token_redacted_from_debug_and_serialization() {
        let config = influx();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("tok\""));
        assert!(debug.contains("<redacted>"));

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("token"));
    }

    #[test]
    fn test_dialect_mapper_follows_selection() {
        let config = IngestConfig::default().with_dialects(vec![DialectKind::Wunderground]);
        assert_eq!(config.dialect_mapper().dialect_names(), vec!["wunderground"]);
    }
}
