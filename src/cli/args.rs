//! Command-line argument definitions for pws-ingest
//!
//! Every connection setting can also come from the environment, so the
//! service can run unchanged under systemd or in a container.

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::app::services::telemetry_parser::DialectKind;
use crate::config::{IngestConfig, InfluxConfig, ServerConfig};
use crate::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_LOG_LEVEL, DEFAULT_PORT, DEFAULT_WRITE_TIMEOUT_SECS,
};
use crate::{Error, Result};

/// CLI arguments for the weather station ingestion service
///
/// Receives personal weather station uploads over HTTP, normalizes them and
/// writes one InfluxDB point per reading.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pws-ingest",
    version,
    about = "Receive personal weather station uploads and write them to InfluxDB",
    long_about = "Accepts Ambient Weather and Wunderground style uploads, validates every \
                  value, derives indoor and outdoor dew point and writes one point per \
                  reading to an InfluxDB v2 bucket. Malformed uploads are rejected with \
                  HTTP 400 naming the offending parameter."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the HTTP ingestion service (default command)
    Serve(ServeArgs),
    /// Run one query string through the pipeline and print the resulting point
    Check(CheckArgs),
}

impl Args {
    /// The requested command, `serve` with environment defaults when omitted
    ///
    /// Fails when a fallback environment variable holds an invalid value.
    pub fn get_command(&self) -> Result<Commands> {
        match &self.command {
            Some(command) => Ok(command.clone()),
            None => default_serve(["serve"]),
        }
    }
}

fn default_serve<I, T>(argv: I) -> Result<Commands>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    ServeArgs::try_parse_from(argv)
        .map(Commands::Serve)
        .map_err(|e| Error::configuration(format!("Invalid serve options: {}", e)))
}

/// Options shared by every command
#[derive(Debug, Clone, ClapArgs)]
pub struct LoggingArgs {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log-level", env = "PWS_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Compact log output without timestamps
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Dialect selection shared by every command
#[derive(Debug, Clone, ClapArgs)]
pub struct DialectArgs {
    /// Parameter dialects to accept, in precedence order
    #[arg(
        long = "dialects",
        env = "PWS_DIALECTS",
        value_enum,
        value_delimiter = ',',
        default_values_t = DialectKind::ALL.to_vec()
    )]
    pub dialects: Vec<DialectKind>,
}

/// Arguments for the serve command
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    /// Address to bind the HTTP listener to
    #[arg(long = "bind", env = "PWS_BIND", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    /// HTTP port
    #[arg(short = 'p', long = "port", env = "PWS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// InfluxDB base URL, e.g. http://localhost:8086
    #[arg(long = "influx-url", env = "INFLUXDB_URL", default_value = "")]
    pub influx_url: String,

    /// InfluxDB API token
    #[arg(
        long = "influx-token",
        env = "INFLUXDB_TOKEN",
        default_value = "",
        hide_env_values = true
    )]
    pub influx_token: String,

    /// InfluxDB organization
    #[arg(long = "influx-org", env = "INFLUXDB_ORG", default_value = "")]
    pub influx_org: String,

    /// InfluxDB bucket
    #[arg(long = "influx-bucket", env = "INFLUXDB_BUCKET", default_value = "")]
    pub influx_bucket: String,

    /// Timeout for a single write, in seconds
    #[arg(
        long = "write-timeout-secs",
        env = "PWS_WRITE_TIMEOUT_SECS",
        default_value_t = DEFAULT_WRITE_TIMEOUT_SECS
    )]
    pub write_timeout_secs: u64,

    /// Log points instead of writing them to InfluxDB
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    #[command(flatten)]
    pub dialects: DialectArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl ServeArgs {
    /// Convert parsed arguments into service configuration
    pub fn to_config(&self) -> IngestConfig {
        IngestConfig {
            server: ServerConfig {
                bind: self.bind.clone(),
                port: self.port,
            },
            influx: InfluxConfig {
                url: self.influx_url.clone(),
                token: self.influx_token.clone(),
                org: self.influx_org.clone(),
                bucket: self.influx_bucket.clone(),
                write_timeout_secs: self.write_timeout_secs,
            },
            dialects: self.dialects.dialects.clone(),
            dry_run: self.dry_run,
        }
    }
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Upload query string, with or without the leading '?'
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Arrival time used when the query has no dateutc (RFC 3339, default now)
    #[arg(long = "arrival", value_name = "RFC3339")]
    pub arrival: Option<chrono::DateTime<chrono::Utc>>,

    /// Print the point as JSON instead of line protocol
    #[arg(long = "json")]
    pub json: bool,

    #[command(flatten)]
    pub dialects: DialectArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,
}
