//! Command implementations for pws-ingest
//!
//! - `serve`: validate configuration, pick the writer and run the HTTP service
//! - `check`: run one query string through the pipeline and print the point

use axum::extract::Query;
use axum::http::Uri;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

use crate::app::adapters::influx_writer::{InfluxWriter, MemoryWriter};
use crate::app::services::pipeline::TelemetryPipeline;
use crate::app::services::point_builder::encode_line;
use crate::app::services::telemetry_parser::{DialectMapper, RawParameters};
use crate::cli::args::{Args, CheckArgs, Commands, LoggingArgs, ServeArgs};
use crate::server::{self, AppState};
use crate::{Error, Result};

/// Main command runner
pub async fn run(args: Args) -> Result<()> {
    match args.get_command()? {
        Commands::Serve(serve_args) => run_serve(serve_args).await,
        Commands::Check(check_args) => run_check(check_args),
    }
}

/// Run the ingestion service until shutdown
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    setup_logging(&args.logging);

    let config = args.to_config();
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let pipeline = TelemetryPipeline::new(config.dialect_mapper());

    if config.dry_run {
        let state = Arc::new(AppState::new(pipeline, MemoryWriter::new()));
        server::serve(&config.server, state).await
    } else {
        let writer = InfluxWriter::new(&config.influx)?;
        let state = Arc::new(AppState::new(pipeline, writer));
        server::serve(&config.server, state).await
    }
}

/// Normalize a single upload from the command line and print the point
pub fn run_check(args: CheckArgs) -> Result<()> {
    setup_logging(&args.logging);

    let params = parse_query(&args.query)?;
    let pipeline = TelemetryPipeline::new(DialectMapper::from_kinds(&args.dialects.dialects));
    let arrival = args.arrival.unwrap_or_else(Utc::now);

    let processed = pipeline.process(&params, arrival)?;

    if args.json {
        let json = serde_json::to_string_pretty(&processed.point)
            .map_err(|e| Error::configuration(format!("Failed to serialize point: {}", e)))?;
        println!("{}", json);
    } else {
        println!("{}", encode_line(&processed.point));
    }

    Ok(())
}

/// Decode a URL query string into raw parameters
pub fn parse_query(query: &str) -> Result<RawParameters> {
    let uri: Uri = format!("/?{}", query.trim_start_matches('?'))
        .parse()
        .map_err(|e| Error::configuration(format!("Invalid query string: {}", e)))?;

    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&uri)
        .map_err(|e| Error::configuration(format!("Invalid query string: {}", e)))?;

    Ok(pairs.into_iter().collect())
}

/// Set up structured logging
pub fn setup_logging(args: &LoggingArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = &args.log_level;

    // RUST_LOG takes precedence over --log-level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("pws_ingest={},tower_http={}", log_level, log_level))
    });

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}
