//! Telemetry normalization pipeline
//!
//! Runs the stages in order for a single upload:
//! raw parameters → reading builder → timestamp resolver → derived metrics →
//! point builder. Every stage is pure and synchronous; the pipeline holds only
//! the immutable dialect table, so one instance can serve any number of
//! concurrent requests without locking.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::point_builder::build_point;
use super::telemetry_parser::{DialectMapper, RawParameters, ReadingBuilder, resolve_timestamp};
use crate::Result;
use crate::app::models::{DerivedMetrics, Reading, TimeSeriesPoint};

/// Result of a successful pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedReading {
    /// The decoded, enriched reading
    pub reading: Reading,

    /// The record to hand to storage
    pub point: TimeSeriesPoint,
}

/// Stateless normalization pipeline
#[derive(Debug, Clone, Default)]
pub struct TelemetryPipeline {
    mapper: DialectMapper,
}

impl TelemetryPipeline {
    /// Create a pipeline over the given dialects
    pub fn new(mapper: DialectMapper) -> Self {
        Self { mapper }
    }

    /// The dialects this pipeline recognizes
    pub fn mapper(&self) -> &DialectMapper {
        &self.mapper
    }

    /// Normalize one upload
    ///
    /// `arrival` is the time the request was received; it is used only when the
    /// station did not send `dateutc`. Any failure aborts the whole upload and
    /// nothing is produced.
    pub fn process(
        &self,
        params: &RawParameters,
        arrival: DateTime<Utc>,
    ) -> Result<ProcessedReading> {
        let decoded = ReadingBuilder::new(&self.mapper).build(params)?;
        let observed_at = resolve_timestamp(decoded.observed_at_raw.as_deref(), arrival)?;
        let derived = DerivedMetrics::compute(&decoded.measurements);

        let reading = Reading::new(
            decoded.station_key,
            observed_at,
            decoded.measurements,
            derived,
        );
        let point = build_point(&reading);

        debug!(
            "Normalized reading from station '{}' at {} ({} parameters)",
            reading.station_key,
            reading.observed_at,
            params.len()
        );

        Ok(ProcessedReading { reading, point })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::app::models::FieldValue;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn params(pairs: &[(&str, &str)]) -> RawParameters {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_process_full_upload() {
        let pipeline = TelemetryPipeline::default();
        let arrival = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

        let processed = pipeline
            .process(
                &params(&[
                    ("PASSKEY", "ABC"),
                    ("dateutc", "2024-03-01 12:00:00"),
                    ("tempf", "70"),
                    ("humidity", "50"),
                ]),
                arrival,
            )
            .unwrap();

        let expected_time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(processed.reading.observed_at, expected_time);
        assert_eq!(processed.reading.derived.dew_point_outdoor, 52.0);
        assert_eq!(processed.point.timestamp, expected_time);
        assert_eq!(processed.point.tag("passkey"), Some("ABC"));
        assert_eq!(processed.point.field("dewpt"), Some(FieldValue::Float(52.0)));
    }

    #[test]
    fn test_missing_date_uses_arrival() {
        let pipeline = TelemetryPipeline::default();
        let arrival = Utc.with_ymd_and_hms(2024, 7, 4, 18, 30, 5).unwrap();

        let processed = pipeline
            .process(&params(&[("PASSKEY", "ABC")]), arrival)
            .unwrap();

        assert_eq!(processed.reading.observed_at, arrival);
        assert_eq!(processed.point.timestamp, arrival);
    }

    #[test]
    fn test_decode_failure_produces_nothing() {
        let pipeline = TelemetryPipeline::default();
        let result = pipeline.process(&params(&[("tempf", "abc")]), Utc::now());

        let err = result.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert_eq!(err.field(), Some("tempf"));
    }

    #[test]
    fn test_bad_date_is_rejected_even_with_good_values() {
        let pipeline = TelemetryPipeline::default();
        let result = pipeline.process(
            &params(&[("tempf", "70"), ("dateutc", "2024-02-30 00:00:00")]),
            Utc::now(),
        );

        assert!(matches!(result, Err(Error::Timestamp { .. })));
    }

    #[test]
    fn test_concurrent_requests_are_independent() {
        let pipeline = Arc::new(TelemetryPipeline::default());
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let pipeline = Arc::clone(&pipeline);
                std::thread::spawn(move || {
                    let key = format!("STATION-{}", i);
                    let temp = format!("{}.5", 40 + i);
                    let date = format!("2024-03-01 00:{:02}:00", i);
                    let raw = params(&[
                        ("PASSKEY", key.as_str()),
                        ("tempf", temp.as_str()),
                        ("dateutc", date.as_str()),
                    ]);
                    (i, pipeline.process(&raw, Utc::now()).unwrap())
                })
            })
            .collect();

        for handle in handles {
            let (i, processed) = handle.join().unwrap();
            let expected_key = format!("STATION-{}", i);
            assert_eq!(processed.point.tag("passkey"), Some(expected_key.as_str()));
            assert_eq!(
                processed.point.field("tempf"),
                Some(FieldValue::Float(40.0 + i as f64 + 0.5))
            );
            assert_eq!(
                processed.point.timestamp,
                base + chrono::Duration::minutes(i as i64)
            );
        }
    }
}
