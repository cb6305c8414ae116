//! Test utilities for point assembly and encoding

use chrono::{TimeZone, Utc};

use crate::app::models::{DerivedMetrics, Measurements, Reading};


/// A reading with a handful of non-zero values and derived metrics computed
pub fn sample_reading(station_key: &str) -> Reading {
    let measurements = Measurements {
        temp_outdoor_f: 70.0,
        humidity_outdoor: 50,
        temp_indoor_f: 68.5,
        humidity_indoor: 40,
        wind_dir: 180,
        rain_daily_in: 0.25,
        barom_rel_in: 29.92,
        ..Default::default()
    };
    let derived = DerivedMetrics::compute(&measurements);

    Reading::new(
        station_key.to_string(),
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        measurements,
        derived,
    )
}
