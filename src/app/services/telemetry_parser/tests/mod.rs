//! Test utilities for the station parameter parser
//!
//! Shared fixtures used across the parser test modules.

use super::reading_builder::RawParameters;

// Test modules
mod dialect_tests;
mod field_parser_tests;

/// A complete Ambient Weather upload as captured from a WS-2902 console
pub fn ambient_upload() -> Vec<(&'static str, &'static str)> {
    vec![
        ("PASSKEY", "A1B2C3D4E5F6"),
        ("stationtype", "AMBWeatherV4.2.9"),
        ("dateutc", "2024-03-01 12:00:00"),
        ("tempinf", "71.6"),
        ("humidityin", "38"),
        ("baromrelin", "29.921"),
        ("baromabsin", "29.578"),
        ("tempf", "45.3"),
        ("battout", "1"),
        ("humidity", "82"),
        ("winddir", "212"),
        ("winddir_avg10m", "205"),
        ("windspeedmph", "3.4"),
        ("windgustmph", "6.9"),
        ("maxdailygust", "14.8"),
        ("hourlyrainin", "0.000"),
        ("eventrainin", "0.110"),
        ("dailyrainin", "0.110"),
        ("weeklyrainin", "0.430"),
        ("monthlyrainin", "0.430"),
        ("yearlyrainin", "4.020"),
        ("solarradiation", "212.45"),
        ("uv", "2"),
        ("battrain", "1"),
        ("battin", "1"),
    ]
}

/// Helper to build a parameter set from literal pairs
pub fn params(pairs: &[(&str, &str)]) -> RawParameters {
    pairs.iter().copied().collect()
}
