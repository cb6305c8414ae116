//! Derived meteorological values
//!
//! Dew point uses the linear approximation `Td = T - 9/25 * (100 - RH)`,
//! which is close for humid air and drifts as humidity drops. Humidity is not
//! clamped: out-of-range input yields a proportionally out-of-range result.

use crate::app::models::{DerivedMetrics, Measurements};
use crate::constants::{DEW_POINT_SLOPE_DENOMINATOR, DEW_POINT_SLOPE_NUMERATOR};

/// Approximate dew point in °F from temperature in °F and relative humidity in percent
pub fn dew_point(temp_f: f64, humidity_pct: i64) -> f64 {
    let deficit = 100.0 - humidity_pct as f64;
    temp_f - DEW_POINT_SLOPE_NUMERATOR * deficit / DEW_POINT_SLOPE_DENOMINATOR
}

impl DerivedMetrics {
    /// Compute outdoor and indoor dew point from decoded measurements
    pub fn compute(measurements: &Measurements) -> Self {
        Self {
            dew_point_outdoor: dew_point(
                measurements.temp_outdoor_f,
                measurements.humidity_outdoor,
            ),
            dew_point_indoor: dew_point(measurements.temp_indoor_f, measurements.humidity_indoor),
        }
    }
}
