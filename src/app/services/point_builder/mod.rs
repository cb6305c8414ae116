//! Time-series point assembly
//!
//! Converts a completed [`Reading`] into the tagged record written to storage:
//! measurement `weather`, a single `passkey` tag and one field per numeric
//! attribute. The field-name set is fixed, so every point carries all 24 fields
//! whether or not the station reported them.
//!
//! - [`line_protocol`] - InfluxDB line protocol encoding of a point

pub mod line_protocol;

#[cfg(test)]
pub mod tests;

use chrono::SubsecRound;
use std::collections::BTreeMap;

use crate::app::models::{Reading, TimeSeriesPoint};
use crate::constants::{MEASUREMENT_NAME, STATION_TAG_KEY};

pub use line_protocol::encode_line;

/// Build the storage record for a reading
///
/// The station key goes into the tag set only. Float fields stay float and
/// integer fields stay integer; the timestamp is truncated to whole seconds.
pub fn build_point(reading: &Reading) -> TimeSeriesPoint {
    let mut tags = BTreeMap::new();
    tags.insert(STATION_TAG_KEY.to_string(), reading.station_key.clone());

    let fields = reading
        .numeric_fields()
        .map(|(field, value)| (field.wire_name().to_string(), value))
        .collect();

    TimeSeriesPoint {
        measurement: MEASUREMENT_NAME.to_string(),
        tags,
        fields,
        timestamp: reading.observed_at.trunc_subsecs(0),
    }
}
