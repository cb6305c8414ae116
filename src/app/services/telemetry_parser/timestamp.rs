//! Observation timestamp resolution
//!
//! Stations send `dateutc` as `YYYY-MM-DD HH:MM:SS` in UTC with no offset.
//! A missing value falls back to the arrival time; a present but malformed
//! value is an error and never falls back.

use chrono::{DateTime, Timelike, Utc};

use crate::constants::DATE_NOW_LITERAL;
use crate::{Error, Result};

/// Resolve the observation instant for a reading
pub fn resolve_timestamp(raw: Option<&str>, arrival: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let Some(value_str) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(arrival);
    };

    if value_str.eq_ignore_ascii_case(DATE_NOW_LITERAL) {
        return Ok(arrival);
    }

    parse_station_datetime(value_str)
}

/// Parse a station date string as a UTC instant
///
/// The value is rewritten to RFC 3339 (`T` separator, `Z` suffix) and parsed
/// strictly, so impossible calendar dates are rejected. Second `60` is out of
/// range: stations do not report leap seconds.
pub fn parse_station_datetime(value_str: &str) -> Result<DateTime<Utc>> {
    let rfc3339 = format!("{}Z", value_str.replacen(' ', "T", 1));

    let dt = DateTime::parse_from_rfc3339(&rfc3339)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::timestamp(value_str, e))?;

    // chrono represents second 60 as nanoseconds past 1_000_000_000
    if dt.nanosecond() >= 1_000_000_000 {
        return Err(Error::timestamp(value_str, "second out of range"));
    }

    Ok(dt)
}
