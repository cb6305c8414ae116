//! Field parsing utilities for station parameters
//!
//! Converts one raw query value into a typed number. Parsing uses Rust's
//! locale-independent `str::parse`, so `1,5` is rejected and `1.5` accepted
//! regardless of the host locale.

use crate::app::models::{FieldKind, FieldValue};
use crate::{Error, Result};

/// Trim a raw value, treating blank as absent
pub fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Parse a float parameter
///
/// Non-finite spellings (`NaN`, `inf`) parse in Rust but cannot be stored, so
/// they are rejected like any other malformed value.
pub fn parse_float(parameter: &str, raw: &str) -> Result<f64> {
    let value_str = raw.trim();

    match value_str.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::decode(parameter, raw, FieldKind::Float.as_str())),
    }
}

/// Parse an integer parameter
///
/// A value with a fractional part is an error, never truncated.
pub fn parse_int(parameter: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::decode(parameter, raw, FieldKind::Int.as_str()))
}

/// Decode a raw value into the expected kind
///
/// Returns `Ok(None)` for blank values and for text fields, which are never
/// numerically decoded.
pub fn decode(parameter: &str, raw: &str, kind: FieldKind) -> Result<Option<FieldValue>> {
    if non_empty(raw).is_none() {
        return Ok(None);
    }

    let value = match kind {
        FieldKind::Float => FieldValue::Float(parse_float(parameter, raw)?),
        FieldKind::Int => FieldValue::Int(parse_int(parameter, raw)?),
        FieldKind::Text => return Ok(None),
    };

    Ok(Some(value))
}
