//! Reading assembly from a station's raw query parameters
//!
//! The builder walks the canonical field list (not the raw input order) so
//! that the first reported error is reproducible, resolves each field through
//! the enabled dialect aliases and decodes it. Decoding is all-or-nothing: the
//! first malformed value aborts the whole reading, even when another alias of
//! the same field carries a valid one.

use std::collections::HashMap;
use tracing::debug;

use super::dialect::DialectMapper;
use super::field_parsers::{decode, non_empty};
use crate::{Error, Result};
use crate::app::models::{Field, FieldValue, Measurements, Reading};
use crate::constants::STATION_DATE_FORMAT;

/// Raw query parameters as received, one or more values per name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParameters {
    values: HashMap<String, Vec<String>>,
}

impl RawParameters {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value for a name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// First value received for a name; later repeats are ignored
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every parameter name received
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of distinct parameter names
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no parameters were received
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = RawParameters::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for RawParameters {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

/// Output of the builder: decoded values plus the untouched date string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedReading {
    /// Station key, empty when the station sent none
    pub station_key: String,

    /// Raw `dateutc` value, left for the timestamp resolver
    pub observed_at_raw: Option<String>,

    /// Decoded numeric values, zero where absent
    pub measurements: Measurements,
}

/// Applies dialect mapping and field decoding across a parameter set
#[derive(Debug, Clone, Copy)]
pub struct ReadingBuilder<'a> {
    mapper: &'a DialectMapper,
}

impl<'a> ReadingBuilder<'a> {
    /// Create a builder over the given dialects
    pub fn new(mapper: &'a DialectMapper) -> Self {
        Self { mapper }
    }

    /// Decode every recognized parameter into a reading
    pub fn build(&self, params: &RawParameters) -> Result<DecodedReading> {
        let mut decoded = DecodedReading::default();

        if let Some((parameter, key)) = self.present(params, Field::StationKey).next() {
            // The key becomes a line protocol tag, which cannot span lines
            if key.chars().any(char::is_control) {
                return Err(Error::decode(parameter, key, "station key"));
            }
            decoded.station_key = key.to_string();
        }

        if let Some((_, raw_date)) = self.present(params, Field::ObservedAtRaw).next() {
            decoded.observed_at_raw = Some(raw_date.trim().to_string());
        }

        for field in Field::MEASUREMENTS {
            let mut winner = None;
            for (parameter, raw) in self.present(params, field) {
                let value = decode(parameter, raw, field.kind())?;
                winner = winner.or(value);
            }

            if let Some(value) = winner {
                let stored = decoded.measurements.set(field, value);
                debug_assert!(stored, "no measurement slot for {}", field);
            }
        }

        for name in params.names() {
            if self.mapper.resolve(name).is_none() {
                debug!("Ignoring unrecognized parameter '{}'", name);
            }
        }

        Ok(decoded)
    }

    /// Aliases of `field` carrying a non-blank value, in precedence order
    fn present<'p>(
        &'p self,
        params: &'p RawParameters,
        field: Field,
    ) -> impl Iterator<Item = (&'static str, &'p str)> + 'p {
        self.mapper.aliases_for(field).filter_map(move |alias| {
            params
                .first(alias)
                .filter(|raw| non_empty(raw).is_some())
                .map(|raw| (alias, raw))
        })
    }
}

/// Encode a reading back into the primary dialect's query parameters
///
/// Derived fields are not emitted since stations never send them.
pub fn to_parameters(reading: &Reading) -> RawParameters {
    let mut params = RawParameters::new();
    params.insert("PASSKEY", reading.station_key.clone());
    params.insert(
        "dateutc",
        reading.observed_at.format(STATION_DATE_FORMAT).to_string(),
    );

    for field in Field::MEASUREMENTS {
        if let Some(value) = reading.measurements.get(field) {
            let raw = match value {
                FieldValue::Float(v) => v.to_string(),
                FieldValue::Int(v) => v.to_string(),
            };
            params.insert(field.wire_name(), raw);
        }
    }

    params
}
