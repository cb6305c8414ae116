//! Station parameter parser
//!
//! Turns the loosely typed query parameters of a weather station upload into
//! a decoded reading.
//!
//! ## Architecture
//!
//! - [`dialect`] - Alias tables mapping parameter names to canonical fields
//! - [`field_parsers`] - Typed decoding of individual values
//! - [`reading_builder`] - Raw parameter multimap and reading assembly
//! - [`timestamp`] - `dateutc` resolution with arrival-time fallback
//!
//! ## Usage
//!
//! ```rust
//! use pws_ingest::app::services::telemetry_parser::{DialectMapper, RawParameters, ReadingBuilder};
//!
//! # fn example() -> pws_ingest::Result<()> {
//! let mapper = DialectMapper::standard();
//! let params: RawParameters = [("PASSKEY", "ABC"), ("tempf", "71.2")].into_iter().collect();
//! let decoded = ReadingBuilder::new(&mapper).build(&params)?;
//!
//! assert_eq!(decoded.station_key, "ABC");
//! assert_eq!(decoded.measurements.temp_outdoor_f, 71.2);
//! # Ok(())
//! # }
//! ```

pub mod dialect;
pub mod field_parsers;
pub mod reading_builder;
pub mod timestamp;

#[cfg(test)]
pub mod tests;

pub use dialect::{Dialect, DialectKind, DialectMapper, FieldSpec};
pub use reading_builder::{DecodedReading, RawParameters, ReadingBuilder};
pub use timestamp::resolve_timestamp;
