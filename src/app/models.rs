//! Data models for weather station ingestion
//!
//! This module contains the canonical field vocabulary, the decoded reading
//! and the time-series point handed to storage. The field set is closed: every
//! station-supplied value maps onto one variant of [`Field`], and the reading
//! stores each one in a named, statically typed slot.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Canonical Field Vocabulary
// =============================================================================

/// Primitive kind a raw parameter value must decode to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Passed through verbatim, never numerically decoded
    Text,
    /// Decimal floating point
    Float,
    /// Signed integer; decimal points are rejected
    Int,
}

impl FieldKind {
    /// Human-readable name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Float => "float",
            FieldKind::Int => "integer",
        }
    }
}

/// Canonical field identifiers, declared in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    StationKey,
    ObservedAtRaw,
    TempOutdoorF,
    TempIndoorF,
    HumidityOutdoor,
    HumidityIndoor,
    WindSpeedMph,
    WindGustMph,
    MaxDailyGustMph,
    WindDir,
    WindDirAvg10m,
    UvIndex,
    SolarRadiation,
    RainHourlyIn,
    RainEventIn,
    RainDailyIn,
    RainWeeklyIn,
    RainMonthlyIn,
    RainYearlyIn,
    BattOut,
    BattRain,
    BattIn,
    BaromRelIn,
    BaromAbsIn,
    DewPointOutdoor,
    DewPointIndoor,
}

impl Field {
    /// Every numeric field a station may supply, in canonical order
    pub const MEASUREMENTS: [Field; 22] = [
        Field::TempOutdoorF,
        Field::TempIndoorF,
        Field::HumidityOutdoor,
        Field::HumidityIndoor,
        Field::WindSpeedMph,
        Field::WindGustMph,
        Field::MaxDailyGustMph,
        Field::WindDir,
        Field::WindDirAvg10m,
        Field::UvIndex,
        Field::SolarRadiation,
        Field::RainHourlyIn,
        Field::RainEventIn,
        Field::RainDailyIn,
        Field::RainWeeklyIn,
        Field::RainMonthlyIn,
        Field::RainYearlyIn,
        Field::BattOut,
        Field::BattRain,
        Field::BattIn,
        Field::BaromRelIn,
        Field::BaromAbsIn,
    ];

    /// Fields computed by the ingestion service, never accepted from a station
    pub const DERIVED: [Field; 2] = [Field::DewPointOutdoor, Field::DewPointIndoor];

    /// Expected primitive kind of the field
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::StationKey | Field::ObservedAtRaw => FieldKind::Text,
            Field::HumidityOutdoor
            | Field::HumidityIndoor
            | Field::WindDir
            | Field::WindDirAvg10m
            | Field::UvIndex
            | Field::BattOut
            | Field::BattRain
            | Field::BattIn => FieldKind::Int,
            _ => FieldKind::Float,
        }
    }

    /// Name used for the field in the emitted time-series record
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::StationKey => "passkey",
            Field::ObservedAtRaw => "dateutc",
            Field::TempOutdoorF => "tempf",
            Field::TempIndoorF => "tempinf",
            Field::HumidityOutdoor => "humidity",
            Field::HumidityIndoor => "humidityin",
            Field::WindSpeedMph => "windspeedmph",
            Field::WindGustMph => "windgustmph",
            Field::MaxDailyGustMph => "maxdailygust",
            Field::WindDir => "winddir",
            Field::WindDirAvg10m => "winddir_avg10m",
            Field::UvIndex => "uv",
            Field::SolarRadiation => "solarradiation",
            Field::RainHourlyIn => "hourlyrainin",
            Field::RainEventIn => "eventrainin",
            Field::RainDailyIn => "dailyrainin",
            Field::RainWeeklyIn => "weeklyrainin",
            Field::RainMonthlyIn => "monthlyrainin",
            Field::RainYearlyIn => "yearlyrainin",
            Field::BattOut => "battout",
            Field::BattRain => "battrain",
            Field::BattIn => "battin",
            Field::BaromRelIn => "baromrelin",
            Field::BaromAbsIn => "baromabsin",
            Field::DewPointOutdoor => "dewpt",
            Field::DewPointIndoor => "dewptin",
        }
    }

    /// True for fields only the service computes
    pub fn is_derived(&self) -> bool {
        Self::DERIVED.contains(self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A decoded numeric value, keeping its native width
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Float(f64),
    Int(i64),
}

impl FieldValue {
    /// Kind of the stored value
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Int(_) => FieldKind::Int,
        }
    }

    /// Numeric value as f64 (lossless for every realistic station integer)
    pub fn as_f64(&self) -> f64 {
        match self {
            FieldValue::Float(value) => *value,
            FieldValue::Int(value) => *value as f64,
        }
    }
}

// =============================================================================
// Station-Supplied Measurements
// =============================================================================

/// The closed set of numeric values a station may report
///
/// Absent values stay at zero. Each slot is addressed through [`Field`] with an
/// exhaustive match, so adding a field without a slot fails to compile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Measurements {
    pub temp_outdoor_f: f64,
    pub temp_indoor_f: f64,
    pub humidity_outdoor: i64,
    pub humidity_indoor: i64,
    pub wind_speed_mph: f64,
    pub wind_gust_mph: f64,
    pub max_daily_gust_mph: f64,
    pub wind_dir: i64,
    pub wind_dir_avg_10m: i64,
    pub uv_index: i64,
    pub solar_radiation: f64,
    pub rain_hourly_in: f64,
    pub rain_event_in: f64,
    pub rain_daily_in: f64,
    pub rain_weekly_in: f64,
    pub rain_monthly_in: f64,
    pub rain_yearly_in: f64,
    pub batt_out: i64,
    pub batt_rain: i64,
    pub batt_in: i64,
    pub barom_rel_in: f64,
    pub barom_abs_in: f64,
}

impl Measurements {
    /// Read a station-supplied field; `None` for text and derived fields
    pub fn get(&self, field: Field) -> Option<FieldValue> {
        use FieldValue::{Float, Int};

        let value = match field {
            Field::TempOutdoorF => Float(self.temp_outdoor_f),
            Field::TempIndoorF => Float(self.temp_indoor_f),
            Field::HumidityOutdoor => Int(self.humidity_outdoor),
            Field::HumidityIndoor => Int(self.humidity_indoor),
            Field::WindSpeedMph => Float(self.wind_speed_mph),
            Field::WindGustMph => Float(self.wind_gust_mph),
            Field::MaxDailyGustMph => Float(self.max_daily_gust_mph),
            Field::WindDir => Int(self.wind_dir),
            Field::WindDirAvg10m => Int(self.wind_dir_avg_10m),
            Field::UvIndex => Int(self.uv_index),
            Field::SolarRadiation => Float(self.solar_radiation),
            Field::RainHourlyIn => Float(self.rain_hourly_in),
            Field::RainEventIn => Float(self.rain_event_in),
            Field::RainDailyIn => Float(self.rain_daily_in),
            Field::RainWeeklyIn => Float(self.rain_weekly_in),
            Field::RainMonthlyIn => Float(self.rain_monthly_in),
            Field::RainYearlyIn => Float(self.rain_yearly_in),
            Field::BattOut => Int(self.batt_out),
            Field::BattRain => Int(self.batt_rain),
            Field::BattIn => Int(self.batt_in),
            Field::BaromRelIn => Float(self.barom_rel_in),
            Field::BaromAbsIn => Float(self.barom_abs_in),
            Field::StationKey
            | Field::ObservedAtRaw
            | Field::DewPointOutdoor
            | Field::DewPointIndoor => return None,
        };

        Some(value)
    }

    /// Store a decoded value into its slot
    ///
    /// Returns `false` when the field has no numeric slot or the value kind
    /// does not match the slot; nothing is written in that case.
    pub fn set(&mut self, field: Field, value: FieldValue) -> bool {
        match (self.float_slot(field), value) {
            (Some(slot), FieldValue::Float(v)) => {
                *slot = v;
                return true;
            }
            (Some(_), FieldValue::Int(_)) => return false,
            (None, _) => {}
        }

        match (self.int_slot(field), value) {
            (Some(slot), FieldValue::Int(v)) => {
                *slot = v;
                true
            }
            _ => false,
        }
    }

    fn float_slot(&mut self, field: Field) -> Option<&mut f64> {
        match field {
            Field::TempOutdoorF => Some(&mut self.temp_outdoor_f),
            Field::TempIndoorF => Some(&mut self.temp_indoor_f),
            Field::WindSpeedMph => Some(&mut self.wind_speed_mph),
            Field::WindGustMph => Some(&mut self.wind_gust_mph),
            Field::MaxDailyGustMph => Some(&mut self.max_daily_gust_mph),
            Field::SolarRadiation => Some(&mut self.solar_radiation),
            Field::RainHourlyIn => Some(&mut self.rain_hourly_in),
            Field::RainEventIn => Some(&mut self.rain_event_in),
            Field::RainDailyIn => Some(&mut self.rain_daily_in),
            Field::RainWeeklyIn => Some(&mut self.rain_weekly_in),
            Field::RainMonthlyIn => Some(&mut self.rain_monthly_in),
            Field::RainYearlyIn => Some(&mut self.rain_yearly_in),
            Field::BaromRelIn => Some(&mut self.barom_rel_in),
            Field::BaromAbsIn => Some(&mut self.barom_abs_in),
            _ => None,
        }
    }

    fn int_slot(&mut self, field: Field) -> Option<&mut i64> {
        match field {
            Field::HumidityOutdoor => Some(&mut self.humidity_outdoor),
            Field::HumidityIndoor => Some(&mut self.humidity_indoor),
            Field::WindDir => Some(&mut self.wind_dir),
            Field::WindDirAvg10m => Some(&mut self.wind_dir_avg_10m),
            Field::UvIndex => Some(&mut self.uv_index),
            Field::BattOut => Some(&mut self.batt_out),
            Field::BattRain => Some(&mut self.batt_rain),
            Field::BattIn => Some(&mut self.batt_in),
            _ => None,
        }
    }
}

// =============================================================================
// Derived Values and the Complete Reading
// =============================================================================

/// Values computed from the measurements after decoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedMetrics {
    /// Outdoor dew point in degrees Fahrenheit
    pub dew_point_outdoor: f64,
    /// Indoor dew point in degrees Fahrenheit
    pub dew_point_indoor: f64,
}

/// One fully decoded and enriched station observation
///
/// Built fresh for every request and never shared; the only way to obtain one
/// is through [`Reading::new`] after the timestamp is resolved and the derived
/// metrics are computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    /// Opaque station identifier (may be empty)
    pub station_key: String,

    /// Resolved observation instant
    pub observed_at: DateTime<Utc>,

    /// Station-supplied numeric values
    pub measurements: Measurements,

    /// Service-computed values
    pub derived: DerivedMetrics,
}

impl Reading {
    /// Assemble a complete reading
    pub fn new(
        station_key: String,
        observed_at: DateTime<Utc>,
        measurements: Measurements,
        derived: DerivedMetrics,
    ) -> Self {
        Self {
            station_key,
            observed_at,
            measurements,
            derived,
        }
    }

    /// Value of any numeric field, derived ones included
    pub fn value(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::DewPointOutdoor => Some(FieldValue::Float(self.derived.dew_point_outdoor)),
            Field::DewPointIndoor => Some(FieldValue::Float(self.derived.dew_point_indoor)),
            _ => self.measurements.get(field),
        }
    }

    /// Every numeric field in canonical order, measurements then derived values
    pub fn numeric_fields(&self) -> impl Iterator<Item = (Field, FieldValue)> + '_ {
        Field::MEASUREMENTS
            .iter()
            .chain(Field::DERIVED.iter())
            .filter_map(move |field| self.value(*field).map(|value| (*field, value)))
    }
}

// =============================================================================
// Time-Series Point
// =============================================================================

/// Tagged, timestamped record handed to the storage backend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    /// Measurement name
    pub measurement: String,

    /// Tag set (indexed, string-valued)
    pub tags: BTreeMap<String, String>,

    /// Field set in canonical order
    pub fields: Vec<(String, FieldValue)>,

    /// Point instant, second precision
    pub timestamp: DateTime<Utc>,
}

impl TimeSeriesPoint {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    /// Look up a tag by key
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Field names in emission order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(key, _)| key.as_str()).collect()
    }
}
