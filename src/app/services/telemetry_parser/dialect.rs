//! Parameter-name dialects and the alias table that maps them onto canonical fields
//!
//! Stations of different vendors report the same quantities under different
//! query-parameter names. Each [`Dialect`] is a static table of
//! `(alias, canonical field)` pairs; the [`DialectMapper`] stacks the enabled
//! tables in precedence order. Supporting a new dialect means adding a table,
//! nothing downstream changes.

use crate::app::models::{Field, FieldKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named alias table for one family of stations
#[derive(Debug, PartialEq, Eq)]
pub struct Dialect {
    /// Short identifier used in logs and configuration
    pub name: &'static str,

    /// Case-sensitive parameter names and the canonical field each maps to
    pub aliases: &'static [(&'static str, Field)],
}

impl Dialect {
    /// Canonical field for a parameter name, if this dialect knows it
    pub fn lookup(&self, parameter: &str) -> Option<Field> {
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == parameter)
            .map(|(_, field)| *field)
    }

    /// Aliases of a canonical field in table order
    pub fn aliases_for(&self, field: Field) -> impl Iterator<Item = &'static str> + '_ {
        self.aliases
            .iter()
            .filter(move |(_, f)| *f == field)
            .map(|(alias, _)| *alias)
    }
}

/// Ambient Weather / Ecowitt "custom server" upload parameters
pub static AMBIENT: Dialect = Dialect {
    name: "ambient",
    aliases: &[
        ("PASSKEY", Field::StationKey),
        ("passkey", Field::StationKey),
        ("dateutc", Field::ObservedAtRaw),
        ("tempf", Field::TempOutdoorF),
        ("tempinf", Field::TempIndoorF),
        ("humidity", Field::HumidityOutdoor),
        ("humidityin", Field::HumidityIndoor),
        ("windspeedmph", Field::WindSpeedMph),
        ("windgustmph", Field::WindGustMph),
        ("maxdailygust", Field::MaxDailyGustMph),
        ("winddir", Field::WindDir),
        ("winddir_avg10m", Field::WindDirAvg10m),
        ("uv", Field::UvIndex),
        ("solarradiation", Field::SolarRadiation),
        ("hourlyrainin", Field::RainHourlyIn),
        ("eventrainin", Field::RainEventIn),
        ("dailyrainin", Field::RainDailyIn),
        ("weeklyrainin", Field::RainWeeklyIn),
        ("monthlyrainin", Field::RainMonthlyIn),
        ("yearlyrainin", Field::RainYearlyIn),
        ("battout", Field::BattOut),
        ("battrain", Field::BattRain),
        ("battin", Field::BattIn),
        ("baromrelin", Field::BaromRelIn),
        ("baromabsin", Field::BaromAbsIn),
    ],
};

/// Weather Underground upload protocol parameters
///
/// Station-computed dew point (`dewptf`) is deliberately absent: dew point is
/// always derived by the service.
pub static WUNDERGROUND: Dialect = Dialect {
    name: "wunderground",
    aliases: &[
        ("ID", Field::StationKey),
        ("dateutc", Field::ObservedAtRaw),
        ("tempf", Field::TempOutdoorF),
        ("indoortempf", Field::TempIndoorF),
        ("humidity", Field::HumidityOutdoor),
        ("indoorhumidity", Field::HumidityIndoor),
        ("windspeedmph", Field::WindSpeedMph),
        ("windgustmph", Field::WindGustMph),
        ("winddir", Field::WindDir),
        ("UV", Field::UvIndex),
        ("solarradiation", Field::SolarRadiation),
        ("rainin", Field::RainHourlyIn),
        ("dailyrainin", Field::RainDailyIn),
        ("weeklyrainin", Field::RainWeeklyIn),
        ("monthlyrainin", Field::RainMonthlyIn),
        ("yearlyrainin", Field::RainYearlyIn),
        ("baromin", Field::BaromRelIn),
    ],
};

/// Selectable dialects, in default precedence order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    Ambient,
    Wunderground,
}

impl DialectKind {
    /// All supported dialects
    pub const ALL: [DialectKind; 2] = [DialectKind::Ambient, DialectKind::Wunderground];

    /// The alias table for this dialect
    pub fn table(&self) -> &'static Dialect {
        match self {
            DialectKind::Ambient => &AMBIENT,
            DialectKind::Wunderground => &WUNDERGROUND,
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table().name)
    }
}

/// Resolution of a raw parameter name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Canonical field the parameter feeds
    pub field: Field,

    /// Kind the raw value must decode to
    pub kind: FieldKind,

    /// Dialect that recognized the parameter
    pub dialect: &'static str,
}

/// Ordered stack of dialects consulted when resolving parameter names
#[derive(Debug, Clone)]
pub struct DialectMapper {
    dialects: Vec<&'static Dialect>,
}

impl DialectMapper {
    /// Create a mapper over the given tables; earlier tables take precedence
    pub fn new(dialects: Vec<&'static Dialect>) -> Self {
        Self { dialects }
    }

    /// Mapper over the selected dialect kinds, duplicates ignored
    pub fn from_kinds(kinds: &[DialectKind]) -> Self {
        let mut dialects: Vec<&'static Dialect> = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let table = kind.table();
            if !dialects.iter().any(|d| d.name == table.name) {
                dialects.push(table);
            }
        }
        Self { dialects }
    }

    /// Mapper with every supported dialect enabled
    pub fn standard() -> Self {
        Self::from_kinds(&DialectKind::ALL)
    }

    /// Resolve a parameter name, `None` when no enabled dialect knows it
    pub fn resolve(&self, parameter: &str) -> Option<FieldSpec> {
        self.dialects.iter().find_map(|dialect| {
            dialect.lookup(parameter).map(|field| FieldSpec {
                field,
                kind: field.kind(),
                dialect: dialect.name,
            })
        })
    }

    /// Every alias of a canonical field, in precedence order
    pub fn aliases_for(&self, field: Field) -> impl Iterator<Item = &'static str> + '_ {
        self.dialects
            .iter()
            .flat_map(move |dialect| dialect.aliases_for(field))
    }

    /// Names of the enabled dialects in precedence order
    pub fn dialect_names(&self) -> Vec<&'static str> {
        self.dialects.iter().map(|d| d.name).collect()
    }
}

impl Default for DialectMapper {
    fn default() -> Self {
        Self::standard()
    }
}
