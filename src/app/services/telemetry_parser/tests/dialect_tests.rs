//! Tests for dialect alias tables and the mapper

use crate::app::models::{Field, FieldKind};
use crate::app::services::telemetry_parser::dialect::{
    AMBIENT, DialectKind, DialectMapper, WUNDERGROUND,
};

#[test]
fn test_resolve_ambient_names() {
    let mapper = DialectMapper::standard();

    let spec = mapper.resolve("tempf").unwrap();
    assert_eq!(spec.field, Field::TempOutdoorF);
    assert_eq!(spec.kind, FieldKind::Float);
    assert_eq!(spec.dialect, "ambient");

    let spec = mapper.resolve("winddir_avg10m").unwrap();
    assert_eq!(spec.field, Field::WindDirAvg10m);
    assert_eq!(spec.kind, FieldKind::Int);
}

#[test]
fn test_station_key_reachable_from_every_alias() {
    let mapper = DialectMapper::standard();

    for alias in ["PASSKEY", "passkey", "ID"] {
        let spec = mapper.resolve(alias).unwrap();
        assert_eq!(spec.field, Field::StationKey, "alias {}", alias);
        assert_eq!(spec.kind, FieldKind::Text);
    }
}

#[test]
fn test_mapping_is_case_sensitive() {
    let mapper = DialectMapper::standard();

    assert!(mapper.resolve("TEMPF").is_none());
    assert!(mapper.resolve("Passkey").is_none());
    assert_eq!(mapper.resolve("UV").unwrap().field, Field::UvIndex);
    assert_eq!(mapper.resolve("uv").unwrap().field, Field::UvIndex);
}

#[test]
fn test_unrecognized_names_resolve_to_none() {
    let mapper = DialectMapper::standard();

    assert!(mapper.resolve("foobar").is_none());
    assert!(mapper.resolve("stationtype").is_none());
    assert!(mapper.resolve("").is_none());
}

#[test]
fn test_derived_fields_never_station_supplied() {
    for dialect in [&AMBIENT, &WUNDERGROUND] {
        for (alias, field) in dialect.aliases {
            assert!(
                !field.is_derived(),
                "{} maps {} to derived field {}",
                dialect.name,
                alias,
                field
            );
        }
    }

    let mapper = DialectMapper::standard();
    assert!(mapper.resolve("dewptf").is_none());
    assert!(mapper.resolve("dewpt").is_none());
}

#[test]
fn test_ambient_covers_every_measurement() {
    for field in Field::MEASUREMENTS {
        assert!(
            AMBIENT.aliases_for(field).next().is_some(),
            "no ambient alias for {}",
            field
        );
    }
}

#[test]
fn test_ambient_aliases_are_unique() {
    let mut names: Vec<&str> = AMBIENT.aliases.iter().map(|(alias, _)| *alias).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn test_alias_precedence_follows_dialect_order() {
    let mapper = DialectMapper::standard();
    let aliases: Vec<&str> = mapper.aliases_for(Field::StationKey).collect();
    assert_eq!(aliases, vec!["PASSKEY", "passkey", "ID"]);

    let reversed = DialectMapper::from_kinds(&[DialectKind::Wunderground, DialectKind::Ambient]);
    let aliases: Vec<&str> = reversed.aliases_for(Field::StationKey).collect();
    assert_eq!(aliases, vec!["ID", "PASSKEY", "passkey"]);
}

#[test]
fn test_disabled_dialect_is_not_consulted() {
    let ambient_only = DialectMapper::from_kinds(&[DialectKind::Ambient]);

    assert!(ambient_only.resolve("indoortempf").is_none());
    assert!(ambient_only.resolve("ID").is_none());
    assert_eq!(ambient_only.dialect_names(), vec!["ambient"]);
}

#[test]
fn test_from_kinds_ignores_duplicates() {
    let mapper = DialectMapper::from_kinds(&[
        DialectKind::Ambient,
        DialectKind::Ambient,
        DialectKind::Wunderground,
    ]);
    assert_eq!(mapper.dialect_names(), vec!["ambient", "wunderground"]);
}

#[test]
fn test_wunderground_specific_aliases() {
    let mapper = DialectMapper::standard();

    assert_eq!(mapper.resolve("indoortempf").unwrap().field, Field::TempIndoorF);
    assert_eq!(
        mapper.resolve("indoorhumidity").unwrap().field,
        Field::HumidityIndoor
    );
    assert_eq!(mapper.resolve("rainin").unwrap().field, Field::RainHourlyIn);
    assert_eq!(mapper.resolve("baromin").unwrap().field, Field::BaromRelIn);
    assert_eq!(mapper.resolve("indoortempf").unwrap().dialect, "wunderground");
}

#[test]
fn test_dialect_kind_display() {
    assert_eq!(DialectKind::Ambient.to_string(), "ambient");
    assert_eq!(DialectKind::Wunderground.to_string(), "wunderground");
}
