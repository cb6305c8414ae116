//! Tests for typed value decoding

use crate::Error;
use crate::app::models::{FieldKind, FieldValue};
use crate::app::services::telemetry_parser::field_parsers::{
    decode, non_empty, parse_float, parse_int,
};

#[test]
fn test_parse_float_accepts_decimal_forms() {
    assert_eq!(parse_float("tempf", "71.2").unwrap(), 71.2);
    assert_eq!(parse_float("tempf", "-12.5").unwrap(), -12.5);
    assert_eq!(parse_float("tempf", "0").unwrap(), 0.0);
    assert_eq!(parse_float("tempf", " 3.25 ").unwrap(), 3.25);
    assert_eq!(parse_float("solarradiation", "1e3").unwrap(), 1000.0);
}

#[test]
fn test_parse_float_rejects_malformed() {
    for raw in ["abc", "1,5", "12.3.4", "--1", "71F"] {
        let err = parse_float("tempf", raw).unwrap_err();
        match err {
            Error::Decode {
                field,
                raw_value,
                expected,
            } => {
                assert_eq!(field, "tempf");
                assert_eq!(raw_value, raw);
                assert_eq!(expected, "float");
            }
            other => panic!("unexpected error for '{}': {:?}", raw, other),
        }
    }
}

#[test]
fn test_parse_float_rejects_non_finite() {
    for raw in ["NaN", "inf", "-infinity"] {
        assert!(parse_float("tempf", raw).is_err(), "accepted '{}'", raw);
    }
}

#[test]
fn test_parse_int_accepts_integers() {
    assert_eq!(parse_int("humidity", "82").unwrap(), 82);
    assert_eq!(parse_int("humidity", "-3").unwrap(), -3);
    assert_eq!(parse_int("humidity", "+7").unwrap(), 7);
}

#[test]
fn test_parse_int_never_truncates_floats() {
    let err = parse_int("humidity", "82.0").unwrap_err();
    assert_eq!(err.field(), Some("humidity"));
    assert!(err.to_string().contains("integer"));

    assert!(parse_int("winddir", "212.7").is_err());
    assert!(parse_int("uv", "2e1").is_err());
}

#[test]
fn test_decode_dispatches_on_kind() {
    assert_eq!(
        decode("tempf", "45.3", FieldKind::Float).unwrap(),
        Some(FieldValue::Float(45.3))
    );
    assert_eq!(
        decode("humidity", "82", FieldKind::Int).unwrap(),
        Some(FieldValue::Int(82))
    );
}

#[test]
fn test_decode_float_kind_accepts_integer_text() {
    assert_eq!(
        decode("tempf", "45", FieldKind::Float).unwrap(),
        Some(FieldValue::Float(45.0))
    );
}

#[test]
fn test_decode_blank_is_absent() {
    assert_eq!(decode("tempf", "", FieldKind::Float).unwrap(), None);
    assert_eq!(decode("humidity", "   ", FieldKind::Int).unwrap(), None);
}

#[test]
fn test_decode_text_is_passed_over() {
    assert_eq!(decode("PASSKEY", "ABC", FieldKind::Text).unwrap(), None);
}

#[test]
fn test_non_empty() {
    assert_eq!(non_empty("  x "), Some("x"));
    assert_eq!(non_empty(""), None);
    assert_eq!(non_empty("\t"), None);
}
