//! InfluxDB line protocol encoding
//!
//! `measurement,tag=value field=1.5,other=3i 1709294400`
//!
//! Timestamps are written in seconds; the writer requests `precision=s`.

use crate::app::models::{FieldValue, TimeSeriesPoint};

/// Encode one point as a single line (no trailing newline)
///
/// Tags with empty values are omitted because the protocol forbids them.
pub fn encode_line(point: &TimeSeriesPoint) -> String {
    let mut line = escape(&point.measurement, &[',', ' ']);

    for (key, value) in &point.tags {
        if value.is_empty() {
            continue;
        }
        line.push(',');
        line.push_str(&escape(key, &[',', '=', ' ']));
        line.push('=');
        line.push_str(&escape(value, &[',', '=', ' ']));
    }

    line.push(' ');
    for (index, (key, value)) in point.fields.iter().enumerate() {
        if index > 0 {
            line.push(',');
        }
        line.push_str(&escape(key, &[',', '=', ' ']));
        line.push('=');
        line.push_str(&format_value(value));
    }

    line.push_str(&format!(" {}", point.timestamp.timestamp()));
    line
}

/// Format a field value in its native line protocol type
pub fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Int(v) => format!("{}i", v),
        // Rust's shortest round-trip formatting; no suffix means float
        FieldValue::Float(v) => format!("{}", v),
    }
}

/// Backslash-escape the given characters (and backslash itself)
///
/// Line breaks cannot be escaped in the protocol and are written as `\n` and
/// `\r` so a point always stays on one line.
fn escape(raw: &str, special: &[char]) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => {
                if c == '\\' || special.contains(&c) {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
        }
    }
    escaped
}
