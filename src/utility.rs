//! Utilities
//!
//! Small free functions used by the connection queries and by callers rendering their results.
use serde_json::Value;

/// Units for [fmt_bytes], base-1000 apart.
const BYTE_UNITS: [&str; 6] = ["bytes", "KB", "MB", "GB", "TB", "PB"];
/// Decimal places used by [humanize_bytes].
pub const DEFAULT_PRECISION: usize = 2;

/// Read a possibly stringified boolean.
///
/// Elasticsearch has a habit of returning `"true"` and `"false"` in its JSON responses where it
/// should return `true` and `false`. The value is rendered to text (a string as its contents,
/// anything else as JSON text) and matched case-insensitively. Anything else is `None`.
pub fn parse_bool(value: &Value) -> Option<bool> {
    let text = match value {
        Value::String(string) => string.to_lowercase(),
        other => other.to_string().to_lowercase(),
    };
    match text.as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Pass-through form of [parse_bool]: a recognised boolean comes back as `Value::Bool`,
/// anything unrecognised is handed back unchanged.
pub fn booleanise(value: Value) -> Value {
    match parse_bool(&value) {
        Some(boolean) => Value::Bool(boolean),
        None => value,
    }
}

/// Reduce a number of `bytes` to the largest SI unit (KB = 1000 bytes) that keeps the scaled
/// value at or above one, formatted with `precision` decimals and the unit appended.
///
/// ```
/// use esadmin::utility::fmt_bytes;
/// assert_eq!(fmt_bytes(1_500_000, 1), "1.5 MB");
/// ```
pub fn fmt_bytes(bytes: u64, precision: usize) -> String {
    if bytes == 0 {
        return String::from("0 bytes");
    }

    let mut exponent = 0;
    let mut threshold: u64 = 1000;
    while exponent < BYTE_UNITS.len() - 1 && bytes >= threshold {
        exponent += 1;
        threshold = match threshold.checked_mul(1000) {
            Some(next) => next,
            None => u64::MAX,
        };
    }

    let scaled = bytes as f64 / 1000_f64.powi(exponent as i32);
    format!("{:.*} {}", precision, scaled, BYTE_UNITS[exponent])
}

/// [fmt_bytes] with [DEFAULT_PRECISION].
pub fn humanize_bytes(bytes: u64) -> String {
    fmt_bytes(bytes, DEFAULT_PRECISION)
}
