//! Best-effort coercion of loosely-typed option values.

use serde_json::Value;

/// Extracts an integer from an arbitrary option value.
///
/// Numbers and numeric strings are accepted, fractional values truncate
/// toward zero; any other shape falls back to `default`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn coerce_i64(value: &Value, default: i64) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64))
            .unwrap_or(default),
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|float| float as i64))
                .unwrap_or(default)
        },
        _ => default,
    }
}

/// Extracts a boolean from an arbitrary option value.
///
/// Accepts booleans, the literals `true`/`false`/`1`/`0` in any case, and
/// integers (non-zero is `true`); any other shape falls back to `default`.
pub(crate) fn coerce_bool(value: &Value, default: bool) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => default,
        },
        Value::Number(number) => number.as_i64().map_or(default, |int| int != 0),
        _ => default,
    }
}
