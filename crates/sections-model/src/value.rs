//! Scalar coercion primitives shared by the engine and the projections

use serde_json::Value;

/// Interpret a raw JSON value as a float.
///
/// Accepts JSON numbers and numeric strings. Anything else, and anything
/// that parses to NaN, yields `None` so a non-numeric value never surfaces
/// as a number.
pub fn numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| !n.is_nan())
}

/// Truthiness of a raw JSON value.
///
/// `null`, `0`, and `""` are false; everything else (including empty arrays
/// and objects) is true.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
