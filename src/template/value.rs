//! Truthiness and default string conversion for body values.
//!
//! Bodies arrive as loosely-typed JSON from the authoring UI, so these follow
//! the conversions that UI applies: `0`, `false`, `null` and `""` are falsy,
//! and values render the way they would when concatenated into a string.

use serde_json::{Number, Value};

/// Returns whether a value counts as supplied.
///
/// Empty arrays and objects are truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Convert a value to its default string form.
///
/// # Examples
///
/// ```
/// use promptfill::template::stringify;
/// use serde_json::json;
///
/// assert_eq!(stringify(&json!("text")), "text");
/// assert_eq!(stringify(&json!(2.0)), "2");
/// assert_eq!(stringify(&json!([1, null, "x"])), "1,,x");
/// assert_eq!(stringify(&json!({"a": 1})), "[object Object]");
/// ```
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => stringify(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Largest integer magnitude a double holds exactly.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        if i.unsigned_abs() <= MAX_SAFE_INTEGER {
            return i.to_string();
        }
    }

    match n.as_f64() {
        Some(f) => float_to_string(f),
        None => n.to_string(),
    }
}

/// Shortest round-trip digits; exponent form outside `1e-6 <= |f| < 1e21`.
fn float_to_string(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let magnitude = f.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return f.to_string();
    }

    let formatted = format!("{:e}", f);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => {
            format!("{}e{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}e+{}", mantissa, exponent),
        None => formatted,
    }
}
