//! Lenient argument extraction shared by the tools.
//!
//! Clients send loosely typed arguments (numbers as strings, floats for ids),
//! so integers are coerced rather than rejected: numbers truncate, numeric
//! strings parse, anything else becomes 0.

use chrono::NaiveDate;
use serde_json::{json, Map, Value};

use crate::errors::ToolError;

/// Upper bound for any `limit` argument.
pub const MAX_LIMIT: i64 = 100;

/// Returns the integer value of `key`, or `None` when absent or null.
pub fn int_arg(args: &Map<String, Value>, key: &str) -> Option<i64> {
    match args.get(key)? {
        Value::Null => None,
        Value::Number(n) => Some(n.as_i64().unwrap_or_else(|| n.as_f64().unwrap_or(0.0) as i64)),
        Value::String(s) => {
            let s = s.trim();
            Some(
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                    .unwrap_or(0),
            )
        }
        Value::Bool(b) => Some(i64::from(*b)),
        _ => Some(0),
    }
}

/// Returns `key` as a limit in `[1, MAX_LIMIT]`, falling back to `default`.
pub fn limit_arg(args: &Map<String, Value>, key: &str, default: i64) -> i64 {
    int_arg(args, key).unwrap_or(default).clamp(1, MAX_LIMIT)
}

/// Returns the string value of `key`, or `None` when absent or null.
/// Non-string scalars are rendered as text.
pub fn str_arg(args: &Map<String, Value>, key: &str) -> Option<String> {
    match args.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Checks that `value` is a `YYYY-MM-DD` calendar date.
pub fn require_date(field: &str, value: &str) -> Result<(), ToolError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| ToolError::execution(format!("invalid {field} '{value}': expected YYYY-MM-DD")))
}

/// Encodes a domain error as the tool payload.
pub fn error_payload(message: &str) -> String {
    json!({ "status": "error", "message": message }).to_string()
}
