//! JSON value model shared by every reconciliation stage.
//!
//! Payloads are held as [`serde_json::Value`] (built with `preserve_order`, so
//! mappings keep their insertion order for display). A user record is simply a
//! JSON object.

use crate::errors::{ReconError, Result};
use serde_json::{Map, Value};

/// The fields describing one identity. Not a fixed schema.
pub type UserRecord = Map<String, Value>;

/// Parse raw input text into a JSON value.
///
/// # Errors
///
/// - `InvalidPayload` — the text is not valid JSON
pub fn parse_payload(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| ReconError::InvalidPayload {
        message: e.to_string(),
    })
}

/// Join a dotted path prefix and a key.
pub fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Leaf equality used by the diff engine.
///
/// - objects never compare equal here; object pairs are recursed into before
///   this is reached
/// - arrays are equal when they have the same length and their elements are
///   pairwise equal under [`same_value`], so order matters
/// - numbers compare by numeric value (`1` equals `1.0`), at the top level and
///   inside arrays alike
/// - everything else compares by value
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(_), _) | (_, Value::Object(_)) => false,
        _ => same_value(a, b),
    }
}

/// Structural equality with numbers compared by value.
///
/// Objects inside arrays must list the same keys in the same order, matching
/// how they would serialize.
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| same_value(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .zip(y)
                    .all(|((ka, va), (kb, vb))| ka == kb && same_value(va, vb))
        }
        _ => a == b,
    }
}
