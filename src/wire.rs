//! Wire-format normalization.
//!
//! The backend speaks snake_case; the rest of this crate speaks camelCase.
//! Every payload coming off the wire is passed through [`normalize_keys`]
//! before any typed deserialization, so no snake_case key ever reaches the
//! domain model.

use serde_json::Value;

/// Rewrite a single key into camel case.
///
/// A `-` or `_` followed by an ASCII letter is dropped and the letter
/// upcased; any other character passes through unchanged. Keys without
/// separators are returned as-is, which makes the transform idempotent.
pub fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while let Some(c) = chars.next() {
        if (c == '_' || c == '-') && chars.peek().is_some_and(|n| n.is_ascii_alphabetic()) {
            // Safe: peeked above.
            if let Some(n) = chars.next() {
                out.push(n.to_ascii_uppercase());
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Recursively rewrite every object key in a JSON value to camel case.
///
/// Arrays are normalized element-wise, scalars pass through untouched.
/// This is a pure, total function: it cannot fail, and applying it twice
/// yields the same result as applying it once.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (camel_case(&k), normalize_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}
