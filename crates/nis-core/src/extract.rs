//! Nested field access over untyped JSON.
//!
//! Launch Library 2 leaves nested objects out or sets them to `null` with no
//! documented rule, so every nested read goes through [`extract`]. A missing
//! key, a non-object along the path, or a `null` leaf all come back as `None`.
//! No value is ever coerced to another type.

use serde_json::Value;

/// Walk `path` from `root`, returning the value at the last key.
#[must_use]
pub fn extract<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(root, |node, key| node.as_object()?.get(*key))
        .filter(|value| !value.is_null())
}

#[must_use]
pub fn extract_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    extract(root, path)?.as_str()
}

#[must_use]
pub fn extract_string(root: &Value, path: &[&str]) -> Option<String> {
    extract_str(root, path).map(str::to_string)
}

#[must_use]
pub fn extract_f64(root: &Value, path: &[&str]) -> Option<f64> {
    extract(root, path)?.as_f64()
}

/// Non-negative integer at `path`. Floats, negatives, and values above
/// `u32::MAX` read as absent.
#[must_use]
pub fn extract_u32(root: &Value, path: &[&str]) -> Option<u32> {
    extract(root, path)?
        .as_u64()
        .and_then(|value| u32::try_from(value).ok())
}
