//! Canonical hashing.
//!
//! A spec hash is `hex(BLAKE3(canonical_json))`, where the canonical JSON has
//! lexicographically sorted object keys and no insignificant whitespace. Two
//! documents that differ only in key order or formatting hash identically.

use crate::error::SpecError;
use crate::spec::TextureSpec;

/// Computes the canonical BLAKE3 hash of a spec.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
pub fn canonical_spec_hash(spec: &TextureSpec) -> Result<String, SpecError> {
    let value = spec.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Renders a JSON value with sorted keys and no whitespace.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Array(items) => {
            let items: Vec<String> = items.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(map) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let pairs: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| {
                    format!(
                        "{}:{}",
                        serde_json::Value::String(k.clone()),
                        canonicalize_json(v)
                    )
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
        scalar => scalar.to_string(),
    }
}
