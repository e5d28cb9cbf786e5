//! Deserialization adapters for what upstream extraction actually sends.
//!
//! Values arrive padded with whitespace, `""` stands in for "nothing found",
//! and lists may contain `null` entries. Optional fields collapse blanks to
//! `None`; required fields collapse to an empty string; `null` list entries
//! become default values that normalization later drops.

use serde::{Deserialize, Deserializer};

/// Trim an optional string-like field; blank or `null` becomes `None`.
pub fn trimmed<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let value = value.trim();
        (!value.is_empty()).then(|| T::from(value.to_string()))
    }))
}

/// Trim a required string field; `null` becomes the empty string.
pub fn trimmed_required<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|value| value.trim().to_string()).unwrap_or_default())
}

/// A list where `null` entries read as default values (`""` for text).
///
/// Entries are kept otherwise verbatim; dropping blanks is part of
/// normalization.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let raw = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}
