//! VAT identification numbers.
//!
//! The canonical form is the compact electronic notation: two-letter country
//! prefix followed by the national number, uppercase, without separators
//! (`ATU12345678`, `DE123456789`, `CHE123456789MWST`).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Canonical, FieldError};

/// National number formats by VAT prefix (Greece uses `EL`).
const VAT_FORMATS: &[(&str, &str)] = &[
    ("AT", r"U\d{8}"),
    ("BE", r"[01]\d{9}"),
    ("BG", r"\d{9,10}"),
    ("CH", r"E\d{9}(MWST|TVA|IVA)?"),
    ("CY", r"\d{8}[A-Z]"),
    ("CZ", r"\d{8,10}"),
    ("DE", r"\d{9}"),
    ("DK", r"\d{8}"),
    ("EE", r"\d{9}"),
    ("EL", r"\d{9}"),
    ("ES", r"[A-Z0-9]\d{7}[A-Z0-9]"),
    ("FI", r"\d{8}"),
    ("FR", r"[A-HJ-NP-Z0-9]{2}\d{9}"),
    ("GB", r"\d{9}|\d{12}|GD\d{3}|HA\d{3}"),
    ("HR", r"\d{11}"),
    ("HU", r"\d{8}"),
    ("IE", r"\d{7}[A-W][A-I]?|\d[A-Z+*]\d{5}[A-W]"),
    ("IT", r"\d{11}"),
    ("LT", r"\d{9}|\d{12}"),
    ("LU", r"\d{8}"),
    ("LV", r"\d{11}"),
    ("MT", r"\d{8}"),
    ("NL", r"\d{9}B\d{2}"),
    ("NO", r"\d{9}(MVA)?"),
    ("PL", r"\d{10}"),
    ("PT", r"\d{9}"),
    ("RO", r"\d{2,10}"),
    ("SE", r"\d{12}"),
    ("SI", r"\d{8}"),
    ("SK", r"\d{10}"),
    ("XI", r"\d{9}|\d{12}|GD\d{3}|HA\d{3}"),
];

static VAT_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    VAT_FORMATS
        .iter()
        .map(|&(prefix, body)| {
            let pattern = Regex::new(&format!("^(?:{body})$")).expect("Invalid VAT ID regex");
            (prefix, pattern)
        })
        .collect()
});

/// A VAT ID field holding its raw or canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VatId(String);

impl VatId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Uppercase and drop separators; `+` and `*` are significant in Irish IDs.
fn compact(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '*'))
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

impl Canonical for VatId {
    fn normalized(&self) -> Result<Self, FieldError> {
        let mut compacted = compact(&self.0);
        if compacted.starts_with("GR") {
            compacted.replace_range(..2, "EL");
        }
        let Some((prefix, body)) = compacted.split_at_checked(2) else {
            return Err(FieldError::VatCountry {
                value: self.0.clone(),
            });
        };
        let Some((_, pattern)) = VAT_PATTERNS.iter().find(|(p, _)| *p == prefix) else {
            return Err(FieldError::VatCountry {
                value: self.0.clone(),
            });
        };
        if !pattern.is_match(body) {
            return Err(FieldError::VatFormat {
                value: self.0.clone(),
                country: prefix.to_string(),
            });
        }
        Ok(Self(compacted))
    }
}

impl fmt::Display for VatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VatId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for VatId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
