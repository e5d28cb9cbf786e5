use inv_fields::CountryCode;
use serde::{Deserialize, Serialize};

use crate::wire;

/// A postal address; only the country is canonicalized, the rest is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryCode>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        *self == Address::default()
    }
}
