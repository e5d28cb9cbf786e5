//! Email addresses.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Canonical, FieldError};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$",
    )
    .expect("Invalid email regex")
});

/// An email field holding its raw or canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Pull the address out of `Name <addr>` and `mailto:addr` notations.
fn unwrap_address(raw: &str) -> &str {
    let mut address = raw.trim();
    if let (Some(open), Some(close)) = (address.rfind('<'), address.rfind('>'))
        && open < close
    {
        address = address[open + 1..close].trim();
    }
    if let Some(prefix) = address.get(..7)
        && prefix.eq_ignore_ascii_case("mailto:")
    {
        address = address[7..].trim();
    }
    address
}

fn local_part_valid(local: &str) -> bool {
    !local.starts_with('.') && !local.ends_with('.') && !local.contains("..")
}

impl Canonical for EmailAddress {
    fn normalized(&self) -> Result<Self, FieldError> {
        let address = unwrap_address(&self.0).to_lowercase();
        let valid = EMAIL_REGEX.is_match(&address)
            && address
                .rsplit_once('@')
                .is_some_and(|(local, _)| local_part_valid(local));
        if valid {
            Ok(Self(address))
        } else {
            Err(FieldError::Email {
                value: self.0.clone(),
            })
        }
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmailAddress {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EmailAddress {
    fn from(value: String) -> Self {
        Self(value)
    }
}
