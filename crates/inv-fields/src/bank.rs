//! Bank account (IBAN, ISO 13616) and bank (BIC, ISO 9362) identifiers.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::country::is_country_code;
use crate::{Canonical, FieldError};

/// IBAN length per country of the SWIFT IBAN registry.
const IBAN_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24),
    ("AE", 23),
    ("AL", 28),
    ("AT", 20),
    ("AZ", 28),
    ("BA", 20),
    ("BE", 16),
    ("BG", 22),
    ("BH", 22),
    ("BR", 29),
    ("BY", 28),
    ("CH", 21),
    ("CR", 22),
    ("CY", 28),
    ("CZ", 24),
    ("DE", 22),
    ("DK", 18),
    ("DO", 28),
    ("EE", 20),
    ("EG", 29),
    ("ES", 24),
    ("FI", 18),
    ("FO", 18),
    ("FR", 27),
    ("GB", 22),
    ("GE", 22),
    ("GI", 23),
    ("GL", 18),
    ("GR", 27),
    ("GT", 28),
    ("HR", 21),
    ("HU", 28),
    ("IE", 22),
    ("IL", 23),
    ("IQ", 23),
    ("IS", 26),
    ("IT", 27),
    ("JO", 30),
    ("KW", 30),
    ("KZ", 20),
    ("LB", 28),
    ("LC", 32),
    ("LI", 21),
    ("LT", 20),
    ("LU", 20),
    ("LV", 21),
    ("MC", 27),
    ("MD", 24),
    ("ME", 22),
    ("MK", 19),
    ("MR", 27),
    ("MT", 31),
    ("MU", 30),
    ("NL", 18),
    ("NO", 15),
    ("PK", 24),
    ("PL", 28),
    ("PS", 29),
    ("PT", 25),
    ("QA", 29),
    ("RO", 24),
    ("RS", 22),
    ("SA", 24),
    ("SC", 31),
    ("SE", 24),
    ("SI", 19),
    ("SK", 24),
    ("SM", 27),
    ("ST", 25),
    ("SV", 28),
    ("TL", 23),
    ("TN", 24),
    ("TR", 26),
    ("UA", 29),
    ("VA", 22),
    ("VG", 24),
    ("XK", 20),
];

/// Bank code, country, location, optional branch.
static BIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{4}([A-Z]{2})[A-Z0-9]{2}([A-Z0-9]{3})?$").expect("Invalid BIC regex")
});

fn strip_whitespace_upper(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// An IBAN field holding its raw or canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iban(String);

impl Iban {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// ISO 7064 mod 97-10 over the rearranged IBAN; valid IBANs leave remainder 1.
fn iban_checksum_valid(compact: &str) -> bool {
    let (head, tail) = compact.split_at(4);
    let mut remainder: u32 = 0;
    for ch in tail.chars().chain(head.chars()) {
        let Some(value) = ch.to_digit(36) else {
            return false;
        };
        remainder = if value < 10 {
            (remainder * 10 + value) % 97
        } else {
            (remainder * 100 + value) % 97
        };
    }
    remainder == 1
}

impl Canonical for Iban {
    fn normalized(&self) -> Result<Self, FieldError> {
        let compact = strip_whitespace_upper(&self.0);
        if !compact.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(FieldError::IbanCharacters {
                value: self.0.clone(),
            });
        }
        let country = compact.get(..2).unwrap_or_default();
        let Some(&(_, expected)) = IBAN_LENGTHS.iter().find(|(code, _)| *code == country) else {
            return Err(FieldError::IbanCountry {
                value: self.0.clone(),
            });
        };
        if compact.len() != expected {
            return Err(FieldError::IbanLength {
                value: self.0.clone(),
                country: country.to_string(),
                expected,
            });
        }
        if !iban_checksum_valid(&compact) {
            return Err(FieldError::IbanChecksum {
                value: self.0.clone(),
            });
        }
        Ok(Self(compact))
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iban {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Iban {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A BIC (SWIFT code) field holding its raw or canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bic(String);

impl Bic {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Canonical for Bic {
    fn normalized(&self) -> Result<Self, FieldError> {
        let compact = strip_whitespace_upper(&self.0);
        let Some(captures) = BIC_REGEX.captures(&compact) else {
            return Err(FieldError::BicFormat {
                value: self.0.clone(),
            });
        };
        if !is_country_code(&captures[1]) {
            return Err(FieldError::BicCountry {
                value: self.0.clone(),
            });
        }
        Ok(Self(compact))
    }
}

impl fmt::Display for Bic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Bic {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Bic {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iban_compacted() {
        let iban = Iban::new("de89 3704 0044 0532 0130 00").normalized().unwrap();
        assert_eq!(iban.as_str(), "DE89370400440532013000");
    }

    #[test]
    fn test_iban_checksum() {
        assert!(Iban::new("GB82WEST12345698765432").normalized().is_ok());
        assert!(matches!(
            Iban::new("GB82WEST12345698765433").normalized(),
            Err(FieldError::IbanChecksum { .. })
        ));
    }

    #[test]
    fn test_iban_length_and_country() {
        assert!(matches!(
            Iban::new("DE8937040044053201300").normalized(),
            Err(FieldError::IbanLength { expected: 22, .. })
        ));
        assert!(matches!(
            Iban::new("ZZ89370400440532013000").normalized(),
            Err(FieldError::IbanCountry { .. })
        ));
        assert!(matches!(
            Iban::new("DE89-3704-0044-0532-0130-00").normalized(),
            Err(FieldError::IbanCharacters { .. })
        ));
    }

    #[test]
    fn test_bic() {
        assert_eq!(Bic::new("cobadeff xxx").normalized().unwrap().as_str(), "COBADEFFXXX");
        assert_eq!(Bic::new("DEUTDEFF").normalized().unwrap().as_str(), "DEUTDEFF");
        assert!(matches!(
            Bic::new("DEUTDEF").normalized(),
            Err(FieldError::BicFormat { .. })
        ));
        assert!(matches!(
            Bic::new("DEUTZZFF").normalized(),
            Err(FieldError::BicCountry { .. })
        ));
    }
}
