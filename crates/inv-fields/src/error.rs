use thiserror::Error;

/// Why a raw field value has no canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unrecognized date {value:?}")]
    Date { value: String },

    #[error("unknown currency code {value:?}")]
    Currency { value: String },

    #[error("unknown country code {value:?}")]
    Country { value: String },

    #[error("VAT ID {value:?} has no known country prefix")]
    VatCountry { value: String },

    #[error("VAT ID {value:?} does not match the format for {country}")]
    VatFormat { value: String, country: String },

    #[error("IBAN {value:?} has an unknown country code")]
    IbanCountry { value: String },

    #[error("IBAN {value:?} must be {expected} characters long for {country}")]
    IbanLength {
        value: String,
        country: String,
        expected: usize,
    },

    #[error("IBAN {value:?} contains characters other than letters and digits")]
    IbanCharacters { value: String },

    #[error("IBAN {value:?} fails the mod-97 checksum")]
    IbanChecksum { value: String },

    #[error("BIC {value:?} is not a valid 8 or 11 character bank identifier")]
    BicFormat { value: String },

    #[error("BIC {value:?} has an unknown country code")]
    BicCountry { value: String },

    #[error("malformed email address {value:?}")]
    Email { value: String },
}

impl FieldError {
    /// The raw value that was rejected.
    pub fn value(&self) -> &str {
        match self {
            Self::Date { value }
            | Self::Currency { value }
            | Self::Country { value }
            | Self::VatCountry { value }
            | Self::VatFormat { value, .. }
            | Self::IbanCountry { value }
            | Self::IbanLength { value, .. }
            | Self::IbanCharacters { value }
            | Self::IbanChecksum { value }
            | Self::BicFormat { value }
            | Self::BicCountry { value }
            | Self::Email { value } => value,
        }
    }
}
