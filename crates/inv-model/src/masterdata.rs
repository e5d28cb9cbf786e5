//! Master data handed to extraction as context.
//!
//! These records describe the extracting company and its business partners.
//! They pass through unchanged; nothing here is normalized.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternative_names: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub street: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub website: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vat_id: String,
    #[serde(rename = "registration_no", skip_serializing_if = "String::is_empty")]
    pub registration_number: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bank_accounts: Vec<BankAccount>,
}

impl Company {
    /// Case-insensitive match against the name and its alternatives.
    pub fn is_known_as(&self, name: &str) -> bool {
        let name = name.trim();
        std::iter::once(&self.name)
            .chain(&self.alternative_names)
            .any(|known| known.trim().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankAccount {
    pub iban: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bic: String,
}

/// A client or vendor of the extracting company.
///
/// The company fields sit next to the account numbers on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartnerCompany {
    pub client_account_number: String,
    pub vendor_account_number: String,
    #[serde(flatten)]
    pub company: Company,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralLedgerAccount {
    pub number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// Context for extracting a plain invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForInvoice {
    pub extracting_company: Company,
}

/// Context for extracting an invoice with accounting entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForAccountingInvoice {
    pub extracting_company: Company,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub partner_companies: Vec<PartnerCompany>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub general_ledger_accounts: Vec<GeneralLedgerAccount>,
}

impl ForAccountingInvoice {
    /// Partner whose client or vendor account number equals `number`.
    pub fn partner_by_account(&self, number: &str) -> Option<&PartnerCompany> {
        let number = number.trim();
        if number.is_empty() {
            return None;
        }
        self.partner_companies.iter().find(|partner| {
            partner.client_account_number == number || partner.vendor_account_number == number
        })
    }

    pub fn ledger_account(&self, number: &str) -> Option<&GeneralLedgerAccount> {
        let number = number.trim();
        self.general_ledger_accounts
            .iter()
            .find(|account| account.number == number)
    }
}
