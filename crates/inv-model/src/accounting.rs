use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::kinds::AccountingEntryType;
use crate::wire;

/// One ledger posting of an accounting invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountingEntry {
    #[serde(rename = "type")]
    pub entry_type: AccountingEntryType,
    /// Required; an empty number is reported, never synthesized.
    #[serde(deserialize_with = "wire::trimmed_required")]
    pub general_ledger_account_number: String,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub general_ledger_account_description: Option<String>,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_percent: Option<Decimal>,
    /// Required, like the account number.
    #[serde(deserialize_with = "wire::trimmed_required")]
    pub booking_text: String,
}

impl AccountingEntry {
    pub fn is_empty(&self) -> bool {
        *self == AccountingEntry::default()
    }
}
