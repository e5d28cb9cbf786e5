use inv_fields::{Bic, CurrencyCode, Date, EmailAddress, Iban, VatId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounting::AccountingEntry;
use crate::address::Address;
use crate::item::Item;
use crate::kinds::{InvoiceType, PaymentStatus};
use crate::wire;

/// An invoice document as delivered by extraction.
///
/// Every optional field is omitted from JSON when absent, except `customer`,
/// which is always written and becomes `null` when unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    #[serde(rename = "type", skip_serializing_if = "InvoiceType::is_unset")]
    pub invoice_type: InvoiceType,

    // Identity and dates
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<Date>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub period_start: Option<Date>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub period_end: Option<Date>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub order_date: Option<Date>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(deserialize_with = "wire::lenient_list", skip_serializing_if = "Vec::is_empty")]
    pub delivery_note_ids: Vec<String>,

    // Parties
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub issuer_vat_id: Option<VatId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_address: Option<Address>,
    #[serde(deserialize_with = "wire::trimmed")]
    pub customer: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub customer_vat_id: Option<VatId>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<EmailAddress>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_shipping_address: Option<Address>,
    /// Vendor or client account number, depending on the invoice type.
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub partner_account_number: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub partner_account_name: Option<String>,

    // Amounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyCode>,

    // Flags
    /// European Union reverse charge.
    pub reverse_charge: bool,
    pub intra_community_supply: bool,
    pub credit_note: bool,

    // Payment
    pub payment_status: PaymentStatus,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<Date>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub direct_debit_mandate_id: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub payment_iban: Option<Iban>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub payment_bic: Option<Bic>,

    // Discount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<Decimal>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub discount_until_date: Option<Date>,

    #[serde(deserialize_with = "wire::lenient_list", skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(deserialize_with = "wire::lenient_list", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    #[serde(deserialize_with = "wire::lenient_list", skip_serializing_if = "Vec::is_empty")]
    pub accounting_entries: Vec<AccountingEntry>,
}

impl Invoice {
    /// Number of present values in the subtotal/tax/total triad.
    pub fn amounts_present(&self) -> usize {
        [self.subtotal, self.tax, self.total]
            .iter()
            .filter(|amount| amount.is_some())
            .count()
    }
}
