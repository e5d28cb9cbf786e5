//! Closed string sets carried on the wire.
//!
//! Each enum keeps an `Unrecognized` variant so that a document with an
//! unexpected value still deserializes; `validate()` reports it and the
//! normalizer decides the replacement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidEnumValue;

/// Direction of an invoice from the point of view of the extracting company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum InvoiceType {
    /// No type known; `null` on the wire.
    #[default]
    Unset,
    Incoming,
    Outgoing,
    Unrecognized(String),
}

impl InvoiceType {
    pub fn as_str(&self) -> &str {
        match self {
            InvoiceType::Unset => "",
            InvoiceType::Incoming => "INCOMING_INVOICE",
            InvoiceType::Outgoing => "OUTGOING_INVOICE",
            InvoiceType::Unrecognized(value) => value,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, InvoiceType::Unset)
    }

    /// `Unset` is a valid state for an invoice type.
    pub fn validate(&self) -> Result<(), InvalidEnumValue> {
        match self {
            InvoiceType::Unrecognized(value) => Err(InvalidEnumValue {
                kind: "invoice type",
                value: value.clone(),
            }),
            _ => Ok(()),
        }
    }
}

impl From<Option<String>> for InvoiceType {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            None | Some("") => InvoiceType::Unset,
            Some("INCOMING_INVOICE") => InvoiceType::Incoming,
            Some("OUTGOING_INVOICE") => InvoiceType::Outgoing,
            Some(other) => InvoiceType::Unrecognized(other.to_string()),
        }
    }
}

impl From<InvoiceType> for Option<String> {
    fn from(value: InvoiceType) -> Self {
        (!value.is_unset()).then(|| value.as_str().to_string())
    }
}

impl fmt::Display for InvoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of a ledger posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum AccountingEntryType {
    /// Empty string on the wire; never valid on a finished entry.
    #[default]
    Unset,
    Credit,
    Debit,
    Unrecognized(String),
}

impl AccountingEntryType {
    pub fn as_str(&self) -> &str {
        match self {
            AccountingEntryType::Unset => "",
            AccountingEntryType::Credit => "CREDIT",
            AccountingEntryType::Debit => "DEBIT",
            AccountingEntryType::Unrecognized(value) => value,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, AccountingEntryType::Unset)
    }

    pub fn validate(&self) -> Result<(), InvalidEnumValue> {
        match self {
            AccountingEntryType::Credit | AccountingEntryType::Debit => Ok(()),
            other => Err(InvalidEnumValue {
                kind: "accounting entry type",
                value: other.as_str().to_string(),
            }),
        }
    }
}

impl From<Option<String>> for AccountingEntryType {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            None | Some("") => AccountingEntryType::Unset,
            Some("CREDIT") => AccountingEntryType::Credit,
            Some("DEBIT") => AccountingEntryType::Debit,
            Some(other) => AccountingEntryType::Unrecognized(other.to_string()),
        }
    }
}

impl From<AccountingEntryType> for String {
    fn from(value: AccountingEntryType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for AccountingEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment state of an invoice, including the payment method once paid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    NotPayable,
    PaidWithCash,
    PaidWithCreditCard,
    PaidWithBankTransfer,
    PaidWithDirectDebit,
    PaidWithStripe,
    PaidWithPaypal,
    PaidWithGooglePay,
    PaidWithApplePay,
    PaidWithAmazonPay,
    PaidWithTransferwise,
    PaidWithElectronicPaymentMethod,
    Unrecognized(String),
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 13] = [
        PaymentStatus::Unpaid,
        PaymentStatus::NotPayable,
        PaymentStatus::PaidWithCash,
        PaymentStatus::PaidWithCreditCard,
        PaymentStatus::PaidWithBankTransfer,
        PaymentStatus::PaidWithDirectDebit,
        PaymentStatus::PaidWithStripe,
        PaymentStatus::PaidWithPaypal,
        PaymentStatus::PaidWithGooglePay,
        PaymentStatus::PaidWithApplePay,
        PaymentStatus::PaidWithAmazonPay,
        PaymentStatus::PaidWithTransferwise,
        PaymentStatus::PaidWithElectronicPaymentMethod,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Unpaid => "UNPAID",
            PaymentStatus::NotPayable => "NOT_PAYABLE",
            PaymentStatus::PaidWithCash => "PAID_WITH_CASH",
            PaymentStatus::PaidWithCreditCard => "PAID_WITH_CREDITCARD",
            PaymentStatus::PaidWithBankTransfer => "PAID_WITH_BANK_TRANSFER",
            PaymentStatus::PaidWithDirectDebit => "PAID_WITH_DIRECT_DEBIT",
            PaymentStatus::PaidWithStripe => "PAID_WITH_STRIPE",
            PaymentStatus::PaidWithPaypal => "PAID_WITH_PAYPAL",
            PaymentStatus::PaidWithGooglePay => "PAID_WITH_GOOGLE_PAY",
            PaymentStatus::PaidWithApplePay => "PAID_WITH_APPLE_PAY",
            PaymentStatus::PaidWithAmazonPay => "PAID_WITH_AMAZON_PAY",
            PaymentStatus::PaidWithTransferwise => "PAID_WITH_TRANSFERWISE",
            PaymentStatus::PaidWithElectronicPaymentMethod => {
                "PAID_WITH_ELECTRONIC_PAYMENT_METHOD"
            }
            PaymentStatus::Unrecognized(value) => value,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidEnumValue> {
        match self {
            PaymentStatus::Unrecognized(value) => Err(InvalidEnumValue {
                kind: "payment status",
                value: value.clone(),
            }),
            _ => Ok(()),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidEnumValue {
                kind: "payment status",
                value: s.to_string(),
            })
    }
}

impl From<Option<String>> for PaymentStatus {
    fn from(value: Option<String>) -> Self {
        match value {
            None => PaymentStatus::Unpaid,
            Some(value) => value
                .parse()
                .unwrap_or(PaymentStatus::Unrecognized(value)),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(value: PaymentStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
