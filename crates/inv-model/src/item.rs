use inv_fields::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::wire;

/// One line of an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Position number as printed on the document.
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub position_number: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The line is a reverse charge or credit note.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub credit_note: bool,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub delivery_id: Option<String>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    /// Total price of the line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Decimal>,
    #[serde(deserialize_with = "wire::trimmed", skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<Decimal>,
}

impl Item {
    /// Every field at its default; such lines carry no information.
    pub fn is_empty(&self) -> bool {
        *self == Item::default()
    }
}
