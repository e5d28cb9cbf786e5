use inv_model::Item;
use tracing::debug;

use crate::diagnostic::Diagnostic;
use crate::normalize::{Normalize, normalize_amount, normalize_field, normalize_percent, unsigned};

/// Quantity and percentage signs carry no reliable meaning and are dropped
/// silently; a negative money amount is recorded. Unit prices keep their
/// precision; line amounts are rounded to cents.
impl Normalize for Item {
    fn normalize_into(&mut self, diag: &mut Diagnostic) {
        debug!(position = ?self.position_number, "normalizing item");
        normalize_percent(&mut self.tax_percent, "tax_percent", false, diag);
        if let Some(quantity) = self.quantity.as_mut() {
            *quantity = quantity.abs();
        }
        if let Some(unit_price) = self.unit_price {
            self.unit_price = Some(unsigned(unit_price, "unit_price", true, diag));
        }
        normalize_amount(&mut self.subtotal, "subtotal", true, diag);
        normalize_amount(&mut self.tax_amount, "tax_amount", true, diag);
        normalize_field(&mut self.currency, "currency", diag);
        normalize_percent(&mut self.discount_percent, "discount_percent", false, diag);
        normalize_amount(&mut self.discount_amount, "discount_amount", true, diag);
    }
}
