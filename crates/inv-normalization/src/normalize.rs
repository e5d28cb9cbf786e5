//! The normalization contract and the field-level adapters every entity
//! normalizer is built from.

use inv_fields::Canonical;
use rust_decimal::Decimal;

use crate::diagnostic::{Diagnostic, Problem};
use crate::money::{MAX_PERCENT, round_to_cents};

/// In-place normalization of one document entity.
pub trait Normalize {
    /// Correct `self` in place, recording every reportable correction.
    fn normalize_into(&mut self, diag: &mut Diagnostic);

    /// Normalize with a fresh diagnostic. Never fails: the document is usable
    /// afterwards and the error only describes what was corrected.
    fn normalize(&mut self) -> Result<(), Diagnostic> {
        let mut diag = Diagnostic::new();
        self.normalize_into(&mut diag);
        diag.finish()
    }
}

/// Replace a present scalar by its canonical form, or clear it and record why.
pub fn normalize_field<T: Canonical>(slot: &mut Option<T>, context: &str, diag: &mut Diagnostic) {
    let Some(value) = slot.as_ref() else {
        return;
    };
    *slot = diag.record_result(context, value.normalized());
}

/// Absolute value of `value`; a negative sign is recorded only when
/// `report_sign` is set.
pub fn unsigned(
    value: Decimal,
    context: &str,
    report_sign: bool,
    diag: &mut Diagnostic,
) -> Decimal {
    if report_sign && value.is_sign_negative() && !value.is_zero() {
        diag.record(context, Problem::Negative { value });
    }
    value.abs()
}

/// Take the absolute value of a percentage and clear it when above 100.
///
/// A negative sign is recorded only when `report_sign` is set.
pub fn normalize_percent(
    slot: &mut Option<Decimal>,
    context: &str,
    report_sign: bool,
    diag: &mut Diagnostic,
) {
    let Some(value) = *slot else {
        return;
    };
    let value = unsigned(value, context, report_sign, diag);
    if value > MAX_PERCENT {
        diag.record(context, Problem::PercentAboveMax { value });
        *slot = None;
    } else {
        *slot = Some(value);
    }
}

/// Take the absolute value of an amount and round it to cents.
///
/// A negative sign is recorded only when `report_sign` is set.
pub fn normalize_amount(
    slot: &mut Option<Decimal>,
    context: &str,
    report_sign: bool,
    diag: &mut Diagnostic,
) {
    let Some(value) = *slot else {
        return;
    };
    *slot = Some(round_to_cents(unsigned(value, context, report_sign, diag)));
}

/// Trim every entry and drop the ones left empty.
pub fn clean_text_list(list: &mut Vec<String>) {
    for entry in list.iter_mut() {
        let trimmed = entry.trim();
        if trimmed.len() != entry.len() {
            *entry = trimmed.to_string();
        }
    }
    list.retain(|entry| !entry.is_empty());
}

#[cfg(test)]
mod tests {
    use inv_fields::CurrencyCode;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::diagnostic::Category;

    #[test]
    fn test_normalize_field_clears_invalid() {
        let mut diag = Diagnostic::new();
        let mut valid = Some(CurrencyCode::new("eur"));
        let mut invalid = Some(CurrencyCode::new("Taler"));
        let mut absent: Option<CurrencyCode> = None;
        normalize_field(&mut valid, "currency", &mut diag);
        normalize_field(&mut invalid, "currency", &mut diag);
        normalize_field(&mut absent, "currency", &mut diag);
        assert_eq!(valid, Some(CurrencyCode::new("EUR")));
        assert_eq!(invalid, None);
        assert_eq!(absent, None);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_percent_bounds() {
        let mut diag = Diagnostic::new();
        let mut negative = Some(dec!(-15));
        let mut too_large = Some(dec!(150));
        let mut edge = Some(dec!(100));
        normalize_percent(&mut negative, "tax_percent", false, &mut diag);
        normalize_percent(&mut too_large, "tax_percent", false, &mut diag);
        normalize_percent(&mut edge, "tax_percent", false, &mut diag);
        assert_eq!(negative, Some(dec!(15)));
        assert_eq!(too_large, None);
        assert_eq!(edge, Some(dec!(100)));
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.count(Category::OutOfRange), 1);
    }

    #[test]
    fn test_percent_sign_reported_on_request() {
        let mut diag = Diagnostic::new();
        let mut slot = Some(dec!(-3));
        normalize_percent(&mut slot, "discount_percent", true, &mut diag);
        assert_eq!(slot, Some(dec!(3)));
        assert_eq!(diag.count(Category::SignInvalid), 1);
    }

    #[test]
    fn test_amount_rounded() {
        let mut diag = Diagnostic::new();
        let mut slot = Some(dec!(-12.345));
        normalize_amount(&mut slot, "tax_amount", false, &mut diag);
        assert_eq!(slot, Some(dec!(12.35)));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_clean_text_list() {
        let mut list = vec![" a ".to_string(), String::new(), "  ".to_string(), "b".to_string()];
        clean_text_list(&mut list);
        assert_eq!(list, vec!["a", "b"]);
    }
}
