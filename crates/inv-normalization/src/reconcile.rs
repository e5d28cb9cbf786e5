//! Reconciliation of the subtotal/tax/total triad.
//!
//! Negative amounts are recorded and made positive, every present amount is
//! rounded to cents, and then exactly one rule runs, chosen by which of the
//! three amounts are present:
//!
//! | present | rule |
//! |---|---|
//! | S, T, G | `S > G` swaps S and G; then `\|S + T - G\| > 0.01` sets `T = G - S` |
//! | S, G | `S > G` swaps S and G; then `T = G - S` |
//! | T, G | `T > G` sets `T = 0`; then `S = G - T` |
//! | S, T | `G = S + T`, left absent when the sum overflows |
//! | fewer | nothing |
//!
//! Subtotal and total are trusted over tax, the field extraction gets wrong
//! most often. A swap in the first rule happens before the sum check, so the
//! tax is recomputed from the swapped values. A sum too large for `Decimal`
//! counts as a mismatch; `G - S` cannot overflow once `S <= G`.

use std::mem;

use rust_decimal::Decimal;
use tracing::debug;

use crate::diagnostic::{Diagnostic, Problem};
use crate::money::{round_to_cents, within_one_cent};
use crate::normalize::normalize_amount;

/// The three invoice amounts, borrowed from the invoice being normalized.
pub struct Triad<'a> {
    pub subtotal: &'a mut Option<Decimal>,
    pub tax: &'a mut Option<Decimal>,
    pub total: &'a mut Option<Decimal>,
}

impl Triad<'_> {
    pub fn reconcile(self, diag: &mut Diagnostic) {
        normalize_amount(self.subtotal, "subtotal", true, diag);
        normalize_amount(self.tax, "tax", true, diag);
        normalize_amount(self.total, "total", true, diag);

        match (*self.subtotal, *self.tax, *self.total) {
            (Some(mut subtotal), Some(tax), Some(mut total)) => {
                if subtotal > total {
                    diag.record("subtotal", Problem::SubtotalAboveTotal { subtotal, total });
                    mem::swap(&mut subtotal, &mut total);
                    *self.subtotal = Some(subtotal);
                    *self.total = Some(total);
                }
                let sum = subtotal.checked_add(tax);
                if !sum.is_some_and(|sum| within_one_cent(sum, total)) {
                    diag.record(
                        "tax",
                        Problem::SumMismatch {
                            subtotal,
                            tax,
                            total,
                        },
                    );
                    *self.tax = Some(round_to_cents(total - subtotal));
                }
            }
            (Some(mut subtotal), None, Some(mut total)) => {
                if subtotal > total {
                    diag.record("subtotal", Problem::SubtotalAboveTotal { subtotal, total });
                    mem::swap(&mut subtotal, &mut total);
                    *self.subtotal = Some(subtotal);
                    *self.total = Some(total);
                }
                debug!("deriving tax from subtotal and total");
                *self.tax = Some(round_to_cents(total - subtotal));
            }
            (None, Some(mut tax), Some(total)) => {
                if tax > total {
                    diag.record("tax", Problem::TaxAboveTotal { tax, total });
                    tax = Decimal::ZERO;
                    *self.tax = Some(tax);
                }
                debug!("deriving subtotal from tax and total");
                *self.subtotal = Some(round_to_cents(total - tax));
            }
            (Some(subtotal), Some(tax), None) => match subtotal.checked_add(tax) {
                Some(total) => {
                    debug!("deriving total from subtotal and tax");
                    *self.total = Some(round_to_cents(total));
                }
                None => diag.record("total", Problem::SumOverflow { subtotal, tax }),
            },
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::diagnostic::Category;

    type Amounts = (Option<Decimal>, Option<Decimal>, Option<Decimal>);

    fn reconcile(amounts: Amounts) -> (Amounts, Diagnostic) {
        let (mut subtotal, mut tax, mut total) = amounts;
        let mut diag = Diagnostic::new();
        Triad {
            subtotal: &mut subtotal,
            tax: &mut tax,
            total: &mut total,
        }
        .reconcile(&mut diag);
        ((subtotal, tax, total), diag)
    }

    #[test]
    fn test_consistent_triad_untouched() {
        let (amounts, diag) = reconcile((Some(dec!(100)), Some(dec!(20)), Some(dec!(120))));
        assert_eq!(amounts, (Some(dec!(100)), Some(dec!(20)), Some(dec!(120))));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_one_cent_tolerated() {
        let (amounts, diag) = reconcile((Some(dec!(100)), Some(dec!(20.01)), Some(dec!(120))));
        assert_eq!(amounts.1, Some(dec!(20.01)));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_subtotal_total_swapped_tax_derived() {
        let (amounts, diag) = reconcile((Some(dec!(80.00)), None, Some(dec!(50.00))));
        assert_eq!(
            amounts,
            (Some(dec!(50.00)), Some(dec!(30.00)), Some(dec!(80.00)))
        );
        assert_eq!(diag.len(), 1);
        assert_eq!(
            diag.to_string(),
            "subtotal: subtotal 80.00 is greater than total 50.00"
        );
    }

    #[test]
    fn test_sum_mismatch_recomputes_tax() {
        let (amounts, diag) = reconcile((Some(dec!(50.00)), Some(dec!(10.00)), Some(dec!(100.00))));
        assert_eq!(
            amounts,
            (Some(dec!(50.00)), Some(dec!(50.00)), Some(dec!(100.00)))
        );
        assert_eq!(diag.count(Category::CrossFieldInconsistent), 1);
    }

    #[test]
    fn test_swap_happens_before_sum_check() {
        // 120 + 20 != 100, swapped to 100 + 20 == 120
        let (amounts, diag) = reconcile((Some(dec!(120)), Some(dec!(20)), Some(dec!(100))));
        assert_eq!(amounts, (Some(dec!(100)), Some(dec!(20)), Some(dec!(120))));
        assert_eq!(diag.len(), 1);

        let (amounts, diag) = reconcile((Some(dec!(120)), Some(dec!(5)), Some(dec!(100))));
        assert_eq!(amounts, (Some(dec!(100)), Some(dec!(20)), Some(dec!(120))));
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_implausible_tax_discarded() {
        let (amounts, diag) = reconcile((None, Some(dec!(150)), Some(dec!(100))));
        assert_eq!(amounts, (Some(dec!(100)), Some(dec!(0)), Some(dec!(100))));
        assert_eq!(
            diag.to_string(),
            "tax: tax 150 is greater than total 100"
        );
    }

    #[test]
    fn test_subtotal_derived() {
        let (amounts, diag) = reconcile((None, Some(dec!(19)), Some(dec!(119))));
        assert_eq!(amounts.0, Some(dec!(100)));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_total_derived() {
        let (amounts, diag) = reconcile((Some(dec!(100)), Some(dec!(19)), None));
        assert_eq!(amounts.2, Some(dec!(119)));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_single_amount_left_alone() {
        let (amounts, diag) = reconcile((None, None, Some(dec!(99.999))));
        assert_eq!(amounts, (None, None, Some(dec!(100.00))));
        assert!(diag.is_empty());
    }

    fn tens_of_octillions(n: i128) -> Option<Decimal> {
        Some(Decimal::from_i128_with_scale(n * 10i128.pow(28), 0))
    }

    #[test]
    fn test_overflowing_sum_derives_no_total() {
        let big = tens_of_octillions(5);
        let (amounts, diag) = reconcile((big, big, None));
        assert_eq!(amounts, (big, big, None));
        assert_eq!(diag.findings()[0].context, "total");
        assert_eq!(diag.count(Category::CrossFieldInconsistent), 1);
    }

    #[test]
    fn test_overflowing_sum_is_a_mismatch() {
        let (amounts, diag) = reconcile((
            tens_of_octillions(5),
            tens_of_octillions(5),
            tens_of_octillions(6),
        ));
        assert_eq!(
            amounts,
            (
                tens_of_octillions(5),
                tens_of_octillions(1),
                tens_of_octillions(6)
            )
        );
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.findings()[0].context, "tax");
    }

    #[test]
    fn test_negatives_recorded_before_rules() {
        let (amounts, diag) = reconcile((Some(dec!(-100)), None, Some(dec!(-120))));
        assert_eq!(amounts, (Some(dec!(100)), Some(dec!(20)), Some(dec!(120))));
        let contexts: Vec<&str> = diag.findings().iter().map(|f| f.context.as_str()).collect();
        assert_eq!(contexts, ["subtotal", "total"]);
        assert_eq!(diag.count(Category::SignInvalid), 2);
    }
}
