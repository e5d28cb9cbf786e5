//! Amount arithmetic shared by the normalizers.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Smallest currency subunit; amounts closer than this compare equal.
pub const ONE_CENT: Decimal = dec!(0.01);

/// Upper bound of every percentage field.
pub const MAX_PERCENT: Decimal = dec!(100);

/// Round half away from zero to two decimal places.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn within_one_cent(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= ONE_CENT
}
