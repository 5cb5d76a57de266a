//! Provides one trait, [DecimalExtensions], which adds additional methods to [Decimal].

use alloc::string::{String, ToString};
use rust_decimal::{Decimal, RoundingStrategy};

/// This trait, and its implementation on `Decimal`, exist to add extra methods to `Decimal`.
/// Currently, these are:
///   - `round_half_away`, rounding to a number of decimal places with ties going away from zero,
///     which is how significant figures are rounded for display.
///   - `split_point`, to get the digits either side of the decimal point.
pub trait DecimalExtensions {
    fn round_half_away(&self, dp: u32) -> Decimal;
    fn split_point(&self) -> (String, String);
}

impl DecimalExtensions for Decimal {
    fn round_half_away(&self, dp: u32) -> Decimal {
        self.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Returns the digits before and after the decimal point of this decimal's absolute value.
    /// The fractional part is empty for whole numbers.
    fn split_point(&self) -> (String, String) {
        let text = self.abs().to_string();
        match text.split_once('.') {
            Some((whole, fraction)) => (whole.into(), fraction.into()),
            None => (text, String::new()),
        }
    }
}
