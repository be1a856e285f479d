//! Percentage-key semantics and percentage-change analysis.

#[cfg(feature = "calculator")]
pub mod resolver;

#[cfg(feature = "reverse_percentage")]
pub mod difference;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::HisaabError;
use crate::types::Percent;
use crate::HisaabResult;

const HUNDRED: Decimal = dec!(100);

/// `base × percentage / 100`, reporting overflow.
pub fn try_percentage_of(base: Decimal, percentage: Percent) -> HisaabResult<Decimal> {
    base.checked_mul(percentage)
        .and_then(|v| v.checked_div(HUNDRED))
        .ok_or_else(|| HisaabError::overflow(format!("{percentage}% of {base}")))
}

/// `base × percentage / 100`. Overflow yields zero.
pub fn percentage_of(base: Decimal, percentage: Percent) -> Decimal {
    try_percentage_of(base, percentage).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(dec!(1000), dec!(10)), dec!(100));
        assert_eq!(percentage_of(dec!(250), dec!(12.5)), dec!(31.25));
        assert_eq!(percentage_of(dec!(-80), dec!(50)), dec!(-40));
    }

    #[test]
    fn test_percentage_of_overflow_is_zero() {
        assert_eq!(percentage_of(Decimal::MAX, dec!(1000)), Decimal::ZERO);
        assert!(try_percentage_of(Decimal::MAX, dec!(1000)).is_err());
    }
}
