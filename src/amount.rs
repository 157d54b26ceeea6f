//! Fixed-point monetary amount with 2 decimal places.
//!
//! Uses `rust_decimal` internally with scale enforcement so receipt output
//! always shows cents, matching how the payment form displays amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// A monetary amount that maintains exactly 2 decimal places.
///
/// This type wraps `rust_decimal::Decimal` and normalizes every value to
/// cent precision. Parsing rounds extra fractional digits away (half away
/// from zero), so it is only suitable for display; form validation rejects
/// over-precise input before it ever reaches this type.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use checkout_sim::Amount;
///
/// let amount = Amount::from_str("25").unwrap();
/// assert_eq!(amount.to_string(), "25.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized =
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        normalized.rescale(Self::SCALE);
        Amount(normalized)
    }

    /// Returns `true` if this amount is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)?;
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_normalizes_scale() {
        let a = Amount::from_str("25").unwrap();
        assert_eq!(a.to_string(), "25.00");

        let a = Amount::from_str("10.5").unwrap();
        assert_eq!(a.to_string(), "10.50");

        let a = Amount::from_str("3.99").unwrap();
        assert_eq!(a.to_string(), "3.99");

        let a = Amount::from_str("  2.5  ").unwrap();
        assert_eq!(a.to_string(), "2.50");
    }

    #[test]
    fn test_from_str_rounds_extra_digits() {
        // Display-side parse mirrors toFixed(2); the validator is what
        // rejects over-precise input on the form side.
        let a = Amount::from_str("10.005").unwrap();
        assert_eq!(a.to_string(), "10.01");
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!(Amount::from_str("abc").is_err());
        assert!(Amount::from_str("").is_err());
        assert!(Amount::from_str("12.3.4").is_err());
    }

    #[test]
    fn test_is_positive() {
        assert!(Amount::from_str("0.01").unwrap().is_positive());
        assert!(!Amount::from_str("0").unwrap().is_positive());
        assert!(!Amount::from_str("-5").unwrap().is_positive());
        assert!(!Amount::ZERO.is_positive());
    }
}
