//! Type-safe price representation using decimal arithmetic.
//!
//! Prices travel as plain JSON numbers (`299.99`) so that persisted carts and
//! API payloads stay readable by any client, but arithmetic happens on
//! [`Decimal`] so totals never pick up binary floating point drift.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur when constructing a price.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    /// Prices may not be negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative amount in the store's single implicit currency (USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// The zero price, used as the total of an empty cart.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// The largest representable price. Saturating arithmetic stops here.
    pub const MAX: Self = Self(Decimal::MAX);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if `cents` is below zero.
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        Self::new(Decimal::new(cents, 2))
    }

    /// Create a price from an unsigned number of cents. Infallible, so it can
    /// back compile-time fixture data.
    #[must_use]
    pub const fn cents(cents: u32) -> Self {
        Self(Decimal::from_parts(cents, 0, 0, false, 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The price of `quantity` units, or `None` if it cannot be represented.
    #[must_use]
    pub fn checked_times(&self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }

    /// The price of `quantity` units, saturating at [`Price::MAX`].
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        self.checked_times(quantity).unwrap_or(Self::MAX)
    }

    /// Sum of two prices, or `None` if it cannot be represented.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Saturates at [`Price::MAX`]; use [`Price::checked_add`] to detect overflow.
impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.checked_add(rhs).unwrap_or(Self::MAX)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_rejects_negative_amounts() {
        assert!(matches!(
            Price::new(Decimal::new(-1, 2)),
            Err(PriceError::Negative(_))
        ));
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_price_times_quantity() {
        let price = Price::from_cents(29_999).unwrap();
        assert_eq!(price.times(3), Price::from_cents(89_997).unwrap());
        assert_eq!(price.times(0), Price::ZERO);
    }

    #[test]
    fn test_price_overflow_is_detected() {
        let huge = Price::new(Decimal::MAX / Decimal::TWO).unwrap();
        assert_eq!(huge.checked_times(3), None);
        assert_eq!(huge.times(3), Price::MAX);
        assert_eq!(Price::MAX.checked_add(Price::cents(1)), None);
        assert_eq!(Price::MAX + Price::cents(1), Price::MAX);
        assert_eq!(
            Price::cents(100).checked_add(Price::cents(5)),
            Some(Price::cents(105))
        );
    }

    #[test]
    fn test_price_cents_matches_from_cents() {
        assert_eq!(Price::cents(29_999), Price::from_cents(29_999).unwrap());
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::from_cents(29_999).unwrap().display(), "$299.99");
        assert_eq!(Price::from_cents(500).unwrap().display(), "$5.00");
        assert_eq!(Price::ZERO.display(), "$0.00");
    }

    #[test]
    fn test_price_sum() {
        let total: Price = [1_000, 250, 5]
            .into_iter()
            .map(|cents| Price::from_cents(cents).unwrap())
            .sum();
        assert_eq!(total, Price::from_cents(1_255).unwrap());
    }

    #[test]
    fn test_price_json_is_a_number() {
        let price = Price::from_cents(29_999).unwrap();
        let json = serde_json::to_value(price).unwrap();
        assert!(json.is_number());

        let parsed: Price = serde_json::from_str("299.99").unwrap();
        assert_eq!(parsed, price);

        let whole: Price = serde_json::from_str("12").unwrap();
        assert_eq!(whole, Price::from_cents(1_200).unwrap());
    }

    #[test]
    fn test_price_json_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-3.5").is_err());
    }
}
