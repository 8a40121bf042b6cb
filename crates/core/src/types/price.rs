//! Integer price representation for Chilean pesos.

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A price in Chilean pesos.
///
/// CLP has no sub-unit in circulation, so amounts are plain integers
/// (`14_000` for a $14.000 bag). Locale formatting belongs to the
/// presentation layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(0);

    /// Create a new price from a peso amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the peso amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Price of `quantity` units at this unit price, saturating on overflow.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_amount() {
        let price = Price::new(14_000);
        assert_eq!(price.amount(), 14_000);
    }

    #[test]
    fn test_times() {
        let price = Price::new(14_000);
        assert_eq!(price.times(3), Price::new(42_000));
        assert_eq!(price.times(0), Price::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::new(14_000), Price::new(32_000), Price::new(4_000)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(50_000));
    }

    #[test]
    fn test_times_saturates() {
        let price = Price::new(i64::MAX);
        assert_eq!(price.times(2), Price::new(i64::MAX));
    }

    #[test]
    fn test_serde_transparent() {
        let price = Price::new(36_500);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "36500");

        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
