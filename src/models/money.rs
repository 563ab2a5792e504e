//! Money type for representing expense amounts
//!
//! Expense costs are whole amounts of a currency without a minor unit, so the
//! value is stored as an unsigned integer. A negative cost cannot be
//! represented, and arithmetic stays exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Default currency glyph (Bangladeshi taka)
pub const DEFAULT_CURRENCY_SYMBOL: &str = "৳";

/// A non-negative monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::new(1200);
    /// assert_eq!(amount.amount(), 1200);
    /// ```
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add, or `None` if the sum does not fit
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }

    /// Subtract, clamping at zero
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Digits grouped in threes with commas, e.g. "1,234,567"
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// assert_eq!(Money::new(1234567).grouped(), "1,234,567");
    /// ```
    pub fn grouped(&self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.grouped())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DEFAULT_CURRENCY_SYMBOL, self.grouped())
    }
}

/// Saturates at `u64::MAX`; seed loading rejects data that would get there.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped() {
        assert_eq!(Money::new(0).grouped(), "0");
        assert_eq!(Money::new(999).grouped(), "999");
        assert_eq!(Money::new(1000).grouped(), "1,000");
        assert_eq!(Money::new(12500).grouped(), "12,500");
        assert_eq!(Money::new(1234567).grouped(), "1,234,567");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::new(1200)), "৳1,200");
        assert_eq!(format!("{}", Money::zero()), "৳0");
        assert_eq!(Money::new(800).format_with_symbol("$"), "$800");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(300);

        assert_eq!((a + b).amount(), 1300);
        assert_eq!(a.saturating_sub(b).amount(), 700);
        assert_eq!(b.saturating_sub(a), Money::zero());
    }

    #[test]
    fn test_addition_never_wraps() {
        let max = Money::new(u64::MAX);
        assert_eq!(max.checked_add(Money::new(1)), None);
        assert_eq!(Money::new(1).checked_add(Money::new(2)), Some(Money::new(3)));

        assert_eq!(max + Money::new(1), max);
        let mut total = Money::new(u64::MAX - 1);
        total += Money::new(5);
        assert_eq!(total, max);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Money::new(500), Money::new(300), Money::new(1200)];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.amount(), 2000);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serialization() {
        let m = Money::new(1200);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1200");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_negative_rejected() {
        assert!(serde_json::from_str::<Money>("-5").is_err());
    }
}
