//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Checked Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE OVERFLOW PROBLEM                                                   │
//! │                                                                         │
//! │  Unchecked i64 arithmetic:                                              │
//! │    60 × 9223372036854775807  → panics in debug, wraps in release  ❌   │
//! │                                                                         │
//! │  OUR SOLUTION: Checked operations only                                  │
//! │    checked_multiply_quantity(..) → None                                │
//! │    The caller turns None into IntegerOverflow explicitly               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! let price = Money::from_cents(60);
//!
//! let line = price.checked_multiply_quantity(2).unwrap();
//! assert_eq!(line.cents(), 120);
//!
//! assert!(price.checked_multiply_quantity(i64::MAX).is_none());
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: the native signed width; overflow bounds are i64's
/// - **Single field tuple struct**: serializes as a bare JSON integer
/// - **No operator impls**: every arithmetic step is checked
///
/// ## Where Money is Used
/// ```text
/// Catalog cost ──► PricedLine.cost ──► unit × qty ──► running total
///                                           │
///                  DiscountRule ────────────┴──► total − discount
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_cents(25);
    /// assert_eq!(price.cents(), 25);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in the smallest currency unit.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, returning `None` on overflow.
    ///
    /// ## User Workflow
    /// ```text
    /// Item: Apples 60
    /// Quantity: 2
    ///      │
    ///      ▼
    /// checked_multiply_quantity(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: 120
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Subtracts `other`, returning `None` on overflow.
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

impl From<i64> for Money {
    fn from(cents: i64) -> Self {
        Money(cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_zero_default() {
        assert_eq!(Money::default(), Money::zero());
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_checked_multiply_quantity() {
        let unit_price = Money::from_cents(25);
        assert_eq!(unit_price.checked_multiply_quantity(3), Some(Money::from_cents(75)));
        assert_eq!(unit_price.checked_multiply_quantity(i64::MAX), None);

        // 1 × MAX does not overflow
        assert_eq!(
            Money::from_cents(1).checked_multiply_quantity(i64::MAX),
            Some(Money::from_cents(i64::MAX))
        );
    }

    #[test]
    fn test_checked_add_and_sub() {
        let a = Money::from_cents(i64::MAX - 10);
        assert_eq!(a.checked_add(Money::from_cents(10)), Some(Money::from_cents(i64::MAX)));
        assert_eq!(a.checked_add(Money::from_cents(11)), None);

        let b = Money::from_cents(120);
        assert_eq!(b.checked_sub(Money::from_cents(60)), Some(Money::from_cents(60)));
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Money::from_cents(110)).unwrap();
        assert_eq!(json, "110");

        let money: Money = serde_json::from_str("60").unwrap();
        assert_eq!(money.cents(), 60);
    }
}
