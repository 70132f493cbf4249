//! # Discount Rules
//!
//! Per-item promotions. The pricing engine only relies on the
//! `(unit_cost, quantity) -> discount` contract; the formula is the rule's own
//! business.
//!
//! ## Reference Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BuyOneGetOneFree (Apples)          ThreeForTwo (Oranges)              │
//! │  ─────────────────────────          ─────────────────────              │
//! │  qty 1 → 0                          qty 1,2 → 0                        │
//! │  qty 2 → 1 × cost                   qty 3,4,5 → 1 × cost               │
//! │  qty 3 → 1 × cost                   qty 6,7,8 → 2 × cost               │
//! │  qty 4 → 2 × cost                   ...                                │
//! │  discount = cost × ⌊qty / 2⌋        discount = cost × ⌊qty / 3⌋        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// A pure, integer-only discount rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountRule {
    /// Every second unit is free.
    BuyOneGetOneFree,
    /// Every third unit is free.
    ThreeForTwo,
}

impl DiscountRule {
    /// Number of units in a group that earns one free unit.
    #[inline]
    const fn group_size(&self) -> i64 {
        match self {
            DiscountRule::BuyOneGetOneFree => 2,
            DiscountRule::ThreeForTwo => 3,
        }
    }

    /// Computes the amount to deduct for `quantity` units at `unit_cost`.
    ///
    /// Integer division floors, so an odd or remainder unit is paid in full.
    /// The result never exceeds `unit_cost × quantity` for non-negative
    /// inputs. Returns `None` only if the multiplication overflows.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{DiscountRule, Money};
    ///
    /// let apples = DiscountRule::BuyOneGetOneFree;
    /// assert_eq!(apples.discount(Money::from_cents(60), 2), Some(Money::from_cents(60)));
    /// assert_eq!(apples.discount(Money::from_cents(60), 1), Some(Money::zero()));
    ///
    /// let oranges = DiscountRule::ThreeForTwo;
    /// assert_eq!(oranges.discount(Money::from_cents(25), 3), Some(Money::from_cents(25)));
    /// ```
    pub fn discount(&self, unit_cost: Money, quantity: i64) -> Option<Money> {
        let free_units = quantity / self.group_size();
        if free_units <= 0 {
            return Some(Money::zero());
        }
        unit_cost.checked_multiply_quantity(free_units)
    }
}

impl std::fmt::Display for DiscountRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountRule::BuyOneGetOneFree => write!(f, "buy one get one free"),
            DiscountRule::ThreeForTwo => write!(f, "3 for the price of 2"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(value: i64) -> Option<Money> {
        Some(Money::from_cents(value))
    }

    #[test]
    fn test_buy_one_get_one_free() {
        let rule = DiscountRule::BuyOneGetOneFree;
        let cost = Money::from_cents(60);

        assert_eq!(rule.discount(cost, 1), cents(0));
        assert_eq!(rule.discount(cost, 2), cents(60));
        assert_eq!(rule.discount(cost, 3), cents(60));
        assert_eq!(rule.discount(cost, 4), cents(120));
        assert_eq!(rule.discount(cost, 7), cents(180));
    }

    #[test]
    fn test_three_for_two() {
        let rule = DiscountRule::ThreeForTwo;
        let cost = Money::from_cents(25);

        assert_eq!(rule.discount(cost, 1), cents(0));
        assert_eq!(rule.discount(cost, 2), cents(0));
        assert_eq!(rule.discount(cost, 3), cents(25));
        assert_eq!(rule.discount(cost, 4), cents(25));
        assert_eq!(rule.discount(cost, 5), cents(25));
        assert_eq!(rule.discount(cost, 6), cents(50));
        assert_eq!(rule.discount(cost, 10), cents(75));
    }

    #[test]
    fn test_discount_never_exceeds_line_total() {
        let cost = Money::from_cents(37);
        for rule in [DiscountRule::BuyOneGetOneFree, DiscountRule::ThreeForTwo] {
            for qty in 1..50 {
                let discount = rule.discount(cost, qty).unwrap();
                let line = cost.checked_multiply_quantity(qty).unwrap();
                assert!(discount <= line, "{rule} qty {qty}");
                assert!(!discount.is_negative());
            }
        }
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&DiscountRule::BuyOneGetOneFree).unwrap();
        assert_eq!(json, "\"buy_one_get_one_free\"");

        let rule: DiscountRule = serde_json::from_str("\"three_for_two\"").unwrap();
        assert_eq!(rule, DiscountRule::ThreeForTwo);
    }
}
