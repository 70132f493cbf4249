//! # Pricing Engine
//!
//! Resolves unit costs, applies discount rules and sums a checked total.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Phase 1: resolve                                                       │
//! │    every CartLine ──► catalog.lookup_cost ──► PricedLine               │
//! │    any miss ──► ItemNotFound (nothing is priced)                       │
//! │                                                                         │
//! │  Phase 2: accumulate, in cart order                                    │
//! │    line  = cost × qty          (checked → IntegerOverflow)             │
//! │    total = total + line        (checked → IntegerOverflow)             │
//! │    total = total − discount    (if the item has a rule)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The step order is part of the contract: an overflow in the addition is
//! reported even if the discount would have brought the total back in range.

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLine, OrderRequest, PricedLine};
use crate::validation::validate_cart;

/// Priced lines plus the final total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedCart {
    /// Lines in original cart order.
    pub lines: Vec<PricedLine>,
    pub total_cost: Money,
}

/// Resolves the unit cost of every line.
///
/// Fails on the first unknown item without pricing the remaining lines.
pub fn resolve_costs(cart: &[CartLine], catalog: &Catalog) -> CoreResult<Vec<PricedLine>> {
    cart.iter()
        .map(|line| {
            catalog
                .lookup_cost(&line.item_name)
                .map(|cost| PricedLine::from_cart_line(line, cost))
                .ok_or_else(|| CoreError::ItemNotFound(line.item_name.clone()))
        })
        .collect()
}

/// Prices a cart against the catalog.
///
/// Does not validate the cart; see [`quote`] for validation plus pricing.
///
/// ## Example
/// ```rust
/// use checkout_core::{pricing, CartLine, Catalog, CoreError};
///
/// let catalog = Catalog::with_defaults();
///
/// let priced = pricing::price_cart(&[CartLine::new("Apples", 1)], &catalog).unwrap();
/// assert_eq!(priced.total_cost.cents(), 60);
///
/// let missing = pricing::price_cart(&[CartLine::new("Magazine", 2)], &catalog);
/// assert_eq!(missing, Err(CoreError::ItemNotFound("Magazine".to_string())));
/// ```
pub fn price_cart(cart: &[CartLine], catalog: &Catalog) -> CoreResult<PricedCart> {
    let lines = resolve_costs(cart, catalog)?;

    let mut running_total = Money::zero();
    for line in &lines {
        let overflow = || CoreError::overflow(line.item_name.as_str());

        let line_total = line
            .cost
            .checked_multiply_quantity(line.quantity)
            .ok_or_else(overflow)?;

        running_total = running_total.checked_add(line_total).ok_or_else(overflow)?;

        if let Some(rule) = catalog.lookup_discount_rule(&line.item_name) {
            let discount = rule.discount(line.cost, line.quantity).ok_or_else(overflow)?;
            running_total = running_total.checked_sub(discount).ok_or_else(overflow)?;
        }
    }

    Ok(PricedCart {
        lines,
        total_cost: running_total,
    })
}

/// Validates and prices an order request without retaining it.
pub fn quote(request: &OrderRequest, catalog: &Catalog) -> CoreResult<PricedCart> {
    validate_cart(&request.cart)?;
    price_cart(&request.cart, catalog)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::DiscountRule;
    use crate::error::ValidationError;

    fn total(cart: &[CartLine]) -> CoreResult<i64> {
        price_cart(cart, &Catalog::with_defaults()).map(|p| p.total_cost.cents())
    }

    #[test]
    fn test_apples_and_oranges() {
        // Apples: 2×60=120 − 60 = 60; Oranges: 3×25=75 − 25 = 50
        let cart = [CartLine::new("Apples", 2), CartLine::new("Oranges", 3)];
        let priced = price_cart(&cart, &Catalog::with_defaults()).unwrap();

        assert_eq!(priced.total_cost, Money::from_cents(110));
        assert_eq!(
            priced.lines,
            vec![
                PricedLine::from_cart_line(&cart[0], Money::from_cents(60)),
                PricedLine::from_cart_line(&cart[1], Money::from_cents(25)),
            ]
        );
    }

    #[test]
    fn test_single_apple_has_no_discount() {
        assert_eq!(total(&[CartLine::new("Apples", 1)]), Ok(60));
    }

    #[test]
    fn test_total_matches_line_sum_minus_discounts() {
        let catalog = Catalog::with_defaults();
        for apples in 1..8 {
            for oranges in 1..8 {
                let cart = [CartLine::new("Apples", apples), CartLine::new("Oranges", oranges)];
                let expected = 60 * apples - 60 * (apples / 2) + 25 * oranges - 25 * (oranges / 3);
                let priced = price_cart(&cart, &catalog).unwrap();
                assert_eq!(priced.total_cost.cents(), expected, "{apples} apples, {oranges} oranges");
            }
        }
    }

    #[test]
    fn test_repeated_item_lines_are_priced_independently() {
        // Each line gets its own discount: 3 apples (60 off) + 3 apples (60 off)
        let cart = [CartLine::new("Apples", 3), CartLine::new("Apples", 3)];
        assert_eq!(total(&cart), Ok(240));
    }

    #[test]
    fn test_unknown_item_fails_whole_cart() {
        let cart = [CartLine::new("Magazine", 2), CartLine::new("Apples", 45)];
        assert_eq!(total(&cart), Err(CoreError::ItemNotFound("Magazine".to_string())));

        let cart = [CartLine::new("Apples", 45), CartLine::new("Magazine", 2)];
        assert_eq!(total(&cart), Err(CoreError::ItemNotFound("Magazine".to_string())));
    }

    #[test]
    fn test_unknown_item_reported_before_overflow() {
        let cart = [CartLine::new("Apples", i64::MAX), CartLine::new("Magazine", 1)];
        assert!(matches!(total(&cart), Err(CoreError::ItemNotFound(_))));
    }

    #[test]
    fn test_multiplication_overflow() {
        assert_eq!(
            total(&[CartLine::new("Apples", i64::MAX)]),
            Err(CoreError::overflow("Apples"))
        );
    }

    #[test]
    fn test_addition_overflow_checked_before_discount() {
        // Each line fits on its own but the running sum does not, even though
        // the discount would bring it back in range.
        let catalog = Catalog::builder()
            .item("Gold", 1)
            .item("Silver", 1)
            .discount("Silver", DiscountRule::BuyOneGetOneFree)
            .build()
            .unwrap();
        // (MAX − 1) + 2 overflows; subtracting the discount of 1 would give MAX
        let cart = [CartLine::new("Gold", i64::MAX - 1), CartLine::new("Silver", 2)];

        assert_eq!(price_cart(&cart, &catalog), Err(CoreError::overflow("Silver")));
    }

    #[test]
    fn test_large_total_without_overflow() {
        let catalog = Catalog::builder().item("Unit", 1).build().unwrap();
        let priced = price_cart(&[CartLine::new("Unit", i64::MAX)], &catalog).unwrap();
        assert_eq!(priced.total_cost, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_free_item() {
        let catalog = Catalog::builder().item("Sample", 0).build().unwrap();
        let priced = price_cart(&[CartLine::new("Sample", i64::MAX)], &catalog).unwrap();
        assert!(priced.total_cost.is_zero());
    }

    #[test]
    fn test_quote_validates_first() {
        let catalog = Catalog::with_defaults();

        assert_eq!(
            quote(&OrderRequest::default(), &catalog),
            Err(CoreError::InvalidRequest(ValidationError::Required {
                field: "cart".to_string()
            }))
        );

        // Invalid quantity wins over the unknown item
        let request = OrderRequest::new(vec![CartLine::new("Magazine", 0)]);
        assert!(matches!(
            quote(&request, &catalog),
            Err(CoreError::InvalidRequest(_))
        ));

        let request = OrderRequest::new(vec![CartLine::new("Oranges", 6)]);
        assert_eq!(quote(&request, &catalog).unwrap().total_cost.cents(), 100);
    }
}
