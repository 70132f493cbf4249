//! # Domain Types
//!
//! Core domain types used throughout Checkout. These double as the JSON
//! wire types of the HTTP API.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    CartLine     │   │   PricedLine    │   │  OrderSummary   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  item_name      │──►│  item_name      │──►│  order_id       │       │
//! │  │  quantity       │   │  quantity       │   │  summary [..]   │       │
//! │  │                 │   │  cost (unit)    │   │  total_cost     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │   caller input          derived, frozen       created once per order   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Missing Fields
//! Request fields use `#[serde(default)]`: a missing `quantity` decodes to 0
//! and is rejected by validation, not by the JSON decoder.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Cart Line
// =============================================================================

/// One line of a submitted cart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Catalog item name.
    #[serde(default)]
    pub item_name: String,

    /// Units requested. Must be at least 1.
    #[serde(default)]
    pub quantity: i64,
}

impl CartLine {
    /// Creates a cart line.
    pub fn new(item_name: impl Into<String>, quantity: i64) -> Self {
        CartLine {
            item_name: item_name.into(),
            quantity,
        }
    }
}

// =============================================================================
// Priced Line
// =============================================================================

/// A cart line with its unit cost resolved from the catalog.
///
/// Snapshot pattern: the cost is frozen at pricing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricedLine {
    pub item_name: String,
    pub quantity: i64,
    /// Unit cost at time of pricing.
    pub cost: Money,
}

impl PricedLine {
    /// Pairs a cart line with its resolved unit cost.
    pub fn from_cart_line(line: &CartLine, cost: Money) -> Self {
        PricedLine {
            item_name: line.item_name.clone(),
            quantity: line.quantity,
            cost,
        }
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// The result of a successful submission.
///
/// Created exactly once per order and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSummary {
    /// UUID v4, lowercase hyphenated.
    pub order_id: String,
    /// Priced lines in original cart order.
    pub summary: Vec<PricedLine>,
    pub total_cost: Money,
}

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /submit-order`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderRequest {
    #[serde(default)]
    pub cart: Vec<CartLine>,
}

impl OrderRequest {
    /// Creates a request from cart lines.
    pub fn new(cart: Vec<CartLine>) -> Self {
        OrderRequest { cart }
    }
}

/// Body of `POST /get-order`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GetOrderRequest {
    #[serde(default)]
    pub order_id: String,
}

impl GetOrderRequest {
    pub fn new(order_id: impl Into<String>) -> Self {
        GetOrderRequest {
            order_id: order_id.into(),
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Body of `GET /get-all-orders`.
///
/// `orders` is omitted entirely when nothing has been stored, so an empty
/// store serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AllOrders {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orders: Vec<OrderSummary>,
}

impl AllOrders {
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Generic error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_request_missing_fields_default() {
        let request: OrderRequest =
            serde_json::from_value(json!({ "cart": [{ "item_name": "Apples" }] })).unwrap();
        assert_eq!(request.cart, vec![CartLine::new("Apples", 0)]);

        let request: OrderRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.cart.is_empty());
    }

    #[test]
    fn test_order_summary_wire_shape() {
        let summary = OrderSummary {
            order_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            summary: vec![PricedLine::from_cart_line(
                &CartLine::new("Apples", 2),
                Money::from_cents(60),
            )],
            total_cost: Money::from_cents(60),
        };

        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "order_id": "550e8400-e29b-41d4-a716-446655440000",
                "summary": [{ "item_name": "Apples", "quantity": 2, "cost": 60 }],
                "total_cost": 60
            })
        );
    }

    #[test]
    fn test_all_orders_empty_omits_field() {
        let all = AllOrders::default();
        assert!(all.is_empty());
        assert_eq!(serde_json::to_string(&all).unwrap(), "{}");
    }
}
