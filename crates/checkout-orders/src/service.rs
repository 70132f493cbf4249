//! # Order Service
//!
//! The three operations the transport layer calls.
//!
//! ## Submit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OrderRequest                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_cart ──── fail ──► InvalidRequest                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  price_cart ─────── fail ──► ItemNotFound / IntegerOverflow             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Uuid::new_v4 ──► OrderSummary ──► OrderStore::insert ──► return        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every step is synchronous and in-memory; a call runs to completion.

use std::sync::Arc;

use checkout_core::validation::validate_order_id;
use checkout_core::{pricing, AllOrders, Catalog, GetOrderRequest, OrderRequest, OrderSummary};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{OrderError, OrderResult};
use crate::store::OrderStore;

/// Orchestrates validation → pricing → storage.
///
/// Cheap to clone; the catalog and store are shared.
#[derive(Debug, Clone)]
pub struct OrderService {
    catalog: Arc<Catalog>,
    store: Arc<OrderStore>,
}

impl OrderService {
    /// Creates a service over a read-only catalog and a shared store.
    pub fn new(catalog: Arc<Catalog>, store: Arc<OrderStore>) -> Self {
        OrderService { catalog, store }
    }

    /// The catalog orders are priced against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of orders retained so far.
    pub fn order_count(&self) -> usize {
        self.store.len()
    }

    /// Prices and retains an order.
    ///
    /// ## Errors
    /// - `InvalidRequest` - empty cart, empty item name, quantity below 1
    /// - `ItemNotFound` - any line names an item the catalog lacks
    /// - `IntegerOverflow` - the total exceeds the i64 range
    pub fn submit(&self, request: &OrderRequest) -> OrderResult<OrderSummary> {
        let priced = pricing::quote(request, &self.catalog).map_err(|e| {
            warn!(error = %e, lines = request.cart.len(), "Order rejected");
            OrderError::from(e)
        })?;

        let order = OrderSummary {
            order_id: Uuid::new_v4().to_string(),
            summary: priced.lines,
            total_cost: priced.total_cost,
        };
        self.store.insert(order.clone());

        info!(
            order_id = %order.order_id,
            lines = order.summary.len(),
            total_cost = order.total_cost.cents(),
            "Order submitted"
        );

        Ok(order)
    }

    /// Returns a stored order unchanged.
    ///
    /// ## Errors
    /// - `InvalidRequest` - the id is not a canonical UUID v4
    /// - `OrderNotFound` - no order was stored under the id
    pub fn get_one(&self, request: &GetOrderRequest) -> OrderResult<OrderSummary> {
        validate_order_id(&request.order_id)?;

        debug!(order_id = %request.order_id, "Looking up order");
        self.store
            .get(&request.order_id)
            .ok_or_else(|| OrderError::OrderNotFound(request.order_id.clone()))
    }

    /// Returns every stored order; never fails.
    pub fn get_all(&self) -> AllOrders {
        let orders = self.store.get_all();
        debug!(count = orders.len(), "Listing orders");
        AllOrders { orders }
    }
}
