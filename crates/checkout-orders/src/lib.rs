//! # checkout-orders: Order Store and Service
//!
//! Sequences validation, pricing and retention of submitted orders.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (POST /submit-order)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  checkout-orders (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐             ┌────────────────────────────┐ │   │
//! │  │   │ OrderService  │── insert ──►│ OrderStore                 │ │   │
//! │  │   │ submit        │             │ RwLock<HashMap<id, order>> │ │   │
//! │  │   │ get_one       │◄── get ─────│                            │ │   │
//! │  │   │ get_all       │             └────────────────────────────┘ │   │
//! │  │   └───────┬───────┘                                             │   │
//! │  └───────────┼─────────────────────────────────────────────────────┘   │
//! │              ▼                                                          │
//! │  checkout-core (validate_cart, price_cart, Catalog)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use checkout_core::{CartLine, Catalog, GetOrderRequest, OrderRequest};
//! use checkout_orders::{OrderService, OrderStore};
//!
//! let service = OrderService::new(
//!     Arc::new(Catalog::with_defaults()),
//!     Arc::new(OrderStore::new()),
//! );
//!
//! let order = service
//!     .submit(&OrderRequest::new(vec![CartLine::new("Apples", 2)]))
//!     .unwrap();
//! assert_eq!(order.total_cost.cents(), 60);
//!
//! let fetched = service.get_one(&GetOrderRequest::new(&order.order_id)).unwrap();
//! assert_eq!(fetched, order);
//! ```

pub mod error;
pub mod service;
pub mod store;

pub use error::{OrderError, OrderResult};
pub use service::OrderService;
pub use store::OrderStore;
