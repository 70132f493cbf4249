//! # checkout-core: Pure Business Logic for Checkout
//!
//! This crate is the **heart** of the order API. It prices carts against an
//! immutable catalog as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 checkout-api (HTTP / JSON)                      │   │
//! │  │   /submit-order   /get-order   /get-all-orders   /health        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           checkout-orders (OrderService + OrderStore)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  pricing  │  │ discount  │  │ validation│  │   │
//! │  │   │  costs    │  │ price_cart│  │   rules   │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO SHARED STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire/domain types (CartLine, PricedLine, OrderSummary, ...)
//! - [`money`] - Money type with checked integer arithmetic
//! - [`catalog`] - Immutable item → cost and item → discount tables
//! - [`discount`] - Discount rules
//! - [`pricing`] - The pricing engine
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same cart + same catalog = same total
//! 2. **Integer Money**: all amounts are in the smallest currency unit (i64)
//! 3. **Checked Arithmetic**: overflow is reported, never wrapped
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{pricing, CartLine, Catalog};
//!
//! let catalog = Catalog::with_defaults();
//! let cart = vec![CartLine::new("Apples", 2), CartLine::new("Oranges", 3)];
//!
//! let priced = pricing::price_cart(&cart, &catalog).unwrap();
//! assert_eq!(priced.total_cost.cents(), 110);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod discount;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, CatalogBuilder, CatalogEntry};
pub use discount::DiscountRule;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::PricedCart;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound accepted for a cart line quantity.
///
/// Equal to the native integer maximum, so the range check never rejects a
/// representable quantity. Oversized quantities surface later as
/// [`CoreError::IntegerOverflow`] from the pricing loop.
pub const MAX_ITEM_QUANTITY: i64 = i64::MAX;
