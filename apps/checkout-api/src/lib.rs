//! # Checkout API
//!
//! JSON-over-HTTP front end for the order service.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   HTTP request ──► axum Router ──► handler (routes.rs)                  │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                              OrderService (checkout-orders)             │
//! │                                        │                                │
//! │                      ┌─────────────────┴─────────────────┐              │
//! │                      ▼                                   ▼              │
//! │              Catalog + pricing                     OrderStore           │
//! │              (checkout-core)                       (in-memory)          │
//! │                                                                         │
//! │   Failures ──► ApiError (error.rs) ──► 400/404 {"error": "..."}         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use checkout_core::Catalog;
use checkout_orders::{OrderService, OrderStore};

pub mod config;
pub mod error;
pub mod routes;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: OrderService,
}

impl AppState {
    /// State over the given catalog with an empty store.
    pub fn new(catalog: Catalog) -> Self {
        AppState {
            service: OrderService::new(Arc::new(catalog), Arc::new(OrderStore::new())),
        }
    }

    /// State over the reference catalog.
    pub fn with_defaults() -> Self {
        AppState::new(Catalog::with_defaults())
    }
}

/// Builds the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/submit-order", post(routes::submit_order))
        .route("/get-order", post(routes::get_order))
        .route("/get-all-orders", get(routes::get_all_orders))
        .route("/health", get(routes::health))
        .with_state(state)
}
