//! # HTTP Handlers
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /submit-order    {cart:[...]}   ──► 200 OrderSummary | 400       │
//! │  POST /get-order       {order_id}     ──► 200 OrderSummary | 400 | 404 │
//! │  GET  /get-all-orders                 ──► 200 AllOrders ({} if none)   │
//! │  GET  /health                         ──► 200 HealthResponse           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! JSON bodies are taken as `Result<Json<T>, JsonRejection>` so decoding
//! failures are answered with the same `{"error": ...}` shape as service
//! failures instead of axum's plain-text rejection.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use checkout_core::{AllOrders, GetOrderRequest, OrderRequest, OrderSummary};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiResult;
use crate::AppState;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub orders: usize,
    pub server_time: String,
}

/// `POST /submit-order`
pub async fn submit_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> ApiResult<Json<OrderSummary>> {
    let Json(request) = payload?;
    let order = state.service.submit(&request)?;
    Ok(Json(order))
}

/// `POST /get-order`
pub async fn get_order(
    State(state): State<AppState>,
    payload: Result<Json<GetOrderRequest>, JsonRejection>,
) -> ApiResult<Json<OrderSummary>> {
    let Json(request) = payload?;
    let order = state.service.get_one(&request)?;
    Ok(Json(order))
}

/// `GET /get-all-orders`
pub async fn get_all_orders(State(state): State<AppState>) -> Json<AllOrders> {
    Json(state.service.get_all())
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let orders = state.service.order_count();
    debug!(orders, "Health check");
    Json(HealthResponse {
        status: "ok".to_string(),
        orders,
        server_time: chrono::Utc::now().to_rfc3339(),
    })
}
