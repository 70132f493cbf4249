//! # Order Error Types
//!
//! The error taxonomy exposed to callers of the order service.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / CoreError (checkout-core)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderError (this module) ← adds OrderNotFound                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (checkout-api) ← 400 or 404 with {"error": "..."}            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is deterministic for a given input and catalog, so none is
//! retried.

use checkout_core::{CoreError, ValidationError};
use thiserror::Error;

/// Order service errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Malformed input: empty cart, empty item name, non-positive quantity,
    /// malformed order identifier.
    #[error("invalid submitted request: {0}")]
    InvalidRequest(ValidationError),

    /// The cart references an item absent from the catalog.
    #[error("one or more items in the request does not exist: {0}")]
    ItemNotFound(String),

    /// Pricing overflowed the native integer range.
    #[error("unable to process order request, item total too large: {item}")]
    IntegerOverflow { item: String },

    /// Lookup miss on a well-formed order identifier.
    #[error("order not found: {0}")]
    OrderNotFound(String),
}

impl OrderError {
    /// True for lookup misses; every other variant is a client error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, OrderError::OrderNotFound(_))
    }
}

impl From<CoreError> for OrderError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidRequest(e) => OrderError::InvalidRequest(e),
            CoreError::ItemNotFound(item) => OrderError::ItemNotFound(item),
            CoreError::IntegerOverflow { item } => OrderError::IntegerOverflow { item },
        }
    }
}

impl From<ValidationError> for OrderError {
    fn from(err: ValidationError) -> Self {
        OrderError::InvalidRequest(err)
    }
}

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_keep_their_kind() {
        let err: OrderError = CoreError::ItemNotFound("Magazine".into()).into();
        assert_eq!(err, OrderError::ItemNotFound("Magazine".into()));
        assert_eq!(
            err.to_string(),
            "one or more items in the request does not exist: Magazine"
        );

        let err: OrderError = CoreError::overflow("Apples").into();
        assert!(matches!(err, OrderError::IntegerOverflow { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found() {
        let err = OrderError::OrderNotFound("550e8400-e29b-41d4-a716-446655440000".into());
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "order not found: 550e8400-e29b-41d4-a716-446655440000"
        );
    }
}
