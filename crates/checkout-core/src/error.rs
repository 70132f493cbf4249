//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Pricing failures                               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  checkout-orders errors (separate crate)                               │
//! │  └── OrderError       - Adds OrderNotFound                             │
//! │                                                                         │
//! │  checkout-api errors (in app)                                          │
//! │  └── ApiError         - What the HTTP client sees ({"error": ...})     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → OrderError → ApiError → Client    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Context (item name, field) is attached where the error is raised
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors produced while validating and pricing a cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The submitted request is malformed.
    ///
    /// ## When This Occurs
    /// - Empty cart
    /// - Empty item name
    /// - Quantity below 1
    #[error("invalid submitted request: {0}")]
    InvalidRequest(#[from] ValidationError),

    /// A cart line names an item the catalog does not carry.
    ///
    /// The whole cart is rejected; no line is priced.
    #[error("one or more items in the request does not exist: {0}")]
    ItemNotFound(String),

    /// Checked arithmetic overflowed the native integer range.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart: [{ Apples, 9223372036854775807 }]
    ///      │
    ///      ▼
    /// 60 × 9223372036854775807 → overflow
    ///      │
    ///      ▼
    /// IntegerOverflow { item: "Apples" }
    /// ```
    #[error("unable to process order request, item total too large: {item}")]
    IntegerOverflow { item: String },
}

impl CoreError {
    /// Creates an IntegerOverflow error for the given item.
    pub fn overflow(item: impl Into<String>) -> Self {
        CoreError::IntegerOverflow { item: item.into() }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before pricing runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., the same item twice in a catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound("Magazine".to_string());
        assert_eq!(
            err.to_string(),
            "one or more items in the request does not exist: Magazine"
        );

        let err = CoreError::overflow("Apples");
        assert_eq!(
            err.to_string(),
            "unable to process order request, item total too large: Apples"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "cart".to_string(),
        };
        assert_eq!(err.to_string(), "cart is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "item_name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidRequest(_)));
        assert_eq!(
            core_err.to_string(),
            "invalid submitted request: item_name is required"
        );
    }
}
