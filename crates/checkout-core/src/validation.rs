//! # Validation Module
//!
//! Input validation for order requests and catalog entries.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (checkout-api)                                  │
//! │  └── JSON decoding (syntax only, missing fields default)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── cart non-empty, item names non-empty, quantity >= 1               │
//! │  └── order id is a canonical UUID v4                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing engine                                               │
//! │  ├── item exists in catalog                                            │
//! │  └── checked arithmetic (overflow)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_order_id, validate_quantity};
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_order_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::CartLine;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "item_name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (the native integer maximum)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Submit Order                                                           │
/// │                                                                         │
/// │  Cart line quantity: 5                                                 │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(5) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       └── OK → pricing (which may still report IntegerOverflow)        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if !(1..=MAX_ITEM_QUANTITY).contains(&qty) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a catalog cost in the smallest currency unit.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(60).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "cost".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates a submitted cart.
///
/// ## Rules
/// - Cart must contain at least one line
/// - Every line has a non-empty item name and a positive quantity
pub fn validate_cart(cart: &[CartLine]) -> ValidationResult<()> {
    if cart.is_empty() {
        return Err(ValidationError::Required {
            field: "cart".to_string(),
        });
    }

    for line in cart {
        validate_item_name(&line.item_name)?;
        validate_quantity(line.quantity)?;
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates an order identifier.
///
/// ## Rules
/// - Must not be empty
/// - Canonical form: 36 lowercase characters with hyphens
///   `xxxxxxxx-xxxx-4xxx-[89ab]xxx-xxxxxxxxxxxx`
/// - Version 4, RFC 4122 variant
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_order_id;
///
/// assert!(validate_order_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_order_id("not-a-uuid").is_err());
/// ```
pub fn validate_order_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "order_id".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "order_id".to_string(),
        reason: reason.to_string(),
    };

    let parsed = uuid::Uuid::parse_str(id).map_err(|_| invalid("must be a valid UUID"))?;

    // parse_str also accepts simple, braced and urn forms
    if parsed.hyphenated().to_string() != id {
        return Err(invalid("must be a lowercase hyphenated UUID"));
    }

    if parsed.get_version_num() != 4 || parsed.get_variant() != uuid::Variant::RFC4122 {
        return Err(invalid("must be a version 4 UUID"));
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
