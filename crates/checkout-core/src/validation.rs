//! # Validation Module
//!
//! Input validation for pricing rules and catalog entries.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Config file (checkout-catalog)                               │
//! │  ├── TOML shape (deserialization)                                      │
//! │  └── Unique names across the file                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Strategy constructors                                        │
//! │  └── THIS MODULE: prices >= 0, bundle size >= 1                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog registration                                         │
//! │  └── THIS MODULE: non-empty, bounded item names                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_bundle_size, validate_item_name};
//!
//! validate_item_name("Chocolates").unwrap();
//! assert!(validate_bundle_size(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest item name accepted by the catalog.
pub const MAX_ITEM_NAME_LEN: usize = 200;

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - Must be at most 200 characters
///
/// Names are matched exactly by the catalog; surrounding whitespace is not
/// trimmed away, only rejected when it is all there is.
///
/// ```rust
/// use checkout_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Milk").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates the number of units in a bundle.
///
/// A bundle of zero units would make every quantity an infinite number of
/// bundles, so it must be at least one.
pub fn validate_bundle_size(size: u32) -> ValidationResult<()> {
    if size == 0 {
        return Err(ValidationError::MustBePositive {
            field: "bundle size".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
