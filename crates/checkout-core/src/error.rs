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
//! │  ├── CoreError        - Catalog and order failures                     │
//! │  └── ValidationError  - Rejected construction input                    │
//! │                                                                         │
//! │  checkout-core::pricing                                                 │
//! │  └── PricingError     - Strategy failures, before the item is known    │
//! │                                                                         │
//! │  checkout-catalog errors (separate crate)                              │
//! │  └── CatalogError     - Config file and catalog setup failures         │
//! │                                                                         │
//! │  Flow: PricingError → CoreError (+ item name) → caller                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, required multiple)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and order errors.
///
/// Every failing operation leaves the order and the catalog exactly as they
/// were before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No item is registered under the given name.
    ///
    /// ## When This Occurs
    /// - `Order::add` with a name the catalog does not know (fail fast)
    /// - `ItemCatalog::fetch` / `price_for` on an unknown name
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// A strict bulk item was priced at a quantity that is not a whole
    /// number of bundles.
    ///
    /// ## User Workflow
    /// ```text
    /// Gift Box sold only in pairs, scanned 3 times
    ///      │
    ///      ▼
    /// Order::total()
    ///      │
    ///      ▼
    /// InvalidQuantity { item: "Gift Box", quantity: 3, multiple: 2 }
    ///      │
    ///      ▼
    /// UI shows: "Gift Box must be bought in multiples of 2 (got 3)"
    /// ```
    #[error("{item} must be bought in multiples of {multiple} (got {quantity})")]
    InvalidQuantity {
        item: String,
        quantity: u32,
        multiple: u32,
    },

    /// An item with this name is already registered.
    #[error("Item '{0}' is already in the catalog")]
    DuplicateItem(String),

    /// The accumulated quantity for a line cannot grow any further.
    #[error("Quantity of {item} cannot exceed {max}")]
    QuantityTooLarge { item: String, max: u32 },

    /// An amount does not fit the money representation.
    #[error("Amount overflow while pricing {0}")]
    AmountOverflow(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised while building strategies and items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
