//! # checkout-core: Pure Pricing Logic for Checkout
//!
//! This crate is the **heart** of Checkout. It turns a basket of scanned
//! item names into an exact total, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               checkout-catalog (Level 1)                        │   │
//! │  │     InMemoryCatalog  ◄──  catalog.toml (CatalogConfig)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ implements ItemCatalog                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ checkout-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  pricing  │  │   order   │  │ validation│  │   │
//! │  │   │   Money   │  │ Unit/Bulk │  │   Order   │  │   rules   │  │   │
//! │  │   │           │  │   Item    │  │ LineTotal │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Unit and bulk pricing strategies
//! - [`item`] - Items binding a name to a strategy
//! - [`catalog`] - The `ItemCatalog` trait orders price against
//! - [`order`] - Order accumulation and totals
//! - [`error`] - Domain error types
//! - [`validation`] - Construction-time checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: pricing is deterministic - same input = same output
//! 2. **No I/O**: file system and logging sinks live in checkout-catalog
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Explicit Errors**: not-found and invalid-quantity are typed variants
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{Money, PricingStrategy};
//!
//! // 3 for 10.00, extra units 4.00 each
//! let chocolates = PricingStrategy::bulk(3, Money::from_units(10), Money::from_units(4)).unwrap();
//!
//! assert_eq!(chocolates.price(2).unwrap(), Money::from_units(8));
//! assert_eq!(chocolates.price(16).unwrap(), Money::from_units(54));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod item;
pub mod money;
pub mod order;
pub mod pricing;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Money` instead of
// `use checkout_core::money::Money`

pub use catalog::ItemCatalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use item::Item;
pub use money::Money;
pub use order::{LineTotal, Order, OrderLine, OrderState, OrderSummary};
pub use pricing::{PricingError, PricingStrategy, Remainder};
