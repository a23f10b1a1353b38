//! # checkout-catalog: Item Catalog for Checkout
//!
//! The catalog collaborator that [`checkout_core::Order`] prices against.
//!
//! ## Module Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       checkout-catalog                                  │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────────────────┐    │
//! │  │  config             │ build  │  memory                         │    │
//! │  │  CatalogConfig      │ ─────► │  InMemoryCatalog                │    │
//! │  │  catalog.toml I/O   │        │  impl checkout_core::ItemCatalog│    │
//! │  └─────────────────────┘        └─────────────────────────────────┘    │
//! │                                                                         │
//! │  error: CatalogError (config + registration failures)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use checkout_catalog::CatalogConfig;
//! use checkout_core::{Money, Order};
//!
//! let config = CatalogConfig::from_toml_str(r#"
//!     [[items]]
//!     name = "Milk"
//!     pricing = { kind = "unit", price_cents = 500 }
//!
//!     [[items]]
//!     name = "Bread"
//!     pricing = { kind = "unit", price_cents = 300 }
//! "#).unwrap();
//! let catalog = config.build().unwrap();
//!
//! let mut order = Order::new(&catalog);
//! for name in ["Milk", "Milk", "Bread"] {
//!     order.add(name).unwrap();
//! }
//! assert_eq!(order.total().unwrap(), Money::from_units(13));
//! ```

pub mod config;
pub mod error;
pub mod memory;

pub use config::{CatalogConfig, ItemConfig, PricingConfig, CATALOG_PATH_ENV};
pub use error::{CatalogError, CatalogResult};
pub use memory::InMemoryCatalog;
