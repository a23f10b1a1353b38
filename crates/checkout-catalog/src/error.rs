//! # Catalog Error Types
//!
//! Error types for catalog setup and configuration.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  catalog.toml ──► toml::de::Error ──┐                                   │
//! │  file system  ──► std::io::Error  ──┼──► CatalogError (this module)     │
//! │  registration ──► CoreError       ──┘          │                        │
//! │                                                ▼                        │
//! │                                   caller decides: abort or defaults     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing-time failures (unknown item, invalid quantity) stay `CoreError`;
//! this type only covers building a catalog.

use checkout_core::CoreError;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Registration or strategy validation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading or writing the config file failed.
    #[error("Catalog config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML or has the wrong shape.
    #[error("Failed to parse catalog config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be rendered as TOML.
    #[error("Failed to serialize catalog config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The config parsed but describes an invalid catalog.
    #[error("Invalid catalog config: {0}")]
    InvalidConfig(String),

    /// No explicit path, no environment override and no platform default.
    #[error("No catalog config path available")]
    NoConfigPath,
}
