//! # Catalog Configuration
//!
//! Loading and saving the item catalog as a TOML file.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Path Resolution (first match wins)                   │
//! │                                                                         │
//! │  1. Explicit path passed to load()/save()                              │
//! │                                                                         │
//! │  2. Environment variable                                               │
//! │     CHECKOUT_CATALOG_PATH=/srv/shop/catalog.toml                       │
//! │                                                                         │
//! │  3. Platform config directory                                          │
//! │     ~/.config/checkout/catalog.toml (Linux)                            │
//! │     ~/Library/Application Support/com.checkout.checkout/catalog.toml   │
//! │                                                                         │
//! │  A path that does not exist yields an empty catalog.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [[items]]
//! name = "Milk"
//! pricing = { kind = "unit", price_cents = 500 }
//!
//! [[items]]
//! name = "Chocolates"
//! pricing = { kind = "bulk", bundle_size = 3, bundle_price_cents = 1000, unit_price_cents = 400 }
//!
//! [[items]]
//! name = "Gift Box"
//! pricing = { kind = "bulk_exact", bundle_size = 2, bundle_price_cents = 900 }
//! ```

use std::collections::HashSet;
use std::path::PathBuf;

use checkout_core::pricing::PricingStrategy;
use checkout_core::validation::{validate_item_name, ValidationResult};
use checkout_core::{Item, Money, Remainder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::memory::InMemoryCatalog;

/// Environment variable naming the catalog file.
pub const CATALOG_PATH_ENV: &str = "CHECKOUT_CATALOG_PATH";

// =============================================================================
// Pricing Config
// =============================================================================

/// Pricing rule as written in the config file. Prices are in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingConfig {
    /// Flat price per unit.
    Unit { price_cents: i64 },

    /// `bundle_size` units for `bundle_price_cents`, leftovers at
    /// `unit_price_cents` each.
    Bulk {
        bundle_size: u32,
        bundle_price_cents: i64,
        unit_price_cents: i64,
    },

    /// Whole bundles only.
    BulkExact {
        bundle_size: u32,
        bundle_price_cents: i64,
    },
}

impl PricingConfig {
    /// Builds the validated strategy.
    pub fn to_strategy(&self) -> ValidationResult<PricingStrategy> {
        match *self {
            PricingConfig::Unit { price_cents } => {
                PricingStrategy::unit(Money::from_cents(price_cents))
            }
            PricingConfig::Bulk {
                bundle_size,
                bundle_price_cents,
                unit_price_cents,
            } => PricingStrategy::bulk(
                bundle_size,
                Money::from_cents(bundle_price_cents),
                Money::from_cents(unit_price_cents),
            ),
            PricingConfig::BulkExact {
                bundle_size,
                bundle_price_cents,
            } => PricingStrategy::bulk_exact(bundle_size, Money::from_cents(bundle_price_cents)),
        }
    }
}

impl From<&PricingStrategy> for PricingConfig {
    fn from(strategy: &PricingStrategy) -> Self {
        match strategy {
            PricingStrategy::Unit(unit) => PricingConfig::Unit {
                price_cents: unit.unit_price().cents(),
            },
            PricingStrategy::Bulk(bulk) => match bulk.remainder() {
                Remainder::UnitPrice(unit_price) => PricingConfig::Bulk {
                    bundle_size: bulk.bundle_size(),
                    bundle_price_cents: bulk.bundle_price().cents(),
                    unit_price_cents: unit_price.cents(),
                },
                Remainder::Reject => PricingConfig::BulkExact {
                    bundle_size: bulk.bundle_size(),
                    bundle_price_cents: bulk.bundle_price().cents(),
                },
            },
        }
    }
}

// =============================================================================
// Item Config
// =============================================================================

/// One `[[items]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub name: String,
    pub pricing: PricingConfig,
}

impl ItemConfig {
    pub fn new(name: impl Into<String>, pricing: PricingConfig) -> Self {
        ItemConfig {
            name: name.into(),
            pricing,
        }
    }

    /// Builds the item, validating name and pricing.
    pub fn to_item(&self) -> CatalogResult<Item> {
        validate_item_name(&self.name).map_err(|e| self.invalid(e))?;
        let strategy = self.pricing.to_strategy().map_err(|e| self.invalid(e))?;
        Ok(Item::new(self.name.clone(), strategy))
    }

    fn invalid(&self, err: impl std::fmt::Display) -> CatalogError {
        CatalogError::InvalidConfig(format!("item '{}': {}", self.name, err))
    }
}

impl From<&Item> for ItemConfig {
    fn from(item: &Item) -> Self {
        ItemConfig::new(item.name(), PricingConfig::from(item.strategy()))
    }
}

// =============================================================================
// Catalog Config
// =============================================================================

/// The whole catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

impl CatalogConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> CatalogResult<Self> {
        let config: CatalogConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the config as pretty TOML.
    pub fn to_toml_string(&self) -> CatalogResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Snapshot of an existing catalog, entries sorted by name.
    pub fn from_catalog(catalog: &InMemoryCatalog) -> Self {
        let mut items: Vec<ItemConfig> = catalog.iter().map(ItemConfig::from).collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        CatalogConfig { items }
    }

    /// Loads the catalog config.
    ///
    /// ## Load Order
    /// 1. `config_path`, when given
    /// 2. `CHECKOUT_CATALOG_PATH`
    /// 3. Platform default path
    ///
    /// A missing file is not an error: it yields an empty config.
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let Some(path) = Self::resolve_path(config_path) else {
            debug!("No catalog config path available, using empty catalog");
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!(?path, "Catalog config not found, using empty catalog");
            return Ok(Self::default());
        }

        info!(?path, "Loading catalog config from file");
        let contents = std::fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&contents)?;
        info!(?path, items = config.items.len(), "Catalog config loaded");
        Ok(config)
    }

    /// Loads config or returns an empty one if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load catalog config: {}. Using empty catalog.", e);
            Self::default()
        })
    }

    /// Writes the config to `config_path` (or the resolved default path).
    pub fn save(&self, config_path: Option<PathBuf>) -> CatalogResult<()> {
        self.validate()?;

        let path = Self::resolve_path(config_path).ok_or(CatalogError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml_string()?)?;

        info!(?path, items = self.items.len(), "Catalog config saved");
        Ok(())
    }

    /// Checks names and pricing rules without building a catalog.
    ///
    /// ## Rules
    /// - Every name passes `validate_item_name`
    /// - Names are unique across the file
    /// - Every pricing rule passes its strategy constructor
    pub fn validate(&self) -> CatalogResult<()> {
        let mut seen = HashSet::new();

        for entry in &self.items {
            entry.to_item()?;

            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::InvalidConfig(format!(
                    "item '{}' is listed more than once",
                    entry.name
                )));
            }
        }

        Ok(())
    }

    /// Builds an in-memory catalog from this config.
    pub fn build(&self) -> CatalogResult<InMemoryCatalog> {
        InMemoryCatalog::from_config(self)
    }

    fn resolve_path(config_path: Option<PathBuf>) -> Option<PathBuf> {
        config_path
            .or_else(Self::env_config_path)
            .or_else(Self::default_config_path)
    }

    fn env_config_path() -> Option<PathBuf> {
        std::env::var_os(CATALOG_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(|value| {
                debug!(env = CATALOG_PATH_ENV, "Using catalog path from environment");
                PathBuf::from(value)
            })
    }

    /// Returns the platform default catalog path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "checkout", "checkout")
            .map(|dirs| dirs.config_dir().join("catalog.toml"))
    }
}
