//! # In-Memory Catalog
//!
//! `HashMap`-backed [`ItemCatalog`] used by orders at runtime.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. Populate            InMemoryCatalog::from_config(&config)           │
//! │     (mutable)           catalog.add(item)  ← duplicates rejected        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  2. Share               Order::new(&catalog)  × N                       │
//! │     (read only)         borrow checker forbids add() while any         │
//! │                         order still holds &catalog                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use checkout_core::validation::validate_item_name;
use checkout_core::{CoreError, CoreResult, Item, ItemCatalog};
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::error::CatalogResult;

/// Name-indexed item registry held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: HashMap<String, Item>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a list of items, stopping at the first rejected
    /// item.
    pub fn with_items<I>(items: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = Item>,
    {
        let mut catalog = Self::new();
        for item in items {
            catalog.add(item)?;
        }
        Ok(catalog)
    }

    /// Builds a catalog from a parsed config file.
    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        let items = config
            .items
            .iter()
            .map(|entry| entry.to_item())
            .collect::<CatalogResult<Vec<_>>>()?;
        let catalog = Self::with_items(items)?;
        debug!(items = catalog.len(), "Catalog built from config");
        Ok(catalog)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.items.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered items in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }
}

impl ItemCatalog for InMemoryCatalog {
    fn add(&mut self, item: Item) -> CoreResult<()> {
        validate_item_name(item.name())?;

        if self.items.contains_key(item.name()) {
            warn!(item = %item.name(), "Rejected duplicate catalog entry");
            return Err(CoreError::DuplicateItem(item.name().to_string()));
        }

        debug!(item = %item.name(), pricing = %item.strategy(), "Registered item");
        self.items.insert(item.name().to_string(), item);
        Ok(())
    }

    fn fetch(&self, name: &str) -> CoreResult<&Item> {
        self.items.get(name).ok_or_else(|| {
            debug!(item = %name, "Catalog lookup missed");
            CoreError::ItemNotFound(name.to_string())
        })
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
