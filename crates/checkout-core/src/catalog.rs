//! # Item Catalog
//!
//! The seam between the order logic and wherever items come from.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ItemCatalog                                       │
//! │                                                                         │
//! │  add(item)              register under item.name()                      │
//! │                         duplicate name → DuplicateItem (first one wins)│
//! │                                                                         │
//! │  fetch(name)            → &Item            | ItemNotFound              │
//! │                                                                         │
//! │  price_for(name, qty)   = fetch(name)?.price(qty)                       │
//! │                         → Money | ItemNotFound | InvalidQuantity        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An [`Order`](crate::order::Order) holds a shared borrow of its catalog, so
//! a catalog cannot be changed while any order is using it. Populate it fully
//! first, then hand out `&catalog` to as many orders as needed.

use crate::error::CoreResult;
use crate::item::Item;
use crate::money::Money;

/// Name-indexed registry of purchasable items.
pub trait ItemCatalog {
    /// Registers an item under its name.
    ///
    /// Implementations reject a name that is already registered with
    /// [`CoreError::DuplicateItem`](crate::error::CoreError::DuplicateItem)
    /// and leave the existing entry untouched.
    fn add(&mut self, item: Item) -> CoreResult<()>;

    /// Looks up an item by exact name.
    fn fetch(&self, name: &str) -> CoreResult<&Item>;

    /// Number of registered items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, name: &str) -> bool {
        self.fetch(name).is_ok()
    }

    /// Prices `quantity` units of the named item.
    fn price_for(&self, name: &str, quantity: u32) -> CoreResult<Money> {
        self.fetch(name)?.price(quantity)
    }
}

impl<C: ItemCatalog + ?Sized> ItemCatalog for Box<C> {
    fn add(&mut self, item: Item) -> CoreResult<()> {
        (**self).add(item)
    }

    fn fetch(&self, name: &str) -> CoreResult<&Item> {
        (**self).fetch(name)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Minimal catalog for exercising the trait's provided methods and
    //! `Order` without the in-memory catalog crate.

    use std::collections::HashMap;

    use super::*;
    use crate::error::CoreError;
    use crate::pricing::PricingStrategy;

    #[derive(Debug, Default)]
    pub struct MapCatalog {
        items: HashMap<String, Item>,
    }

    impl ItemCatalog for MapCatalog {
        fn add(&mut self, item: Item) -> CoreResult<()> {
            if self.items.contains_key(item.name()) {
                return Err(CoreError::DuplicateItem(item.name().to_string()));
            }
            self.items.insert(item.name().to_string(), item);
            Ok(())
        }

        fn fetch(&self, name: &str) -> CoreResult<&Item> {
            self.items
                .get(name)
                .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))
        }

        fn len(&self) -> usize {
            self.items.len()
        }
    }

    /// Milk 5.00, Bread 3.00, Chocolates 3 for 10.00 then 4.00,
    /// Apple 5 for 4.00 then 1.00, Gift Box pairs only at 9.00.
    pub fn grocery_catalog() -> MapCatalog {
        let mut catalog = MapCatalog::default();
        let items = [
            Item::new("Milk", PricingStrategy::unit(Money::from_units(5)).unwrap()),
            Item::new("Bread", PricingStrategy::unit(Money::from_units(3)).unwrap()),
            Item::new(
                "Chocolates",
                PricingStrategy::bulk(3, Money::from_units(10), Money::from_units(4)).unwrap(),
            ),
            Item::new(
                "Apple",
                PricingStrategy::bulk(5, Money::from_units(4), Money::from_units(1)).unwrap(),
            ),
            Item::new(
                "Gift Box",
                PricingStrategy::bulk_exact(2, Money::from_units(9)).unwrap(),
            ),
        ];
        for item in items {
            catalog.add(item).unwrap();
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::grocery_catalog;
    use super::*;
    use crate::error::CoreError;
    use crate::pricing::PricingStrategy;

    #[test]
    fn test_price_for_resolves_and_prices() {
        let catalog = grocery_catalog();
        assert_eq!(catalog.price_for("Milk", 2).unwrap(), Money::from_units(10));
        assert_eq!(
            catalog.price_for("Chocolates", 16).unwrap(),
            Money::from_units(54)
        );
    }

    #[test]
    fn test_price_for_unknown_item() {
        let catalog = grocery_catalog();
        assert_eq!(
            catalog.price_for("iPhone", 1),
            Err(CoreError::ItemNotFound("iPhone".to_string()))
        );
        assert!(!catalog.contains("iPhone"));
        assert!(catalog.contains("Milk"));
    }

    #[test]
    fn test_price_for_propagates_invalid_quantity() {
        let catalog = grocery_catalog();
        assert_eq!(
            catalog.price_for("Gift Box", 1),
            Err(CoreError::InvalidQuantity {
                item: "Gift Box".to_string(),
                quantity: 1,
                multiple: 2,
            })
        );
    }

    #[test]
    fn test_boxed_catalog_delegates() {
        let mut boxed: Box<dyn ItemCatalog> = Box::new(grocery_catalog());
        assert_eq!(boxed.len(), 5);
        boxed
            .add(Item::new(
                "Eggs",
                PricingStrategy::unit(Money::from_cents(250)).unwrap(),
            ))
            .unwrap();
        assert_eq!(boxed.price_for("Eggs", 2).unwrap(), Money::from_units(5));
        assert!(matches!(
            boxed.add(Item::new("Eggs", PricingStrategy::unit(Money::zero()).unwrap())),
            Err(CoreError::DuplicateItem(_))
        ));
    }
}
