//! # Item
//!
//! A purchasable item: a name bound to its pricing strategy.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{PricingError, PricingStrategy};

/// A named item and the rule that prices it.
///
/// The name is the item's identity inside a catalog and is matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    strategy: PricingStrategy,
}

impl Item {
    pub fn new(name: impl Into<String>, strategy: PricingStrategy) -> Self {
        Item {
            name: name.into(),
            strategy,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn strategy(&self) -> &PricingStrategy {
        &self.strategy
    }

    /// Prices `quantity` units of this item.
    ///
    /// Strategy failures come back as [`CoreError`] carrying this item's name.
    ///
    /// ```rust
    /// use checkout_core::{Item, Money, PricingStrategy};
    ///
    /// let milk = Item::new("Milk", PricingStrategy::unit(Money::from_units(5)).unwrap());
    /// assert_eq!(milk.price(2).unwrap(), Money::from_units(10));
    /// ```
    pub fn price(&self, quantity: u32) -> CoreResult<Money> {
        self.strategy
            .price(quantity)
            .map_err(|err| self.attach_name(err))
    }

    fn attach_name(&self, err: PricingError) -> CoreError {
        match err {
            PricingError::NotAMultiple { quantity, multiple } => CoreError::InvalidQuantity {
                item: self.name.clone(),
                quantity,
                multiple,
            },
            PricingError::Overflow => CoreError::AmountOverflow(self.name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_delegates_to_strategy() {
        let chocolates = Item::new(
            "Chocolates",
            PricingStrategy::bulk(3, Money::from_units(10), Money::from_units(4)).unwrap(),
        );
        assert_eq!(chocolates.name(), "Chocolates");
        assert_eq!(chocolates.price(3).unwrap(), Money::from_units(10));
        assert_eq!(chocolates.price(16).unwrap(), Money::from_units(54));
    }

    #[test]
    fn test_pricing_error_names_the_item() {
        let gift_box = Item::new(
            "Gift Box",
            PricingStrategy::bulk_exact(2, Money::from_units(9)).unwrap(),
        );

        assert_eq!(
            gift_box.price(3).unwrap_err(),
            CoreError::InvalidQuantity {
                item: "Gift Box".to_string(),
                quantity: 3,
                multiple: 2,
            }
        );
    }

    #[test]
    fn test_overflow_names_the_item() {
        let gold = Item::new(
            "Gold",
            PricingStrategy::unit(Money::from_cents(i64::MAX)).unwrap(),
        );
        assert_eq!(
            gold.price(2).unwrap_err(),
            CoreError::AmountOverflow("Gold".to_string())
        );
    }
}
