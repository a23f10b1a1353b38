//! # Pricing Strategies
//!
//! How a quantity of one item resolves to an amount of money.
//!
//! ## Strategy Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       PricingStrategy                                   │
//! │                                                                         │
//! │  Unit(p)                     price(q) = p × q                           │
//! │  ───────                     Milk at 5.00: q=2 → 10.00                  │
//! │                                                                         │
//! │  Bulk(n, b, then u)          price(q) = b × ⌊q/n⌋ + u × (q mod n)       │
//! │  ──────────────────          Chocolates 3 for 10.00, then 4.00 each:    │
//! │  (mixed, the default)          q=2  →  0×10 + 2×4 =  8.00               │
//! │                                q=3  →  1×10 + 0×4 = 10.00               │
//! │                                q=16 →  5×10 + 1×4 = 54.00               │
//! │                                                                         │
//! │  Bulk(n, b, exact)           price(q) = b × q/n   when n divides q      │
//! │  ─────────────────           otherwise NotAMultiple { q, n }            │
//! │  (strict, opt-in)                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rule set is closed, so strategies are an enum matched exhaustively
//! rather than a trait object. Every strategy is an immutable value; pricing
//! never mutates it.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::money::Money;
use crate::validation::{validate_bundle_size, validate_price, ValidationResult};

// =============================================================================
// Pricing Error
// =============================================================================

/// Why a strategy refused to price a quantity.
///
/// Strategies do not know which item they belong to; `Item::price` turns
/// these into [`CoreError`](crate::error::CoreError) with the item name
/// attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A strict bulk strategy only sells whole bundles.
    #[error("quantity {quantity} is not a multiple of {multiple}")]
    NotAMultiple { quantity: u32, multiple: u32 },

    /// The resulting amount does not fit in `Money`.
    #[error("amount overflow")]
    Overflow,
}

pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Pricing
// =============================================================================

/// Flat per-unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UnitPricing {
    unit_price: Money,
}

impl UnitPricing {
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    fn price(&self, quantity: u32) -> PricingResult<Money> {
        self.unit_price
            .checked_mul_quantity(quantity)
            .ok_or(PricingError::Overflow)
    }
}

// =============================================================================
// Bulk Pricing
// =============================================================================

/// What happens to units left over after taking out whole bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Remainder {
    /// Leftover units are billed individually at this price.
    UnitPrice(Money),
    /// Leftover units are not allowed; the quantity must be a whole number
    /// of bundles.
    Reject,
}

/// Multi-buy pricing: `bundle_size` units for `bundle_price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BulkPricing {
    bundle_size: u32,
    bundle_price: Money,
    remainder: Remainder,
}

impl BulkPricing {
    #[inline]
    pub fn bundle_size(&self) -> u32 {
        self.bundle_size
    }

    #[inline]
    pub fn bundle_price(&self) -> Money {
        self.bundle_price
    }

    #[inline]
    pub fn remainder(&self) -> Remainder {
        self.remainder
    }

    /// Per-unit price for leftover units, if leftovers are sold at all.
    pub fn remainder_price(&self) -> Option<Money> {
        match self.remainder {
            Remainder::UnitPrice(price) => Some(price),
            Remainder::Reject => None,
        }
    }

    /// Splits a quantity into (whole bundles, leftover units).
    #[inline]
    pub fn split(&self, quantity: u32) -> (u32, u32) {
        (quantity / self.bundle_size, quantity % self.bundle_size)
    }

    fn price(&self, quantity: u32) -> PricingResult<Money> {
        let (bundles, leftover) = self.split(quantity);

        let leftover_total = match self.remainder {
            Remainder::UnitPrice(unit_price) => unit_price
                .checked_mul_quantity(leftover)
                .ok_or(PricingError::Overflow)?,
            Remainder::Reject if leftover != 0 => {
                return Err(PricingError::NotAMultiple {
                    quantity,
                    multiple: self.bundle_size,
                })
            }
            Remainder::Reject => Money::zero(),
        };

        self.bundle_price
            .checked_mul_quantity(bundles)
            .and_then(|bundle_total| bundle_total.checked_add(leftover_total))
            .ok_or(PricingError::Overflow)
    }
}

// =============================================================================
// Pricing Strategy
// =============================================================================

/// A pricing rule: a pure function from quantity to amount.
///
/// ## Example
/// ```rust
/// use checkout_core::money::Money;
/// use checkout_core::pricing::PricingStrategy;
///
/// let chocolates = PricingStrategy::bulk(3, Money::from_units(10), Money::from_units(4)).unwrap();
/// assert_eq!(chocolates.price(16).unwrap(), Money::from_units(54));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingStrategy {
    Unit(UnitPricing),
    Bulk(BulkPricing),
}

impl PricingStrategy {
    /// Flat unit pricing. Rejects a negative price.
    pub fn unit(unit_price: Money) -> ValidationResult<Self> {
        validate_price("unit price", unit_price)?;
        Ok(PricingStrategy::Unit(UnitPricing { unit_price }))
    }

    /// Bulk pricing where leftover units fall back to `unit_price` each.
    ///
    /// Rejects a zero bundle size and negative prices.
    pub fn bulk(bundle_size: u32, bundle_price: Money, unit_price: Money) -> ValidationResult<Self> {
        validate_bundle_size(bundle_size)?;
        validate_price("bundle price", bundle_price)?;
        validate_price("unit price", unit_price)?;
        Ok(PricingStrategy::Bulk(BulkPricing {
            bundle_size,
            bundle_price,
            remainder: Remainder::UnitPrice(unit_price),
        }))
    }

    /// Bulk pricing that only sells whole bundles.
    ///
    /// ```rust
    /// use checkout_core::money::Money;
    /// use checkout_core::pricing::{PricingError, PricingStrategy};
    ///
    /// let pairs = PricingStrategy::bulk_exact(2, Money::from_units(9)).unwrap();
    /// assert_eq!(pairs.price(4).unwrap(), Money::from_units(18));
    /// assert_eq!(
    ///     pairs.price(3),
    ///     Err(PricingError::NotAMultiple { quantity: 3, multiple: 2 })
    /// );
    /// ```
    pub fn bulk_exact(bundle_size: u32, bundle_price: Money) -> ValidationResult<Self> {
        validate_bundle_size(bundle_size)?;
        validate_price("bundle price", bundle_price)?;
        Ok(PricingStrategy::Bulk(BulkPricing {
            bundle_size,
            bundle_price,
            remainder: Remainder::Reject,
        }))
    }

    /// Prices `quantity` units. Zero units always cost zero.
    pub fn price(&self, quantity: u32) -> PricingResult<Money> {
        match self {
            PricingStrategy::Unit(unit) => unit.price(quantity),
            PricingStrategy::Bulk(bulk) => bulk.price(quantity),
        }
    }

    /// Short label matching the config file's `kind` field.
    pub fn kind(&self) -> &'static str {
        match self {
            PricingStrategy::Unit(_) => "unit",
            PricingStrategy::Bulk(BulkPricing {
                remainder: Remainder::UnitPrice(_),
                ..
            }) => "bulk",
            PricingStrategy::Bulk(BulkPricing {
                remainder: Remainder::Reject,
                ..
            }) => "bulk_exact",
        }
    }

    /// Price of a single unit when bought on its own, if it can be.
    pub fn unit_price(&self) -> Option<Money> {
        match self {
            PricingStrategy::Unit(unit) => Some(unit.unit_price),
            PricingStrategy::Bulk(bulk) => bulk.remainder_price(),
        }
    }
}

impl fmt::Display for PricingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingStrategy::Unit(unit) => write!(f, "{} each", unit.unit_price),
            PricingStrategy::Bulk(bulk) => {
                write!(f, "{} for {}", bulk.bundle_size, bulk.bundle_price)?;
                match bulk.remainder {
                    Remainder::UnitPrice(price) => write!(f, ", then {} each", price),
                    Remainder::Reject => write!(f, ", bundles only"),
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use proptest::prelude::*;

    fn chocolates() -> PricingStrategy {
        PricingStrategy::bulk(3, Money::from_units(10), Money::from_units(4)).unwrap()
    }

    #[test]
    fn test_unit_price() {
        let milk = PricingStrategy::unit(Money::from_units(5)).unwrap();
        assert_eq!(milk.price(0).unwrap(), Money::zero());
        assert_eq!(milk.price(1).unwrap(), Money::from_units(5));
        assert_eq!(milk.price(2).unwrap(), Money::from_units(10));
    }

    #[test]
    fn test_bulk_mixed_scenarios() {
        let strategy = chocolates();
        assert_eq!(strategy.price(0).unwrap(), Money::zero());
        assert_eq!(strategy.price(2).unwrap(), Money::from_units(8));
        assert_eq!(strategy.price(3).unwrap(), Money::from_units(10));
        assert_eq!(strategy.price(4).unwrap(), Money::from_units(14));
        assert_eq!(strategy.price(16).unwrap(), Money::from_units(54));
    }

    #[test]
    fn test_bulk_apples_full_bundle() {
        let apples = PricingStrategy::bulk(5, Money::from_units(4), Money::from_units(1)).unwrap();
        assert_eq!(apples.price(5).unwrap(), Money::from_units(4));
        assert_eq!(apples.price(7).unwrap(), Money::from_units(6));
    }

    #[test]
    fn test_bulk_exact_rejects_leftovers() {
        let strict = PricingStrategy::bulk_exact(3, Money::from_units(10)).unwrap();
        assert_eq!(strict.price(0).unwrap(), Money::zero());
        assert_eq!(strict.price(6).unwrap(), Money::from_units(20));
        assert_eq!(
            strict.price(2),
            Err(PricingError::NotAMultiple {
                quantity: 2,
                multiple: 3
            })
        );
        assert_eq!(
            strict.price(4),
            Err(PricingError::NotAMultiple {
                quantity: 4,
                multiple: 3
            })
        );
    }

    #[test]
    fn test_bundle_of_one_is_unit_pricing() {
        let single = PricingStrategy::bulk(1, Money::from_units(2), Money::from_units(99)).unwrap();
        assert_eq!(single.price(7).unwrap(), Money::from_units(14));
    }

    #[test]
    fn test_constructor_validation() {
        assert!(matches!(
            PricingStrategy::bulk(0, Money::from_units(10), Money::from_units(4)),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(PricingStrategy::bulk_exact(0, Money::from_units(10)).is_err());
        assert!(PricingStrategy::unit(Money::from_cents(-1)).is_err());
        assert!(PricingStrategy::bulk(3, Money::from_cents(-1), Money::zero()).is_err());
        assert!(PricingStrategy::bulk(3, Money::zero(), Money::from_cents(-1)).is_err());
        assert!(PricingStrategy::unit(Money::zero()).is_ok());
    }

    #[test]
    fn test_overflow_is_reported() {
        let pricey = PricingStrategy::unit(Money::from_cents(i64::MAX)).unwrap();
        assert_eq!(pricey.price(2), Err(PricingError::Overflow));

        let bulk = PricingStrategy::bulk(2, Money::from_cents(i64::MAX), Money::from_cents(i64::MAX))
            .unwrap();
        assert_eq!(bulk.price(2).unwrap(), Money::from_cents(i64::MAX));
        assert_eq!(bulk.price(3), Err(PricingError::Overflow));
    }

    #[test]
    fn test_kind_and_display() {
        let milk = PricingStrategy::unit(Money::from_units(5)).unwrap();
        assert_eq!(milk.kind(), "unit");
        assert_eq!(milk.to_string(), "$5.00 each");

        assert_eq!(chocolates().kind(), "bulk");
        assert_eq!(chocolates().to_string(), "3 for $10.00, then $4.00 each");

        let strict = PricingStrategy::bulk_exact(2, Money::from_cents(950)).unwrap();
        assert_eq!(strict.kind(), "bulk_exact");
        assert_eq!(strict.to_string(), "2 for $9.50, bundles only");
        assert_eq!(strict.unit_price(), None);
        assert_eq!(chocolates().unit_price(), Some(Money::from_units(4)));
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(chocolates()).unwrap();
        assert_eq!(json["kind"], "bulk");
        assert_eq!(json["bundle_size"], 3);
        assert_eq!(json["bundle_price"], 1000);
        assert_eq!(json["remainder"]["unit_price"], 400);
    }

    proptest! {
        #[test]
        fn prop_unit_is_price_times_quantity(cents in 0i64..1_000_000, qty in 0u32..100_000) {
            let strategy = PricingStrategy::unit(Money::from_cents(cents)).unwrap();
            prop_assert_eq!(strategy.price(qty).unwrap(), Money::from_cents(cents * i64::from(qty)));
        }

        #[test]
        fn prop_bulk_mixed_formula(
            n in 1u32..50,
            bundle in 0i64..100_000,
            unit in 0i64..100_000,
            qty in 0u32..10_000,
        ) {
            let strategy = PricingStrategy::bulk(n, Money::from_cents(bundle), Money::from_cents(unit)).unwrap();
            let expected = bundle * i64::from(qty / n) + unit * i64::from(qty % n);
            prop_assert_eq!(strategy.price(qty).unwrap(), Money::from_cents(expected));
        }

        #[test]
        fn prop_bulk_exact_agrees_with_mixed_on_multiples(
            n in 1u32..50,
            bundle in 0i64..100_000,
            bundles in 0u32..200,
        ) {
            let strict = PricingStrategy::bulk_exact(n, Money::from_cents(bundle)).unwrap();
            let mixed = PricingStrategy::bulk(n, Money::from_cents(bundle), Money::from_units(1)).unwrap();
            prop_assert_eq!(strict.price(n * bundles).unwrap(), mixed.price(n * bundles).unwrap());
        }
    }
}
