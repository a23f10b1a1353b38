//! # Order
//!
//! Accumulates scanned item names and prices the basket.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Operations                                     │
//! │                                                                         │
//! │  Caller Action            Order Method            State Change          │
//! │  ─────────────            ────────────            ────────────          │
//! │                                                                         │
//! │  Scan "Milk" ────────────► add("Milk") ─────────► catalog.fetch("Milk")│
//! │                                                   Milk: 0 → 1           │
//! │                                                                         │
//! │  Scan "Milk" ────────────► add("Milk") ─────────► Milk: 1 → 2           │
//! │                                                                         │
//! │  Scan "iPhone" ──────────► add("iPhone") ───────► ItemNotFound,         │
//! │                                                   nothing changes       │
//! │                                                                         │
//! │  Checkout ───────────────► total() ─────────────► (read only)          │
//! │                            Σ catalog.price_for(name, qty)               │
//! │                                                                         │
//! │  NOTE: Lines keep first-scan order so totals and receipts are          │
//! │        deterministic, although the sum itself is order independent.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Machine
//! ```text
//!   ┌───────┐  add (ok)   ┌──────────┐  add (ok)
//!   │ Empty │ ──────────► │ HasLines │ ◄────────┐
//!   └───────┘             └──────────┘ ─────────┘
//! ```
//! There is no removal, so an order never returns to `Empty`.

use serde::Serialize;
use std::fmt;

use crate::catalog::ItemCatalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Lines and Summaries
// =============================================================================

/// One distinct item name and how many times it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub name: String,
    /// Always at least 1.
    pub quantity: u32,
}

/// A priced line, as it would appear on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTotal {
    pub name: String,
    pub quantity: u32,
    pub amount: Money,
}

/// Order totals summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub line_count: usize,
    pub total_quantity: u64,
    pub total: Money,
}

/// Whether an order has any lines yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    Empty,
    HasLines,
}

// =============================================================================
// Order
// =============================================================================

/// A basket bound to one catalog.
///
/// ## Invariants
/// - Lines are unique by name (adding the same name increases quantity)
/// - Every line's quantity is >= 1
/// - Every line's name was present in the catalog when it was added
///
/// ## Example
/// ```rust
/// use checkout_core::catalog::ItemCatalog;
/// use checkout_core::error::{CoreError, CoreResult};
/// use checkout_core::{Item, Money, Order, PricingStrategy};
///
/// struct Shelf(Vec<Item>);
///
/// impl ItemCatalog for Shelf {
///     fn add(&mut self, item: Item) -> CoreResult<()> {
///         self.0.push(item);
///         Ok(())
///     }
///     fn fetch(&self, name: &str) -> CoreResult<&Item> {
///         self.0
///             .iter()
///             .find(|item| item.name() == name)
///             .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))
///     }
///     fn len(&self) -> usize {
///         self.0.len()
///     }
/// }
///
/// let shelf = Shelf(vec![Item::new("Milk", PricingStrategy::unit(Money::from_units(5)).unwrap())]);
/// let mut order = Order::new(&shelf);
/// order.add("Milk").unwrap();
/// order.add("Milk").unwrap();
/// assert_eq!(order.total().unwrap(), Money::from_units(10));
/// ```
pub struct Order<'c, C: ItemCatalog + ?Sized> {
    catalog: &'c C,
    lines: Vec<OrderLine>,
}

impl<'c, C: ItemCatalog + ?Sized> Order<'c, C> {
    /// Creates an empty order priced against `catalog`.
    pub fn new(catalog: &'c C) -> Self {
        Order {
            catalog,
            lines: Vec::new(),
        }
    }

    /// Adds one unit of the named item.
    ///
    /// ## Behavior
    /// - Unknown name: `ItemNotFound`, order unchanged
    /// - Name already in the order: its quantity goes up by one
    /// - Otherwise: a new line with quantity 1
    pub fn add(&mut self, name: &str) -> CoreResult<()> {
        self.add_many(name, 1)
    }

    /// Adds `count` units of the named item in one step.
    ///
    /// Equivalent to `count` calls to [`Order::add`], except that it either
    /// applies completely or not at all. A `count` of zero still checks the
    /// name but adds no line.
    pub fn add_many(&mut self, name: &str, count: u32) -> CoreResult<()> {
        let item = self.catalog.fetch(name)?;

        if count == 0 {
            return Ok(());
        }

        match self.lines.iter_mut().find(|line| line.name == item.name()) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(count)
                    .ok_or_else(|| CoreError::QuantityTooLarge {
                        item: line.name.clone(),
                        max: u32::MAX,
                    })?;
            }
            None => self.lines.push(OrderLine {
                name: item.name().to_string(),
                quantity: count,
            }),
        }

        Ok(())
    }

    /// Prices every line against the catalog and sums the amounts.
    ///
    /// An empty order totals exactly zero. The first failing line aborts the
    /// whole computation; no partial total is returned.
    pub fn total(&self) -> CoreResult<Money> {
        self.lines.iter().try_fold(Money::zero(), |acc, line| {
            let amount = self.catalog.price_for(&line.name, line.quantity)?;
            acc.checked_add(amount)
                .ok_or_else(|| CoreError::AmountOverflow(line.name.clone()))
        })
    }

    /// Prices each line separately, in line order.
    pub fn line_totals(&self) -> CoreResult<Vec<LineTotal>> {
        self.lines
            .iter()
            .map(|line| {
                Ok(LineTotal {
                    name: line.name.clone(),
                    quantity: line.quantity,
                    amount: self.catalog.price_for(&line.name, line.quantity)?,
                })
            })
            .collect()
    }

    /// Line count, unit count and total in one value.
    pub fn summary(&self) -> CoreResult<OrderSummary> {
        Ok(OrderSummary {
            line_count: self.line_count(),
            total_quantity: self.total_quantity(),
            total: self.total()?,
        })
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Accumulated quantity for `name`, zero if it was never added.
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.lines
            .iter()
            .find(|line| line.name == name)
            .map_or(0, |line| line.quantity)
    }

    /// Number of distinct items.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn state(&self) -> OrderState {
        if self.lines.is_empty() {
            OrderState::Empty
        } else {
            OrderState::HasLines
        }
    }

    /// The catalog this order prices against.
    pub fn catalog(&self) -> &'c C {
        self.catalog
    }
}

impl<C: ItemCatalog + ?Sized> fmt::Debug for Order<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
