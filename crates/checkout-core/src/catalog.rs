//! # Catalog
//!
//! Immutable item → unit cost and item → discount rule tables.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Startup                                 Serving                        │
//! │  ───────                                 ───────                        │
//! │  CatalogBuilder::item(..)                                               │
//! │  CatalogBuilder::discount(..)                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  build() ── validates ──► Catalog ──► Arc<Catalog> shared by requests   │
//! │                           (read-only, no locking needed)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing discount rule means "no discount"; it says nothing about
//! whether the item is carried.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::discount::DiscountRule;
use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_item_name, validate_price_cents, ValidationResult};

// =============================================================================
// Catalog Entry
// =============================================================================

/// A catalog entry as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogEntry {
    pub name: String,
    /// Unit cost in the smallest currency unit.
    pub cost: i64,
    #[serde(default)]
    pub discount: Option<DiscountRule>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, cost: i64, discount: Option<DiscountRule>) -> Self {
        CatalogEntry {
            name: name.into(),
            cost,
            discount,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Read-only pricing tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    costs: HashMap<String, Money>,
    discounts: HashMap<String, DiscountRule>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Starts building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The reference catalog.
    ///
    /// | Item    | Cost | Discount             |
    /// |---------|------|----------------------|
    /// | Apples  | 60   | buy one get one free |
    /// | Oranges | 25   | 3 for the price of 2 |
    pub fn with_defaults() -> Self {
        let mut costs = HashMap::new();
        costs.insert("Apples".to_string(), Money::from_cents(60));
        costs.insert("Oranges".to_string(), Money::from_cents(25));

        let mut discounts = HashMap::new();
        discounts.insert("Apples".to_string(), DiscountRule::BuyOneGetOneFree);
        discounts.insert("Oranges".to_string(), DiscountRule::ThreeForTwo);

        Catalog { costs, discounts }
    }

    /// Builds a catalog from configuration entries.
    pub fn from_entries(entries: &[CatalogEntry]) -> ValidationResult<Self> {
        entries
            .iter()
            .fold(Catalog::builder(), |builder, entry| {
                let builder = builder.item(entry.name.clone(), entry.cost);
                match entry.discount {
                    Some(rule) => builder.discount(entry.name.clone(), rule),
                    None => builder,
                }
            })
            .build()
    }

    /// Looks up the unit cost of an item.
    #[inline]
    pub fn lookup_cost(&self, item_name: &str) -> Option<Money> {
        self.costs.get(item_name).copied()
    }

    /// Looks up the discount rule of an item.
    #[inline]
    pub fn lookup_discount_rule(&self, item_name: &str) -> Option<DiscountRule> {
        self.discounts.get(item_name).copied()
    }

    /// Number of items carried.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Item names in sorted order.
    pub fn item_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.costs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

// =============================================================================
// Catalog Builder
// =============================================================================

/// Collects entries and validates them once in [`CatalogBuilder::build`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    items: Vec<(String, i64)>,
    discounts: Vec<(String, DiscountRule)>,
}

impl CatalogBuilder {
    /// Adds an item with its unit cost.
    pub fn item(mut self, name: impl Into<String>, cost: i64) -> Self {
        self.items.push((name.into(), cost));
        self
    }

    /// Attaches a discount rule to an item.
    pub fn discount(mut self, name: impl Into<String>, rule: DiscountRule) -> Self {
        self.discounts.push((name.into(), rule));
        self
    }

    /// Validates and freezes the catalog.
    ///
    /// ## Rules
    /// - Item names are non-empty and unique
    /// - Costs are non-negative
    /// - A discount may name an item that is not carried; it is simply never
    ///   reached
    pub fn build(self) -> ValidationResult<Catalog> {
        let mut costs = HashMap::with_capacity(self.items.len());
        for (name, cost) in self.items {
            validate_item_name(&name)?;
            validate_price_cents(cost)?;
            if costs.contains_key(&name) {
                return Err(ValidationError::Duplicate {
                    field: "item_name".to_string(),
                    value: name,
                });
            }
            costs.insert(name, Money::from_cents(cost));
        }

        let mut discounts = HashMap::with_capacity(self.discounts.len());
        for (name, rule) in self.discounts {
            validate_item_name(&name)?;
            discounts.insert(name, rule);
        }

        Ok(Catalog { costs, discounts })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
