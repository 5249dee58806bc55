//! # Catalog Module
//!
//! Static registries of everything a member can purchase.
//!
//! ## Catalog Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                            Catalog                                  │
//! │                                                                     │
//! │  plans                 add-ons               premium features       │
//! │  ─────────────         ─────────────         ─────────────────      │
//! │  basic      $60        nutrition  $20        exclusive    $80       │
//! │  premium   $100        classes    $40        specialized $120       │
//! │  family    $160        pt         $60                               │
//! │                                                                     │
//! │  Three independent registries; codes may repeat across them.        │
//! │  Iteration order is insertion order (display only — pricing sums    │
//! │  are order-independent).                                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is built once at process start and never mutated; no
//! registration or update operations exist.

use serde::{Deserialize, Serialize};

use crate::types::CatalogItem;

// =============================================================================
// Registry
// =============================================================================

/// An insertion-ordered collection of catalog items, looked up by code.
///
/// Backed by a `Vec`: the registries are tiny and fixed, and a linear scan
/// keeps insertion order for display without a second index.
///
/// ## Invariants
/// - item codes are unique within one registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    items: Vec<CatalogItem>,
}

impl Registry {
    /// Builds a registry from items in display order.
    fn from_items(items: Vec<CatalogItem>) -> Self {
        debug_assert!(
            items
                .iter()
                .enumerate()
                .all(|(i, a)| items[..i].iter().all(|b| a.code != b.code)),
            "registry codes must be unique"
        );
        Registry { items }
    }

    /// Looks up an item by code.
    pub fn get(&self, code: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.code == code)
    }

    /// Whether an item with this code exists.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Iterates items in insertion (display) order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    /// Number of items in the registry.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The three registries a selection is validated and priced against.
///
/// Read-only after construction: a `&Catalog` can be shared freely across
/// threads for concurrent quote calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    plans: Registry,
    addons: Registry,
    premium_features: Registry,
}

impl Catalog {
    /// Builds the standard Apex Memberships catalog.
    ///
    /// ## Seed Data
    /// - Plans: basic $60, premium $100, family $160
    /// - Add-ons: nutrition $20, classes $40, pt $60
    /// - Premium features: exclusive $80, specialized $120
    pub fn standard() -> Self {
        Catalog {
            plans: Registry::from_items(vec![
                CatalogItem::new("basic", "Basic", 60),
                CatalogItem::new("premium", "Premium", 100),
                CatalogItem::new("family", "Family", 160),
            ]),
            addons: Registry::from_items(vec![
                CatalogItem::new("nutrition", "Nutrition plan", 20),
                CatalogItem::new("classes", "Group classes", 40),
                CatalogItem::new("pt", "Personal training sessions", 60),
            ]),
            premium_features: Registry::from_items(vec![
                CatalogItem::premium("exclusive", "Exclusive facilities access", 80),
                CatalogItem::premium("specialized", "Specialized training program", 120),
            ]),
        }
    }

    /// Builds a catalog from explicit item lists, in display order.
    ///
    /// The standard catalog is [`Catalog::standard`]; this constructor
    /// exists for deployments with different offerings and for exercising
    /// the non-positive-total guard, which is unreachable with the
    /// standard seed data.
    pub fn with_items(
        plans: Vec<CatalogItem>,
        addons: Vec<CatalogItem>,
        premium_features: Vec<CatalogItem>,
    ) -> Self {
        Catalog {
            plans: Registry::from_items(plans),
            addons: Registry::from_items(addons),
            premium_features: Registry::from_items(premium_features),
        }
    }

    /// The plan registry.
    pub fn plans(&self) -> &Registry {
        &self.plans
    }

    /// The add-on registry.
    pub fn addons(&self) -> &Registry {
        &self.addons
    }

    /// The premium-feature registry.
    pub fn premium_features(&self) -> &Registry {
        &self.premium_features
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
