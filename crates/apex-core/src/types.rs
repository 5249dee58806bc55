//! # Domain Types
//!
//! Core domain types used throughout Apex Memberships.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │   CatalogItem   │   │    Selection    │   │      Quote      │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  code           │   │  members        │   │  resolved items │    │
//! │  │  name           │   │  plan_code      │   │  money fields   │    │
//! │  │  price_usd      │   │  addon_codes    │   │  notes          │    │
//! │  │  available      │   │  premium_codes  │   │                 │    │
//! │  │  is_premium     │   │                 │   │                 │    │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘    │
//! │                                                                     │
//! │  CatalogItem lives in a registry; Selection is per-request input;   │
//! │  Quote is the per-request output.                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// Catalog Item
// =============================================================================

/// A purchasable catalog entry: a plan, an add-on, or a premium feature.
///
/// Items are immutable once the catalog is built. The `code` is the business
/// identifier and is unique within its registry; the same code may appear in
/// different registries without conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Business identifier, unique within one registry.
    pub code: String,

    /// Display name shown in catalog listings and quote summaries.
    pub name: String,

    /// Price per member in whole US dollars (non-negative).
    pub price_usd: i64,

    /// Whether the item can currently be selected.
    pub available: bool,

    /// Whether selecting this item triggers the premium surcharge rule.
    pub is_premium: bool,
}

impl CatalogItem {
    /// Creates a regular item: available, not premium.
    pub fn new(code: &str, name: &str, price_usd: i64) -> Self {
        CatalogItem {
            code: code.to_string(),
            name: name.to_string(),
            price_usd,
            available: true,
            is_premium: false,
        }
    }

    /// Creates a premium-flagged item: available, `is_premium = true`.
    pub fn premium(code: &str, name: &str, price_usd: i64) -> Self {
        CatalogItem {
            is_premium: true,
            ..CatalogItem::new(code, name, price_usd)
        }
    }
}

// =============================================================================
// Selection
// =============================================================================

/// A requested membership purchase, before validation.
///
/// ## Invariants (after dedup)
/// - `addon_codes` and `premium_codes` keep first-occurrence order
/// - duplicate codes are collapsed silently, never rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Number of members signing up together.
    pub members: i64,

    /// Code of the single membership plan.
    pub plan_code: String,

    /// Requested add-on codes, in the order the caller gave them.
    pub addon_codes: Vec<String>,

    /// Requested premium-feature codes, in the order the caller gave them.
    pub premium_codes: Vec<String>,
}

impl Selection {
    /// Creates a selection from borrowed codes.
    pub fn new(members: i64, plan_code: &str, addon_codes: &[&str], premium_codes: &[&str]) -> Self {
        Selection {
            members,
            plan_code: plan_code.to_string(),
            addon_codes: addon_codes.iter().map(|c| c.to_string()).collect(),
            premium_codes: premium_codes.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Add-on codes with duplicates collapsed, first occurrence wins.
    pub fn deduped_addon_codes(&self) -> Vec<String> {
        dedupe_preserve_order(&self.addon_codes)
    }

    /// Premium-feature codes with duplicates collapsed, first occurrence wins.
    pub fn deduped_premium_codes(&self) -> Vec<String> {
        dedupe_preserve_order(&self.premium_codes)
    }
}

/// Removes duplicates from a code list while preserving first-occurrence
/// order. A `HashSet` tracks what has been seen; the output `Vec` keeps
/// the original ordering.
fn dedupe_preserve_order(codes: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(codes.len());
    for code in codes {
        if seen.insert(code.as_str()) {
            out.push(code.clone());
        }
    }
    out
}

// =============================================================================
// Quote
// =============================================================================

/// The result of a successful quote calculation.
///
/// Inert data for the caller to render. All money fields are whole US
/// dollars. `notes` holds one entry per pricing rule that fired, in
/// rule-execution order: group discount, then premium surcharge, then
/// special offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Number of members the quote covers.
    pub members: i64,

    /// The resolved plan.
    pub plan: CatalogItem,

    /// Resolved add-ons, in dedup order.
    pub addons: Vec<CatalogItem>,

    /// Resolved premium features, in dedup order.
    pub premium_features: Vec<CatalogItem>,

    /// members × per-member unit price, before any rule.
    pub base_total_usd: i64,

    /// 10% group discount (0 when members < 2).
    pub group_discount_usd: i64,

    /// 15% surcharge on the after-discount total (0 without premium features).
    pub premium_surcharge_usd: i64,

    /// Tiered flat discount ($0, $20 or $50) from the special offer.
    pub special_offer_discount_usd: i64,

    /// Final amount due.
    pub total_usd: i64,

    /// Explanatory notes for each rule that fired, in rule order.
    pub notes: Vec<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
