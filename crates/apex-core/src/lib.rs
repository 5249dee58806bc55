//! # apex-core: Pure Business Logic for Apex Memberships
//!
//! This crate is the **heart** of Apex Memberships. It computes gym
//! membership price quotes as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Apex Memberships Architecture                    │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                     apps/cli (front end)                      │  │
//! │  │    Prompt ──► Collect Selection ──► Render Summary            │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                ★ apex-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌────────────┐       │  │
//! │  │   │  types  │  │  money  │  │ catalog │  │ validation │       │  │
//! │  │   │ Item    │  │  Money  │  │ Registry│  │   rules    │       │  │
//! │  │   │ Quote   │  │  floor% │  │ seed    │  │   checks   │       │  │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └────────────┘       │  │
//! │  │                        ┌─────────┐                            │  │
//! │  │                        │ pricing │                            │  │
//! │  │                        │ pipeline│                            │  │
//! │  │                        └─────────┘                            │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO ENVIRONMENT • PURE FUNCTIONS                    │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, Selection, Quote)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Static registries of plans, add-ons, premium features
//! - [`validation`] - Selection validation rules
//! - [`pricing`] - The ordered quote calculation pipeline
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Terminal, file system, network, environment access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole US dollars (i64), and every
//!    percentage step uses floor division
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use apex_core::{calculate, Catalog, Selection};
//!
//! let catalog = Catalog::standard();
//! let selection = Selection::new(2, "basic", &[], &[]);
//!
//! let quote = calculate(&catalog, &selection).unwrap();
//!
//! // $60 per member × 2, minus the 10% group discount
//! assert_eq!(quote.base_total_usd, 120);
//! assert_eq!(quote.group_discount_usd, 12);
//! assert_eq!(quote.total_usd, 108);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use apex_core::Quote` instead of
// `use apex_core::types::Quote`

pub use catalog::{Catalog, Registry};
pub use error::{CoreError, CoreResult, Violation};
pub use money::Money;
pub use pricing::calculate;
pub use types::{CatalogItem, Quote, Selection};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum party size for the group discount to apply.
pub const GROUP_DISCOUNT_MIN_MEMBERS: i64 = 2;

/// Group discount rate in whole percent (10%).
pub const GROUP_DISCOUNT_PERCENT: i64 = 10;

/// Premium surcharge rate in whole percent (15%), applied after the
/// group discount whenever at least one premium feature is selected.
pub const PREMIUM_SURCHARGE_PERCENT: i64 = 15;

/// Special offer, first tier: totals strictly above this trigger the
/// flat discount. A total of exactly $200 does NOT qualify.
pub const SPECIAL_OFFER_TIER1_THRESHOLD_USD: i64 = 200;

/// Flat discount for the first special-offer tier.
pub const SPECIAL_OFFER_TIER1_DISCOUNT_USD: i64 = 20;

/// Special offer, second tier: totals strictly above this trigger the
/// larger flat discount. A total of exactly $400 stays in tier one.
pub const SPECIAL_OFFER_TIER2_THRESHOLD_USD: i64 = 400;

/// Flat discount for the second special-offer tier.
pub const SPECIAL_OFFER_TIER2_DISCOUNT_USD: i64 = 50;
