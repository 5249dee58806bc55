//! # Validation Module
//!
//! Selection validation for Apex Memberships.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Rules                              │
//! │                                                                     │
//! │  Selection                                                          │
//! │  ├── members        ──► must be > 0                                 │
//! │  ├── plan_code      ──► must exist in plans AND be available        │
//! │  ├── addon_codes*   ──► each must exist in add-ons AND be available │
//! │  └── premium_codes* ──► each must exist in premium features AND     │
//! │                         be available                                │
//! │                                                                     │
//! │  * checked after order-preserving dedup                             │
//! │                                                                     │
//! │  EVERY rule runs; violations are collected, never short-circuited,  │
//! │  so the caller can show all problems at once.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There are no cross-field rules: any plan combines with any add-ons and
//! any premium features.
//!
//! ## Usage
//! ```rust
//! use apex_core::{validation::validate_selection, Catalog, Selection};
//!
//! let catalog = Catalog::standard();
//! let selection = Selection::new(0, "gold", &[], &[]);
//!
//! let violations = validate_selection(&catalog, &selection);
//! assert_eq!(violations.len(), 2);
//! ```

use crate::catalog::{Catalog, Registry};
use crate::error::Violation;
use crate::types::Selection;

/// Checks a selection against the catalog, collecting every violation.
///
/// An empty result means the selection is valid. Unknown and unavailable
/// codes are distinct violations, each naming the offending code.
pub fn validate_selection(catalog: &Catalog, selection: &Selection) -> Vec<Violation> {
    let mut violations = Vec::new();

    if selection.members <= 0 {
        violations.push(Violation::MembersNotPositive);
    }

    match catalog.plans().get(&selection.plan_code) {
        None => violations.push(Violation::UnknownPlan {
            code: selection.plan_code.clone(),
        }),
        Some(plan) if !plan.available => violations.push(Violation::PlanUnavailable {
            code: selection.plan_code.clone(),
        }),
        Some(_) => {}
    }

    check_codes(
        catalog.addons(),
        &selection.deduped_addon_codes(),
        &mut violations,
        |code| Violation::UnknownAddon { code },
        |code| Violation::AddonUnavailable { code },
    );

    check_codes(
        catalog.premium_features(),
        &selection.deduped_premium_codes(),
        &mut violations,
        |code| Violation::UnknownPremiumFeature { code },
        |code| Violation::PremiumFeatureUnavailable { code },
    );

    violations
}

/// Checks each code against a registry, pushing the matching violation for
/// unknown or unavailable entries.
fn check_codes(
    registry: &Registry,
    codes: &[String],
    violations: &mut Vec<Violation>,
    unknown: impl Fn(String) -> Violation,
    unavailable: impl Fn(String) -> Violation,
) {
    for code in codes {
        match registry.get(code) {
            None => violations.push(unknown(code.clone())),
            Some(item) if !item.available => violations.push(unavailable(code.clone())),
            Some(_) => {}
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
