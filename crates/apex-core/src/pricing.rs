//! # Pricing Module
//!
//! The ordered quote calculation pipeline.
//!
//! ## Rule Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Quote Calculation Pipeline                      │
//! │                                                                     │
//! │  1. per-member unit  = plan + Σ add-ons + Σ premium features        │
//! │  2. base total       = members × per-member unit                    │
//! │  3. group discount   = members ≥ 2 ? ⌊base × 10 / 100⌋ : 0          │
//! │  4. after group      = base − group discount                        │
//! │  5. premium surcharge= any premium ? ⌊after × 15 / 100⌋ : 0         │
//! │  6. after surcharge  = after group + surcharge                      │
//! │  7. special offer    = > $400 ? $50 : > $200 ? $20 : $0             │
//! │  8. total            = after surcharge − special offer              │
//! │  9. total ≤ 0        → configuration error                          │
//! │                                                                     │
//! │  Order matters: each rule operates on the previous rule's output,   │
//! │  and every division is integer floor division.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The group-discount and surcharge notes are keyed to their triggering
//! condition (party size / premium presence), not to the computed amount
//! being non-zero. The special-offer note is keyed to the amount.
//!
//! ## Usage
//! ```rust
//! use apex_core::{calculate, Catalog, Selection};
//!
//! let catalog = Catalog::standard();
//! let selection = Selection::new(4, "family", &["pt"], &[]);
//!
//! let quote = calculate(&catalog, &selection).unwrap();
//! assert_eq!(quote.base_total_usd, 880);
//! assert_eq!(quote.group_discount_usd, 88);
//! assert_eq!(quote.special_offer_discount_usd, 50);
//! assert_eq!(quote.total_usd, 742);
//! ```

use crate::catalog::{Catalog, Registry};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CatalogItem, Quote, Selection};
use crate::validation::validate_selection;
use crate::{
    GROUP_DISCOUNT_MIN_MEMBERS, GROUP_DISCOUNT_PERCENT, PREMIUM_SURCHARGE_PERCENT,
    SPECIAL_OFFER_TIER1_DISCOUNT_USD, SPECIAL_OFFER_TIER1_THRESHOLD_USD,
    SPECIAL_OFFER_TIER2_DISCOUNT_USD, SPECIAL_OFFER_TIER2_THRESHOLD_USD,
};

const GROUP_DISCOUNT_NOTE: &str =
    "Group discount applied: 10% off for 2+ members on the same plan.";
const PREMIUM_SURCHARGE_NOTE: &str =
    "Premium surcharge applied: +15% (premium features selected).";
const SPECIAL_OFFER_TIER1_NOTE: &str = "Special offer applied: -$20 (total exceeds $200).";
const SPECIAL_OFFER_TIER2_NOTE: &str = "Special offer applied: -$50 (total exceeds $400).";

/// Computes a quote for a selection against a catalog.
///
/// Stateless and synchronous: identical inputs always produce an identical
/// [`Quote`], field for field.
///
/// ## Errors
///
/// - [`CoreError::InvalidSelection`] - one or more validation rules failed;
///   carries every violation.
/// - [`CoreError::NonPositiveTotal`] - a valid selection priced out at zero
///   or below, which indicates misconfigured catalog data. Unreachable with
///   [`Catalog::standard`].
pub fn calculate(catalog: &Catalog, selection: &Selection) -> CoreResult<Quote> {
    let violations = validate_selection(catalog, selection);
    if !violations.is_empty() {
        return Err(CoreError::invalid_selection(violations));
    }

    // Lookups cannot miss once validation has passed.
    let plan = catalog
        .plans()
        .get(&selection.plan_code)
        .expect("plan validated against registry")
        .clone();
    let addons = resolve(catalog.addons(), &selection.deduped_addon_codes());
    let premium_features = resolve(
        catalog.premium_features(),
        &selection.deduped_premium_codes(),
    );

    let per_member = Money::from_usd(plan.price_usd)
        + addons.iter().map(|a| Money::from_usd(a.price_usd)).sum()
        + premium_features
            .iter()
            .map(|p| Money::from_usd(p.price_usd))
            .sum();
    let base_total = per_member * selection.members;

    let mut notes = Vec::new();

    let group_discount = if selection.members >= GROUP_DISCOUNT_MIN_MEMBERS {
        notes.push(GROUP_DISCOUNT_NOTE.to_string());
        base_total.percent_floor(GROUP_DISCOUNT_PERCENT)
    } else {
        Money::zero()
    };
    let after_group = base_total - group_discount;

    let premium_surcharge = if premium_features.is_empty() {
        Money::zero()
    } else {
        notes.push(PREMIUM_SURCHARGE_NOTE.to_string());
        after_group.percent_floor(PREMIUM_SURCHARGE_PERCENT)
    };
    let after_surcharge = after_group + premium_surcharge;

    let special_offer = special_offer_discount(after_surcharge);
    if special_offer.usd() == SPECIAL_OFFER_TIER1_DISCOUNT_USD {
        notes.push(SPECIAL_OFFER_TIER1_NOTE.to_string());
    } else if special_offer.usd() == SPECIAL_OFFER_TIER2_DISCOUNT_USD {
        notes.push(SPECIAL_OFFER_TIER2_NOTE.to_string());
    }

    let total = after_surcharge - special_offer;
    if !total.is_positive() {
        return Err(CoreError::NonPositiveTotal {
            total_usd: total.usd(),
        });
    }

    Ok(Quote {
        members: selection.members,
        plan,
        addons,
        premium_features,
        base_total_usd: base_total.usd(),
        group_discount_usd: group_discount.usd(),
        premium_surcharge_usd: premium_surcharge.usd(),
        special_offer_discount_usd: special_offer.usd(),
        total_usd: total.usd(),
        notes,
    })
}

/// The special-offer step function over the after-surcharge total.
///
/// Thresholds are strict: exactly $200 stays at $0, exactly $400 stays at
/// the $20 tier.
fn special_offer_discount(after_surcharge: Money) -> Money {
    if after_surcharge.usd() > SPECIAL_OFFER_TIER2_THRESHOLD_USD {
        Money::from_usd(SPECIAL_OFFER_TIER2_DISCOUNT_USD)
    } else if after_surcharge.usd() > SPECIAL_OFFER_TIER1_THRESHOLD_USD {
        Money::from_usd(SPECIAL_OFFER_TIER1_DISCOUNT_USD)
    } else {
        Money::zero()
    }
}

/// Resolves deduplicated codes to owned items, preserving dedup order.
fn resolve(registry: &Registry, codes: &[String]) -> Vec<CatalogItem> {
    codes
        .iter()
        .map(|code| {
            registry
                .get(code)
                .expect("code validated against registry")
                .clone()
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;

    fn quote(members: i64, plan: &str, addons: &[&str], premiums: &[&str]) -> Quote {
        let catalog = Catalog::standard();
        calculate(&catalog, &Selection::new(members, plan, addons, premiums)).unwrap()
    }

    // -------------------------------------------------------------------------
    // Pinned scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn test_single_member_basic_plan() {
        let q = quote(1, "basic", &[], &[]);
        assert_eq!(q.base_total_usd, 60);
        assert_eq!(q.group_discount_usd, 0);
        assert_eq!(q.premium_surcharge_usd, 0);
        assert_eq!(q.special_offer_discount_usd, 0);
        assert_eq!(q.total_usd, 60);
        assert!(q.notes.is_empty());
    }

    #[test]
    fn test_two_members_basic_plan_gets_group_discount() {
        let q = quote(2, "basic", &[], &[]);
        assert_eq!(q.base_total_usd, 120);
        assert_eq!(q.group_discount_usd, 12);
        assert_eq!(q.total_usd, 108);
    }

    #[test]
    fn test_two_members_premium_plan_stays_below_special_offer() {
        let q = quote(2, "premium", &[], &[]);
        assert_eq!(q.base_total_usd, 200);
        assert_eq!(q.special_offer_discount_usd, 0);
        assert_eq!(q.total_usd, 180);
    }

    #[test]
    fn test_three_members_basic_with_personal_training() {
        let q = quote(3, "basic", &["pt"], &[]);
        assert_eq!(q.base_total_usd, 360);
        assert_eq!(q.group_discount_usd, 36);
        assert_eq!(q.special_offer_discount_usd, 20);
        assert_eq!(q.total_usd, 304);
    }

    #[test]
    fn test_four_members_family_with_personal_training() {
        let q = quote(4, "family", &["pt"], &[]);
        assert_eq!(q.base_total_usd, 880);
        assert_eq!(q.group_discount_usd, 88);
        assert_eq!(q.special_offer_discount_usd, 50);
        assert_eq!(q.total_usd, 742);
    }

    /// Surcharge uses floor division: 15% of $324 is $48, not $48.60 rounded.
    #[test]
    fn test_two_members_premium_plan_with_exclusive_feature() {
        let q = quote(2, "premium", &[], &["exclusive"]);
        assert_eq!(q.base_total_usd, 360);
        assert_eq!(q.group_discount_usd, 36);
        assert_eq!(q.premium_surcharge_usd, 48);
        assert_eq!(q.special_offer_discount_usd, 20);
        assert_eq!(q.total_usd, 352);
    }

    // -------------------------------------------------------------------------
    // Special-offer thresholds
    // -------------------------------------------------------------------------

    #[test]
    fn test_exactly_200_is_not_a_special_offer() {
        // premium + pt + classes = $200 per member, one member: no rules fire
        let q = quote(1, "premium", &["pt", "classes"], &[]);
        assert_eq!(q.base_total_usd, 200);
        assert_eq!(q.special_offer_discount_usd, 0);
        assert_eq!(q.total_usd, 200);
        assert!(q.notes.is_empty());
    }

    #[test]
    fn test_201_crosses_into_the_20_dollar_tier() {
        let catalog = Catalog::with_items(
            vec![CatalogItem::new("solo", "Solo", 201)],
            vec![],
            vec![],
        );
        let q = calculate(&catalog, &Selection::new(1, "solo", &[], &[])).unwrap();
        assert_eq!(q.special_offer_discount_usd, 20);
        assert_eq!(q.total_usd, 181);
    }

    #[test]
    fn test_exactly_400_stays_in_the_20_dollar_tier() {
        let catalog = Catalog::with_items(
            vec![CatalogItem::new("solo", "Solo", 400)],
            vec![],
            vec![],
        );
        let q = calculate(&catalog, &Selection::new(1, "solo", &[], &[])).unwrap();
        assert_eq!(q.special_offer_discount_usd, 20);
        assert_eq!(q.total_usd, 380);
    }

    #[test]
    fn test_401_crosses_into_the_50_dollar_tier() {
        let catalog = Catalog::with_items(
            vec![CatalogItem::new("solo", "Solo", 401)],
            vec![],
            vec![],
        );
        let q = calculate(&catalog, &Selection::new(1, "solo", &[], &[])).unwrap();
        assert_eq!(q.special_offer_discount_usd, 50);
        assert_eq!(q.total_usd, 351);
    }

    // -------------------------------------------------------------------------
    // General properties
    // -------------------------------------------------------------------------

    #[test]
    fn test_duplicate_codes_do_not_double_charge() {
        let once = quote(1, "basic", &["pt"], &[]);
        let twice = quote(1, "basic", &["pt", "pt"], &[]);
        assert_eq!(once, twice);
        assert_eq!(twice.addons.len(), 1);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let first = quote(2, "premium", &["classes"], &["specialized"]);
        let second = quote(2, "premium", &["classes"], &["specialized"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_notes_follow_rule_order() {
        let q = quote(2, "premium", &[], &["exclusive"]);
        assert_eq!(
            q.notes,
            vec![
                GROUP_DISCOUNT_NOTE.to_string(),
                PREMIUM_SURCHARGE_NOTE.to_string(),
                SPECIAL_OFFER_TIER1_NOTE.to_string(),
            ]
        );
    }

    #[test]
    fn test_50_dollar_note_on_the_top_tier() {
        let q = quote(4, "family", &["pt"], &[]);
        assert_eq!(
            q.notes,
            vec![
                GROUP_DISCOUNT_NOTE.to_string(),
                SPECIAL_OFFER_TIER2_NOTE.to_string(),
            ]
        );
    }

    /// The group note is keyed to the party size, not to the discount
    /// amount: a base total under $10 floors the 10% discount to $0 but
    /// still carries the note.
    #[test]
    fn test_group_note_fires_even_when_discount_floors_to_zero() {
        let catalog = Catalog::with_items(
            vec![CatalogItem::new("day", "Day pass", 1)],
            vec![],
            vec![],
        );
        let q = calculate(&catalog, &Selection::new(3, "day", &[], &[])).unwrap();
        assert_eq!(q.base_total_usd, 3);
        assert_eq!(q.group_discount_usd, 0);
        assert_eq!(q.notes, vec![GROUP_DISCOUNT_NOTE.to_string()]);
    }

    /// Same for the surcharge note: a free premium feature still marks the
    /// quote as premium.
    #[test]
    fn test_surcharge_note_fires_even_when_surcharge_floors_to_zero() {
        let catalog = Catalog::with_items(
            vec![CatalogItem::new("day", "Day pass", 1)],
            vec![],
            vec![CatalogItem::premium("towel", "Towel service", 0)],
        );
        let q = calculate(&catalog, &Selection::new(1, "day", &[], &["towel"])).unwrap();
        assert_eq!(q.premium_surcharge_usd, 0);
        assert_eq!(q.notes, vec![PREMIUM_SURCHARGE_NOTE.to_string()]);
    }

    // -------------------------------------------------------------------------
    // Failures
    // -------------------------------------------------------------------------

    #[test]
    fn test_zero_members_is_an_invalid_selection() {
        let catalog = Catalog::standard();
        let err = calculate(&catalog, &Selection::new(0, "basic", &[], &[])).unwrap_err();
        assert_eq!(
            err,
            CoreError::invalid_selection(vec![Violation::MembersNotPositive])
        );
    }

    #[test]
    fn test_unknown_plan_error_names_the_code() {
        let catalog = Catalog::standard();
        let err = calculate(&catalog, &Selection::new(1, "gold", &[], &[])).unwrap_err();
        assert!(err.to_string().contains("gold"));
    }

    #[test]
    fn test_all_violations_reach_the_caller_joined() {
        let catalog = Catalog::standard();
        let err = calculate(&catalog, &Selection::new(0, "gold", &[], &[])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "members must be a positive integer.; unknown plan: 'gold'."
        );
    }

    #[test]
    fn test_zero_priced_catalog_is_a_configuration_error() {
        let catalog = Catalog::with_items(
            vec![CatalogItem::new("free", "Free tier", 0)],
            vec![],
            vec![],
        );
        let err = calculate(&catalog, &Selection::new(1, "free", &[], &[])).unwrap_err();
        assert_eq!(err, CoreError::NonPositiveTotal { total_usd: 0 });
    }
}
