//! # Rendering
//!
//! Formats catalog listings and quote summaries for the terminal.
//!
//! ## Summary Layout
//! ```text
//! --- SUMMARY ---
//! Members: 2
//! Plan: Premium ($100 per member)
//! Add-ons: none
//! Premium features:
//!   - Exclusive facilities access (+$80 per member)
//!
//! Breakdown:
//!   Base total:              $360
//!   Group discount:          -$36
//!   Premium surcharge:       +$48
//!   Special offer discount:  -$20
//!   TOTAL:                   $352
//!
//! Notes:
//!   * Group discount applied: 10% off for 2+ members on the same plan.
//!   * ...
//! ```

use std::io::{self, Write};

use apex_core::{CatalogItem, Quote, Registry};

/// Renders one registry as a titled listing.
///
/// Unavailable items stay listed, marked `(UNAVAILABLE)`, so the user can
/// see what exists even when it cannot be selected.
pub fn render_catalog<W: Write>(out: &mut W, title: &str, registry: &Registry) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.len()))?;
    for item in registry.iter() {
        let status = if item.available { "" } else { " (UNAVAILABLE)" };
        writeln!(
            out,
            "  {:<12}  ${:>3}  - {}{}",
            item.code, item.price_usd, item.name, status
        )?;
    }
    writeln!(
        out,
        "  (Type codes separated by comma, '-' for none, 'q' to cancel)"
    )?;
    writeln!(out)
}

/// Renders the full quote summary: selection, breakdown, notes.
pub fn render_summary<W: Write>(out: &mut W, quote: &Quote) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- SUMMARY ---")?;
    writeln!(out, "Members: {}", quote.members)?;
    writeln!(
        out,
        "Plan: {} (${} per member)",
        quote.plan.name, quote.plan.price_usd
    )?;

    render_item_list(out, "Add-ons", &quote.addons)?;
    render_item_list(out, "Premium features", &quote.premium_features)?;

    writeln!(out)?;
    writeln!(out, "Breakdown:")?;
    writeln!(out, "  Base total:              ${}", quote.base_total_usd)?;
    writeln!(
        out,
        "  Group discount:          -${}",
        quote.group_discount_usd
    )?;
    writeln!(
        out,
        "  Premium surcharge:       +${}",
        quote.premium_surcharge_usd
    )?;
    writeln!(
        out,
        "  Special offer discount:  -${}",
        quote.special_offer_discount_usd
    )?;
    writeln!(out, "  TOTAL:                   ${}", quote.total_usd)?;

    if !quote.notes.is_empty() {
        writeln!(out)?;
        writeln!(out, "Notes:")?;
        for note in &quote.notes {
            writeln!(out, "  * {note}")?;
        }
    }
    Ok(())
}

/// Renders a selected-items section, or `<label>: none`.
fn render_item_list<W: Write>(out: &mut W, label: &str, items: &[CatalogItem]) -> io::Result<()> {
    if items.is_empty() {
        writeln!(out, "{label}: none")
    } else {
        writeln!(out, "{label}:")?;
        for item in items {
            writeln!(out, "  - {} (+${} per member)", item.name, item.price_usd)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
