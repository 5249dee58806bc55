//! # Quote Session
//!
//! The interactive flow: collect a selection, quote it, confirm.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Quote Session                               │
//! │                                                                     │
//! │  banner                                                             │
//! │    │                                                                │
//! │    ▼                                                                │
//! │  member count ──► plan code ──► add-ons ──► premium features        │
//! │    │                                                                │
//! │    ▼                                                                │
//! │  apex_core::calculate ──► summary ──► "Confirm purchase? (y/n)"     │
//! │    │                                        │                       │
//! │    │ error                                  ├── y ──► prints total  │
//! │    ▼                                        ▼                       │
//! │  "ERROR: <msg>" + "-1"                 anything else ──► "-1"       │
//! │                                                                     │
//! │  'q' / 'quit' / 'exit' at any prompt ──► "-1"                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is generic over `BufRead`/`Write`, so tests drive it with
//! in-memory buffers instead of a terminal.

use std::io::{self, BufRead, Write};

use apex_core::{calculate, Catalog, Selection};
use tracing::debug;

use crate::error::SessionError;
use crate::input::{prompt_line, read_codes, read_int, read_plan_code};
use crate::render::{render_catalog, render_summary};

/// Runs one quote session and returns its outcome value.
///
/// The outcome is the confirmed total (a positive integer) or `-1` for
/// cancellation, decline, and every failure; whichever it is, it has
/// already been printed to `out`. Only terminal I/O failures escape as
/// errors.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    catalog: &Catalog,
) -> io::Result<i64> {
    match drive(input, out, catalog) {
        Ok(outcome) => Ok(outcome),
        Err(SessionError::Cancelled) => {
            debug!("session cancelled");
            writeln!(out, "\n-1")?;
            Ok(-1)
        }
        Err(SessionError::Invalid(message)) => {
            debug!(%message, "session failed");
            writeln!(out, "\nERROR: {message}")?;
            writeln!(out, "-1")?;
            Ok(-1)
        }
        Err(SessionError::Io(err)) => Err(err),
    }
}

/// The happy-path flow; any early exit comes back as a `SessionError`.
fn drive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    catalog: &Catalog,
) -> Result<i64, SessionError> {
    writeln!(out, "Apex Memberships")?;
    writeln!(out, "Type 'q' at any time to cancel.")?;
    writeln!(out)?;

    let members = read_int(input, out, "How many members are signing up together? ")?;

    render_catalog(out, "Membership Plans", catalog.plans())?;
    let plan_prompt = format!("Choose a plan code ({}): ", joined_codes(catalog.plans()));
    let plan_code = read_plan_code(input, out, &plan_prompt)?;

    render_catalog(out, "Add-ons (per member)", catalog.addons())?;
    let addon_codes = read_codes(
        input,
        out,
        "Add add-ons (e.g., nutrition,classes) or '-' for none: ",
    )?;

    render_catalog(out, "Premium features (per member)", catalog.premium_features())?;
    let premium_codes = read_codes(
        input,
        out,
        "Add premium features (e.g., exclusive) or '-' for none: ",
    )?;

    let selection = Selection {
        members,
        plan_code,
        addon_codes,
        premium_codes,
    };
    debug!(?selection, "calculating quote");

    let quote =
        calculate(catalog, &selection).map_err(|err| SessionError::Invalid(err.to_string()))?;
    render_summary(out, &quote)?;

    let confirm = prompt_line(input, out, "\nConfirm purchase? (y/n): ")?.to_lowercase();
    if confirm == "y" {
        debug!(total = quote.total_usd, "purchase confirmed");
        writeln!(out, "{}", quote.total_usd)?;
        Ok(quote.total_usd)
    } else {
        debug!("purchase declined");
        writeln!(out, "-1")?;
        Ok(-1)
    }
}

/// Registry codes joined for a prompt, e.g. "basic/premium/family".
fn joined_codes(registry: &apex_core::Registry) -> String {
    registry
        .iter()
        .map(|item| item.code.as_str())
        .collect::<Vec<_>>()
        .join("/")
}

// =============================================================================
// Unit Tests
// =============================================================================
