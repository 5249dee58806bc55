//! # Apex Memberships Front End Entry Point
//!
//! Line-based terminal front end for the quote engine.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        apex (binary)                                │
//! │                                                                     │
//! │  main.rs ────► Sets up logging, builds the catalog, runs session    │
//! │                                                                     │
//! │  session.rs ─► The interactive flow (prompts → quote → confirm)     │
//! │                                                                     │
//! │  input.rs ───► Prompting, sentinels, code-list parsing              │
//! │                                                                     │
//! │  render.rs ──► Catalog listings and quote summaries                 │
//! │                                                                     │
//! │  error.rs ───► SessionError (cancel / invalid / I/O)                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Build the standard catalog
//! 3. Run one quote session over stdin/stdout
//!
//! The outcome contract belongs to stdout: a confirmed purchase prints the
//! final total, everything else prints `-1`. The process exits 0 either
//! way; logs go to stderr so they never mix into that stream.

mod error;
mod input;
mod render;
mod session;

use std::io;

use apex_core::Catalog;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    info!("Starting Apex Memberships quote session");

    // The catalog is built once and read-only from here on.
    let catalog = Catalog::standard();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match session::run_session(&mut input, &mut output, &catalog) {
        Ok(outcome) => debug!(outcome, "session finished"),
        Err(err) => error!(%err, "terminal I/O failed"),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=apex_cli=trace` - Show trace for the front end only
/// - Default: INFO level, DEBUG for this crate
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,apex_cli=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
