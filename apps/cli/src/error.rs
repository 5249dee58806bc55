//! # Session Error Type
//!
//! Unified error type for the interactive prompt session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Error Flow in the Quote Session                    │
//! │                                                                     │
//! │  user types 'q' ───────────► Cancelled ─────────► prints "-1"       │
//! │                                                                     │
//! │  unparseable input ────────► Invalid(msg) ──┐                       │
//! │                                             ├───► prints            │
//! │  CoreError from the engine ─► Invalid(msg) ─┘     "ERROR: <msg>"    │
//! │                                                   then "-1"         │
//! │                                                                     │
//! │  terminal write/read fails ─► Io(err) ──────────► bubbles to main   │
//! │                                                                     │
//! │  The end user never sees a raw fault; every outcome besides a       │
//! │  confirmed purchase surfaces the -1 sentinel.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use thiserror::Error;

/// Conditions that end the interactive session early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The user typed a cancellation sentinel, or input ended.
    #[error("cancelled")]
    Cancelled,

    /// Unusable input or a failed quote calculation; the message is shown
    /// to the user verbatim after an `ERROR:` prefix.
    #[error("{0}")]
    Invalid(String),

    /// The terminal itself failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
