//! # Error Types
//!
//! Domain-specific error types for apex-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  apex-core errors (this file)                                       │
//! │  ├── CoreError   - Quote calculation failures                       │
//! │  └── Violation   - One validation rule failure                      │
//! │                                                                     │
//! │  apps/cli errors (in app)                                           │
//! │  └── SessionError - Cancellation / bad input / terminal I/O         │
//! │                                                                     │
//! │  Flow: Violation* → CoreError::InvalidSelection → CLI → "-1"        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending code)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Violation
// =============================================================================

/// A single validation rule failure.
///
/// Validation collects EVERY violation rather than stopping at the first,
/// so a caller can display all problems at once. Each variant's message
/// names the offending code where one exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The member count is zero or negative.
    #[error("members must be a positive integer.")]
    MembersNotPositive,

    /// The plan code does not exist in the plan registry.
    #[error("unknown plan: '{code}'.")]
    UnknownPlan { code: String },

    /// The plan exists but is not currently offered.
    #[error("plan '{code}' is not available.")]
    PlanUnavailable { code: String },

    /// An add-on code does not exist in the add-on registry.
    #[error("unknown add-on: '{code}'.")]
    UnknownAddon { code: String },

    /// The add-on exists but is not currently offered.
    #[error("add-on '{code}' is not available.")]
    AddonUnavailable { code: String },

    /// A premium-feature code does not exist in the premium registry.
    #[error("unknown premium feature: '{code}'.")]
    UnknownPremiumFeature { code: String },

    /// The premium feature exists but is not currently offered.
    #[error("premium feature '{code}' is not available.")]
    PremiumFeatureUnavailable { code: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Quote calculation errors.
///
/// Two distinct kinds:
/// - [`CoreError::InvalidSelection`] is a *user* error: the requested
///   selection failed one or more validation rules.
/// - [`CoreError::NonPositiveTotal`] is a *catalog* error: a structurally
///   valid selection produced a non-positive price, which can only happen
///   with misconfigured catalog data. It never triggers with the standard
///   catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The selection failed validation. Carries every violation; the
    /// display message joins them with `"; "`, never truncating.
    #[error("{}", join_messages(.violations))]
    InvalidSelection { violations: Vec<Violation> },

    /// A valid selection priced out at zero or below.
    #[error("calculated total is not positive; check pricing configuration.")]
    NonPositiveTotal { total_usd: i64 },
}

impl CoreError {
    /// Builds an invalid-selection error from collected violations.
    pub fn invalid_selection(violations: Vec<Violation>) -> Self {
        CoreError::InvalidSelection { violations }
    }

    /// The individual violations, if this is a selection error.
    pub fn violations(&self) -> &[Violation] {
        match self {
            CoreError::InvalidSelection { violations } => violations,
            CoreError::NonPositiveTotal { .. } => &[],
        }
    }
}

/// Joins violation messages with `"; "` for display.
fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        assert_eq!(
            Violation::MembersNotPositive.to_string(),
            "members must be a positive integer."
        );
        assert_eq!(
            Violation::UnknownPlan {
                code: "gold".to_string()
            }
            .to_string(),
            "unknown plan: 'gold'."
        );
        assert_eq!(
            Violation::AddonUnavailable {
                code: "pt".to_string()
            }
            .to_string(),
            "add-on 'pt' is not available."
        );
        assert_eq!(
            Violation::UnknownPremiumFeature {
                code: "sauna".to_string()
            }
            .to_string(),
            "unknown premium feature: 'sauna'."
        );
    }

    #[test]
    fn test_invalid_selection_joins_all_messages() {
        let err = CoreError::invalid_selection(vec![
            Violation::MembersNotPositive,
            Violation::UnknownPlan {
                code: "gold".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "members must be a positive integer.; unknown plan: 'gold'."
        );
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_non_positive_total_message() {
        let err = CoreError::NonPositiveTotal { total_usd: 0 };
        assert_eq!(
            err.to_string(),
            "calculated total is not positive; check pricing configuration."
        );
        assert!(err.violations().is_empty());
    }
}
