//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! All membership prices are whole US dollars, so `Money` wraps an `i64`
//! dollar amount. Every percentage rule in the quote pipeline goes through
//! [`Money::percent_floor`], which uses integer floor division — the quote
//! rules pin exact floor results (e.g. 15% of $324 is $48, not $49).
//!
//! ## Usage
//! ```rust
//! use apex_core::money::Money;
//!
//! let price = Money::from_usd(60);
//!
//! // Arithmetic operations
//! let party_total = price * 2;                    // $120
//! let with_addon = price + Money::from_usd(20);   // $80
//!
//! // Floor-division percentage (10% of $125 is $12, the $0.50 is dropped)
//! assert_eq!(Money::from_usd(125).percent_floor(10).usd(), 12);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole US dollars.
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate pipeline values can go negative if the
///   catalog is misconfigured, and the guard at the end of the pipeline
///   needs to see that rather than wrap
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for data-transfer serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole US dollars.
    ///
    /// ## Example
    /// ```rust
    /// use apex_core::money::Money;
    ///
    /// let price = Money::from_usd(60);
    /// assert_eq!(price.usd(), 60);
    /// ```
    #[inline]
    pub const fn from_usd(usd: i64) -> Self {
        Money(usd)
    }

    /// Returns the value in whole US dollars.
    #[inline]
    pub const fn usd(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Computes `percent`% of this amount with integer floor division.
    ///
    /// The fractional dollar is always dropped, never rounded: 15% of $324
    /// is $48.60 in exact arithmetic and $48 here. Widens to i128 so the
    /// intermediate product cannot overflow.
    ///
    /// ## Example
    /// ```rust
    /// use apex_core::money::Money;
    ///
    /// assert_eq!(Money::from_usd(324).percent_floor(15).usd(), 48);
    /// assert_eq!(Money::from_usd(120).percent_floor(10).usd(), 12);
    /// ```
    pub fn percent_floor(&self, percent: i64) -> Money {
        let amount = (self.0 as i128 * percent as i128) / 100;
        Money(amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}", sign, self.0.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by i64 (for per-member × member-count calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

/// Summation over item prices.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
