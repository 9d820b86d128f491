//! # Money Module
//!
//! Display and discount helpers for catalog prices.
//!
//! Prices in the catalog are plain `f64` dollar amounts. Discounted prices are
//! fractional by nature (`$12.99 × 0.8 = $10.392`), so nothing here rounds the
//! stored value; rounding happens only when a price is shown.
//!
//! ## Usage
//! ```rust
//! use bookstall_core::money::{apply_percentage_discount, Dollars};
//!
//! let discounted = apply_percentage_discount(12.99, 20.0);
//! assert_eq!(Dollars(discounted).to_string(), "$10.39");
//! ```

use std::fmt;

// =============================================================================
// Dollars
// =============================================================================

/// A dollar amount formatted as `$D.CC` for display.
///
/// ## Example
/// ```rust
/// use bookstall_core::money::Dollars;
///
/// assert_eq!(Dollars(10.99).to_string(), "$10.99");
/// assert_eq!(Dollars(5.0).to_string(), "$5.00");
/// assert_eq!(Dollars(-5.5).to_string(), "-$5.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dollars(pub f64);

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0.0 { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.0.abs())
    }
}

// =============================================================================
// Discounts
// =============================================================================

/// Applies a percentage discount: `amount × (1 − percentage / 100)`.
///
/// The percentage is not range-checked here; callers validate first.
///
/// ## Example
/// ```rust
/// use bookstall_core::money::apply_percentage_discount;
///
/// assert_eq!(apply_percentage_discount(100.0, 10.0), 90.0);
/// assert_eq!(apply_percentage_discount(100.0, 0.0), 100.0);
/// ```
#[inline]
pub fn apply_percentage_discount(amount: f64, percentage: f64) -> f64 {
    amount * (1.0 - percentage / 100.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
