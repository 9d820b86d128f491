//! # PricedItem Contract
//!
//! The capability set every sellable item provides.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         PricedItem                                      │
//! │                                                                         │
//! │   price()              → current price                                  │
//! │   set_price(p)         → InvalidArgument if p < 0, state unchanged      │
//! │   calculate_discount() → InvalidArgument if pct ∉ [0, 100]              │
//! │                                                                         │
//! │        ┌──────────────┐              ┌──────────────┐                   │
//! │        │     Book     │              │   Magazine   │                   │
//! │        │ price×(1−p%) │              │ price×(1−p%) │                   │
//! │        │              │              │ ×0.9 if >$10 │                   │
//! │        └──────────────┘              └──────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The trait is object safe, so callers can work over `&dyn PricedItem`
//! without caring which item they hold.

use crate::error::CoreResult;

/// An item that carries a mutable, non-negative price and a discount policy.
pub trait PricedItem {
    /// Returns the current price.
    fn price(&self) -> f64;

    /// Replaces the price.
    ///
    /// # Errors
    /// `CoreError::InvalidArgument` when `price` is negative or not finite.
    /// The stored price is left untouched.
    fn set_price(&mut self, price: f64) -> CoreResult<()>;

    /// Returns the price after a `percentage` discount under this item's
    /// discount policy.
    ///
    /// # Errors
    /// `CoreError::InvalidArgument` when `percentage` lies outside `[0, 100]`.
    fn calculate_discount(&self, percentage: f64) -> CoreResult<f64>;
}
