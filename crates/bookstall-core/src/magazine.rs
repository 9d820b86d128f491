//! # Magazine
//!
//! A magazine issue. Shares the `PricedItem` contract with `Book` but applies
//! its own discount policy.
//!
//! ## Discount Policy
//! ```text
//! base = price × (1 − pct / 100)
//!      │
//!      ├── stored price > $10.00 → base × 0.9   (extra 10% off)
//!      │
//!      └── otherwise             → base
//! ```
//!
//! The threshold looks at the stored price, not the discounted base.

use serde::Serialize;

use crate::error::CoreResult;
use crate::money::apply_percentage_discount;
use crate::priced::PricedItem;
use crate::validation::{validate_discount_percentage, validate_price};

/// Magazines priced above this get the extra reduction.
pub const PREMIUM_PRICE_THRESHOLD: f64 = 10.0;

/// Multiplier applied on top of the regular discount for premium magazines.
pub const PREMIUM_EXTRA_FACTOR: f64 = 0.9;

/// A single magazine issue for sale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Magazine {
    name: String,
    price: f64,
    issue_number: u32,
}

impl Magazine {
    /// # Errors
    /// `CoreError::InvalidArgument` if `price` is negative or not finite.
    pub fn new(name: impl Into<String>, price: f64, issue_number: u32) -> CoreResult<Self> {
        validate_price(price)?;

        Ok(Self {
            name: name.into(),
            price,
            issue_number,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn issue_number(&self) -> u32 {
        self.issue_number
    }
}

impl PricedItem for Magazine {
    fn price(&self) -> f64 {
        self.price
    }

    fn set_price(&mut self, price: f64) -> CoreResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    fn calculate_discount(&self, percentage: f64) -> CoreResult<f64> {
        validate_discount_percentage(percentage)?;

        let base = apply_percentage_discount(self.price, percentage);
        if self.price > PREMIUM_PRICE_THRESHOLD {
            return Ok(base * PREMIUM_EXTRA_FACTOR);
        }
        Ok(base)
    }
}
