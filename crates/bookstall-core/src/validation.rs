//! # Validation Module
//!
//! Input validation for prices and discount percentages.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Book::new / Magazine::new ──┐                                          │
//! │                              ├──► validate_price                        │
//! │  PricedItem::set_price ──────┘                                          │
//! │                                                                         │
//! │  PricedItem::calculate_discount ──► validate_discount_percentage        │
//! │                                                                         │
//! │  A failed check returns before any field is touched.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstall_core::validation::{validate_discount_percentage, validate_price};
//!
//! assert!(validate_price(12.99).is_ok());
//! assert!(validate_price(-1.0).is_err());
//! assert!(validate_discount_percentage(20.0).is_ok());
//! assert!(validate_discount_percentage(120.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_DISCOUNT_PERCENT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "Price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "Price".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must lie in `[0, 100]`, both ends inclusive
/// - NaN is outside every range and is rejected
pub fn validate_discount_percentage(percentage: f64) -> ValidationResult<()> {
    if !(0.0..=MAX_DISCOUNT_PERCENT).contains(&percentage) {
        return Err(ValidationError::OutOfRange {
            field: "Percentage".to_string(),
            min: 0,
            max: MAX_DISCOUNT_PERCENT as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(10.99).is_ok());
        assert!(validate_price(1e9).is_ok());

        assert_eq!(
            validate_price(-0.01),
            Err(ValidationError::Negative {
                field: "Price".to_string()
            })
        );
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_discount_percentage() {
        assert!(validate_discount_percentage(0.0).is_ok());
        assert!(validate_discount_percentage(37.5).is_ok());
        assert!(validate_discount_percentage(100.0).is_ok());

        assert!(validate_discount_percentage(-0.5).is_err());
        assert!(validate_discount_percentage(100.5).is_err());
        assert!(validate_discount_percentage(f64::NAN).is_err());
    }

    #[test]
    fn test_percentage_error_message() {
        let err = validate_discount_percentage(150.0).unwrap_err();
        assert_eq!(err.to_string(), "Percentage must be between 0 and 100");
    }
}
