//! # Error Types
//!
//! Domain-specific error types for bookstall-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookstall-core errors (this file)                                     │
//! │  ├── CoreError        - What entity operations return                  │
//! │  │   ├── InvalidArgument  (wraps ValidationError)                      │
//! │  │   └── AttributeMissing (read of a cleared field)                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bookstall-demo errors (separate crate)                                │
//! │  └── ConfigError      - Bad environment values                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → printed by the driver             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is recoverable. A rejected operation leaves the entity
//! exactly as it was.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by entity operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// An argument failed validation (negative price, bad percentage).
    ///
    /// The message is the validation message itself so callers can show it
    /// verbatim.
    #[error("{0}")]
    InvalidArgument(#[from] ValidationError),

    /// A field was explicitly cleared and has not been set again.
    ///
    /// ## User Workflow
    /// ```text
    /// book.clear_page_count()
    ///      │
    ///      ▼
    /// book.page_count()
    ///      │
    ///      ▼
    /// AttributeMissing { entity: "Book", attribute: "page_count" }
    ///      │
    ///      ▼
    /// book.set_page_count(500) → reads work again
    /// ```
    #[error("{entity} has no attribute '{attribute}'")]
    AttributeMissing {
        entity: &'static str,
        attribute: &'static str,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value must not be below zero.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Value must be a real number (not NaN or infinite).
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
