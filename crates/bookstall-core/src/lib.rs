//! # bookstall-core: Pure Catalog Logic for Bookstall
//!
//! This crate holds every priced item the stall sells and the contract they
//! share. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstall Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  bookstall-demo (driver)                        │   │
//! │  │    config ──► tracing ──► transcript ──► stdout                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookstall-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  priced   │  │   book    │  │ magazine  │  │ validation│  │   │
//! │  │   │PricedItem │  │   Book    │  │ Magazine  │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   money   │  │    rng    │  │   error   │                  │   │
//! │  │   │  Dollars  │  │  PageRng  │  │ CoreError │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • NO ENVIRONMENT                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`priced`] - The `PricedItem` contract
//! - [`book`] - `Book` entity
//! - [`magazine`] - `Magazine` entity
//! - [`money`] - Dollar formatting and percentage discounts
//! - [`rng`] - Injectable page-count randomness
//! - [`error`] - Domain error types
//! - [`validation`] - Price and percentage rules
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstall_core::{Book, Magazine, PricedItem, SeededPageRng};
//!
//! let mut rng = SeededPageRng::from_seed(320);
//! let book = Book::with_rng("Harry Potter", "J.K. Rowling", 12.99, None, &mut rng).unwrap();
//! let vogue = Magazine::new("Vogue", 12.99, 123).unwrap();
//!
//! let items: [&dyn PricedItem; 2] = [&book, &vogue];
//! let discounted: Vec<f64> = items
//!     .iter()
//!     .map(|item| item.calculate_discount(20.0).unwrap())
//!     .collect();
//!
//! assert!((discounted[0] - 10.392).abs() < 1e-9);
//! assert!((discounted[1] - 9.3528).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod book;
pub mod error;
pub mod magazine;
pub mod money;
pub mod priced;
pub mod rng;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use book::Book;
pub use error::{CoreError, CoreResult, ValidationError};
pub use magazine::Magazine;
pub use money::Dollars;
pub use priced::PricedItem;
pub use rng::{PageRng, SeededPageRng, ThreadPageRng};

#[cfg(any(test, feature = "test-support"))]
pub use rng::FixedPageRng;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest page count a freshly printed book can be given.
pub const MIN_PAGE_COUNT: u32 = 100;

/// Largest page count a freshly printed book can be given.
pub const MAX_PAGE_COUNT: u32 = 1000;

/// Upper bound of a discount percentage (a full giveaway).
pub const MAX_DISCOUNT_PERCENT: f64 = 100.0;
