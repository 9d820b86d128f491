//! # Bookstall Demo
//!
//! Library half of the `bookstall-demo` binary, split out so the transcript
//! can be driven against an in-memory writer in tests.
//!
//! ## Configuration
//! Environment variables (all optional):
//! - `BOOKSTALL_PAGE_SEED` - Seed for the page-count RNG
//! - `BOOKSTALL_DISCOUNT_PCT` - Discount used by the pricing report (default: 20)
//! - `RUST_LOG` - Log filter, written to stderr (default: warn)

pub mod config;
pub mod error;
pub mod transcript;

pub use config::{ConfigError, DemoConfig};
pub use error::{DemoError, DemoResult};
pub use transcript::{print_transcript, report_price, run};
