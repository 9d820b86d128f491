//! Error types for the demo driver.

use bookstall_core::CoreError;

/// Errors that can stop the transcript.
///
/// Domain failures the transcript provokes on purpose are caught and printed;
/// these are the ones that are not.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog error: {0}")]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with DemoError.
pub type DemoResult<T> = Result<T, DemoError>;
