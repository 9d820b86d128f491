//! Demo configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! Nothing is required: an empty environment gives the canonical run.

use std::env;

use bookstall_core::validation::validate_discount_percentage;

pub const PAGE_SEED_VAR: &str = "BOOKSTALL_PAGE_SEED";
pub const DISCOUNT_PCT_VAR: &str = "BOOKSTALL_DISCOUNT_PCT";

/// Percentage the pricing report applies when nothing else is configured.
pub const DEFAULT_DISCOUNT_PCT: f64 = 20.0;

/// Demo configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Seed for the page-count RNG. `None` draws from the thread RNG.
    pub page_seed: Option<u64>,

    /// Discount percentage used by the pricing report
    pub discount_pct: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            page_seed: None,
            discount_pct: DEFAULT_DISCOUNT_PCT,
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let page_seed = match lookup(PAGE_SEED_VAR) {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue(PAGE_SEED_VAR.to_string()))?,
            ),
            None => None,
        };

        let discount_pct = match lookup(DISCOUNT_PCT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(DISCOUNT_PCT_VAR.to_string()))?,
            None => DEFAULT_DISCOUNT_PCT,
        };

        // Reject it here rather than letting every report line fail
        validate_discount_percentage(discount_pct)
            .map_err(|_| ConfigError::InvalidValue(DISCOUNT_PCT_VAR.to_string()))?;

        Ok(Self {
            page_seed,
            discount_pct,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
