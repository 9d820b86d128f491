//! Random number generator abstraction for page counts.
//!
//! A running program draws from the thread RNG. Reproducible runs use a
//! seeded generator, and tests pin the value outright.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Abstraction over uniform integer generation.
pub trait PageRng {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// Draws from the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadPageRng(ThreadRng);

impl ThreadPageRng {
    #[must_use]
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

impl PageRng for ThreadPageRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }
}

/// A seeded RNG. The same seed always yields the same sequence.
#[derive(Debug, Clone)]
pub struct SeededPageRng(StdRng);

impl SeededPageRng {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl PageRng for SeededPageRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }
}

/// Always returns the same value, ignoring the requested range. Used where
/// an exact page count must be known ahead of time.
///
/// Only built for tests and under the `test-support` feature.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Copy)]
pub struct FixedPageRng {
    value: u32,
}

#[cfg(any(test, feature = "test-support"))]
impl FixedPageRng {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl PageRng for FixedPageRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_stays_in_range() {
        let mut rng = ThreadPageRng::new();
        for _ in 0..1_000 {
            let n = rng.next_u32_range(100, 1000);
            assert!((100..=1000).contains(&n), "{n} out of range");
        }
    }

    #[test]
    fn test_thread_rng_single_value_range() {
        let mut rng = ThreadPageRng::new();
        assert_eq!(rng.next_u32_range(42, 42), 42);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = SeededPageRng::from_seed(7);
        let mut b = SeededPageRng::from_seed(7);
        let left: Vec<u32> = (0..20).map(|_| a.next_u32_range(100, 1000)).collect();
        let right: Vec<u32> = (0..20).map(|_| b.next_u32_range(100, 1000)).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|n| (100..=1000).contains(n)));
    }

    #[test]
    fn test_fixed_rng_ignores_range() {
        let mut rng = FixedPageRng::new(5);
        assert_eq!(rng.next_u32_range(100, 1000), 5);
        assert_eq!(rng.next_u32_range(0, 1), 5);
    }
}
