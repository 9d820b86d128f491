//! Shared helpers for transcript integration tests.

use bookstall_core::PageRng;
use bookstall_demo::run;

/// Runs the transcript into a string.
pub fn transcript(rng: &mut dyn PageRng, discount_pct: f64) -> String {
    let mut out = Vec::new();
    run(&mut out, rng, discount_pct).unwrap();
    String::from_utf8(out).unwrap()
}
