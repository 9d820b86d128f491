//! # Bookstall Demo
//!
//! Prints the catalog transcript to stdout. Logs go to stderr.

use std::io;

use bookstall_core::{PageRng, SeededPageRng, ThreadPageRng};
use bookstall_demo::{print_transcript, DemoConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    // Load configuration, a bad value never stops the run
    let config = DemoConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Invalid configuration, using defaults");
        DemoConfig::default()
    });
    info!(
        page_seed = ?config.page_seed,
        discount_pct = config.discount_pct,
        "Configuration loaded"
    );

    let mut rng: Box<dyn PageRng> = match config.page_seed {
        Some(seed) => Box::new(SeededPageRng::from_seed(seed)),
        None => Box::new(ThreadPageRng::new()),
    };

    let stdout = io::stdout();
    print_transcript(&mut stdout.lock(), rng.as_mut(), config.discount_pct);
}
