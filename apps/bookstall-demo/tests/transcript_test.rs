//! Integration tests for the full transcript.

mod common;

use bookstall_core::{FixedPageRng, SeededPageRng, MAX_PAGE_COUNT, MIN_PAGE_COUNT};

const EXPECTED: &str = "\
Harry Potter by J.K. Rowling - $10.99
Original Seller: Flourish & Blotts
New Seller: Obscurus Books
Error: Price cannot be negative
Harry Potter by J.K. Rowling - $12.99
Price: 12.99
Category Code: BOOK
Page Count: 307
Updated Page Count: 500
Error: Book has no attribute 'page_count'

=== Demonstrating interface-like behavior ===
Book pricing:
Original price: $12.99
Price with 20% discount: $10.39

Magazine pricing:
Original price: $12.99
Price with 20% discount: $9.35
";

#[test]
fn transcript_matches_expected_output() {
    let output = common::transcript(&mut FixedPageRng::new(307), 20.0);
    assert_eq!(output, EXPECTED);
}

#[test]
fn transcript_only_varies_by_page_count() {
    let output = common::transcript(&mut FixedPageRng::new(999), 20.0);
    assert_eq!(output, EXPECTED.replace("Page Count: 307", "Page Count: 999"));
}

#[test]
fn seeded_transcript_is_reproducible() {
    let first = common::transcript(&mut SeededPageRng::from_seed(11), 20.0);
    let second = common::transcript(&mut SeededPageRng::from_seed(11), 20.0);
    assert_eq!(first, second);

    let pages: u32 = first
        .lines()
        .find_map(|line| line.strip_prefix("Page Count: "))
        .unwrap()
        .parse()
        .unwrap();
    assert!((MIN_PAGE_COUNT..=MAX_PAGE_COUNT).contains(&pages));
}

#[test]
fn transcript_uses_configured_discount() {
    let output = common::transcript(&mut FixedPageRng::new(307), 50.0);
    assert!(output.contains("Price with 50% discount: $6.50\n"));
    // 12.99 × 0.5 × 0.9 = 5.8455
    assert!(output.contains("Price with 50% discount: $5.85\n"));
}
