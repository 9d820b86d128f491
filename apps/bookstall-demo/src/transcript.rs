//! # Transcript
//!
//! The fixed walk through every catalog operation.
//!
//! ## Step Order
//! ```text
//! Book::with_rng ──► summary ──► seller get/set ──► set_price (ok, then rejected)
//!      │
//!      ▼
//! summary ──► price ──► category code ──► page count get/set/clear/get (rejected)
//!      │
//!      ▼
//! Magazine::new ──► report_price(&dyn PricedItem) for the book, then the magazine
//! ```
//!
//! Every domain error the walk provokes is printed as `Error: <message>` and
//! the walk carries on.

use std::io::Write;

use bookstall_core::{Book, Dollars, Magazine, PageRng, PricedItem};
use tracing::{debug, error, info, warn};

use crate::error::{DemoError, DemoResult};

const TITLE: &str = "Harry Potter";
const AUTHOR: &str = "J.K. Rowling";
const OPENING_PRICE: f64 = 10.99;
const ORIGINAL_SELLER: &str = "Flourish & Blotts";
const NEW_SELLER: &str = "Obscurus Books";
const NEW_PRICE: f64 = 12.99;
const REJECTED_PRICE: f64 = -5.0;
const NEW_PAGE_COUNT: u32 = 500;

const MAGAZINE_NAME: &str = "Vogue";
const MAGAZINE_PRICE: f64 = 12.99;
const MAGAZINE_ISSUE: u32 = 123;

/// Runs the full transcript, writing to `out`.
///
/// `rng` supplies the book's page count; `discount_pct` is the percentage the
/// pricing report applies.
pub fn run<W: Write>(out: &mut W, rng: &mut dyn PageRng, discount_pct: f64) -> DemoResult<()> {
    info!("starting transcript");

    let mut book = Book::with_rng(
        TITLE,
        AUTHOR,
        OPENING_PRICE,
        Some(ORIGINAL_SELLER.to_string()),
        rng,
    )?;
    book_steps(out, &mut book)?;

    let magazine = Magazine::new(MAGAZINE_NAME, MAGAZINE_PRICE, MAGAZINE_ISSUE)?;
    debug!(name = magazine.name(), issue = magazine.issue_number(), "magazine created");

    writeln!(out)?;
    writeln!(out, "=== Demonstrating interface-like behavior ===")?;
    writeln!(out, "Book pricing:")?;
    report_price(out, &book, discount_pct)?;

    writeln!(out)?;
    writeln!(out, "Magazine pricing:")?;
    report_price(out, &magazine, discount_pct)?;

    info!("transcript complete");
    Ok(())
}

/// Runs the transcript and flushes `out`, logging any output failure instead
/// of returning it. A closed stdout (e.g. piped into `head`) never turns into
/// a failing exit status.
pub fn print_transcript<W: Write>(out: &mut W, rng: &mut dyn PageRng, discount_pct: f64) {
    let result = run(out, rng, discount_pct).and_then(|()| out.flush().map_err(DemoError::from));
    if let Err(e) = result {
        error!(error = %e, "transcript output failed");
    }
}

fn book_steps<W: Write>(out: &mut W, book: &mut Book) -> DemoResult<()> {
    writeln!(out, "{}", book.summary())?;

    writeln!(out, "Original Seller: {}", seller_label(book))?;
    book.seller = Some(NEW_SELLER.to_string());
    writeln!(out, "New Seller: {}", seller_label(book))?;

    for price in [NEW_PRICE, REJECTED_PRICE] {
        debug!(price, "setting book price");
        if let Err(e) = book.set_price(price) {
            warn!(price, error = %e, "price change rejected");
            writeln!(out, "Error: {e}")?;
        }
    }

    writeln!(out, "{}", book.summary())?;
    writeln!(out, "Price: {}", book.price())?;
    writeln!(out, "Category Code: {}", Book::category_code())?;

    writeln!(out, "Page Count: {}", book.page_count()?)?;
    book.set_page_count(NEW_PAGE_COUNT);
    writeln!(out, "Updated Page Count: {}", book.page_count()?)?;

    book.clear_page_count();
    debug!("page count cleared");
    match book.page_count() {
        Ok(pages) => writeln!(out, "Deleted Page Count: {pages}")?,
        Err(e) => {
            warn!(error = %e, "page count read after clear");
            writeln!(out, "Error: {e}")?;
        }
    }

    Ok(())
}

/// Prints an item's price and its discounted price. Works for any
/// `PricedItem`.
pub fn report_price<W: Write>(
    out: &mut W,
    item: &dyn PricedItem,
    discount_pct: f64,
) -> DemoResult<()> {
    writeln!(out, "Original price: {}", Dollars(item.price()))?;
    match item.calculate_discount(discount_pct) {
        Ok(discounted) => writeln!(
            out,
            "Price with {discount_pct}% discount: {}",
            Dollars(discounted)
        )?,
        Err(e) => {
            warn!(discount_pct, error = %e, "discount rejected");
            writeln!(out, "Error: {e}")?;
        }
    }
    Ok(())
}

fn seller_label(book: &Book) -> &str {
    book.seller.as_deref().unwrap_or("none")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstall_core::FixedPageRng;
    use std::io;

    /// Accepts `budget` bytes, then fails like a pipe whose reader went away.
    struct ClosedPipe {
        budget: usize,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_surfaces_write_failure() {
        let mut out = ClosedPipe { budget: 10 };
        let result = run(&mut out, &mut FixedPageRng::new(307), 20.0);
        assert!(matches!(
            result,
            Err(DemoError::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe
        ));
    }

    #[test]
    fn test_print_transcript_swallows_write_failure() {
        for budget in [0, 10, 200] {
            let mut out = ClosedPipe { budget };
            print_transcript(&mut out, &mut FixedPageRng::new(307), 20.0);
        }
    }

    #[test]
    fn test_print_transcript_writes_everything() {
        let mut out = Vec::new();
        print_transcript(&mut out, &mut FixedPageRng::new(307), 20.0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Harry Potter by J.K. Rowling - $10.99\n"));
        assert!(text.ends_with("Price with 20% discount: $9.35\n"));
    }

    #[test]
    fn test_report_price_for_book() {
        let book =
            Book::with_rng("Emma", "Jane Austen", 8.0, None, &mut FixedPageRng::new(100)).unwrap();
        let mut out = Vec::new();
        report_price(&mut out, &book, 25.0).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Original price: $8.00\nPrice with 25% discount: $6.00\n"
        );
    }

    #[test]
    fn test_report_price_prints_rejected_percentage() {
        let magazine = Magazine::new("Vogue", 12.99, 123).unwrap();
        let mut out = Vec::new();
        report_price(&mut out, &magazine, 150.0).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Original price: $12.99\nError: Percentage must be between 0 and 100\n"
        );
    }
}
