//! # Book
//!
//! A book on the stall: title, author, price, page count and an optional
//! seller.
//!
//! ## Field Access
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field        Access                     Mutable?                       │
//! │  ──────────   ────────────────────────   ────────────────────────────   │
//! │  title        title()                    no                             │
//! │  author       author()                   no                             │
//! │  price        price() / set_price()      yes, validated                 │
//! │  page_count   page_count() / set / clear yes, may be absent             │
//! │  seller       pub field                  yes, anything goes             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::{apply_percentage_discount, Dollars};
use crate::priced::PricedItem;
use crate::rng::{PageRng, ThreadPageRng};
use crate::validation::{validate_discount_percentage, validate_price};
use crate::{MAX_PAGE_COUNT, MIN_PAGE_COUNT};

// =============================================================================
// Book
// =============================================================================

/// A book for sale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    title: String,
    author: String,
    price: f64,
    page_count: Option<u32>,

    /// Who is selling this copy. Free-form and unvalidated.
    pub seller: Option<String>,
}

impl Book {
    /// Category tag shared by every book.
    pub const CATEGORY_CODE: &'static str = "BOOK";

    /// Creates a book with no seller and a random page count.
    ///
    /// # Errors
    /// `CoreError::InvalidArgument` if `price` is negative or not finite.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
    ) -> CoreResult<Self> {
        Self::with_rng(title, author, price, None, &mut ThreadPageRng::new())
    }

    /// Creates a book sold by `seller` with a random page count.
    ///
    /// # Errors
    /// `CoreError::InvalidArgument` if `price` is negative or not finite.
    pub fn with_seller(
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
        seller: impl Into<String>,
    ) -> CoreResult<Self> {
        Self::with_rng(
            title,
            author,
            price,
            Some(seller.into()),
            &mut ThreadPageRng::new(),
        )
    }

    /// Creates a book whose page count is drawn from `rng`.
    ///
    /// ## Example
    /// ```rust
    /// use bookstall_core::{Book, SeededPageRng};
    ///
    /// let mut rng = SeededPageRng::from_seed(320);
    /// let book = Book::with_rng("Dune", "Frank Herbert", 9.5, None, &mut rng).unwrap();
    /// assert!((100..=1000).contains(&book.page_count().unwrap()));
    /// ```
    ///
    /// # Errors
    /// `CoreError::InvalidArgument` if `price` is negative or not finite.
    pub fn with_rng(
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
        seller: Option<String>,
        rng: &mut dyn PageRng,
    ) -> CoreResult<Self> {
        validate_price(price)?;

        Ok(Self {
            title: title.into(),
            author: author.into(),
            price,
            page_count: Some(Self::random_page_count_with(rng)),
            seller,
        })
    }

    /// Returns the category code. No instance needed.
    #[inline]
    pub const fn category_code() -> &'static str {
        Self::CATEGORY_CODE
    }

    /// Draws a page count uniformly from `[100, 1000]` using the thread RNG.
    pub fn random_page_count() -> u32 {
        Self::random_page_count_with(&mut ThreadPageRng::new())
    }

    /// Draws a page count from `[100, 1000]` using `rng`.
    pub fn random_page_count_with(rng: &mut dyn PageRng) -> u32 {
        rng.next_u32_range(MIN_PAGE_COUNT, MAX_PAGE_COUNT)
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// One-line description, e.g. `Harry Potter by J.K. Rowling - $10.99`.
    pub fn summary(&self) -> String {
        format!("{} by {} - {}", self.title, self.author, Dollars(self.price))
    }

    /// Returns the page count.
    ///
    /// # Errors
    /// `CoreError::AttributeMissing` after [`Book::clear_page_count`] until a
    /// new count is set.
    pub fn page_count(&self) -> CoreResult<u32> {
        self.page_count.ok_or(CoreError::AttributeMissing {
            entity: "Book",
            attribute: "page_count",
        })
    }

    /// Replaces the page count. Any value is accepted.
    pub fn set_page_count(&mut self, pages: u32) {
        self.page_count = Some(pages);
    }

    /// Removes the page count entirely.
    pub fn clear_page_count(&mut self) {
        self.page_count = None;
    }
}

impl PricedItem for Book {
    fn price(&self) -> f64 {
        self.price
    }

    fn set_price(&mut self, price: f64) -> CoreResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    fn calculate_discount(&self, percentage: f64) -> CoreResult<f64> {
        validate_discount_percentage(percentage)?;
        Ok(apply_percentage_discount(self.price, percentage))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
