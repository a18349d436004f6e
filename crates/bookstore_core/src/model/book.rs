//! Book domain model.
//!
//! # Responsibility
//! - Define the purchasable catalog record and its review log.
//! - Provide value-equality used by catalog membership checks.
//!
//! # Invariants
//! - Identity is `(title, author, genre, price)`; `reviews` never participates.
//! - `reviews` is append-only.
//! - A persisted/added book has a finite, non-negative `price`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation errors for book records.
#[derive(Debug, Clone, PartialEq)]
pub enum BookValidationError {
    /// Price is NaN, infinite, or negative.
    InvalidPrice(f64),
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPrice(price) => {
                write!(f, "book price must be finite and >= 0, got {price}")
            }
        }
    }
}

impl Error for BookValidationError {}

/// Catalog record for one purchasable work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
    /// Reader reviews in insertion order.
    #[serde(default)]
    pub reviews: Vec<String>,
}

impl Book {
    /// Creates a book with an empty review log.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            price,
            reviews: Vec::new(),
        }
    }

    /// Validates invariants required before a book enters a catalog.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(BookValidationError::InvalidPrice(self.price));
        }
        Ok(())
    }

    /// Returns whether `query` equals the title, author, or genre exactly.
    pub fn matches_query(&self, query: &str) -> bool {
        self.title == query || self.author == query || self.genre == query
    }

    /// Read-only view of reviews in insertion order.
    pub fn reviews(&self) -> &[String] {
        &self.reviews
    }

    pub(crate) fn push_review(&mut self, review: impl Into<String>) {
        self.reviews.push(review.into());
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.author == other.author
            && self.genre == other.genre
            && self.price == other.price
    }
}
