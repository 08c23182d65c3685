//! Reviews

use jiff::Timestamp;
use rustc_hash::FxHashMap;
use uuid::Uuid;

/// A single product review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Opaque review id.
    pub id: String,

    /// Product the review belongs to.
    pub product_id: String,

    /// Reviewer display name, trimmed.
    pub author: String,

    /// Star rating, always within 1..=5.
    pub rating: u8,

    /// Review text, trimmed.
    pub comment: String,

    /// When the review was written.
    pub created_at: Timestamp,
}

/// Per-product review lists, newest first. Session-scoped, never
/// persisted.
#[derive(Debug, Default)]
pub struct ReviewBook {
    by_product: FxHashMap<String, Vec<Review>>,
}

impl ReviewBook {
    /// An empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reviews for a product, newest first (empty for unknown products).
    #[must_use]
    pub fn reviews(&self, product_id: &str) -> &[Review] {
        self.by_product
            .get(product_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Add a review and return it.
    ///
    /// The rating is clamped into 1..=5; author and comment are trimmed.
    pub fn add(&mut self, product_id: &str, author: &str, rating: u8, comment: &str) -> Review {
        let review = Review {
            id: Uuid::new_v4().to_string(),
            product_id: product_id.to_owned(),
            author: author.trim().to_owned(),
            rating: rating.clamp(1, 5),
            comment: comment.trim().to_owned(),
            created_at: Timestamp::now(),
        };

        self.by_product
            .entry(product_id.to_owned())
            .or_default()
            .insert(0, review.clone());

        review
    }
}
