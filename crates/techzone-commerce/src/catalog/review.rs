//! Product review records.

use crate::error::StoreError;
use crate::ids::{ProductId, ReviewId};
use serde::{Deserialize, Serialize};

/// An individual product review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// Product being reviewed.
    pub product_id: ProductId,
    /// Display name of the author.
    pub author: String,
    /// Rating, 1-5 stars.
    pub rating: u8,
    /// Optional headline.
    #[serde(default)]
    pub title: Option<String>,
    /// Review text.
    pub body: String,
    /// Creation timestamp as reported by the backend.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Review {
    /// Create a review, validating the rating range.
    pub fn new(
        product_id: impl Into<ProductId>,
        author: impl Into<String>,
        rating: u8,
        body: impl Into<String>,
    ) -> Result<Self, StoreError> {
        if !(1..=5).contains(&rating) {
            return Err(StoreError::InvalidRating(rating));
        }
        Ok(Self {
            id: ReviewId::generate(),
            product_id: product_id.into(),
            author: author.into(),
            rating,
            title: None,
            body: body.into(),
            created_at: None,
        })
    }
}

/// Aggregated review statistics for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewSummary {
    /// Number of reviews.
    pub total: u32,
    /// Mean rating, 0.0 when there are no reviews.
    pub average_rating: f64,
}

impl ReviewSummary {
    /// Aggregate a product's reviews.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self {
                total: 0,
                average_rating: 0.0,
            };
        }
        let total = reviews.len() as u32;
        let sum: u32 = reviews.iter().map(|r| r.rating as u32).sum();
        Self {
            total,
            average_rating: sum as f64 / total as f64,
        }
    }
}
