//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// The filter engine itself is infallible; these cover the cart, review
/// validation, and backend decode paths.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Review rating outside the 1-5 range.
    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(u8),

    /// Backend error.
    #[error("Backend error: {0}")]
    BackendError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::SerializationError(e.to_string())
    }
}

#[cfg(feature = "backend")]
impl From<techzone_data::DataError> for StoreError {
    fn from(e: techzone_data::DataError) -> Self {
        StoreError::BackendError(e.to_string())
    }
}
