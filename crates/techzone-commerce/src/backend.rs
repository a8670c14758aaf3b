//! Typed fetchers over the hosted backend.
//!
//! The storefront's data lives behind a hosted REST backend; every
//! collection is refreshed in full per fetch, and the engine is handed
//! the resulting arrays. Enabled with the `backend` feature.

use crate::catalog::{Category, Product, Review, Subcategory};
use crate::ids::ProductId;
use serde::de::DeserializeOwned;
use techzone_data::{BackendClient, DataError, RetryPolicy};

/// Typed access to the storefront's backend tables.
pub struct StoreBackend {
    client: BackendClient,
    retry: RetryPolicy,
}

impl StoreBackend {
    /// Wrap a configured client.
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            retry: RetryPolicy::default(),
        }
    }

    /// Override the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Fetch the full product collection.
    pub fn products(&self) -> Result<Vec<Product>, DataError> {
        self.fetch_table("/rest/v1/products")
    }

    /// Fetch the subcategory labels.
    pub fn subcategories(&self) -> Result<Vec<Subcategory>, DataError> {
        self.fetch_table("/rest/v1/subcategories")
    }

    /// Fetch the category labels.
    pub fn categories(&self) -> Result<Vec<Category>, DataError> {
        self.fetch_table("/rest/v1/categories")
    }

    /// Fetch the reviews for one product.
    pub fn reviews(&self, product_id: &ProductId) -> Result<Vec<Review>, DataError> {
        self.client
            .get("/rest/v1/reviews")
            .query("select", "*")
            .query("product_id", format!("eq.{}", product_id))
            .send_with_retry(&self.retry)?
            .error_for_status()?
            .json()
    }

    fn fetch_table<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, DataError> {
        self.client
            .get(path)
            .query("select", "*")
            .send_with_retry(&self.retry)?
            .error_for_status()?
            .json()
    }
}
