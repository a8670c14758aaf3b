//! HTTP client utilities for the TechZone hosted backend.
//!
//! The storefront keeps no server of its own: products, subcategories,
//! and reviews live in a hosted backend-as-a-service reached over REST.
//! This crate provides the thin client used for those fetches, with
//! automatic JSON handling and a bounded retry policy.
//!
//! # Example
//!
//! ```rust,ignore
//! use techzone_data::{BackendClient, LoadState};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Row {
//!     id: String,
//!     name: String,
//! }
//!
//! let client = BackendClient::new()
//!     .with_base_url("https://backend.example.com")
//!     .with_api_key("anon-key");
//!
//! let rows: Result<Vec<Row>, _> = client
//!     .get("/rest/v1/products")
//!     .query("select", "*")
//!     .send()
//!     .and_then(|r| r.error_for_status())
//!     .and_then(|r| r.json());
//!
//! // Hand the UI its tri-state.
//! let state = LoadState::from_result(rows);
//! ```

mod error;
mod load;
mod request;
mod response;
mod retry;

pub use error::DataError;
pub use load::LoadState;
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use retry::{Backoff, RetryPolicy};

/// HTTP client for the hosted backend.
///
/// Holds the base URL and the headers every request carries (the
/// backend's API key among them); per-request state lives in the builder.
pub struct BackendClient {
    base_url: Option<String>,
    default_headers: std::collections::HashMap<String, String>,
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendClient {
    /// Create a new client.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: std::collections::HashMap::new(),
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the backend API key.
    ///
    /// The hosted backend expects the key both as the `apikey` header and
    /// as a bearer token.
    pub fn with_api_key(self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.with_default_header("apikey", key.clone())
            .with_default_header("Authorization", format!("Bearer {}", key))
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PATCH request.
    pub fn patch(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Patch, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder { builder }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Add a query-string parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.query(key, value);
        self
    }

    /// Set the request body as raw bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.builder = self.builder.body(body);
        self
    }

    /// Set the request body as a string.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.builder = self.builder.text(text);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, DataError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// Send the request, retrying per the given policy.
    ///
    /// Retries only on errors the policy classifies as transient; the
    /// backoff delay is honored on native targets.
    pub fn send_with_retry(self, policy: &RetryPolicy) -> Result<Response, DataError> {
        let mut attempt = 0;
        loop {
            match self.clone_for_attempt().send() {
                Ok(response) => return Ok(response),
                Err(error) => {
                    if !policy.should_retry(&error, attempt) {
                        return Err(error);
                    }
                    let delay = policy.backoff.delay_for_attempt(attempt);
                    tracing::warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "retrying backend request"
                    );
                    #[cfg(not(target_arch = "wasm32"))]
                    std::thread::sleep(delay);
                    attempt += 1;
                }
            }
        }
    }

    fn clone_for_attempt(&self) -> Self {
        Self {
            builder: self.builder.clone(),
        }
    }

    /// Send the request and return the response.
    #[cfg(target_arch = "wasm32")]
    pub fn send(self) -> Result<Response, DataError> {
        use spin_sdk::http::{Method as SpinMethod, Request};

        let method = match self.builder.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Patch => SpinMethod::Patch,
            Method::Delete => SpinMethod::Delete,
            Method::Head => SpinMethod::Head,
        };

        let url = self.builder.full_url();
        tracing::debug!(method = self.builder.method.as_str(), url = %url, "backend request");

        let mut request = Request::builder();
        request.method(method);
        request.uri(&url);

        for (key, value) in &self.builder.headers {
            request.header(key.as_str(), value.as_str());
        }

        let request = if let Some(body) = self.builder.body {
            request.body(body).map_err(|e| DataError::Request(e.to_string()))?
        } else {
            request.build()
        };

        let response = spin_sdk::http::send(request)
            .map_err(|e| DataError::Request(e.to_string()))?;

        let status = response.status();
        let headers: std::collections::HashMap<String, String> = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.into_body();

        Ok(Response::new(status, headers, body))
    }

    /// Send the request and return the response (non-WASM stub).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn send(self) -> Result<Response, DataError> {
        let url = self.builder.full_url();
        tracing::debug!(method = self.builder.method.as_str(), url = %url, "backend request (stub)");

        // Empty response for non-WASM builds (testing/development)
        Ok(Response::new(
            200,
            std::collections::HashMap::new(),
            Vec::new(),
        ))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{BackendClient, DataError, LoadState, Method, Response, RetryPolicy};
}
