//! HTTP request builder.

use crate::DataError;
use serde::Serialize;
use std::collections::HashMap;

/// HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
        }
    }
}

/// A builder for constructing HTTP requests.
///
/// The hosted backend exposes its row filters through query-string
/// parameters, so the builder collects them separately from the path and
/// encodes them when the full URL is assembled.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<Vec<u8>>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add multiple headers to the request.
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Add a query-string parameter. Parameters keep insertion order.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the request body as raw bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the request body as a string.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.headers
            .entry("Content-Type".to_string())
            .or_insert_with(|| "text/plain".to_string());
        self.body = Some(text.into_bytes());
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, DataError> {
        let json = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// Set the Content-Type header.
    pub fn content_type(self, content_type: impl Into<String>) -> Self {
        self.header("Content-Type", content_type)
    }

    /// Assemble the URL with the encoded query string appended.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }

        let qs: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect();
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.url, separator, qs.join("&"))
    }
}

/// Percent-encode a query-string component.
fn percent_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_full_url_without_query() {
        let builder = RequestBuilder::new(Method::Get, "https://api.example.com/products");
        assert_eq!(builder.full_url(), "https://api.example.com/products");
    }

    #[test]
    fn test_full_url_with_query() {
        let builder = RequestBuilder::new(Method::Get, "https://api.example.com/products")
            .query("select", "*")
            .query("subcategory_id", "eq.3");
        assert_eq!(
            builder.full_url(),
            "https://api.example.com/products?select=%2A&subcategory_id=eq.3"
        );
    }

    #[test]
    fn test_full_url_appends_to_existing_query() {
        let builder =
            RequestBuilder::new(Method::Get, "https://api.example.com/products?select=*")
                .query("order", "price.asc");
        assert_eq!(
            builder.full_url(),
            "https://api.example.com/products?select=*&order=price.asc"
        );
    }

    #[test]
    fn test_percent_encode_spaces_and_unicode() {
        assert_eq!(percent_encode("mouse gamer"), "mouse%20gamer");
        assert_eq!(percent_encode("categoría"), "categor%C3%ADa");
    }

    #[test]
    fn test_json_body_sets_content_type() {
        #[derive(Serialize)]
        struct Payload {
            name: String,
        }

        let builder = RequestBuilder::new(Method::Post, "https://api.example.com/products")
            .json(&Payload {
                name: "Mouse".to_string(),
            })
            .unwrap();
        assert_eq!(
            builder.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert!(builder.body.is_some());
    }

    #[test]
    fn test_bearer_auth_header() {
        let builder =
            RequestBuilder::new(Method::Get, "https://api.example.com/me").bearer_auth("tok");
        assert_eq!(
            builder.headers.get("Authorization").map(String::as_str),
            Some("Bearer tok")
        );
    }
}
