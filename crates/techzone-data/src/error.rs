//! Backend client error types.

use thiserror::Error;

/// Errors that can occur when talking to the hosted backend.
#[derive(Error, Debug)]
pub enum DataError {
    /// Failed to dispatch the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-success HTTP response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to decode the response body.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl DataError {
    /// Whether a retry could plausibly succeed.
    ///
    /// Transport failures, timeouts, and 5xx responses are retryable;
    /// client errors and decode failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            DataError::Request(_) | DataError::Timeout => true,
            DataError::Http { status, .. } => (500..600).contains(status),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_retryable() {
        let err = DataError::Http {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(err.is_retryable());
        assert!(DataError::Timeout.is_retryable());
        assert!(DataError::Request("connection reset".to_string()).is_retryable());
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        let err = DataError::Http {
            status: 404,
            message: "not found".to_string(),
        };
        assert!(!err.is_retryable());
        assert!(!DataError::Decode("bad json".to_string()).is_retryable());
        assert!(!DataError::InvalidUrl("::".to_string()).is_retryable());
    }
}
