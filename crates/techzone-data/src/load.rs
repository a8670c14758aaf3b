//! Fetch lifecycle state surfaced to the UI.

use crate::DataError;

/// The loading/error/success tri-state for an asynchronous fetch.
///
/// The storefront UI renders from this directly: a spinner while
/// `Loading`, the data once `Ready`, a message when `Failed`. An empty
/// `Ready` collection is not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Fetch in flight, nothing to show yet.
    Loading,
    /// Fetch completed with data.
    Ready(T),
    /// Fetch failed with a user-presentable message.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Build from a fetch result.
    pub fn from_result(result: Result<T, DataError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    /// Check if the fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Check if data is available.
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    /// Check if the fetch failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    /// Get the data, if available.
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Get the failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Map the contained data, preserving loading/failure states.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Ready(value) => LoadState::Ready(f(value)),
            LoadState::Failed(message) => LoadState::Failed(message),
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}
