//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when fetching from the catalog API.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport or connectivity failure.
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP error response from the catalog.
    #[error("HTTP {status}: {url}")]
    Http { status: u16, url: String },

    /// Malformed response body.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Missing product or category.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CatalogError {
    /// Display-ready message for the error view state.
    ///
    /// Never empty: falls back to a generic message when the underlying
    /// failure carries none.
    pub fn display_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Unknown error occurred".to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CatalogError::Decode(e.to_string())
        } else {
            CatalogError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message_is_non_empty() {
        let err = CatalogError::Network("connection refused".to_string());
        assert!(!err.display_message().is_empty());
        assert!(err.display_message().contains("connection refused"));
    }

    #[test]
    fn test_http_error_carries_status() {
        let err = CatalogError::Http {
            status: 503,
            url: "https://example.com/products".to_string(),
        };
        assert!(err.to_string().contains("503"));
    }
}
