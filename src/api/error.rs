//! Error types for book service requests.

use thiserror::Error;

/// Errors that can occur while talking to the book service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never completed (connect failure, timeout, reset)
    #[error("{method} {url} failed: {source}")]
    Network {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status
    #[error("{method} {url} returned HTTP {status}: {body}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    /// The response body was not the expected JSON
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Stable tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client",
            ApiError::Network { .. } => "network",
            ApiError::Status { .. } => "http",
            ApiError::Decode { .. } => "decode",
        }
    }

    /// HTTP status, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
