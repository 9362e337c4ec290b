//! Error types for the api-client crate.

use thiserror::Error;

/// Errors that can occur when talking to the recommendation backend.
///
/// Every variant carries the request URL so log lines identify which
/// endpoint failed without extra context from the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connect failure, DNS, etc.)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status code
    #[error("server returned {status} for {url}")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body could not be decoded as the expected JSON shape
    #[error("invalid response body from {url}: {source}")]
    InvalidBody {
        url: String,
        source: reqwest::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ApiError>;
