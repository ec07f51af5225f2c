//! Error types for input extraction

use thiserror::Error;

/// Errors that can occur while turning raw input into clean text.
///
/// These abort the request; they are never retried automatically.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to build the HTTP client
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Network failure while fetching a URL
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        /// The URL that was being fetched
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Fetching {url} returned HTTP {status}")]
    HttpStatus {
        /// The URL that was being fetched
        url: String,
        /// Response status code
        status: u16,
    },

    /// Failed to read the response body
    #[error("Failed to read body of {url}: {source}")]
    Body {
        /// The URL that was being fetched
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },
}
