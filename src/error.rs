//! Error types for the countries demo.

use thiserror::Error;

/// Result type alias for demo operations.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Errors that can occur while talking to the country API or the search node.
#[derive(Error, Debug)]
pub enum DemoError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Search node could not be reached at all.
    #[error("Search node at {url} is not running")]
    NodeUnreachable { url: String },

    /// Search node answered the connectivity probe with something other than 200.
    #[error("Search node at {url} is not available (status {status})")]
    NodeUnavailable { url: String, status: u16 },

    /// Search node rejected a request.
    #[error("Search node returned status {status}: {body}")]
    Engine { status: u16, body: String },

    /// `Response` array is shorter than `TotalCount`.
    #[error("Country document {index} missing from response of {len} entries")]
    MissingDocument { index: u64, len: usize },

    /// URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}
