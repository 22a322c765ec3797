use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Batch operations ([`crate::NewsBuilder::fetch`], [`crate::SnapshotBuilder::fetch`])
/// never fail because one item failed; per-item errors are collected next to the rows
/// instead. A batch call only returns `Err` for caller mistakes.
#[derive(Debug, Error)]
pub enum DeskError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A JSON document (provider response or catalog) failed to deserialize.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The requested resource does not exist (HTTP 404), e.g. an unknown ticker.
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned the error.
        url: String,
    },

    /// The provider is throttling requests (HTTP 429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned the error.
        url: String,
    },

    /// The provider failed with a 5xx status.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the provider was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The search provider did not hand out a query token.
    #[error("Search token error: {0}")]
    Token(String),

    /// The market-data provider returned no usable closing prices for a ticker.
    #[error("no price history for {ticker}")]
    EmptyHistory {
        /// The ticker symbol that came back empty.
        ticker: String,
    },

    /// The request parameters are invalid (e.g. an empty keyword set).
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl DeskError {
    /// Maps a non-success HTTP status to the matching error variant.
    pub(crate) fn from_status(code: u16, url: impl Into<String>) -> Self {
        let url = url.into();
        match code {
            404 => Self::NotFound { url },
            429 => Self::RateLimited { url },
            500..=599 => Self::ServerError { status: code, url },
            _ => Self::Status { status: code, url },
        }
    }
}
