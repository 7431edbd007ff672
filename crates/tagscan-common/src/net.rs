//! HTTP fetch utilities for tagscan.
//!
//! Provides a simple blocking HTTP GET wrapper used by the document loader.

use std::time::Duration;

use thiserror::Error;

/// User-Agent header sent with all requests.
///
/// Mimics a common desktop browser to avoid basic bot detection.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Knobs for [`fetch_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl FetchOptions {
    /// Replace the timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Why a fetch failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be built.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// The request could not be sent or the URL was rejected.
    #[error("request to {url} failed: {source}")]
    Request {
        /// The requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("HTTP error fetching {url}: {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// Status code returned by the server.
        status: reqwest::StatusCode,
    },
    /// The body could not be read or decoded as text.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        /// The requested URL.
        url: String,
        /// Underlying decoding error.
        #[source]
        source: reqwest::Error,
    },
}

/// Fetch a URL and return its body as text.
///
/// # Errors
///
/// Returns a [`FetchError`] if the HTTP client cannot be created, the request
/// fails, the response has a non-success status, or the body cannot be decoded.
pub fn fetch_text(url: &str, options: &FetchOptions) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(options.timeout)
        .build()
        .map_err(FetchError::Client)?;

    let response = client
        .get(url)
        .header("User-Agent", options.user_agent.as_str())
        .send()
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = FetchOptions::default();
        assert_eq!(options.timeout, DEFAULT_TIMEOUT);
        assert!(options.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_with_timeout() {
        let options = FetchOptions::default().with_timeout(Duration::from_secs(5));
        assert_eq!(options.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_malformed_url_is_request_error() {
        // Rejected while building the request, before any network access.
        let err = fetch_text("not a url", &FetchOptions::default()).unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
    }
}
