//! Fetch errors.

use ohlcdash_types::OhlcdashError;
use thiserror::Error;

/// Errors that can occur while fetching chart data.
///
/// Every variant renders a human-readable message; the view layer shows
/// that message without distinguishing the stage that failed.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network or transport failure.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Server returned a non-success status.
    #[error("Server error: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Payload is missing expected fields or is not valid JSON.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The envelope carried an error object instead of a result.
    #[error("Upstream error {code}: {description}")]
    Upstream {
        /// Error code reported by the endpoint.
        code: String,
        /// Error description reported by the endpoint.
        description: String,
    },
}

impl FetchError {
    /// Returns true if the request timed out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl From<FetchError> for OhlcdashError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = FetchError::Status { status: 503 };
        assert_eq!(err.to_string(), "Server error: 503");
    }

    #[test]
    fn test_collapses_into_fetch_failed() {
        let err: OhlcdashError = FetchError::Malformed("missing chart.result".to_string()).into();
        assert_eq!(
            err.to_string(),
            "fetch failed: Malformed response: missing chart.result"
        );
    }

    #[test]
    fn test_is_timeout() {
        assert!(FetchError::Timeout(std::time::Duration::from_secs(1)).is_timeout());
        assert!(!FetchError::Status { status: 500 }.is_timeout());
    }
}
