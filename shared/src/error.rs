//! Failure modes of a backend call.

use thiserror::Error;

/// Error returned by every gallery API call.
///
/// Callers log it and degrade to an empty view; nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("HTTP error: {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },
    /// The body did not decode into the expected model.
    #[error("Parse error: {0}")]
    Parse(String),
    /// The request body could not be encoded.
    #[error("Serialize error: {0}")]
    Serialize(String),
}

impl ApiError {
    /// True for a `404 Not Found` answer.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404 })
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn display_matches_log_format() {
        assert_eq!(ApiError::Http { status: 500 }.to_string(), "HTTP error: 500");
        assert_eq!(
            ApiError::Network("TypeError: Failed to fetch".to_string()).to_string(),
            "Network error: TypeError: Failed to fetch"
        );
    }

    #[test]
    fn only_404_is_not_found() {
        assert!(ApiError::Http { status: 404 }.is_not_found());
        assert!(!ApiError::Http { status: 500 }.is_not_found());
        assert!(!ApiError::Parse("eof".to_string()).is_not_found());
    }
}
