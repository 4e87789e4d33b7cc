//! Error types for the aeolus-provider crate.

/// Error type for all fallible operations in the aeolus-provider crate.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Wraps a transport-level failure from the HTTP client.
    #[error("request failed: {reason}")]
    Request {
        /// Description of the underlying client failure.
        reason: String,
    },

    /// Returned when the provider answers with a non-success status.
    #[error("provider returned HTTP status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// Returned when the response body cannot be decoded.
    #[error("malformed payload: {reason}")]
    Payload {
        /// Description of the decoding problem.
        reason: String,
    },
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Request {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        ProviderError::Payload {
            reason: e.to_string(),
        }
    }
}
