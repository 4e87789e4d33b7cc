//! Error types for the aeolus-engine crate.

/// Error type for all fallible operations in the aeolus-engine crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalyticsError {
    /// Returned when the analytics configuration fails validation.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an observation in the input sequence is malformed.
    #[error("invalid observation at index {index}: {reason}")]
    InvalidObservation {
        /// Zero-based position of the offending observation.
        index: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the report cannot be serialized.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the underlying serializer failure.
        reason: String,
    },
}
