//! Error types for candidate batch production.

use thiserror::Error;

/// Errors raised while producing a candidate batch.
///
/// Both variants mean the word service was unusable for this batch; neither
/// is retried here. The orchestrator decides what a failed batch means for
/// the run.
#[derive(Debug, Error)]
pub enum WordSourceError {
    /// The suggestion request failed at the HTTP level.
    #[error("word service request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response arrived but was not a JSON array of strings.
    #[error("word service returned an unparseable payload: {reason}")]
    Decode {
        /// Decoder diagnostic.
        reason: String,
    },
}

/// Result type alias using [`WordSourceError`].
pub type Result<T> = std::result::Result<T, WordSourceError>;
