//! Error types for availability probing.

use namescout_words::WordSourceError;
use thiserror::Error;

/// Errors that abort a probing run.
///
/// Per-check failures never appear here; they are downgraded to
/// `Availability::TransportFailed` at the checker boundary so one failing
/// lookup cannot take down a batch.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The word source failed to produce a batch.
    #[error("word source failed: {0}")]
    Source(#[from] WordSourceError),
}

/// Transport-level failure of a single availability lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The HTTP exchange failed (timeout, connection refused, DNS).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-HTTP lookup failure, used by alternate client implementations.
    #[error("{0}")]
    Other(String),
}

/// Result type alias using [`ProbeError`].
pub type Result<T> = std::result::Result<T, ProbeError>;
