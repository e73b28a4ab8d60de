//! Error types for lexicon loading and provisioning.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or provisioning the dictionary corpus.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The corpus file does not exist and auto-fetch was not attempted.
    #[error("dictionary corpus missing at {path}")]
    CorpusMissing {
        /// Expected corpus location.
        path: PathBuf,
    },

    /// The corpus file exists but contains no words.
    #[error("dictionary corpus at {path} contains no words")]
    CorpusEmpty {
        /// Corpus location.
        path: PathBuf,
    },

    /// I/O failure reading or writing the corpus file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Downloading the corpus failed.
    #[error("corpus download failed: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Result type alias using [`LexiconError`].
pub type Result<T> = std::result::Result<T, LexiconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LexiconError::CorpusMissing {
            path: PathBuf::from("/data/words.txt"),
        };
        assert_eq!(err.to_string(), "dictionary corpus missing at /data/words.txt");
    }
}
