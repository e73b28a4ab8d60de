//! Namescout Lexicon - static dictionary lookup.
//!
//! Loads a one-word-per-line corpus into memory and answers whether a
//! candidate is a recognized natural-language word. The corpus must be
//! present (or provisioned) before the polling loop starts; a missing corpus
//! is a startup failure, never a per-call one.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod error;

pub use error::{LexiconError, Result};

use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// An in-memory dictionary of lowercase words.
///
/// Lookups are case-normalized: both the corpus and queries are lowercased,
/// matching the reference corpus convention.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Load the corpus from a one-word-per-line file.
    ///
    /// Blank lines and surrounding whitespace are ignored. Words are
    /// lowercased on insert.
    ///
    /// # Errors
    /// Returns [`LexiconError::CorpusMissing`] if the file does not exist,
    /// [`LexiconError::CorpusEmpty`] if it contains no words, and
    /// [`LexiconError::Io`] on read failure.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LexiconError::CorpusMissing {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path)?;
        let words: HashSet<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();

        if words.is_empty() {
            return Err(LexiconError::CorpusEmpty {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!("Loaded {} words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// Build a lexicon from an in-memory word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.into().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Load the corpus, downloading it first if the file is missing.
    ///
    /// This is the one-time provisioning step: when `path` does not exist the
    /// corpus is fetched from `source_url` and written to `path`, then loaded
    /// normally.
    pub async fn ensure(path: &Path, source_url: &str, client: &reqwest::Client) -> Result<Self> {
        if !path.exists() {
            tracing::info!(
                "Corpus missing at {}, fetching from {}",
                path.display(),
                source_url
            );
            let body = client
                .get(source_url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, body)?;
        }

        Self::load(path)
    }

    /// Whether the candidate is a recognized dictionary word.
    ///
    /// Pure lookup: no I/O, no failure mode beyond "not found".
    #[must_use]
    pub fn is_word(&self, candidate: &str) -> bool {
        self.words.contains(&candidate.to_lowercase())
    }

    /// Number of words in the corpus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the corpus is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
