//! Word source: remote suggestions and local random generation.

use crate::error::{Result, WordSourceError};
use async_trait::async_trait;
use namescout_core::config::GenerationConfig;
use namescout_core::types::{Candidate, GenerationMode, WordProvider};
use rand::Rng;

/// Alphabet for random-mode tokens: uppercase letters, digits, underscore.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// Anything that can produce a batch of candidates.
///
/// The orchestrator only talks to this trait, which keeps the remote word
/// service substitutable in tests.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Produce one batch of candidates.
    async fn produce_batch(&self) -> Result<Vec<Candidate>>;
}

/// Build the suggestion endpoint URL for a word provider.
///
/// `random-word-form` only supports a count; length and language are
/// ignored by that service.
#[must_use]
pub fn suggestion_url(
    provider: WordProvider,
    batch_size: usize,
    name_length: usize,
    language: &str,
) -> String {
    match provider {
        WordProvider::RandomWordApi => format!(
            "https://random-word-api.herokuapp.com/word?number={batch_size}&length={name_length}&lang={language}"
        ),
        WordProvider::RandomWordForm => format!(
            "https://random-word-form.herokuapp.com/random/noun/a?count={batch_size}"
        ),
    }
}

/// Produces candidate batches per the configured generation mode.
#[derive(Debug, Clone)]
pub struct WordSource {
    client: reqwest::Client,
    mode: GenerationMode,
    provider: WordProvider,
    batch_size: usize,
    name_length: usize,
    language: String,
}

impl WordSource {
    /// Create a word source from the generation configuration.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &GenerationConfig) -> Self {
        Self {
            client,
            mode: config.mode,
            provider: config.word_provider,
            batch_size: config.batch_size,
            name_length: config.name_length,
            language: config.language.clone(),
        }
    }

    /// Fetch one batch of suggested words from the remote service.
    async fn fetch_suggestions(&self) -> Result<Vec<Candidate>> {
        let url = suggestion_url(
            self.provider,
            self.batch_size,
            self.name_length,
            &self.language,
        );

        let words: Vec<String> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| WordSourceError::Decode {
                reason: e.to_string(),
            })?;

        let mut batch = Vec::with_capacity(words.len());
        for word in words {
            match Candidate::new(word) {
                Ok(candidate) => batch.push(candidate),
                Err(e) => tracing::warn!("Dropping unusable suggestion: {}", e),
            }
        }
        Ok(batch)
    }

    /// Synthesize one batch of random tokens. Pure local computation.
    fn random_batch(&self) -> Vec<Candidate> {
        let mut rng = rand::thread_rng();
        (0..self.batch_size)
            .map(|_| {
                let token: String = (0..self.name_length)
                    .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                    .collect();
                Candidate::new(token).expect("generated token is a valid candidate")
            })
            .collect()
    }
}

#[async_trait]
impl CandidateSource for WordSource {
    async fn produce_batch(&self) -> Result<Vec<Candidate>> {
        match self.mode {
            GenerationMode::Words => self.fetch_suggestions().await,
            GenerationMode::Random => Ok(self.random_batch()),
        }
    }
}
