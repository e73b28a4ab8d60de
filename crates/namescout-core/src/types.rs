//! Shared types used across the Namescout workspace.
//!
//! This module defines the candidate newtype, the availability classification
//! model, and the provider-selection enums used by the configuration layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum accepted candidate length in characters.
const MAX_CANDIDATE_LEN: usize = 64;

/// Error returned when a string cannot be used as a [`Candidate`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid candidate '{value}': {reason}")]
pub struct InvalidCandidate {
    /// The rejected input.
    pub value: String,
    /// Why the input was rejected.
    pub reason: &'static str,
}

/// A name being tested for availability.
///
/// Candidates are opaque tokens between 1 and 64 characters with no
/// whitespace. No uniqueness is enforced within or across batches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate(String);

impl Candidate {
    /// Create a new `Candidate` from a string.
    ///
    /// # Errors
    /// Returns [`InvalidCandidate`] if the string is empty, longer than 64
    /// characters, or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidCandidate> {
        let value = value.into();
        if value.is_empty() {
            return Err(InvalidCandidate {
                value,
                reason: "must not be empty",
            });
        }
        if value.chars().count() > MAX_CANDIDATE_LEN {
            return Err(InvalidCandidate {
                value,
                reason: "must be at most 64 characters",
            });
        }
        if value.chars().any(char::is_whitespace) {
            return Err(InvalidCandidate {
                value,
                reason: "must not contain whitespace",
            });
        }
        Ok(Self(value))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a single availability check.
///
/// The dictionary-membership flag exists only on the `Available` variant, so
/// a result can never carry the flag for a name that was not available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// The identity service reported the name unregistered (HTTP 204 or 404).
    Available {
        /// Whether the name is a recognized natural-language word.
        dictionary_word: bool,
    },
    /// The identity service rejected the request as malformed (HTTP 400).
    BadRequest,
    /// Any other HTTP status, including 200 ("name taken" per the Mojang
    /// convention), surfaced as a diagnostic rather than a classification.
    Unexpected {
        /// The raw HTTP status code.
        status: u16,
    },
    /// The lookup failed at the transport level before any status arrived.
    TransportFailed,
}

impl Availability {
    /// Whether this outcome means the name can be registered.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// The dictionary-membership flag, present only for available names.
    #[must_use]
    pub const fn dictionary_word(&self) -> Option<bool> {
        match self {
            Self::Available { dictionary_word } => Some(*dictionary_word),
            _ => None,
        }
    }

    /// The raw HTTP status behind this outcome, with 0 as the transport
    /// failure sentinel. Available outcomes report 204/404 uniformly as 204.
    #[must_use]
    pub const fn raw_status(&self) -> u16 {
        match self {
            Self::Available { .. } => 204,
            Self::BadRequest => 400,
            Self::Unexpected { status } => *status,
            Self::TransportFailed => 0,
        }
    }
}

/// The outcome of checking one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// The candidate that was checked.
    pub candidate: Candidate,
    /// How the check was classified.
    pub availability: Availability,
}

/// Error returned when parsing a selection enum from a string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    /// Which enum was being parsed.
    pub kind: &'static str,
    /// The unrecognized input.
    pub value: String,
}

/// How candidate batches are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMode {
    /// Fetch suggestions from a remote word service.
    #[default]
    Words,
    /// Synthesize random tokens locally.
    Random,
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Words => write!(f, "words"),
            Self::Random => write!(f, "random"),
        }
    }
}

impl FromStr for GenerationMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "words" => Ok(Self::Words),
            "random" => Ok(Self::Random),
            other => Err(UnknownVariant {
                kind: "generation mode",
                value: other.to_string(),
            }),
        }
    }
}

/// Which word-suggestion service to call in `words` mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordProvider {
    /// random-word-api.herokuapp.com - supports count, length, and language.
    #[default]
    RandomWordApi,
    /// random-word-form.herokuapp.com - nouns only, supports count.
    RandomWordForm,
}

impl fmt::Display for WordProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RandomWordApi => write!(f, "random-word-api"),
            Self::RandomWordForm => write!(f, "random-word-form"),
        }
    }
}

impl FromStr for WordProvider {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random-word-api" => Ok(Self::RandomWordApi),
            "random-word-form" => Ok(Self::RandomWordForm),
            other => Err(UnknownVariant {
                kind: "word provider",
                value: other.to_string(),
            }),
        }
    }
}

/// Which identity-lookup service to probe for availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityProvider {
    /// api.mojang.com profile lookup.
    #[default]
    Mojang,
    /// api.ashcon.app Mojang mirror.
    Ashcon,
}

impl fmt::Display for AvailabilityProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mojang => write!(f, "mojang"),
            Self::Ashcon => write!(f, "ashcon"),
        }
    }
}

impl FromStr for AvailabilityProvider {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mojang" => Ok(Self::Mojang),
            "ashcon" => Ok(Self::Ashcon),
            other => Err(UnknownVariant {
                kind: "availability provider",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_accepts_plain_tokens() {
        let candidate = Candidate::new("ZK4_Q7A").expect("valid candidate");
        assert_eq!(candidate.as_str(), "ZK4_Q7A");
        assert_eq!(candidate.to_string(), "ZK4_Q7A");
    }

    #[test]
    fn test_candidate_rejects_empty() {
        let err = Candidate::new("").expect_err("empty must be rejected");
        assert_eq!(err.reason, "must not be empty");
    }

    #[test]
    fn test_candidate_rejects_whitespace() {
        assert!(Candidate::new("two words").is_err());
        assert!(Candidate::new("tab\there").is_err());
    }

    #[test]
    fn test_candidate_rejects_overlong() {
        let long = "x".repeat(65);
        assert!(Candidate::new(long).is_err());
        let max = "x".repeat(64);
        assert!(Candidate::new(max).is_ok());
    }

    #[test]
    fn test_dictionary_flag_only_on_available() {
        let available = Availability::Available {
            dictionary_word: true,
        };
        assert!(available.is_available());
        assert_eq!(available.dictionary_word(), Some(true));

        for other in [
            Availability::BadRequest,
            Availability::Unexpected { status: 200 },
            Availability::TransportFailed,
        ] {
            assert!(!other.is_available());
            assert_eq!(other.dictionary_word(), None);
        }
    }

    #[test]
    fn test_raw_status_sentinel() {
        assert_eq!(Availability::TransportFailed.raw_status(), 0);
        assert_eq!(Availability::Unexpected { status: 503 }.raw_status(), 503);
        assert_eq!(Availability::BadRequest.raw_status(), 400);
    }

    #[test]
    fn test_mode_round_trip() {
        for mode in [GenerationMode::Words, GenerationMode::Random] {
            let parsed: GenerationMode = mode.to_string().parse().expect("parse mode");
            assert_eq!(parsed, mode);
        }
        assert!("wordz".parse::<GenerationMode>().is_err());
    }

    #[test]
    fn test_provider_round_trip() {
        for provider in [WordProvider::RandomWordApi, WordProvider::RandomWordForm] {
            let parsed: WordProvider = provider.to_string().parse().expect("parse provider");
            assert_eq!(parsed, provider);
        }
        for provider in [AvailabilityProvider::Mojang, AvailabilityProvider::Ashcon] {
            let parsed: AvailabilityProvider =
                provider.to_string().parse().expect("parse provider");
            assert_eq!(parsed, provider);
        }
    }

    #[test]
    fn test_provider_serde_kebab_case() {
        let json = serde_json::to_string(&AvailabilityProvider::Ashcon).expect("serialize");
        assert_eq!(json, "\"ashcon\"");
        let parsed: WordProvider =
            serde_json::from_str("\"random-word-form\"").expect("deserialize");
        assert_eq!(parsed, WordProvider::RandomWordForm);
    }
}
