//! Namescout Core - Foundation crate for the Namescout prober.
//!
//! This crate provides the shared data model, error handling, and
//! configuration management that all other Namescout crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Configuration error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes and enums (`Candidate`, `Availability`, provider selections)
//!
//! # Example
//!
//! ```rust
//! use namescout_core::{AppConfig, GenerationMode};
//!
//! let config = AppConfig::default();
//! assert_eq!(config.generation.mode, GenerationMode::Words);
//! assert_eq!(config.probe.concurrent_checks, 40);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{
    AppConfig, GenerationConfig, LexiconConfig, LoggingConfig, ProbeConfig,
};
pub use error::{ConfigError, ConfigResult};
pub use types::{
    Availability, AvailabilityProvider, Candidate, CheckResult, GenerationMode, InvalidCandidate,
    UnknownVariant, WordProvider,
};
