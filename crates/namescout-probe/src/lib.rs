//! Namescout Probe - availability checking and run orchestration.
//!
//! This crate is the core of the prober: it issues identity-lookup requests
//! under a global concurrency cap, classifies the responses, and drives the
//! batch polling loop.
//!
//! # Example
//!
//! ```rust,ignore
//! use namescout_probe::{HttpAvailabilityClient, ProbeOrchestrator};
//! use std::sync::Arc;
//!
//! let orchestrator = ProbeOrchestrator::new(
//!     Arc::new(word_source),
//!     Arc::new(HttpAvailabilityClient::new(client, provider)),
//!     Arc::new(lexicon),
//! )
//! .with_concurrent_checks(40)
//! .with_max_iterations(10_000);
//!
//! let summary = orchestrator.run().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod checker;
pub mod error;
pub mod orchestrator;
pub mod providers;

// Re-export commonly used types
pub use checker::{check_candidate, AvailabilityClient, HttpAvailabilityClient};
pub use error::{LookupError, ProbeError, Result};
pub use orchestrator::{ProbeOrchestrator, RunSummary};
pub use providers::profile_url;
