//! Namescout Words - candidate batch production.
//!
//! Produces batches of candidate names either by calling a remote
//! word-suggestion service or by synthesizing random tokens locally. The
//! [`CandidateSource`] trait is the seam the orchestrator consumes, so tests
//! can substitute scripted sources.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod source;

pub use error::{Result, WordSourceError};
pub use source::{suggestion_url, CandidateSource, WordSource};
