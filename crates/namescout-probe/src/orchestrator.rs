//! Batch polling loop: generate, fan out, classify, report, repeat.

use crate::checker::{check_candidate, AvailabilityClient};
use crate::error::Result;
use futures::future;
use namescout_core::types::{Availability, CheckResult};
use namescout_lexicon::Lexicon;
use namescout_words::CandidateSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Default cap on simultaneous in-flight availability checks.
const DEFAULT_CONCURRENT_CHECKS: usize = 40;

/// Default outer iteration cap; effectively "run indefinitely".
const DEFAULT_MAX_ITERATIONS: u64 = 10_000;

/// Counters accumulated over a probing run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Batches fully processed.
    pub batches: u64,
    /// Candidates checked.
    pub checked: u64,
    /// Candidates the provider reported available.
    pub available: u64,
    /// Available candidates that were dictionary words.
    pub dictionary_words: u64,
    /// Checks that failed at the transport level.
    pub transport_failures: u64,
}

/// Drives the availability-polling loop.
///
/// Owns the concurrency limiter configuration and the batch cycle: produce a
/// batch, launch one check task per candidate (all sharing one semaphore),
/// wait for the whole batch, report each result, continue. Batches never
/// overlap.
pub struct ProbeOrchestrator {
    source: Arc<dyn CandidateSource>,
    client: Arc<dyn AvailabilityClient>,
    lexicon: Arc<Lexicon>,
    concurrent_checks: usize,
    max_iterations: u64,
    batch_delay: Duration,
    report_non_dictionary: bool,
}

impl ProbeOrchestrator {
    /// Create a new orchestrator with default limits.
    #[must_use]
    pub fn new(
        source: Arc<dyn CandidateSource>,
        client: Arc<dyn AvailabilityClient>,
        lexicon: Arc<Lexicon>,
    ) -> Self {
        Self {
            source,
            client,
            lexicon,
            concurrent_checks: DEFAULT_CONCURRENT_CHECKS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            batch_delay: Duration::ZERO,
            report_non_dictionary: true,
        }
    }

    /// Set the cap on simultaneous in-flight checks.
    #[must_use]
    pub fn with_concurrent_checks(mut self, max: usize) -> Self {
        self.concurrent_checks = max;
        self
    }

    /// Set the outer iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max: u64) -> Self {
        self.max_iterations = max;
        self
    }

    /// Set a pause between batches.
    #[must_use]
    pub fn with_batch_delay(mut self, delay: Duration) -> Self {
        self.batch_delay = delay;
        self
    }

    /// Whether available names outside the dictionary are reported at info.
    #[must_use]
    pub fn with_report_non_dictionary(mut self, report: bool) -> Self {
        self.report_non_dictionary = report;
        self
    }

    /// Run the polling loop until the iteration cap is exhausted.
    ///
    /// A word-source failure aborts the run: without backoff, a broken
    /// source would fail identically on the next iteration. Per-check
    /// failures never abort anything; they surface as diagnostics in the
    /// summary.
    pub async fn run(&self) -> Result<RunSummary> {
        let limiter = Arc::new(Semaphore::new(self.concurrent_checks));
        let mut summary = RunSummary::default();

        for iteration in 0..self.max_iterations {
            let batch = match self.source.produce_batch().await {
                Ok(batch) => batch,
                Err(e) => {
                    tracing::error!(
                        "Word source failed on iteration {}: {}",
                        iteration + 1,
                        e
                    );
                    return Err(e.into());
                }
            };

            let mut handles = Vec::with_capacity(batch.len());
            for candidate in batch {
                handles.push(tokio::spawn(check_candidate(
                    Arc::clone(&self.client),
                    Arc::clone(&self.lexicon),
                    Arc::clone(&limiter),
                    candidate,
                )));
            }

            // Fan-in: results come back in launch order, completion order
            // is unconstrained.
            for joined in future::join_all(handles).await {
                match joined {
                    Ok(result) => self.report(&result, &mut summary),
                    Err(e) => tracing::error!("Availability check task failed: {}", e),
                }
            }
            summary.batches += 1;

            if !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        tracing::info!(
            "Iteration cap reached after {} batches ({} candidates checked, {} available)",
            summary.batches,
            summary.checked,
            summary.available
        );
        Ok(summary)
    }

    /// Log one check result and fold it into the summary.
    fn report(&self, result: &CheckResult, summary: &mut RunSummary) {
        summary.checked += 1;
        match result.availability {
            Availability::Available { dictionary_word } => {
                summary.available += 1;
                if dictionary_word {
                    summary.dictionary_words += 1;
                    tracing::info!(
                        "'{}' is available and is a valid dictionary word.",
                        result.candidate
                    );
                } else if self.report_non_dictionary {
                    tracing::info!(
                        "'{}' is available but is not a dictionary word.",
                        result.candidate
                    );
                }
            }
            Availability::BadRequest => {
                tracing::warn!("'{}': Bad request.", result.candidate);
            }
            Availability::TransportFailed => {
                summary.transport_failures += 1;
                tracing::debug!("Availability lookup failed for '{}'", result.candidate);
            }
            Availability::Unexpected { status } => {
                tracing::debug!("Unexpected status: {} for name: '{}'", status, result.candidate);
            }
        }
    }
}
