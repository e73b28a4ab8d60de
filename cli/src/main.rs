//! Namescout command-line entry point.
//!
//! This is the thin application shell: argument parsing, configuration
//! merging, logging setup, and corpus provisioning. The probing logic lives
//! in the `crates/` directory.

mod logging;

use anyhow::Context;
use clap::Parser;
use namescout_core::AppConfig;
use namescout_lexicon::Lexicon;
use namescout_probe::{HttpAvailabilityClient, ProbeOrchestrator};
use namescout_words::WordSource;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Probe identity providers for available usernames.
///
/// Flags override the config file, which overrides built-in defaults.
#[derive(Parser, Debug)]
#[command(
    name = "namescout",
    version,
    about = "Probe identity providers for available usernames"
)]
struct CliArgs {
    /// Path to the TOML config file (defaults to the XDG config location).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Candidate generation mode: "words" or "random".
    #[arg(long)]
    mode: Option<String>,

    /// Candidate length (random mode) and requested word length.
    #[arg(long)]
    length: Option<usize>,

    /// Candidates per batch.
    #[arg(long)]
    batch_size: Option<usize>,

    /// Word-suggestion provider: "random-word-api" or "random-word-form".
    #[arg(long)]
    word_provider: Option<String>,

    /// Identity provider to probe: "mojang" or "ashcon".
    #[arg(long)]
    availability_provider: Option<String>,

    /// Maximum simultaneous availability checks.
    #[arg(long)]
    concurrency: Option<usize>,

    /// Outer iteration cap.
    #[arg(long)]
    iterations: Option<u64>,

    /// Dictionary corpus file (downloaded on first run when absent).
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Only report available names that are dictionary words.
    #[arg(long)]
    dictionary_only: bool,
}

/// Merge CLI flags over the loaded configuration.
fn apply_overrides(config: &mut AppConfig, args: &CliArgs) -> anyhow::Result<()> {
    if let Some(mode) = &args.mode {
        config.generation.mode = mode.parse().context("invalid --mode")?;
    }
    if let Some(length) = args.length {
        config.generation.name_length = length;
    }
    if let Some(batch_size) = args.batch_size {
        config.generation.batch_size = batch_size;
    }
    if let Some(provider) = &args.word_provider {
        config.generation.word_provider = provider.parse().context("invalid --word-provider")?;
    }
    if let Some(provider) = &args.availability_provider {
        config.probe.availability_provider = provider
            .parse()
            .context("invalid --availability-provider")?;
    }
    if let Some(concurrency) = args.concurrency {
        config.probe.concurrent_checks = concurrency;
    }
    if let Some(iterations) = args.iterations {
        config.probe.max_iterations = iterations;
    }
    if let Some(path) = &args.lexicon {
        config.lexicon.path = Some(path.clone());
    }
    if args.dictionary_only {
        config.probe.report_non_dictionary = false;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path).context("failed to load config")?,
        None => AppConfig::load_with_env().context("failed to load config")?,
    };
    apply_overrides(&mut config, &args)?;
    config.validate().context("invalid configuration")?;

    let log_dir = config.logging.log_dir()?;
    let _guard = logging::init(&log_dir, &config.logging.level)?;

    info!("Starting namescout v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Mode: {}, provider: {}, {} checks in flight",
        config.generation.mode,
        config.probe.availability_provider,
        config.probe.concurrent_checks
    );

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.probe.timeout_secs))
        .user_agent(concat!("namescout/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to create HTTP client")?;

    // The corpus is a startup dependency: missing and unfetchable means no run.
    let corpus_path = config.lexicon.corpus_path()?;
    let lexicon = if config.lexicon.auto_fetch {
        Lexicon::ensure(&corpus_path, &config.lexicon.source_url, &http).await
    } else {
        Lexicon::load(&corpus_path)
    }
    .context("dictionary corpus unavailable")?;
    info!("Dictionary corpus ready: {} words", lexicon.len());

    let source = Arc::new(WordSource::new(http.clone(), &config.generation));
    let client = Arc::new(HttpAvailabilityClient::new(
        http,
        config.probe.availability_provider,
    ));

    let orchestrator = ProbeOrchestrator::new(source, client, Arc::new(lexicon))
        .with_concurrent_checks(config.probe.concurrent_checks)
        .with_max_iterations(config.probe.max_iterations)
        .with_batch_delay(Duration::from_millis(config.probe.delay_between_batches_ms))
        .with_report_non_dictionary(config.probe.report_non_dictionary);

    tokio::select! {
        result = orchestrator.run() => {
            let summary = result.context("probing run failed")?;
            info!(
                "Run complete: {} batches, {} checked, {} available, {} dictionary words",
                summary.batches, summary.checked, summary.available, summary.dictionary_words
            );
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
        }
    }

    Ok(())
}
