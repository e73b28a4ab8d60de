//! Tracing initialization: console output plus a rolling log file.

use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Log lines go to stdout (compact, with targets) and to a daily-rolling
/// file under `directory`, written through a non-blocking worker. The
/// returned guard must be kept alive for the process lifetime so buffered
/// lines are flushed on shutdown.
///
/// `RUST_LOG` overrides the configured default level.
pub fn init(directory: &Path, level: &str) -> anyhow::Result<WorkerGuard> {
    fs::create_dir_all(directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;

    let file_appender = tracing_appender::rolling::daily(directory, "namescout.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(filter)
        .init();

    Ok(guard)
}
