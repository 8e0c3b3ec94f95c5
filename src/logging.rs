//! `tracing` subscriber setup.
//!
//! Filter comes from `RUST_LOG`, then [`LOG_ENV`], then
//! [`DEFAULT_LOG_FILTER`]. Logs go to stderr unless a file is given.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::consts::{DEFAULT_LOG_FILTER, LOG_ENV};

/// Resolve the filter directive string from the environment.
pub fn log_filter() -> String {
    filter_from(|key| std::env::var(key).ok())
}

/// First set variable wins: `RUST_LOG`, then [`LOG_ENV`], then the default.
fn filter_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("RUST_LOG")
        .or_else(|| lookup(LOG_ENV))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global subscriber.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::builder().parse_lossy(log_filter());

    let layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .with_writer(file)
                .with_target(false)
                .with_ansi(false)
                .with_filter(filter)
                .boxed()
        }
        None => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(false)
            .with_filter(filter)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(())
}
