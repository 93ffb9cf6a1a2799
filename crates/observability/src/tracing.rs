//! Tracing/logging initialization.
//!
//! Log records go to stderr so a binary's stdout stays reserved for its own
//! output.

use ::tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{DEFAULT_FILTER, LogFormat, ObservabilityConfig};

/// Install the global subscriber described by `config`, writing to stderr.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let installed = subscriber(config, std::io::stderr).try_init();

    if installed.is_ok() {
        if let Some(raw) = &config.rejected_format {
            ::tracing::warn!(log_format = %raw, "unrecognised LOG_FORMAT; using json");
        }
    }
}

/// Build (without installing) the subscriber described by `config`.
pub fn subscriber<W>(config: &ObservabilityConfig, writer: W) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match config.format {
        // JSON logs + timestamps.
        LogFormat::Json => Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .json()
                .with_timer(tracing_subscriber::fmt::time::SystemTime)
                .with_target(false)
                .finish(),
        ),
        LogFormat::Pretty => Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .pretty()
                .finish(),
        ),
    }
}
