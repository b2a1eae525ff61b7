//! Tracing subscriber setup for the CLI

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

/// Installs the global subscriber, logging to stderr
///
/// `RUST_LOG` wins over the built-in filters.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };

    // A second initialization (tests, embedding) is not an error worth surfacing
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
