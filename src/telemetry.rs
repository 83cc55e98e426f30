//! The process's own diagnostic log.
//!
//! Startup notices, sink fallbacks and the summary line go to standard error
//! through `tracing`. They never reach the generated log file.

use std::io::{self, IsTerminal};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Colours are only used when standard error is a terminal.
///
/// Keep the returned guard alive for as long as log lines should be
/// delivered; dropping it flushes the background writer. Installing a second
/// subscriber is a no-op.
pub fn init() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(io::stderr());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(writer)
        .try_init();

    guard
}
