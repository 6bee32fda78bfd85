//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LOG_ENV;

static INIT: Once = Once::new();

/// Installs a stderr fmt subscriber, filtered by `MERGE_BENCH_LOG`.
///
/// Falls back to `merge_bench=info` if the variable is unset or invalid. Stdout is left to the
/// measured numbers. Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("merge_bench=info"));

        // Another subscriber may already be installed, e.g. by a test harness.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
    });
}
