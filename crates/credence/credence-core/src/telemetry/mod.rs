//! Tracing setup: subscriber initialization and span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "CREDENCE_LOG";

/// Initialize the Credence tracing/logging system.
///
/// Reads `CREDENCE_LOG` for per-crate log levels.
/// Format: `CREDENCE_LOG=credence_linking=trace,credence_scoring=debug`
///
/// Falls back to `info` if `CREDENCE_LOG` is not set or is invalid.
/// Idempotent.
pub fn init_tracing() {
    init_with(&ObservabilityConfig::default());
}

/// Initialize tracing from an [`ObservabilityConfig`]. `CREDENCE_LOG` still wins.
pub fn init_with(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let registry = tracing_subscriber::registry().with(filter);
        if config.json_logs {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .init();
        }
    });
}
