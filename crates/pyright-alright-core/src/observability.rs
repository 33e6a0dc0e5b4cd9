//! Tracing initialization.
//!
//! Uses `config::ObservabilityConfig` for PYRIGHT_ALRIGHT_QUIET, LOG_LEVEL and
//! LOG_JSON. `RUST_LOG` wins over all of them. Everything goes to stderr.

use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

/// Tracing initialization mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TracingMode {
    /// Builder: progress at `info` unless quiet.
    Builder,
    /// Launcher: stay out of the wrapped tool's output, `warn` and above only.
    Launcher,
}

/// Filter directive for the given mode and config.
pub fn filter_directive(mode: TracingMode, cfg: &ObservabilityConfig) -> String {
    match mode {
        TracingMode::Launcher => "warn".to_string(),
        TracingMode::Builder if cfg.quiet => "warn".to_string(),
        TracingMode::Builder => cfg.log_level.clone(),
    }
}

/// Initialize tracing. Call once at process startup; later calls are no-ops.
pub fn init_tracing(mode: TracingMode) {
    let cfg = ObservabilityConfig::from_env();
    let level = filter_directive(mode, &cfg);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
    };
}
