use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Diagnostics go to stderr; stdout carries only results. `RUST_LOG` wins over flags.
pub fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
