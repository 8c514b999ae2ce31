//! Logging initialization using the `tracing` ecosystem.
//!
//! Each collector writes the same stream to two targets:
//! - Console output (colored, human-readable)
//! - File output (daily rotation via `tracing-appender`), one file prefix
//!   per collector (`futures_collector` / `shares_collector`)
//!
//! Level defaults to `info` and can be overridden via `RUST_LOG` or the
//! `--log-level` flag.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Should be called once at program start, before any collection work.
///
/// # Parameters
///
/// - `log_level`: default level if `RUST_LOG` env var is not set (e.g. `"info"`)
/// - `log_dir`: optional directory for daily-rotating log files
/// - `collector_name`: used as the log file prefix (e.g. `"futures_collector"`)
pub fn init_logging(log_level: &str, log_dir: Option<&str>, collector_name: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let console_layer = fmt::layer().with_target(true).with_ansi(true);

    if let Some(dir) = log_dir {
        let file_appender = tracing_appender::rolling::daily(dir, collector_name);
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
    }
}
