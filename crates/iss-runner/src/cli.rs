//! Shared command-line interface for both collector binaries.
//!
//! The collectors are meant to be launched by an external scheduler with no
//! arguments, so every flag is optional and config-file fields fill in the
//! rest. Precedence: CLI flag > config file > built-in default.

use std::path::PathBuf;

use clap::Parser;
use tracing::error;

use iss_core::Market;
use iss_core::config::{AppConfig, load_config};

/// MOEX ISS trade collector.
#[derive(Debug, Parser)]
pub struct Cli {
    /// Configuration file path (JSON). Defaults apply when absent.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Directory for daily-rotating log files.
    #[arg(long)]
    pub log_dir: Option<String>,

    /// Output directory override.
    #[arg(long)]
    pub data_dir: Option<String>,
}

/// Parse the CLI, initialize logging, and execute one collection run.
///
/// Never returns a failure exit status: every error ends up in the log
/// stream and the scheduler sees success, matching the deployed contract.
pub async fn collector_main(market: Market, collector_name: &str) {
    let cli = Cli::parse();

    let (mut config, config_err) = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => (config, None),
            Err(e) => (AppConfig::default(), Some((path.clone(), e))),
        },
        None => (AppConfig::default(), None),
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    // Both targets always: console plus the per-collector daily log file.
    let log_dir = cli.log_dir.unwrap_or_else(|| config.log_dir().to_string());
    iss_core::logging::init_logging(&cli.log_level, Some(&log_dir), collector_name);

    if let Some((path, e)) = config_err {
        error!("failed to load config {}: {e:#} — using defaults", path.display());
    }

    if let Err(e) = crate::run(market, &config).await {
        error!("{} collection run failed: {e:#}", market.label());
    }
}
