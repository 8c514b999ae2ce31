//! Configuration parsing for the collectors.
//!
//! Both collectors read the same JSON config file; every field is optional
//! and defaults to the values the collectors were originally deployed with,
//! so the binaries run with no config file at all.
//!
//! # Example config
//!
//! ```json
//! {
//!   "data_dir": "moex_data",
//!   "log_dir": "logs",
//!   "base_url": "https://iss.moex.com",
//!   "request_timeout_secs": 30,
//!   "instrument_delay_ms": 1000
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// Public ISS endpoint used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://iss.moex.com";

/// Collector configuration, deserialized from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Root of the output tree; files land under `<data_dir>/trades/<market>/`.
    pub data_dir: Option<String>,

    /// Directory for daily-rotating log files.
    pub log_dir: Option<String>,

    /// ISS base URL override (primarily for tests against a local server).
    pub base_url: Option<String>,

    /// Per-request timeout in seconds. The upstream API can stall; an
    /// unbounded request would hang the whole run.
    pub request_timeout_secs: Option<u64>,

    /// Pause after each instrument, in milliseconds. A fixed courtesy delay
    /// towards the public API, not an error backoff.
    pub instrument_delay_ms: Option<u64>,
}

impl AppConfig {
    pub fn data_dir(&self) -> &str {
        self.data_dir.as_deref().unwrap_or("moex_data")
    }

    pub fn log_dir(&self) -> &str {
        self.log_dir.as_deref().unwrap_or("logs")
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(30))
    }

    pub fn instrument_delay(&self) -> Duration {
        Duration::from_millis(self.instrument_delay_ms.unwrap_or(1000))
    }
}

/// Load and parse a JSON config file.
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
