//! # iss-core
//!
//! Core crate for the MOEX ISS trade collectors, providing:
//!
//! - **Types** (`types`) — instruments and trade identifiers
//! - **Market** (`market`) — per-market-class endpoints and labels
//! - **Configuration** (`config`) — JSON config deserialization with defaults
//! - **Error types** (`error`) — domain-specific `CollectorError` via thiserror
//! - **Deduplication** (`dedup`) — seen-TRADENO tracking within one fetch
//! - **Session** (`session`) — trading-session and file-timestamp helpers
//! - **Logging** (`logging`) — tracing-based structured logging

pub mod config;
pub mod dedup;
pub mod error;
pub mod logging;
pub mod market;
pub mod session;
pub mod types;

// Re-export the most-used items at crate root for convenience.
pub use market::Market;
pub use types::{Instrument, TradeNo};
