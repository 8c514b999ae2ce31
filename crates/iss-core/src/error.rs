//! Typed error definitions for the collectors.
//!
//! Provides [`CollectorError`] for domain-specific errors that are more
//! informative than plain `anyhow::Error` strings. All variants implement
//! `std::error::Error` via `thiserror`, so they integrate seamlessly with
//! `anyhow::Result`.

use thiserror::Error;

/// Domain-specific errors for the trade collectors.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// HTTP transport error (connect, timeout, non-2xx status).
    #[error("http error: {0}")]
    Http(String),

    /// Response payload could not be parsed as the expected ISS shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Instrument listing failed (network or parse).
    #[error("listing error: {0}")]
    Listing(String),

    /// Output file could not be written.
    #[error("storage error: {0}")]
    Storage(String),
}
