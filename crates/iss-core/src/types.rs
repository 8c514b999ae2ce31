//! Instruments and trade identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One tradable instrument as reported by the listing endpoint.
///
/// Produced fresh each run; never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Exchange ticker (SECID), unique within one run.
    pub ticker: String,
    /// Display name (SECNAME for futures, SHORTNAME for shares).
    pub name: String,
    /// Expiration date (MATDATE) — futures only, and only when the listing
    /// row actually carries the column.
    pub expiration: Option<String>,
}

/// A trade number (TRADENO) — the per-day, per-instrument unique key of one
/// executed trade, used as the deduplication key.
///
/// ISS returns TRADENO as a JSON number, but some boards encode identifiers
/// as strings, so both forms are accepted and kept distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TradeNo {
    Num(i64),
    Str(String),
}

impl TradeNo {
    /// Extract a trade number from the first element of a trades row.
    ///
    /// Returns `None` when the row is not an array, is empty, or its first
    /// element is neither an integer nor a string. Such rows cannot be
    /// deduplicated and are dropped by the fetcher.
    pub fn from_row(row: &serde_json::Value) -> Option<Self> {
        match row.as_array()?.first()? {
            serde_json::Value::Number(n) => n.as_i64().map(TradeNo::Num),
            serde_json::Value::String(s) => Some(TradeNo::Str(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for TradeNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeNo::Num(n) => write!(f, "{n}"),
            TradeNo::Str(s) => write!(f, "{s}"),
        }
    }
}
