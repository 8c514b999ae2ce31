//! # iss-store
//!
//! Persists merged trade documents as pretty-printed JSON files.
//!
//! One file per instrument per run, under `<data_dir>/trades/<market>/`:
//!
//! | Market  | Filename                                            |
//! |---------|-----------------------------------------------------|
//! | Futures | `{ticker}_trades_{YYYY-MM-DD}_{session}_{HH-MM}.json` |
//! | Shares  | `{ticker}_trades_{YYYY-MM-DD}.json`                 |
//!
//! Futures filenames carry a wall-clock session tag plus a minute-resolution
//! timestamp so the day- and evening-session runs of the same date produce
//! distinct files. Shares filenames carry only the date; a same-day rerun
//! overwrites the earlier file. Files are never deleted or rotated here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use iss_core::Market;
use iss_core::error::CollectorError;
use iss_core::session::{Session, file_date, file_time};

/// File store for one market's trade documents.
pub struct TradeStore {
    dir: PathBuf,
    market: Market,
}

impl TradeStore {
    /// Create a store rooted at `<data_dir>/trades/<market>/`, creating the
    /// directory tree if absent.
    pub fn new(data_dir: impl AsRef<Path>, market: Market) -> Result<Self> {
        let dir = data_dir.as_ref().join("trades").join(market.output_subdir());
        fs::create_dir_all(&dir)
            .map_err(|e| CollectorError::Storage(format!("cannot create {}: {e}", dir.display())))?;
        Ok(Self { dir, market })
    }

    /// Output directory of this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Filename for `ticker` at the given local instant. Pure function of
    /// its arguments so naming is testable without touching the clock.
    pub fn file_name(&self, ticker: &str, now: DateTime<Local>) -> String {
        let date = file_date(now);
        match self.market {
            Market::Futures => {
                let session = Session::at(now).tag();
                let time = file_time(now);
                format!("{ticker}_trades_{date}_{session}_{time}.json")
            }
            Market::Shares => format!("{ticker}_trades_{date}.json"),
        }
    }

    /// Write the merged document for `ticker`, named from the current local
    /// time. Returns the path written.
    pub fn save(&self, ticker: &str, document: &Value) -> Result<PathBuf> {
        self.save_at(ticker, document, Local::now())
    }

    /// As [`save`](Self::save) but with an explicit timestamp.
    pub fn save_at(&self, ticker: &str, document: &Value, now: DateTime<Local>) -> Result<PathBuf> {
        let path = self.dir.join(self.file_name(ticker, now));

        // 4-space indentation, matching what downstream tooling expects.
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        document
            .serialize(&mut ser)
            .with_context(|| format!("cannot serialize trades for {ticker}"))?;

        fs::write(&path, &buf).map_err(|e| {
            CollectorError::Storage(format!("cannot write {}: {e}", path.display()))
        })?;

        match self.market {
            Market::Futures => info!(
                "saved {ticker} trades ({} session) to {}",
                Session::at(now).tag(),
                path.display(),
            ),
            Market::Shares => info!("saved {ticker} trades to {}", path.display()),
        }
        Ok(path)
    }
}
