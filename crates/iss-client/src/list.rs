//! Instrument listing.
//!
//! The listing endpoint returns a tabular payload where each security is a
//! positional array:
//!
//! ```json
//! { "securities": { "columns": ["SECID", ...], "data": [["SiZ5", "...", ...], ...] } }
//! ```
//!
//! Rows shorter than the market's minimum column count are skipped, as are
//! rows whose SECID is not a string. Order is whatever the API returned.

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use iss_core::error::CollectorError;
use iss_core::{Instrument, Market};

use crate::IssClient;

impl IssClient {
    /// Fetch the current set of tradable instruments for this market.
    ///
    /// One GET, no pagination. Any transport or parse failure is returned as
    /// an error; the caller decides that the run cannot proceed.
    pub async fn list_instruments(&self) -> Result<Vec<Instrument>> {
        let url = format!("{}{}", self.base_url, self.market.listing_path());
        let payload: Value = self
            .http
            .get(&url)
            .query(&[("iss.meta", "off"), ("securities.columns", self.market.listing_columns())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let rows = payload
            .pointer("/securities/data")
            .and_then(Value::as_array)
            .ok_or_else(|| CollectorError::Parse("listing response has no securities.data".into()))
            .context("unexpected listing payload")?;

        let min_cols = self.market.min_listing_columns();
        let mut instruments = Vec::with_capacity(rows.len());
        for row in rows {
            let Some(cols) = row.as_array() else { continue };
            if cols.len() < min_cols {
                debug!("skipping short listing row: {row}");
                continue;
            }
            let Some(ticker) = cols.first().and_then(Value::as_str) else {
                debug!("skipping listing row without SECID: {row}");
                continue;
            };
            let name = cols.get(1).and_then(Value::as_str).unwrap_or_default().to_string();
            let expiration = match self.market {
                Market::Futures => cols.get(2).and_then(Value::as_str).map(str::to_string),
                Market::Shares => None,
            };
            instruments.push(Instrument { ticker: ticker.to_string(), name, expiration });
        }

        info!("received {} {} instruments", instruments.len(), self.market.label());
        Ok(instruments)
    }
}
