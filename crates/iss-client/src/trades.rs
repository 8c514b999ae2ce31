//! Paginated trade-history download with deduplication.
//!
//! The trades endpoint serves at most [`PAGE_SIZE`] rows per call, addressed
//! by a `start` offset. Consecutive pages can overlap (and a page can repeat
//! a row), so every row's TRADENO is checked against the set of trade
//! numbers already seen within this fetch; only first occurrences are kept.
//!
//! The merged result is the *first* page's payload verbatim, with
//! `trades.data` replaced by the deduplicated rows of all pages in
//! first-seen order. Non-trade metadata (column names etc.) is preserved
//! untouched.
//!
//! Termination:
//! - a page with missing or empty `trades.data` is the normal end of data;
//! - a page with fewer than [`PAGE_SIZE`] raw rows (pre-dedup) is the last;
//! - any transport or parse error ends the loop, keeping what was merged so
//!   far. No error escapes to the caller.

use anyhow::Result;
use serde_json::Value;
use tracing::{debug, error, info};

use iss_core::TradeNo;
use iss_core::dedup::TradeNoDedup;

use crate::IssClient;

/// Maximum number of rows the ISS trades endpoint returns per call.
pub const PAGE_SIZE: usize = 1000;

impl IssClient {
    /// Download all of today's trades for `ticker`.
    ///
    /// Returns `None` when no trade data was received at all (nothing to
    /// persist), `Some(document)` otherwise. Mid-pagination failures are
    /// logged and truncate the result rather than discarding it.
    pub async fn fetch_trades(&self, ticker: &str) -> Option<Value> {
        let mut merged: Option<Value> = None;
        let mut dedup = TradeNoDedup::new();
        let mut start = 0usize;

        loop {
            let mut page = match self.trades_page(ticker, start).await {
                Ok(page) => page,
                Err(e) => {
                    error!("failed to fetch trades for {ticker} at offset {start}: {e:#}");
                    break;
                }
            };

            let rows = match page.pointer_mut("/trades/data").map(Value::take) {
                Some(Value::Array(rows)) if !rows.is_empty() => rows,
                // Missing or empty data — normal end of available pages.
                _ => break,
            };
            let raw_count = rows.len();

            let mut unique = Vec::with_capacity(raw_count);
            for row in rows {
                match TradeNo::from_row(&row) {
                    Some(tradeno) if dedup.check_and_insert(&tradeno) => unique.push(row),
                    Some(_) => {}
                    None => debug!("dropping trades row without TRADENO for {ticker}: {row}"),
                }
            }
            debug!(
                "{ticker}: page {} — {raw_count} trades, {} unique",
                start / PAGE_SIZE + 1,
                unique.len(),
            );

            match merged.as_mut() {
                None => {
                    // First page seeds the merged document, metadata included.
                    if let Some(slot) = page.pointer_mut("/trades/data") {
                        *slot = Value::Array(unique);
                    }
                    merged = Some(page);
                }
                Some(doc) => {
                    if let Some(data) = doc.pointer_mut("/trades/data").and_then(Value::as_array_mut)
                    {
                        data.extend(unique);
                    }
                }
            }

            if raw_count < PAGE_SIZE {
                break;
            }
            start += PAGE_SIZE;
        }

        if merged.is_some() {
            info!("{ticker}: {} unique trades total", dedup.len());
        }
        merged
    }

    /// One raw page of the trades table at the given offset.
    async fn trades_page(&self, ticker: &str, start: usize) -> Result<Value> {
        let url = format!("{}{}", self.base_url, self.market.trades_path(ticker));
        let page = self
            .http
            .get(&url)
            .query(&[("start", start)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use iss_core::Market;
    use iss_core::config::AppConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const TRADES_PATH: &str = "/iss/engines/stock/markets/shares/boards/TQBR/securities/SBER/trades.json";

    fn test_config(server: &MockServer) -> AppConfig {
        AppConfig {
            base_url: Some(server.uri()),
            request_timeout_secs: Some(5),
            ..Default::default()
        }
    }

    fn client(server: &MockServer) -> IssClient {
        IssClient::new(&test_config(server), Market::Shares).unwrap()
    }

    /// A trades page whose rows have the given TRADENOs. The price column is
    /// derived from the row index so tests can tell occurrences apart.
    fn page_body(tradenos: &[i64]) -> Value {
        let rows: Vec<Value> = tradenos
            .iter()
            .enumerate()
            .map(|(i, id)| json!([id, "SBER", "10:00:00", 100.0 + i as f64, 10]))
            .collect();
        json!({
            "trades": {
                "columns": ["TRADENO", "SECID", "TRADETIME", "PRICE", "QUANTITY"],
                "data": rows
            }
        })
    }

    async fn mount_page(server: &MockServer, start: usize, body: Value) {
        Mock::given(method("GET"))
            .and(path(TRADES_PATH))
            .and(query_param("start", start.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    fn merged_tradenos(doc: &Value) -> Vec<i64> {
        doc.pointer("/trades/data")
            .and_then(Value::as_array)
            .unwrap()
            .iter()
            .map(|row| row[0].as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn dedup_within_and_across_pages() {
        let server = MockServer::start().await;

        // Page 1: 1000 raw rows, TRADENO 42 repeated once inside the page
        // and the whole tail (900..999) repeated on page 2.
        let mut first: Vec<i64> = (0..999).collect();
        first.push(42);
        let second: Vec<i64> = (900..1337).collect();

        mount_page(&server, 0, page_body(&first)).await;
        mount_page(&server, 1000, page_body(&second)).await;

        let doc = client(&server).fetch_trades("SBER").await.unwrap();
        let ids = merged_tradenos(&doc);

        // Each distinct TRADENO exactly once, first-seen order.
        let expected: Vec<i64> = (0..1337).collect();
        assert_eq!(ids, expected);

        // First occurrence's full record is the one retained: row 42 keeps
        // the price of its first appearance (index 42), not index 999.
        let rows = doc.pointer("/trades/data").and_then(Value::as_array).unwrap();
        assert_eq!(rows[42][3].as_f64().unwrap(), 142.0);
    }

    #[tokio::test]
    async fn pagination_stops_after_short_page() {
        let server = MockServer::start().await;
        mount_page(&server, 0, page_body(&(0..1000).collect::<Vec<_>>())).await;
        mount_page(&server, 1000, page_body(&(1000..2000).collect::<Vec<_>>())).await;
        mount_page(&server, 2000, page_body(&(2000..2437).collect::<Vec<_>>())).await;

        let doc = client(&server).fetch_trades("SBER").await.unwrap();
        assert_eq!(merged_tradenos(&doc).len(), 2437);

        // Exactly 3 requests at offsets 0, 1000, 2000 — no probe past the
        // short page.
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn exact_page_multiple_ends_on_empty_page() {
        let server = MockServer::start().await;
        mount_page(&server, 0, page_body(&(0..1000).collect::<Vec<_>>())).await;
        mount_page(&server, 1000, page_body(&(1000..2000).collect::<Vec<_>>())).await;
        mount_page(&server, 2000, page_body(&[])).await;

        let doc = client(&server).fetch_trades("SBER").await.unwrap();
        assert_eq!(merged_tradenos(&doc).len(), 2000);
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn mid_pagination_failure_keeps_earlier_pages() {
        let server = MockServer::start().await;
        mount_page(&server, 0, page_body(&(0..1000).collect::<Vec<_>>())).await;
        Mock::given(method("GET"))
            .and(path(TRADES_PATH))
            .and(query_param("start", "1000"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        // No error escapes; page 1 survives.
        let doc = client(&server).fetch_trades("SBER").await.unwrap();
        assert_eq!(merged_tradenos(&doc).len(), 1000);
    }

    #[tokio::test]
    async fn first_page_failure_yields_no_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        assert!(client(&server).fetch_trades("SBER").await.is_none());
    }

    #[tokio::test]
    async fn missing_trades_block_yields_no_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "unknown security"})))
            .mount(&server)
            .await;

        assert!(client(&server).fetch_trades("UNKNOWN").await.is_none());
    }

    #[tokio::test]
    async fn first_page_metadata_is_preserved() {
        let server = MockServer::start().await;
        let mut body = page_body(&[1, 2, 3]);
        body["trades.dates"] = json!({"from": "2025-10-17", "till": "2025-10-17"});
        mount_page(&server, 0, body).await;

        let doc = client(&server).fetch_trades("SBER").await.unwrap();
        assert_eq!(
            doc.pointer("/trades/columns").and_then(Value::as_array).unwrap().len(),
            5
        );
        assert_eq!(doc["trades.dates"]["from"], json!("2025-10-17"));
    }

    #[tokio::test]
    async fn rows_without_tradeno_are_dropped() {
        let server = MockServer::start().await;
        let body = json!({
            "trades": {
                "columns": ["TRADENO", "SECID"],
                "data": [[1, "SBER"], [null, "SBER"], [2, "SBER"], "garbage"]
            }
        });
        mount_page(&server, 0, body).await;

        let doc = client(&server).fetch_trades("SBER").await.unwrap();
        assert_eq!(merged_tradenos(&doc), [1, 2]);
    }
}
