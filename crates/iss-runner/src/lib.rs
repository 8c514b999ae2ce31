//! # iss-runner
//!
//! Run-to-completion orchestration for one collector process:
//! list instruments, then for each one fetch and persist its trades, with a
//! fixed pause between instruments. One instrument's failure never stops the
//! rest; only an empty instrument list aborts the run. The process exit
//! status is success either way — the log stream is the only error surface
//! the external scheduler sees.

pub mod cli;

use anyhow::Result;
use tracing::{error, info, warn};

use iss_client::IssClient;
use iss_core::Market;
use iss_core::config::AppConfig;
use iss_store::TradeStore;

/// Execute one full collection run for `market`.
///
/// Errors returned here are setup failures (HTTP client construction,
/// output directory creation); everything downstream is handled per
/// instrument and logged.
pub async fn run(market: Market, config: &AppConfig) -> Result<()> {
    info!("starting {} trade collection", market.label());

    let client = IssClient::new(config, market)?;
    let store = TradeStore::new(config.data_dir(), market)?;

    let instruments = match client.list_instruments().await {
        Ok(instruments) => instruments,
        Err(e) => {
            error!("failed to fetch {} listing: {e:#}", market.label());
            Vec::new()
        }
    };
    if instruments.is_empty() {
        error!("no {} instruments to process — aborting run", market.label());
        return Ok(());
    }

    let total = instruments.len();
    for (i, instrument) in instruments.iter().enumerate() {
        let ticker = &instrument.ticker;
        info!("processing {ticker} ({}/{total})", i + 1);

        match client.fetch_trades(ticker).await {
            Some(document) => {
                if let Err(e) = store.save(ticker, &document) {
                    error!("failed to save {ticker} trades: {e:#}");
                }
            }
            None => warn!("no trades for {ticker}"),
        }

        // Fixed courtesy pause towards the public API, unconditional.
        tokio::time::sleep(config.instrument_delay()).await;
    }

    info!("{} trade collection finished", market.label());
    Ok(())
}
