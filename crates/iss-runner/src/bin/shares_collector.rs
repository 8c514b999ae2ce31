//! TQBR shares trade collector.
//!
//! Scheduled once a day at 23:00; each run writes one file per share, named
//! by date only, so a same-day rerun overwrites the earlier file.

use iss_core::Market;

#[tokio::main]
async fn main() {
    iss_runner::cli::collector_main(Market::Shares, "shares_collector").await;
}
