//! FORTS futures trade collector.
//!
//! Scheduled twice a day (18:25 day session, 23:25 evening session); each
//! run writes one timestamped file per futures contract for later merging.

use iss_core::Market;

#[tokio::main]
async fn main() {
    iss_runner::cli::collector_main(Market::Futures, "futures_collector").await;
}
