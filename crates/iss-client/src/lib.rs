//! # iss-client
//!
//! HTTP client for the MOEX ISS API: instrument listing and paginated trade
//! history download.
//!
//! One [`IssClient`] is created per collector run and reuses a single
//! `reqwest::Client` (and therefore its connection pool) for every request.
//!
//! # Endpoints
//!
//! | Operation | Method | Path                                                   |
//! |-----------|--------|--------------------------------------------------------|
//! | Listing   | GET    | `<market listing path>?iss.meta=off&securities.columns=…` |
//! | Trades    | GET    | `<market trades path>?start=<offset>`                  |

pub mod list;
pub mod trades;

use anyhow::Result;
use iss_core::Market;
use iss_core::config::AppConfig;

/// Client for one market class of the ISS API.
pub struct IssClient {
    /// Shared HTTP client (connection reuse across all calls in a run).
    http: reqwest::Client,
    /// Base URL without trailing slash (e.g. `https://iss.moex.com`).
    base_url: String,
    /// Market class this client talks to.
    market: Market,
}

impl IssClient {
    /// Create a client with the configured timeout and the market's
    /// User-Agent. No connection is opened until the first request.
    pub fn new(config: &AppConfig, market: Market) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(market.user_agent())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            market,
        })
    }

    pub fn market(&self) -> Market {
        self.market
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
