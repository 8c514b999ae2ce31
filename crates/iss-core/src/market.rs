//! Market classes and their ISS endpoint layout.
//!
//! The two collectors differ only in the endpoints they hit, the listing
//! columns they request, and how output files are named. All of those
//! differences live here so the client, store, and runner stay generic over
//! [`Market`].
//!
//! # ISS paths
//!
//! | Market  | Listing                                              | Trades                                                        |
//! |---------|------------------------------------------------------|---------------------------------------------------------------|
//! | Futures | `/iss/engines/futures/markets/forts/securities.json` | `/iss/engines/futures/markets/forts/securities/{t}/trades.json` |
//! | Shares  | `/iss/engines/stock/markets/shares/boards/TQBR/securities.json` | `/iss/engines/stock/markets/shares/boards/TQBR/securities/{t}/trades.json` |

/// Market class handled by one collector process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Market {
    /// Derivatives on the FORTS segment.
    Futures,
    /// Equities on the TQBR board.
    Shares,
}

impl Market {
    /// URL path of the securities listing endpoint, relative to the ISS base.
    pub fn listing_path(&self) -> &'static str {
        match self {
            Market::Futures => "/iss/engines/futures/markets/forts/securities.json",
            Market::Shares => "/iss/engines/stock/markets/shares/boards/TQBR/securities.json",
        }
    }

    /// Value of the `securities.columns` query parameter for the listing.
    pub fn listing_columns(&self) -> &'static str {
        match self {
            Market::Futures => "SECID,SECNAME,MATDATE",
            Market::Shares => "SECID,SHORTNAME",
        }
    }

    /// Minimum number of leading columns a listing row must have; shorter
    /// rows are skipped.
    pub fn min_listing_columns(&self) -> usize {
        match self {
            Market::Futures => 1,
            Market::Shares => 2,
        }
    }

    /// URL path of the per-instrument trades endpoint.
    pub fn trades_path(&self, ticker: &str) -> String {
        match self {
            Market::Futures => {
                format!("/iss/engines/futures/markets/forts/securities/{ticker}/trades.json")
            }
            Market::Shares => format!(
                "/iss/engines/stock/markets/shares/boards/TQBR/securities/{ticker}/trades.json"
            ),
        }
    }

    /// Output subdirectory under `<data_dir>/trades/`.
    pub fn output_subdir(&self) -> &'static str {
        match self {
            Market::Futures => "futures",
            Market::Shares => "shares",
        }
    }

    /// Human label used in log messages.
    pub fn label(&self) -> &'static str {
        match self {
            Market::Futures => "futures",
            Market::Shares => "shares",
        }
    }

    /// User-Agent header sent on every request.
    pub fn user_agent(&self) -> &'static str {
        match self {
            Market::Futures => "MOEX Futures Collector/1.0",
            Market::Shares => "MOEX Shares Collector/1.0",
        }
    }
}
