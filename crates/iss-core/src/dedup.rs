//! Trade deduplication.
//!
//! ISS trade pages overlap at their boundaries: the same TRADENO can appear
//! at the tail of one page and the head of the next, and occasionally twice
//! within a single page. The deduplicator tracks every TRADENO seen so far
//! within one fetch so that only the *first* occurrence of each trade makes
//! it into the merged result.
//!
//! One instance is created per instrument fetch and discarded afterwards;
//! trade numbers are only unique per instrument per day, so the set must not
//! be shared across instruments.

use ahash::AHashSet;

use crate::types::TradeNo;

/// Set of trade numbers already seen within one fetch call.
///
/// # Thread safety
///
/// Not thread-safe. The fetch loop is strictly sequential and owns its
/// instance.
#[derive(Debug, Default)]
pub struct TradeNoDedup {
    seen: AHashSet<TradeNo>,
}

impl TradeNoDedup {
    pub fn new() -> Self {
        Self { seen: AHashSet::new() }
    }

    /// Check whether `tradeno` is new.
    ///
    /// Returns `true` on the first occurrence (and records it), `false` for
    /// every later occurrence.
    #[inline]
    pub fn check_and_insert(&mut self, tradeno: &TradeNo) -> bool {
        if self.seen.contains(tradeno) {
            false
        } else {
            self.seen.insert(tradeno.clone());
            true
        }
    }

    /// Number of distinct trade numbers recorded so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
