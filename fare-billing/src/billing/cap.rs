//! Running-total cap windows.
//!
//! A `CapWindow` tracks, for one rider, the latest period key (calendar
//! date or month number) seen so far and an accumulator for the "current"
//! period. Only the maximum of the period history is ever consulted, so
//! that is all that is kept.
//!
//! The accumulator is not a per-period ledger. It opens at zero on the
//! rider's first priced journey. After that, a period newer than any seen
//! before resets it to the rider's running total and any other period adds
//! the running total to it. This reproduces the amounts existing bills
//! were issued with and is kept as-is rather than corrected.

use crate::domain::Money;

/// Cap tracking for one rider over one kind of period.
#[derive(Debug, Clone)]
pub struct CapWindow<K> {
    /// Largest period recorded so far.
    latest: Option<K>,
    amount: Money,
}

impl<K> Default for CapWindow<K> {
    fn default() -> Self {
        Self {
            latest: None,
            amount: Money::ZERO,
        }
    }
}

impl<K: Ord + Copy> CapWindow<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a journey in `period` with the rider's running total after
    /// that journey.
    ///
    /// The first journey only opens the window; the accumulator stays at
    /// zero.
    pub fn record(&mut self, period: K, running_total: Money) {
        match self.latest {
            None => {}
            Some(latest) if period > latest => self.amount = running_total,
            Some(_) => self.amount += running_total,
        }
        self.latest = self.latest.max(Some(period));
    }

    /// Returns the latest period recorded, or `None` before any journey.
    pub fn latest(&self) -> Option<K> {
        self.latest
    }

    /// Returns the accumulated amount.
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Apply `cap` to a running total for a journey just recorded in
    /// `period`.
    ///
    /// The cap only bites when `period` is the latest period seen and the
    /// accumulator is over the cap. It never raises the total.
    pub fn capped(&self, period: K, latest: K, running_total: Money, cap: Money) -> Money {
        if period == latest && self.amount > cap {
            running_total.min(cap)
        } else {
            running_total
        }
    }
}
