//! Billing aggregation.
//!
//! Journeys are charged strictly in the order given. The rider's running
//! total is never reset; the caps only ever clamp it down.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use tracing::{debug, trace};

use super::{CapWindow, FareConfig, price_journey};
use crate::domain::{Journey, Money, UserId, ZoneMap};

/// Errors raised while billing journeys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BillingError {
    /// Cap state for a rider vanished between recording and capping
    #[error("no {period} cap history for user {user}")]
    MissingWindow { user: UserId, period: &'static str },
}

/// Final amount owed by each rider, ordered by user id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingTotals {
    totals: BTreeMap<UserId, Money>,
}

impl BillingTotals {
    /// Returns the amount owed by a rider, if they travelled at all.
    pub fn get(&self, user: &UserId) -> Option<Money> {
        self.totals.get(user).copied()
    }

    /// Iterate riders in ascending user id order.
    pub fn iter(&self) -> impl Iterator<Item = (&UserId, Money)> {
        self.totals.iter().map(|(user, amount)| (user, *amount))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Counters collected over one billing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BillingStats {
    /// Journeys priced from their zones.
    pub journeys_priced: usize,
    /// Journeys charged the unknown-station penalty.
    pub penalties: usize,
    /// Times the daily cap lowered a running total.
    pub daily_caps: usize,
    /// Times the monthly cap lowered a running total.
    pub monthly_caps: usize,
}

/// Stateful billing over a sequence of journeys.
pub struct BillingEngine<'a> {
    zones: &'a ZoneMap,
    config: &'a FareConfig,
    totals: BTreeMap<UserId, Money>,
    daily: HashMap<UserId, CapWindow<NaiveDate>>,
    monthly: HashMap<UserId, CapWindow<u32>>,
    stats: BillingStats,
}

impl<'a> BillingEngine<'a> {
    pub fn new(zones: &'a ZoneMap, config: &'a FareConfig) -> Self {
        Self {
            zones,
            config,
            totals: BTreeMap::new(),
            daily: HashMap::new(),
            monthly: HashMap::new(),
            stats: BillingStats::default(),
        }
    }

    /// Charge one journey and return the rider's running total afterwards.
    pub fn charge(&mut self, journey: &Journey) -> Result<Money, BillingError> {
        let user = &journey.user;
        let charge = price_journey(journey, self.zones, self.config);

        let total = self.totals.entry(user.clone()).or_insert(Money::ZERO);
        *total += charge.amount();
        let running = *total;
        trace!(%user, amount = %charge.amount(), total = %running, "journey charged");

        if !charge.is_priced() {
            self.stats.penalties += 1;
            debug!(
                %user,
                entry = %journey.entry_station,
                exit = ?journey.exit_station(),
                "unknown station, flat penalty applied"
            );
            return Ok(running);
        }
        self.stats.journeys_priced += 1;

        // Monthly cap sees the running total after the daily cap.
        let date = journey.entry_time.date();
        let daily = self.daily.entry(user.clone()).or_default();
        let after_daily = apply_cap(daily, date, running, self.config.daily_cap, user, "daily")?;
        if after_daily != running {
            self.stats.daily_caps += 1;
            debug!(%user, %date, from = %running, to = %after_daily, "daily cap applied");
        }

        let month = journey.entry_time.month();
        let monthly = self.monthly.entry(user.clone()).or_default();
        let after_monthly = apply_cap(
            monthly,
            month,
            after_daily,
            self.config.monthly_cap,
            user,
            "monthly",
        )?;
        if after_monthly != after_daily {
            self.stats.monthly_caps += 1;
            debug!(%user, month, from = %after_daily, to = %after_monthly, "monthly cap applied");
        }

        *total = after_monthly;
        Ok(after_monthly)
    }

    /// Charge every journey in order, stopping at the first error.
    pub fn charge_all(&mut self, journeys: &[Journey]) -> Result<(), BillingError> {
        for journey in journeys {
            self.charge(journey)?;
        }
        debug!(
            priced = self.stats.journeys_priced,
            penalties = self.stats.penalties,
            daily_caps = self.stats.daily_caps,
            monthly_caps = self.stats.monthly_caps,
            "billing complete"
        );
        Ok(())
    }

    pub fn stats(&self) -> BillingStats {
        self.stats
    }

    pub fn finish(self) -> BillingTotals {
        BillingTotals {
            totals: self.totals,
        }
    }
}

/// Record a priced journey in a cap window and return the capped total.
fn apply_cap<K: Ord + Copy>(
    window: &mut CapWindow<K>,
    period: K,
    running_total: Money,
    cap: Money,
    user: &UserId,
    kind: &'static str,
) -> Result<Money, BillingError> {
    window.record(period, running_total);
    let latest = window.latest().ok_or_else(|| BillingError::MissingWindow {
        user: user.clone(),
        period: kind,
    })?;
    Ok(window.capped(period, latest, running_total, cap))
}

/// Bill every journey, in order, and return each rider's final total.
pub fn calculate_billing(
    zones: &ZoneMap,
    journeys: &[Journey],
    config: &FareConfig,
) -> Result<BillingTotals, BillingError> {
    let mut engine = BillingEngine::new(zones, config);
    engine.charge_all(journeys)?;
    Ok(engine.finish())
}
