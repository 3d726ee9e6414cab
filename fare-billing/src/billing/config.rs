//! Fare configuration.

use crate::domain::Money;

/// Fare constants used by the billing engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareConfig {
    /// Flat fare added to every priced journey.
    pub base_fare: Money,

    /// Charged instead of the normal fare when either station has no zone.
    pub unknown_station_penalty: Money,

    /// Upper clamp on the running total while on the latest travel date.
    pub daily_cap: Money,

    /// Upper clamp on the running total while in the latest travel month.
    pub monthly_cap: Money,
}

impl FareConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        base_fare: Money,
        unknown_station_penalty: Money,
        daily_cap: Money,
        monthly_cap: Money,
    ) -> Self {
        Self {
            base_fare,
            unknown_station_penalty,
            daily_cap,
            monthly_cap,
        }
    }
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            base_fare: Money::new(2, 0),
            unknown_station_penalty: Money::new(5, 0),
            daily_cap: Money::new(15, 0),
            monthly_cap: Money::new(100, 0),
        }
    }
}
