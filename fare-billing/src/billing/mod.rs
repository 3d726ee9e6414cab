//! Fare calculation and spending caps.
//!
//! Each journey is priced from the zones of its entry and exit stations,
//! added to the rider's running total, and then the daily and monthly
//! caps are applied to that running total.

mod cap;
mod config;
mod engine;
mod fare;

pub use cap::CapWindow;
pub use config::FareConfig;
pub use engine::{BillingEngine, BillingError, BillingStats, BillingTotals, calculate_billing};
pub use fare::{JourneyCharge, price_journey, zone_surcharge};
