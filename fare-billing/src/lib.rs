//! Transit fare billing.
//!
//! Turns a station-to-zone table and a log of gate taps into the amount
//! each rider owes, applying zone-based fares and daily and monthly caps.

pub mod billing;
pub mod domain;
pub mod journeys;
pub mod pipeline;
pub mod tables;
