//! Domain types for fare billing.
//!
//! This module contains the value types that represent validated input
//! rows and the journeys derived from them. All types enforce their
//! invariants at construction time, so code that receives these types can
//! trust their validity.

mod error;
mod journey;
mod money;
mod station;
mod tap;
mod time;
mod zone;

pub use error::DomainError;
pub use journey::{Journey, JourneyExit};
pub use money::Money;
pub use station::{StationId, UserId};
pub use tap::{Direction, TapEvent};
pub use time::TapTime;
pub use zone::{Zone, ZoneMap};
