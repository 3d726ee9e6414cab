//! Raw tap events from the journey log.

use std::fmt;

use super::{StationId, TapTime, UserId};

/// Which way a rider passed the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    /// Parse a direction from the journey log.
    ///
    /// Only the exact text `IN` is an entry; every other value is treated
    /// as an exit.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_billing::domain::Direction;
    ///
    /// assert_eq!(Direction::parse("IN"), Direction::In);
    /// assert_eq!(Direction::parse("OUT"), Direction::Out);
    /// assert_eq!(Direction::parse("in"), Direction::Out);
    /// ```
    pub fn parse(s: &str) -> Self {
        if s == "IN" { Direction::In } else { Direction::Out }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::In => "IN",
            Direction::Out => "OUT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single gate tap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapEvent {
    pub user: UserId,
    pub station: StationId,
    pub direction: Direction,
    pub time: TapTime,
}

impl TapEvent {
    pub fn new(user: UserId, station: StationId, direction: Direction, time: TapTime) -> Self {
        Self {
            user,
            station,
            direction,
            time,
        }
    }
}
