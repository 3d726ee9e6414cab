//! Reconstructed journeys.
//!
//! A `Journey` is opened by an IN tap and closed by the user's next OUT
//! tap. Journeys that never see an OUT stay open and have no exit.

use super::{Direction, StationId, TapTime, UserId};

/// The exit half of a journey, filled in by an OUT tap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyExit {
    pub direction: Direction,
    pub station: StationId,
    pub time: TapTime,
}

/// One rider's trip from an entry gate to (optionally) an exit gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    pub user: UserId,
    pub entry_station: StationId,
    pub entry_time: TapTime,
    pub exit: Option<JourneyExit>,
}

impl Journey {
    /// Open a journey with no exit yet.
    pub fn open(user: UserId, entry_station: StationId, entry_time: TapTime) -> Self {
        Self {
            user,
            entry_station,
            entry_time,
            exit: None,
        }
    }

    /// Record the exit, replacing any exit already recorded.
    pub fn close(&mut self, direction: Direction, station: StationId, time: TapTime) {
        self.exit = Some(JourneyExit {
            direction,
            station,
            time,
        });
    }

    /// Returns the exit station, if the journey has been closed.
    pub fn exit_station(&self) -> Option<&StationId> {
        self.exit.as_ref().map(|exit| &exit.station)
    }

    /// Returns the exit time, if the journey has been closed.
    pub fn exit_time(&self) -> Option<TapTime> {
        self.exit.as_ref().map(|exit| exit.time)
    }

    /// Returns true once an exit has been recorded.
    pub fn is_closed(&self) -> bool {
        self.exit.is_some()
    }
}
