//! Tap-to-journey pairing.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::domain::{Direction, Journey, StationId, TapEvent, TapTime, UserId};

/// Errors raised while pairing taps into journeys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconstructError {
    /// An OUT tap arrived for a user with no journey to close
    #[error("OUT tap for user {user} at {station} ({time}) has no preceding IN tap")]
    UnmatchedExit {
        user: UserId,
        station: StationId,
        time: TapTime,
    },
}

/// Journeys for one rider, in the order they were opened.
#[derive(Debug)]
struct UserJourneys {
    journeys: Vec<Journey>,
}

/// Incremental tap-to-journey pairing.
///
/// Users are remembered in the order they are first seen; that order is
/// the order of the final journey list.
#[derive(Debug, Default)]
pub struct Reconstructor {
    /// Position of each user in `users`.
    index: HashMap<UserId, usize>,
    users: Vec<UserJourneys>,
    taps_seen: usize,
}

impl Reconstructor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one tap.
    ///
    /// An IN tap opens a new journey. Any other tap overwrites the exit of
    /// the user's most recently opened journey, even if that journey was
    /// already closed.
    pub fn push(&mut self, tap: TapEvent) -> Result<(), ReconstructError> {
        self.taps_seen += 1;
        let TapEvent {
            user,
            station,
            direction,
            time,
        } = tap;

        match direction {
            Direction::In => {
                trace!(%user, %station, %time, "journey opened");
                let slot = self.user_slot(&user);
                self.users[slot]
                    .journeys
                    .push(Journey::open(user, station, time));
            }
            Direction::Out => {
                let last = self
                    .index
                    .get(&user)
                    .and_then(|&slot| self.users[slot].journeys.last_mut());
                let Some(journey) = last else {
                    return Err(ReconstructError::UnmatchedExit {
                        user,
                        station,
                        time,
                    });
                };
                if journey.is_closed() {
                    debug!(%user, %station, %time, "second OUT tap overwrites previous exit");
                }
                trace!(%user, %station, %time, "journey closed");
                journey.close(direction, station, time);
            }
        }

        Ok(())
    }

    fn user_slot(&mut self, user: &UserId) -> usize {
        if let Some(&slot) = self.index.get(user) {
            return slot;
        }
        let slot = self.users.len();
        self.index.insert(user.clone(), slot);
        self.users.push(UserJourneys {
            journeys: Vec::new(),
        });
        slot
    }

    /// Finish reconstruction, concatenating each user's journeys in
    /// first-seen user order.
    pub fn finish(self) -> Vec<Journey> {
        let journeys: Vec<Journey> = self
            .users
            .into_iter()
            .flat_map(|user| user.journeys)
            .collect();
        debug!(
            taps = self.taps_seen,
            users = self.index.len(),
            journeys = journeys.len(),
            "journeys reconstructed"
        );
        journeys
    }
}

/// Pair a tap log into journeys.
///
/// Fails on the first OUT tap that has no journey to close.
pub fn reconstruct_journeys<I>(taps: I) -> Result<Vec<Journey>, ReconstructError>
where
    I: IntoIterator<Item = TapEvent>,
{
    let mut reconstructor = Reconstructor::new();
    for tap in taps {
        reconstructor.push(tap)?;
    }
    Ok(reconstructor.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(user: &str, station: &str, direction: &str, time: &str) -> TapEvent {
        TapEvent::new(
            UserId::new(user),
            StationId::new(station),
            Direction::parse(direction),
            TapTime::parse(time).unwrap(),
        )
    }

    fn stations(journeys: &[Journey]) -> Vec<(String, Option<String>)> {
        journeys
            .iter()
            .map(|j| {
                (
                    format!("{}:{}", j.user, j.entry_station),
                    j.exit_station().map(|s| s.to_string()),
                )
            })
            .collect()
    }

    #[test]
    fn pairs_in_and_out() {
        let journeys = reconstruct_journeys(vec![
            tap("user1", "A", "IN", "2024-01-01T08:00:00"),
            tap("user1", "B", "OUT", "2024-01-01T08:30:00"),
        ])
        .unwrap();

        assert_eq!(journeys.len(), 1);
        let j = &journeys[0];
        assert_eq!(j.entry_station.as_str(), "A");
        assert_eq!(j.exit_station().unwrap().as_str(), "B");
        assert_eq!(j.exit.as_ref().unwrap().direction, Direction::Out);
        assert_eq!(
            j.exit_time(),
            Some(TapTime::parse("2024-01-01T08:30:00").unwrap())
        );
    }

    #[test]
    fn groups_by_user_in_first_seen_order() {
        let journeys = reconstruct_journeys(vec![
            tap("u2", "A", "IN", "2024-01-01T08:00:00"),
            tap("u1", "C", "IN", "2024-01-01T08:01:00"),
            tap("u2", "B", "OUT", "2024-01-01T08:10:00"),
            tap("u1", "D", "OUT", "2024-01-01T08:11:00"),
            tap("u2", "B", "IN", "2024-01-01T09:00:00"),
            tap("u2", "A", "OUT", "2024-01-01T09:10:00"),
        ])
        .unwrap();

        assert_eq!(
            stations(&journeys),
            vec![
                ("u2:A".to_string(), Some("B".to_string())),
                ("u2:B".to_string(), Some("A".to_string())),
                ("u1:C".to_string(), Some("D".to_string())),
            ]
        );
    }

    #[test]
    fn missing_out_leaves_journey_open() {
        let journeys = reconstruct_journeys(vec![
            tap("u1", "A", "IN", "2024-01-01T08:00:00"),
            tap("u1", "B", "IN", "2024-01-01T09:00:00"),
            tap("u1", "C", "OUT", "2024-01-01T09:30:00"),
        ])
        .unwrap();

        assert_eq!(
            stations(&journeys),
            vec![
                ("u1:A".to_string(), None),
                ("u1:B".to_string(), Some("C".to_string())),
            ]
        );
    }

    #[test]
    fn second_out_overwrites_exit() {
        let journeys = reconstruct_journeys(vec![
            tap("u1", "A", "IN", "2024-01-01T08:00:00"),
            tap("u1", "B", "OUT", "2024-01-01T08:30:00"),
            tap("u1", "C", "OUT", "2024-01-01T08:45:00"),
        ])
        .unwrap();

        assert_eq!(journeys.len(), 1);
        assert_eq!(journeys[0].exit_station().unwrap().as_str(), "C");
    }

    #[test]
    fn unmatched_out_is_an_error() {
        let err = reconstruct_journeys(vec![
            tap("u1", "A", "IN", "2024-01-01T08:00:00"),
            tap("u2", "B", "OUT", "2024-01-01T08:30:00"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            ReconstructError::UnmatchedExit {
                user: UserId::new("u2"),
                station: StationId::new("B"),
                time: TapTime::parse("2024-01-01T08:30:00").unwrap(),
            }
        );
        assert_eq!(
            err.to_string(),
            "OUT tap for user u2 at B (2024-01-01T08:30:00) has no preceding IN tap"
        );
    }

    #[test]
    fn empty_log() {
        assert!(reconstruct_journeys(Vec::new()).unwrap().is_empty());
    }
}
