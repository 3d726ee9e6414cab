//! Fare zones and the station-to-zone table.

use std::collections::HashMap;
use std::fmt;

use super::{DomainError, StationId};

/// A fare zone number. Zones are positive integers.
///
/// # Examples
///
/// ```
/// use fare_billing::domain::Zone;
///
/// let zone = Zone::parse("3").unwrap();
/// assert_eq!(zone.get(), 3);
///
/// assert!(Zone::parse("0").is_err());
/// assert!(Zone::parse("two").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Zone(u32);

impl Zone {
    /// Create a zone from a number, rejecting zero.
    pub fn new(n: u32) -> Result<Self, DomainError> {
        if n == 0 {
            return Err(DomainError::InvalidZone {
                value: n.to_string(),
                reason: "zone must be positive",
            });
        }
        Ok(Self(n))
    }

    /// Parse a zone from decimal text. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let n: u32 = s.trim().parse().map_err(|_| DomainError::InvalidZone {
            value: s.to_string(),
            reason: "not a decimal integer",
        })?;
        Self::new(n)
    }

    /// Returns the zone number.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mapping from station to fare zone.
///
/// Built once from the zone table and read-only afterwards. Inserting a
/// station twice keeps the later zone.
#[derive(Debug, Clone, Default)]
pub struct ZoneMap {
    zones: HashMap<StationId, Zone>,
}

impl ZoneMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station's zone, returning the zone it replaced, if any.
    pub fn insert(&mut self, station: StationId, zone: Zone) -> Option<Zone> {
        self.zones.insert(station, zone)
    }

    /// Look up the zone of a station.
    pub fn zone_of(&self, station: &StationId) -> Option<Zone> {
        self.zones.get(station).copied()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl FromIterator<(StationId, Zone)> for ZoneMap {
    fn from_iter<I: IntoIterator<Item = (StationId, Zone)>>(iter: I) -> Self {
        let mut map = ZoneMap::new();
        for (station, zone) in iter {
            map.insert(station, zone);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> StationId {
        StationId::new(s)
    }

    #[test]
    fn parse_valid_zone() {
        assert_eq!(Zone::parse("1").unwrap().get(), 1);
        assert_eq!(Zone::parse("12").unwrap().get(), 12);
        assert_eq!(Zone::parse(" 4 ").unwrap().get(), 4);
    }

    #[test]
    fn reject_invalid_zone() {
        assert!(Zone::parse("").is_err());
        assert!(Zone::parse("0").is_err());
        assert!(Zone::parse("-1").is_err());
        assert!(Zone::parse("1.5").is_err());
        assert!(Zone::parse("one").is_err());
    }

    #[test]
    fn later_insert_wins() {
        let mut map = ZoneMap::new();
        assert_eq!(map.insert(station("A"), Zone::new(1).unwrap()), None);
        assert_eq!(
            map.insert(station("A"), Zone::new(3).unwrap()),
            Some(Zone::new(1).unwrap())
        );
        assert_eq!(map.zone_of(&station("A")), Some(Zone::new(3).unwrap()));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn unknown_station_has_no_zone() {
        let map: ZoneMap = [(station("A"), Zone::new(1).unwrap())].into_iter().collect();
        assert_eq!(map.zone_of(&station("B")), None);
        assert!(!map.is_empty());
    }
}
