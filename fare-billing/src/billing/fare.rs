//! Per-journey pricing.

use super::FareConfig;
use crate::domain::{Journey, Money, Zone, ZoneMap};

/// Surcharge for touching a zone, at entry or at exit.
///
/// | zone       | surcharge |
/// |------------|-----------|
/// | 1          | 0.80      |
/// | 2, 3       | 0.50      |
/// | 4, 5       | 0.30      |
/// | any other  | 0.10      |
pub fn zone_surcharge(zone: Zone) -> Money {
    match zone.get() {
        1 => Money::from_minor(80),
        2 | 3 => Money::from_minor(50),
        4 | 5 => Money::from_minor(30),
        _ => Money::from_minor(10),
    }
}

/// What a single journey costs, before caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyCharge {
    /// Entry or exit station is missing from the zone table (or the
    /// journey was never closed). Caps are not applied to these.
    UnknownStation { penalty: Money },

    /// Normal zone-based fare.
    Priced {
        entry_zone: Zone,
        exit_zone: Zone,
        base_fare: Money,
        entry_surcharge: Money,
        exit_surcharge: Money,
    },
}

impl JourneyCharge {
    /// Total amount this journey adds to the running total.
    pub fn amount(&self) -> Money {
        match self {
            JourneyCharge::UnknownStation { penalty } => *penalty,
            JourneyCharge::Priced {
                base_fare,
                entry_surcharge,
                exit_surcharge,
                ..
            } => *base_fare + *entry_surcharge + *exit_surcharge,
        }
    }

    /// Returns true if this journey takes part in cap tracking.
    pub fn is_priced(&self) -> bool {
        matches!(self, JourneyCharge::Priced { .. })
    }
}

/// Price a journey against the zone table.
pub fn price_journey(journey: &Journey, zones: &ZoneMap, config: &FareConfig) -> JourneyCharge {
    let entry_zone = zones.zone_of(&journey.entry_station);
    let exit_zone = journey.exit_station().and_then(|s| zones.zone_of(s));

    match (entry_zone, exit_zone) {
        (Some(entry_zone), Some(exit_zone)) => JourneyCharge::Priced {
            entry_zone,
            exit_zone,
            base_fare: config.base_fare,
            entry_surcharge: zone_surcharge(entry_zone),
            exit_surcharge: zone_surcharge(exit_zone),
        },
        _ => JourneyCharge::UnknownStation {
            penalty: config.unknown_station_penalty,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, StationId, TapTime, UserId};

    fn zone(n: u32) -> Zone {
        Zone::new(n).unwrap()
    }

    fn zones() -> ZoneMap {
        [("A", 1), ("B", 2), ("C", 4), ("D", 9)]
            .into_iter()
            .map(|(s, z)| (StationId::new(s), zone(z)))
            .collect()
    }

    fn journey(entry: &str, exit: Option<&str>) -> Journey {
        let mut j = Journey::open(
            UserId::new("user1"),
            StationId::new(entry),
            TapTime::parse("2024-01-01T08:00:00").unwrap(),
        );
        if let Some(exit) = exit {
            j.close(
                Direction::Out,
                StationId::new(exit),
                TapTime::parse("2024-01-01T08:30:00").unwrap(),
            );
        }
        j
    }

    #[test]
    fn surcharge_bands() {
        assert_eq!(zone_surcharge(zone(1)), Money::from_minor(80));
        assert_eq!(zone_surcharge(zone(2)), Money::from_minor(50));
        assert_eq!(zone_surcharge(zone(3)), Money::from_minor(50));
        assert_eq!(zone_surcharge(zone(4)), Money::from_minor(30));
        assert_eq!(zone_surcharge(zone(5)), Money::from_minor(30));
        assert_eq!(zone_surcharge(zone(6)), Money::from_minor(10));
        assert_eq!(zone_surcharge(zone(9)), Money::from_minor(10));
    }

    #[test]
    fn priced_journey_adds_base_and_both_surcharges() {
        let charge = price_journey(&journey("A", Some("B")), &zones(), &FareConfig::default());
        assert!(charge.is_priced());
        assert_eq!(charge.amount(), Money::from_minor(330));

        let charge = price_journey(&journey("C", Some("D")), &zones(), &FareConfig::default());
        assert_eq!(charge.amount(), Money::from_minor(240));
    }

    #[test]
    fn same_station_charges_surcharge_twice() {
        let charge = price_journey(&journey("A", Some("A")), &zones(), &FareConfig::default());
        assert_eq!(charge.amount(), Money::from_minor(360));
    }

    #[test]
    fn unknown_station_is_flat_penalty() {
        let config = FareConfig::default();
        for j in [
            journey("X", Some("A")),
            journey("A", Some("X")),
            journey("X", Some("Y")),
        ] {
            let charge = price_journey(&j, &zones(), &config);
            assert_eq!(
                charge,
                JourneyCharge::UnknownStation {
                    penalty: Money::new(5, 0)
                }
            );
            assert!(!charge.is_priced());
        }
    }

    #[test]
    fn empty_station_is_unknown() {
        let charge = price_journey(&journey("A", Some("")), &zones(), &FareConfig::default());
        assert_eq!(charge.amount(), Money::new(5, 0));
        assert!(!charge.is_priced());
    }

    #[test]
    fn open_journey_is_penalised() {
        let charge = price_journey(&journey("A", None), &zones(), &FareConfig::default());
        assert_eq!(charge.amount(), Money::new(5, 0));
    }

    #[test]
    fn priced_breakdown() {
        let charge = price_journey(&journey("B", Some("C")), &zones(), &FareConfig::default());
        assert_eq!(
            charge,
            JourneyCharge::Priced {
                entry_zone: zone(2),
                exit_zone: zone(4),
                base_fare: Money::new(2, 0),
                entry_surcharge: Money::from_minor(50),
                exit_surcharge: Money::from_minor(30),
            }
        );
    }
}
