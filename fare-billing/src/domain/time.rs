//! Tap timestamps.
//!
//! Journey logs record each tap as `YYYY-MM-DDTHH:MM:SS` with no timezone.
//! Billing only ever looks at the calendar date and the month number.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::fmt;

use super::DomainError;

/// Format of tap timestamps in the journey log.
const TAP_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The moment a tap was recorded, to the second.
///
/// # Examples
///
/// ```
/// use fare_billing::domain::TapTime;
/// use chrono::NaiveDate;
///
/// let t = TapTime::parse("2024-03-15T08:30:00").unwrap();
/// assert_eq!(t.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
/// assert_eq!(t.month(), 3);
/// assert_eq!(t.to_string(), "2024-03-15T08:30:00");
///
/// assert!(TapTime::parse("2024-03-15 08:30:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TapTime(NaiveDateTime);

impl TapTime {
    /// Parse a timestamp in `YYYY-MM-DDTHH:MM:SS` format.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        NaiveDateTime::parse_from_str(s, TAP_TIME_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::InvalidTimestamp {
                value: s.to_string(),
            })
    }

    /// Returns the calendar date of the tap.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Returns the month number (1-12), independent of year.
    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl fmt::Debug for TapTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TapTime({self})")
    }
}

impl fmt::Display for TapTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TAP_TIME_FORMAT))
    }
}
