//! Station and user identifier types.

use std::fmt;

/// Identifier of a station as it appears in the zone table and journey log.
///
/// Station identifiers are free text and taken verbatim, including the
/// empty string. Matching against the zone table is exact, so a station
/// missing from the table (an empty one included) is simply unknown.
///
/// # Examples
///
/// ```
/// use fare_billing::domain::StationId;
///
/// let station = StationId::new("Kings Cross");
/// assert_eq!(station.as_str(), "Kings Cross");
/// assert_eq!(StationId::new("").as_str(), "");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a rider.
///
/// Ordering is lexical on the underlying string, which is the order the
/// billing output is written in.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
