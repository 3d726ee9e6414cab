//! Currency amounts.

use std::fmt;
use std::ops::{Add, AddAssign};

/// A currency amount held in minor units (hundredths).
///
/// Every fare constant is a whole number of minor units, so sums and cap
/// comparisons are exact. Display always shows two decimal places.
///
/// # Examples
///
/// ```
/// use fare_billing::domain::Money;
///
/// assert_eq!(Money::from_minor(330).to_string(), "3.30");
/// assert_eq!(Money::from_minor(2000).to_string(), "20.00");
/// assert_eq!(Money::from_minor(5).to_string(), "0.05");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Create an amount from minor units.
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create an amount from whole and fractional parts, e.g. `(15, 0)`.
    pub const fn new(major: i64, minor: i64) -> Self {
        Self(major * 100 + minor)
    }

    /// Returns the amount in minor units.
    pub fn minor(&self) -> i64 {
        self.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({self})")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The display form always has exactly two fractional digits
        #[test]
        fn always_two_decimals(minor in 0i64..10_000_000) {
            let s = Money::from_minor(minor).to_string();
            let (whole, frac) = s.split_once('.').unwrap();
            prop_assert_eq!(frac.len(), 2);
            let reparsed: i64 = whole.parse::<i64>().unwrap() * 100 + frac.parse::<i64>().unwrap();
            prop_assert_eq!(reparsed, minor);
        }
    }
}
