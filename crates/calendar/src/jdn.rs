//! Julian Day Number newtype, the axis every calendar converts through.

use std::fmt;

use crate::error::CalendarError;

/// A Julian Day Number.
///
/// Day 0 is November 24, 4714 BC in the proleptic Gregorian calendar
/// (astronomical year -4713). The value is an `i32`, which covers several
/// million years on either side of the zero point; arithmetic that may leave
/// that range goes through [`Jdn::try_from_i64`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Jdn(i32);

impl Jdn {
    /// Smallest representable day.
    pub const MIN: Jdn = Jdn(i32::MIN);
    /// Largest representable day.
    pub const MAX: Jdn = Jdn(i32::MAX);

    /// Creates a `Jdn` from a day number.
    pub const fn new(jdn: i32) -> Self {
        Self(jdn)
    }

    /// Creates a `Jdn` from a wide day number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::JdnOutOfRange`] if `value` does not fit in `i32`.
    pub fn try_from_i64(value: i64) -> Result<Self, CalendarError> {
        i32::try_from(value)
            .map(Self)
            .map_err(|_| CalendarError::JdnOutOfRange { value })
    }

    /// Returns the day number.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns the day number widened to `i64`.
    pub const fn to_i64(self) -> i64 {
        self.0 as i64
    }

    /// Returns the day number as a Julian date for the ephemeris.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Returns the day `days` after this one.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::JdnOutOfRange`] if the result leaves the axis.
    pub fn checked_add_days(self, days: i64) -> Result<Self, CalendarError> {
        Self::try_from_i64(self.to_i64() + days)
    }

    /// Returns the signed number of days from `earlier` to `self`.
    pub const fn days_since(self, earlier: Jdn) -> i64 {
        self.to_i64() - earlier.to_i64()
    }
}

impl From<i32> for Jdn {
    fn from(jdn: i32) -> Self {
        Self(jdn)
    }
}

impl fmt::Display for Jdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
