//! Sources of the current date.

use chrono::{Datelike, Local};

/// Supplies today's date as a Gregorian `(year, month, day)` triple.
pub trait Clock {
    fn today(&self) -> (i32, u8, u8);
}

/// Reads the local calendar date from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> (i32, u8, u8) {
        let now = Local::now().date_naive();
        (now.year(), now.month() as u8, now.day() as u8)
    }
}

/// A clock stopped on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    year: i32,
    month: u8,
    day: u8,
}

impl FixedClock {
    /// Creates a clock that always reports `year-month-day`.
    ///
    /// The triple is not validated here; [`Date::today`](crate::Date::today)
    /// rejects an invalid one.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }
}
