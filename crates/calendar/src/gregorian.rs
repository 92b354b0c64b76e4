//! Proleptic Gregorian calendar.
//!
//! Conversions use the closed-form integer algorithm with floor division
//! throughout, so years before -4800 convert as correctly as modern ones.

use std::fmt;

use crate::error::{CalendarError, Field};
use crate::jdn::Jdn;

/// Fixed English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of days in each month of a common year (index 0 unused).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns whether `year` is a Gregorian leap year.
///
/// Divisible by 4, except centuries, except centuries divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::out_of_range(Field::Month, month, 1, 12));
    }
    if month == 2 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(DAYS_PER_MONTH[month as usize])
    }
}

/// Converts a Gregorian date to its Julian Day Number.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the month or day is invalid, or
/// [`CalendarError::JdnOutOfRange`] if the date is too far from the epoch.
pub fn gregorian_to_jdn(year: i32, month: u8, day: u8) -> Result<Jdn, CalendarError> {
    Ok(GregorianDate::new(year, month, day)?.to_jdn())
}

/// Converts a Julian Day Number to a Gregorian date.
pub fn jdn_to_gregorian(jdn: Jdn) -> GregorianDate {
    GregorianDate::from_jdn(jdn)
}

/// Day number of a month and day already known to be valid, without the
/// `i32` bound of [`Jdn`].
pub(crate) fn day_number(year: i64, month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// A validated date in the proleptic Gregorian calendar.
///
/// Years are astronomical: 1 BC is year 0, 2 BC is year -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if `month` is not in 1..=12 or
    /// `day` exceeds the length of that month in `year`, and
    /// [`CalendarError::JdnOutOfRange`] if the date is not on the JDN axis.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::out_of_range(
                Field::Day,
                day,
                1,
                i64::from(max_day),
            ));
        }
        Jdn::try_from_i64(day_number(i64::from(year), month, day))?;
        Ok(Self { year, month, day })
    }

    /// Creates the Gregorian date falling on `jdn`.
    pub fn from_jdn(jdn: Jdn) -> Self {
        let j = jdn.to_i64() + 32044;
        let g = j.div_euclid(146_097);
        let dg = j.rem_euclid(146_097);
        let c = (dg / 36_524 + 1) * 3 / 4;
        let dc = dg - c * 36_524;
        let b = dc / 1461;
        let db = dc % 1461;
        let a = (db / 365 + 1) * 3 / 4;
        let da = db - a * 365;
        let y = g * 400 + c * 100 + b * 4 + a;
        // Months counted from March, so the leap day falls at the end.
        let m = (da * 5 + 308) / 153 - 2;
        let d = da - (m + 4) * 153 / 5 + 122;

        let year = y - 4800 + (m + 2) / 12;
        Self {
            year: i32::try_from(year).expect("an i32 jdn always maps to an i32 year"),
            month: ((m + 2) % 12 + 1) as u8,
            day: (d + 1) as u8,
        }
    }

    /// Returns the Julian Day Number of this date.
    pub fn to_jdn(self) -> Jdn {
        Jdn::try_from_i64(day_number(i64::from(self.year), self.month, self.day))
            .expect("GregorianDate is always on the jdn axis")
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Returns the English name of the month.
    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }

    /// Formats the date as `YYYY-MM-DD`.
    pub fn format_short(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Formats the date as `December 22, 2017`.
    pub fn format_long(self) -> String {
        format!("{} {}, {}", self.month_name(), self.day, self.year)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_short())
    }
}
