//! The Cylenian calendar.
//!
//! An era holds 12 years. Years hold 12 months of 30 days, and the two leap
//! years of every era (years 6 and 12) add a 13th month. Nine eras in every
//! cycle of 100 are leap eras, which are one day shorter.
//!
//! The rules live in three tables, each with one invariant:
//!
//! 1. [`LEAP_ERAS`]: era `e` is a leap era iff `((e - 1) % 100) + 1` is listed.
//! 2. [`EXTRA_MONTH_DAYS`]: year `y` has a 13th month iff its entry is
//!    non-zero, and the entry is that month's length in a common era.
//! 3. [`LEAP_ERA_DEFICIT_YEAR`]: in a leap era the 13th month of this year is
//!    one day shorter. No other month length depends on the era.
//!
//! Together they give 4383 days per common era and 4382 per leap era.

use std::fmt;

use crate::error::{CalendarError, Field};
use crate::jdn::Jdn;

/// Era positions (1..=100) within each 100-era cycle that are leap eras.
pub const LEAP_ERAS: [u32; 9] = [4, 12, 21, 37, 46, 54, 71, 79, 87];

/// Length of each year's 13th month in a common era, or 0 if it has none
/// (index 0 unused).
pub const EXTRA_MONTH_DAYS: [u8; 13] = [0, 0, 0, 0, 0, 0, 31, 0, 0, 0, 0, 0, 32];

/// The year whose 13th month absorbs the missing day of a leap era.
pub const LEAP_ERA_DEFICIT_YEAR: u8 = 12;

/// Number of eras in one leap cycle.
pub const ERAS_PER_CYCLE: u32 = 100;

/// Number of years in one era.
pub const YEARS_PER_ERA: u8 = 12;

/// Length of every month other than a 13th month.
pub const DAYS_PER_MONTH: u8 = 30;

/// Day 0 of the Cylenian calendar: December 21, 1945 BC (astronomical year -1944).
pub const EPOCH: Jdn = Jdn::new(1_011_384);

/// The 13 month names, first month first.
pub const MONTH_NAMES: [&str; 13] = [
    "Elsy'ondleð",
    "Nae Boryeð",
    "Seniðin",
    "Liðin Boryeð",
    "Emmiðiða",
    "Omilnin",
    "Karðondleð",
    "Seðaneðr",
    "Liliðin",
    "Liðin Maroo",
    "Fðileð",
    "Elseniðor",
    "Naeð Molið",
];

const COMMON_ERA_DAYS: i64 = 4383;

/// Days before each era of a cycle, relative to the cycle start; the last
/// entry is the cycle length.
const ERA_STARTS: [i64; ERAS_PER_CYCLE as usize + 1] = era_starts();

/// Number of days in a full 100-era cycle.
pub const DAYS_PER_CYCLE: i64 = ERA_STARTS[ERAS_PER_CYCLE as usize];

const fn era_starts() -> [i64; ERAS_PER_CYCLE as usize + 1] {
    let mut starts = [0; ERAS_PER_CYCLE as usize + 1];
    let mut i = 0;
    while i < ERAS_PER_CYCLE as usize {
        starts[i + 1] = starts[i] + COMMON_ERA_DAYS - leap_era_position(i as u32 + 1) as i64;
        i += 1;
    }
    starts
}

const fn leap_era_position(position: u32) -> bool {
    let mut i = 0;
    while i < LEAP_ERAS.len() {
        if LEAP_ERAS[i] == position {
            return true;
        }
        i += 1;
    }
    false
}

fn check_era(era: u32) -> Result<(), CalendarError> {
    if era == 0 {
        return Err(CalendarError::InvalidEra { era: 0 });
    }
    Ok(())
}

fn check_year(year: u8) -> Result<(), CalendarError> {
    if !(1..=YEARS_PER_ERA).contains(&year) {
        return Err(CalendarError::out_of_range(
            Field::Year,
            year,
            1,
            i64::from(YEARS_PER_ERA),
        ));
    }
    Ok(())
}

// Unchecked rule lookups; callers validate first.

fn leap_era(era: u32) -> bool {
    leap_era_position((era - 1) % ERAS_PER_CYCLE + 1)
}

fn months(year: u8) -> u8 {
    if EXTRA_MONTH_DAYS[year as usize] > 0 { 13 } else { 12 }
}

fn month_days(era: u32, year: u8, month: u8) -> u8 {
    if month <= 12 {
        return DAYS_PER_MONTH;
    }
    let days = EXTRA_MONTH_DAYS[year as usize];
    if year == LEAP_ERA_DEFICIT_YEAR && leap_era(era) {
        days - 1
    } else {
        days
    }
}

fn year_days(era: u32, year: u8) -> u16 {
    (1..=months(year))
        .map(|m| u16::from(month_days(era, year, m)))
        .sum()
}

fn era_days(era: u32) -> u16 {
    if leap_era(era) { 4382 } else { 4383 }
}

/// Days from the epoch to the first day of `era`.
fn days_before_era(era: u32) -> i64 {
    let cycles = i64::from((era - 1) / ERAS_PER_CYCLE);
    let position = ((era - 1) % ERAS_PER_CYCLE) as usize;
    cycles * DAYS_PER_CYCLE + ERA_STARTS[position]
}

/// Returns whether `era` is a leap era.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidEra`] if `era` is 0.
pub fn is_leap_era(era: u32) -> Result<bool, CalendarError> {
    check_era(era)?;
    Ok(leap_era(era))
}

/// Returns whether `year` of an era is a leap year (has a 13th month).
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if `year` is not in 1..=12.
pub fn is_leap_year(year: u8) -> Result<bool, CalendarError> {
    check_year(year)?;
    Ok(months(year) == 13)
}

/// Returns the number of days in `era`: 4383, or 4382 in a leap era.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidEra`] if `era` is 0.
pub fn days_in_era(era: u32) -> Result<u16, CalendarError> {
    check_era(era)?;
    Ok(era_days(era))
}

/// Returns the number of days in `year` of `era`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidEra`] or [`CalendarError::OutOfRange`] for
/// an invalid era or year.
pub fn days_in_year(era: u32, year: u8) -> Result<u16, CalendarError> {
    check_era(era)?;
    check_year(year)?;
    Ok(year_days(era, year))
}

/// Returns the number of months in `year` of `era` (12 or 13).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidEra`] or [`CalendarError::OutOfRange`] for
/// an invalid era or year.
pub fn months_in_year(era: u32, year: u8) -> Result<u8, CalendarError> {
    check_era(era)?;
    check_year(year)?;
    Ok(months(year))
}

/// Returns the number of days in `month` of `year` of `era`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidEra`] or [`CalendarError::OutOfRange`] for
/// an invalid era, year or month.
pub fn days_in_month(era: u32, year: u8, month: u8) -> Result<u8, CalendarError> {
    let max_month = months_in_year(era, year)?;
    if !(1..=max_month).contains(&month) {
        return Err(CalendarError::out_of_range(
            Field::Month,
            month,
            1,
            i64::from(max_month),
        ));
    }
    Ok(month_days(era, year, month))
}

/// Converts a count of days since the epoch to a Cylenian date.
///
/// # Errors
///
/// Returns [`CalendarError::NegativeDayCount`] if `days` is negative, or
/// [`CalendarError::JdnOutOfRange`] if the day lies past the end of the JDN axis.
pub fn from_days_since_epoch(days: i64) -> Result<CylenianDate, CalendarError> {
    CylenianDate::from_days_since_epoch(days)
}

/// Converts a Cylenian date to a count of days since the epoch.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidEra`] or [`CalendarError::OutOfRange`] if
/// any field is invalid, or [`CalendarError::JdnOutOfRange`] if the era lies
/// past the end of the JDN axis.
pub fn to_days_since_epoch(era: u32, year: u8, month: u8, day: u8) -> Result<i64, CalendarError> {
    Ok(CylenianDate::new(era, year, month, day)?.days_since_epoch())
}

/// Converts a Cylenian date to its Julian Day Number.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidEra`] or [`CalendarError::OutOfRange`] if
/// any field is invalid, or [`CalendarError::JdnOutOfRange`] if the era lies
/// past the end of the JDN axis.
pub fn cylenian_to_jdn(era: u32, year: u8, month: u8, day: u8) -> Result<Jdn, CalendarError> {
    Ok(CylenianDate::new(era, year, month, day)?.to_jdn())
}

/// Converts a Julian Day Number to a Cylenian date.
///
/// # Errors
///
/// Returns [`CalendarError::BeforeEpoch`] if `jdn` precedes [`EPOCH`].
pub fn jdn_to_cylenian(jdn: Jdn) -> Result<CylenianDate, CalendarError> {
    CylenianDate::from_jdn(jdn)
}

/// A validated Cylenian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CylenianDate {
    era: u32,
    year: u8,
    month: u8,
    day: u8,
}

impl CylenianDate {
    /// Creates a new `CylenianDate`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidEra`] if `era` is 0,
    /// [`CalendarError::OutOfRange`] if the year, month or day is outside the
    /// range computed for the surrounding era and year, and
    /// [`CalendarError::JdnOutOfRange`] if the era lies past the end of the
    /// JDN axis.
    pub fn new(era: u32, year: u8, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(era, year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::out_of_range(
                Field::Day,
                day,
                1,
                i64::from(max_day),
            ));
        }
        let date = Self {
            era,
            year,
            month,
            day,
        };
        EPOCH.checked_add_days(date.days_since_epoch())?;
        Ok(date)
    }

    /// Creates the date `days` days after the epoch.
    ///
    /// Whole 100-era cycles are skipped arithmetically and the era within the
    /// cycle is found by binary search; years and months are then consumed
    /// one at a time.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NegativeDayCount`] if `days` is negative, or
    /// [`CalendarError::JdnOutOfRange`] if the day lies past the end of the JDN axis.
    pub fn from_days_since_epoch(days: i64) -> Result<Self, CalendarError> {
        if days < 0 {
            return Err(CalendarError::NegativeDayCount { days });
        }
        EPOCH.checked_add_days(days)?;

        let cycles = days / DAYS_PER_CYCLE;
        let mut rem = days % DAYS_PER_CYCLE;
        let position = ERA_STARTS.partition_point(|&start| start <= rem) - 1;
        rem -= ERA_STARTS[position];
        let era = u32::try_from(cycles).expect("jdn range bounds the cycle count")
            * ERAS_PER_CYCLE
            + position as u32
            + 1;

        let mut year = 1;
        while rem >= i64::from(year_days(era, year)) {
            rem -= i64::from(year_days(era, year));
            year += 1;
        }
        let mut month = 1;
        while rem >= i64::from(month_days(era, year, month)) {
            rem -= i64::from(month_days(era, year, month));
            month += 1;
        }

        Ok(Self {
            era,
            year,
            month,
            day: rem as u8 + 1,
        })
    }

    /// Creates the Cylenian date falling on `jdn`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::BeforeEpoch`] if `jdn` precedes [`EPOCH`].
    pub fn from_jdn(jdn: Jdn) -> Result<Self, CalendarError> {
        if jdn < EPOCH {
            return Err(CalendarError::BeforeEpoch {
                jdn: jdn.to_i64(),
                epoch: EPOCH.to_i64(),
            });
        }
        Self::from_days_since_epoch(jdn.days_since(EPOCH))
    }

    /// Returns the number of days between the epoch and this date.
    pub fn days_since_epoch(self) -> i64 {
        let year_offset: i64 = (1..self.year)
            .map(|y| i64::from(year_days(self.era, y)))
            .sum();
        let month_offset: i64 = (1..self.month)
            .map(|m| i64::from(month_days(self.era, self.year, m)))
            .sum();
        days_before_era(self.era) + year_offset + month_offset + i64::from(self.day) - 1
    }

    /// Returns the Julian Day Number of this date.
    pub fn to_jdn(self) -> Jdn {
        EPOCH
            .checked_add_days(self.days_since_epoch())
            .expect("CylenianDate is always on the jdn axis")
    }

    /// Returns the era (1-based).
    pub fn era(self) -> u32 {
        self.era
    }

    /// Returns the year within the era (1..=12).
    pub fn year(self) -> u8 {
        self.year
    }

    /// Returns the month within the year (1..=13).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=32).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns whether this date falls in a leap era.
    pub fn is_leap_era(self) -> bool {
        leap_era(self.era)
    }

    /// Returns the name of the month.
    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }

    /// Formats the date as `era.year.month.day`.
    pub fn format_short(self) -> String {
        format!("{}.{}.{}.{}", self.era, self.year, self.month, self.day)
    }

    /// Formats the date as `Karðondleð 7, 331E2`.
    pub fn format_long(self) -> String {
        format!(
            "{} {}, {}E{}",
            self.month_name(),
            self.day,
            self.era,
            self.year
        )
    }
}

impl fmt::Display for CylenianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_long())
    }
}
