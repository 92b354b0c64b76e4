//! Solar season calendar anchored to fixed solstice and equinox dates.
//!
//! Seasons start on March 21 (spring), June 21 (summer), September 21
//! (autumn) and December 21 (winter). Winter runs across the turn of the
//! year and belongs to the year in which it starts, so January 1, 2017 is a
//! day of winter 2016.

use std::fmt;
use std::str::FromStr;

use crate::error::{CalendarError, Field};
use crate::gregorian::{GregorianDate, day_number};
use crate::jdn::Jdn;

/// One of the four seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// All seasons in the order they start within a calendar year.
    pub const ALL: [Season; 4] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    /// Returns the `(month, day)` on which the season starts.
    pub fn start_month_day(self) -> (u8, u8) {
        match self {
            Season::Spring => (3, 21),
            Season::Summer => (6, 21),
            Season::Autumn => (9, 21),
            Season::Winter => (12, 21),
        }
    }

    /// Returns the lowercase name of the season.
    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    /// Returns the season that follows this one.
    pub fn next(self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::ALL
            .into_iter()
            .find(|season| season.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalendarError::UnknownSeason {
                name: s.to_string(),
            })
    }
}

/// Day number on which `season` of `year` starts.
fn start_day_number(year: i64, season: Season) -> i64 {
    let (month, day) = season.start_month_day();
    day_number(year, month, day)
}

/// Returns the season containing `date` and the year it is attributed to.
pub fn season_of(date: GregorianDate) -> (i32, Season) {
    let month_day = date.month_day();
    match Season::ALL
        .into_iter()
        .rev()
        .find(|season| season.start_month_day() <= month_day)
    {
        Some(season) => (date.year(), season),
        None => (date.year() - 1, Season::Winter),
    }
}

/// Returns the 1-based day of `date` within its season.
pub fn day_of_season(date: GregorianDate) -> u8 {
    let (year, season) = season_of(date);
    let today = day_number(i64::from(date.year()), date.month(), date.day());
    (today - start_day_number(i64::from(year), season) + 1) as u8
}

/// Returns the number of days in `season` of `year` (89 to 92).
pub fn season_length(year: i32, season: Season) -> u8 {
    let year = i64::from(year);
    let next_year = if season == Season::Winter { year + 1 } else { year };
    (start_day_number(next_year, season.next()) - start_day_number(year, season)) as u8
}

/// Converts a season date back to the Gregorian calendar.
pub fn season_to_gregorian(date: SeasonDate) -> GregorianDate {
    date.to_gregorian()
}

/// A validated day within a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeasonDate {
    year: i32,
    season: Season,
    day: u8,
}

impl SeasonDate {
    /// Creates a new `SeasonDate`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if `day` is not within the
    /// length of `season` in `year`, and [`CalendarError::JdnOutOfRange`] if
    /// the date is not on the JDN axis.
    pub fn new(year: i32, season: Season, day: u8) -> Result<Self, CalendarError> {
        let max_day = season_length(year, season);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::out_of_range(
                Field::Day,
                day,
                1,
                i64::from(max_day),
            ));
        }
        Jdn::try_from_i64(start_day_number(i64::from(year), season) + i64::from(day) - 1)?;
        Ok(Self { year, season, day })
    }

    /// Returns the season date of a Gregorian date.
    pub fn from_gregorian(date: GregorianDate) -> Self {
        let (year, season) = season_of(date);
        Self {
            year,
            season,
            day: day_of_season(date),
        }
    }

    /// Returns the season date falling on `jdn`.
    pub fn from_jdn(jdn: Jdn) -> Self {
        Self::from_gregorian(GregorianDate::from_jdn(jdn))
    }

    /// Returns the Julian Day Number of this date.
    ///
    /// Winter starts on December 21 of the stored year, which inverts the
    /// attribution made by [`season_of`].
    pub fn to_jdn(self) -> Jdn {
        let start = start_day_number(i64::from(self.year), self.season);
        Jdn::try_from_i64(start + i64::from(self.day) - 1)
            .expect("SeasonDate is always on the jdn axis")
    }

    /// Returns the Gregorian date of this season date.
    pub fn to_gregorian(self) -> GregorianDate {
        GregorianDate::from_jdn(self.to_jdn())
    }

    /// Returns the year the season started in.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the season.
    pub fn season(self) -> Season {
        self.season
    }

    /// Returns the 1-based day within the season.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Formats the date as `2016.winter.90`.
    pub fn format_short(self) -> String {
        format!("{}.{}.{}", self.year, self.season, self.day)
    }

    /// Formats the date as `90th day of winter 2016`.
    pub fn format_long(self) -> String {
        format!(
            "{}{} day of {} {}",
            self.day,
            ordinal_suffix(self.day),
            self.season,
            self.year
        )
    }
}

impl fmt::Display for SeasonDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_long())
    }
}

/// English ordinal suffix for `n` (`st`, `nd`, `rd` or `th`).
pub fn ordinal_suffix(n: u8) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greg(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn spring_starts_on_march_21() {
        let d = SeasonDate::from_gregorian(greg(2017, 3, 21));
        assert_eq!((d.year(), d.season(), d.day()), (2017, Season::Spring, 1));
    }

    #[test]
    fn march_20_is_previous_winter() {
        let d = SeasonDate::from_gregorian(greg(2017, 3, 20));
        assert_eq!((d.year(), d.season(), d.day()), (2016, Season::Winter, 90));
    }

    #[test]
    fn december_21_is_same_year_winter() {
        assert_eq!(season_of(greg(2017, 12, 21)), (2017, Season::Winter));
        assert_eq!(day_of_season(greg(2017, 12, 31)), 11);
        assert_eq!(season_of(greg(2018, 1, 1)), (2017, Season::Winter));
        assert_eq!(day_of_season(greg(2018, 1, 1)), 12);
    }

    #[test]
    fn season_boundaries() {
        assert_eq!(season_of(greg(2017, 6, 20)), (2017, Season::Spring));
        assert_eq!(season_of(greg(2017, 6, 21)), (2017, Season::Summer));
        assert_eq!(season_of(greg(2017, 9, 20)), (2017, Season::Summer));
        assert_eq!(season_of(greg(2017, 9, 21)), (2017, Season::Autumn));
        assert_eq!(season_of(greg(2017, 12, 20)), (2017, Season::Autumn));
    }

    #[test]
    fn lengths() {
        assert_eq!(season_length(2017, Season::Spring), 92);
        assert_eq!(season_length(2017, Season::Summer), 92);
        assert_eq!(season_length(2017, Season::Autumn), 91);
        assert_eq!(season_length(2016, Season::Winter), 90);
        assert_eq!(season_length(2019, Season::Winter), 91);
    }

    #[test]
    fn new_validates_day() {
        assert!(SeasonDate::new(2019, Season::Winter, 91).is_ok());
        assert_eq!(
            SeasonDate::new(2016, Season::Winter, 91).unwrap_err(),
            CalendarError::out_of_range(Field::Day, 91u8, 1, 90)
        );
        assert_eq!(
            SeasonDate::new(2016, Season::Spring, 0).unwrap_err(),
            CalendarError::out_of_range(Field::Day, 0u8, 1, 92)
        );
    }

    #[test]
    fn winter_to_gregorian_uses_stored_year() {
        let d = SeasonDate::new(2016, Season::Winter, 90).unwrap();
        assert_eq!(season_to_gregorian(d), greg(2017, 3, 20));
        let d = SeasonDate::new(2016, Season::Winter, 1).unwrap();
        assert_eq!(d.to_gregorian(), greg(2016, 12, 21));
    }

    #[test]
    fn parse_names() {
        assert_eq!("spring".parse::<Season>().unwrap(), Season::Spring);
        assert_eq!(" Winter ".parse::<Season>().unwrap(), Season::Winter);
        assert_eq!(
            "fall".parse::<Season>().unwrap_err(),
            CalendarError::UnknownSeason {
                name: "fall".to_string()
            }
        );
    }

    #[test]
    fn formats() {
        let d = SeasonDate::new(2016, Season::Winter, 90).unwrap();
        assert_eq!(d.format_short(), "2016.winter.90");
        assert_eq!(d.format_long(), "90th day of winter 2016");
        assert_eq!(
            SeasonDate::new(2017, Season::Spring, 1).unwrap().to_string(),
            "1st day of spring 2017"
        );
    }

    #[test]
    fn ordinals() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (92, "nd"),
        ];
        for (n, suffix) in cases {
            assert_eq!(ordinal_suffix(n), suffix, "{n}");
        }
    }

    #[test]
    fn extreme_jdns() {
        for jdn in [Jdn::MIN, Jdn::MAX] {
            let d = SeasonDate::from_jdn(jdn);
            assert_eq!(d.to_jdn(), jdn);
        }
        assert!(matches!(
            SeasonDate::new(5_874_898, Season::Winter, 1),
            Err(CalendarError::JdnOutOfRange { .. })
        ));
    }
}
