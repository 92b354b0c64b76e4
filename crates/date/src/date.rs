use std::fmt;

use cylenian_calendar::{CalendarError, CylenianDate, GregorianDate, Jdn, SeasonDate, cylenian};
use cylenian_moon::{MoonState, moon_state};
use tracing::debug;

use crate::clock::Clock;

/// One day, viewable in every supported calendar.
///
/// A `Date` is a Julian Day Number. The Gregorian, Cylenian, season and
/// Moon views are computed from it on demand, so two dates built from the
/// same JDN always agree on every view. Equality, ordering and hashing are
/// those of the JDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    jdn: Jdn,
}

impl Date {
    /// Creates the date falling on `jdn`.
    pub fn from_jdn(jdn: Jdn) -> Self {
        debug!(jdn = jdn.get(), "date");
        Self { jdn }
    }

    /// Creates a date from a Gregorian `year-month-day`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the triple is not a valid Gregorian date
    /// on the JDN axis.
    #[tracing::instrument(level = "debug")]
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Ok(Self::from_jdn(GregorianDate::new(year, month, day)?.to_jdn()))
    }

    /// Creates a date from a Cylenian `era.year.month.day`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if any field is outside its range.
    #[tracing::instrument(level = "debug")]
    pub fn from_cylenian(era: u32, year: u8, month: u8, day: u8) -> Result<Self, CalendarError> {
        Ok(Self::from_jdn(CylenianDate::new(era, year, month, day)?.to_jdn()))
    }

    /// Creates a date from a day of a season.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownSeason`] for an unrecognised season
    /// name, or [`CalendarError::OutOfRange`] if `day` exceeds the season.
    #[tracing::instrument(level = "debug")]
    pub fn from_season(year: i32, season: &str, day: u8) -> Result<Self, CalendarError> {
        Ok(Self::from_jdn(SeasonDate::new(year, season.parse()?, day)?.to_jdn()))
    }

    /// Creates the date `days` days after the Cylenian epoch.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NegativeDayCount`] if `days` is negative.
    #[tracing::instrument(level = "debug")]
    pub fn from_days_since_cylenian_epoch(days: i64) -> Result<Self, CalendarError> {
        Ok(Self::from_jdn(CylenianDate::from_days_since_epoch(days)?.to_jdn()))
    }

    /// Creates today's date as reported by `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the clock reports an invalid date.
    pub fn today(clock: &(impl Clock + ?Sized)) -> Result<Self, CalendarError> {
        let (year, month, day) = clock.today();
        Self::from_gregorian(year, month, day)
    }

    /// Returns the date `days` days later (or earlier, if negative).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::JdnOutOfRange`] if the result leaves the
    /// JDN axis.
    pub fn checked_add_days(self, days: i64) -> Result<Self, CalendarError> {
        self.jdn.checked_add_days(days).map(Self::from_jdn)
    }

    /// Returns the following day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::JdnOutOfRange`] on the last day of the axis.
    pub fn tomorrow(self) -> Result<Self, CalendarError> {
        self.checked_add_days(1)
    }

    /// Returns the previous day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::JdnOutOfRange`] on the first day of the axis.
    pub fn yesterday(self) -> Result<Self, CalendarError> {
        self.checked_add_days(-1)
    }

    pub fn jdn(self) -> Jdn {
        self.jdn
    }

    pub fn gregorian(self) -> GregorianDate {
        GregorianDate::from_jdn(self.jdn)
    }

    /// Returns the Cylenian view.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::BeforeEpoch`] for dates before 1.1.1.1.
    pub fn cylenian(self) -> Result<CylenianDate, CalendarError> {
        CylenianDate::from_jdn(self.jdn)
    }

    pub fn season(self) -> SeasonDate {
        SeasonDate::from_jdn(self.jdn)
    }

    /// Returns the state of the Moon at noon of this date.
    pub fn moon(self) -> MoonState {
        moon_state(self.jdn)
    }

    /// Returns the signed number of days since the Cylenian epoch.
    pub fn days_since_epoch(self) -> i64 {
        self.jdn.days_since(cylenian::EPOCH)
    }
}

impl From<Jdn> for Date {
    fn from(jdn: Jdn) -> Self {
        Self::from_jdn(jdn)
    }
}

impl From<GregorianDate> for Date {
    fn from(date: GregorianDate) -> Self {
        Self::from_jdn(date.to_jdn())
    }
}

impl From<CylenianDate> for Date {
    fn from(date: CylenianDate) -> Self {
        Self::from_jdn(date.to_jdn())
    }
}

impl From<SeasonDate> for Date {
    fn from(date: SeasonDate) -> Self {
        Self::from_jdn(date.to_jdn())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.gregorian(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use cylenian_calendar::{ErrorKind, Season};

    #[test]
    fn epoch_views() {
        let date = Date::from_gregorian(-1944, 12, 21).unwrap();
        assert_eq!(date.jdn(), cylenian::EPOCH);
        assert_eq!(date.cylenian().unwrap().format_short(), "1.1.1.1");
        assert_eq!(date.days_since_epoch(), 0);
        assert_eq!(date.season().season(), Season::Winter);
    }

    #[test]
    fn constructors_agree() {
        let from_gregorian = Date::from_gregorian(2017, 12, 22).unwrap();
        let from_cylenian = Date::from_cylenian(331, 2, 1, 7).unwrap();
        let from_days = Date::from_days_since_cylenian_epoch(from_gregorian.days_since_epoch()).unwrap();
        let from_season = Date::from_season(2017, "winter", 2).unwrap();
        assert_eq!(from_gregorian, from_cylenian);
        assert_eq!(from_gregorian, from_days);
        assert_eq!(from_gregorian, from_season);
        assert_eq!(from_gregorian.jdn(), Jdn::new(2_458_110));
    }

    #[test]
    fn today_uses_the_injected_clock() {
        let date = Date::today(&FixedClock::new(2000, 1, 1)).unwrap();
        assert_eq!(date.jdn(), Jdn::new(2_451_545));
        let boxed: Box<dyn Clock> = Box::new(FixedClock::new(2000, 1, 1));
        assert_eq!(Date::today(boxed.as_ref()).unwrap(), date);
        let err = Date::today(&FixedClock::new(1900, 2, 29)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn neighbours() {
        let date = Date::from_gregorian(2000, 2, 28).unwrap();
        assert_eq!(date.tomorrow().unwrap().gregorian().month_day(), (2, 29));
        assert_eq!(date.yesterday().unwrap().gregorian().month_day(), (2, 27));
        assert_eq!(date.checked_add_days(366).unwrap().to_string(), "2001-02-28");
        assert!(Date::from_jdn(Jdn::MAX).tomorrow().is_err());
        assert!(Date::from_jdn(Jdn::MIN).yesterday().is_err());
    }

    #[test]
    fn before_epoch_has_no_cylenian_view() {
        let date = Date::from_gregorian(-1944, 12, 20).unwrap();
        assert_eq!(date.days_since_epoch(), -1);
        let err = date.cylenian().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert_eq!(
            Date::from_days_since_cylenian_epoch(-1).unwrap_err().kind(),
            ErrorKind::InvalidDate
        );
    }

    #[test]
    fn unknown_season_is_invalid_argument() {
        let err = Date::from_season(2017, "fall", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn ordering_follows_jdn() {
        let a = Date::from_jdn(Jdn::new(10));
        let b = Date::from_jdn(Jdn::new(11));
        assert!(a < b);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn conversions_from_views() {
        let gregorian = GregorianDate::new(2017, 3, 20).unwrap();
        let date = Date::from(gregorian);
        assert_eq!(Date::from(date.season()), date);
        assert_eq!(Date::from(date.cylenian().unwrap()), date);
        assert_eq!(Date::from(date.jdn()), date);
    }
}
