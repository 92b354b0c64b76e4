//! Error types for the cylenian-calendar crate.

use std::fmt;

/// A date field named in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Era,
    Year,
    Month,
    Day,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Era => "era",
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
        })
    }
}

/// Coarse classification of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field is outside its valid range.
    InvalidArgument,
    /// A day count or JDN is outside the supported domain.
    InvalidDate,
}

/// Error type for all fallible operations in the cylenian-calendar crate.
///
/// Every variant identifies the offending value and, where one exists, the
/// range it had to fall in, so the message can be shown to a user as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year, month or day is outside its computed range.
    #[error("invalid {field}: {value} (must be {min}..={max})")]
    OutOfRange {
        /// The field that failed validation.
        field: Field,
        /// The value that was provided.
        value: i64,
        /// Smallest valid value.
        min: i64,
        /// Largest valid value for the surrounding date.
        max: i64,
    },

    /// Returned when a Cylenian era is not positive.
    #[error("invalid era: {era} (must be >= 1)")]
    InvalidEra {
        /// The invalid era that was provided.
        era: i64,
    },

    /// Returned when a season name is not recognized.
    #[error("unknown season: {name:?} (must be one of spring, summer, autumn, winter)")]
    UnknownSeason {
        /// The name that failed to parse.
        name: String,
    },

    /// Returned when a Cylenian day count is negative.
    #[error("invalid day count: {days} (must be >= 0)")]
    NegativeDayCount {
        /// The negative day count.
        days: i64,
    },

    /// Returned when a Cylenian date is requested for a JDN before the epoch.
    #[error("julian day {jdn} precedes the cylenian epoch (julian day {epoch})")]
    BeforeEpoch {
        /// The requested JDN.
        jdn: i64,
        /// The JDN of the Cylenian epoch.
        epoch: i64,
    },

    /// Returned when a computed day number does not fit the JDN axis.
    #[error("julian day {value} is outside the supported range {}..={}", i32::MIN, i32::MAX)]
    JdnOutOfRange {
        /// The day number that overflowed.
        value: i64,
    },
}

impl CalendarError {
    /// Returns whether this error rejects an argument or a date.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalendarError::OutOfRange { .. }
            | CalendarError::InvalidEra { .. }
            | CalendarError::UnknownSeason { .. } => ErrorKind::InvalidArgument,
            CalendarError::NegativeDayCount { .. }
            | CalendarError::BeforeEpoch { .. }
            | CalendarError::JdnOutOfRange { .. } => ErrorKind::InvalidDate,
        }
    }

    pub(crate) fn out_of_range(field: Field, value: impl Into<i64>, min: i64, max: i64) -> Self {
        CalendarError::OutOfRange {
            field,
            value: value.into(),
            min,
            max,
        }
    }
}
