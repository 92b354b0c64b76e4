//! Free-form date queries.
//!
//! Each form is tried in turn. A form either does not match (`None`), or
//! matches and yields the date or the reason its fields are invalid.

use anyhow::{Context, Result, bail};
use tracing::debug;

use cylenian_calendar::cylenian::MONTH_NAMES;
use cylenian_calendar::Jdn;
use cylenian_date::{Clock, Date};
use cylenian_moon::constants::SYNODIC_MONTH;

use crate::convert::parse_gregorian;

/// The accepted query forms, listed in parse errors.
pub const FORMS: &[&str] = &[
    "today | tomorrow | yesterday",
    "{era}.{year}.{month}.{day}",
    "{month_name} {day}, {era}E{year}",
    "{day}th of {month_name} {era}E{year}",
    "{year}-{month}-{day}",
    "{day}th day of {season} {year}",
    "{year}, {day}th day of {season}",
    "days:{n}",
    "jdn:{n}",
    "next|last full|new moon",
];

type Form = fn(&str, &dyn Clock) -> Option<Result<Date>>;

const PARSERS: &[Form] = &[
    relative_day,
    moon_event,
    prefixed_count,
    cylenian_short,
    cylenian_long,
    season_date,
    gregorian,
];

/// Parses a date query relative to the date reported by `clock`.
pub fn parse_query(query: &str, clock: &dyn Clock) -> Result<Date> {
    let query = query.trim();
    for parser in PARSERS {
        if let Some(result) = parser(query, clock) {
            let date = result.with_context(|| format!("invalid date {query:?}"))?;
            debug!(query, jdn = date.jdn().get(), "parsed query");
            return Ok(date);
        }
    }
    bail!(
        "unrecognised date {query:?}; expected one of:\n  {}",
        FORMS.join("\n  ")
    )
}

fn today(clock: &dyn Clock) -> Result<Date> {
    Date::today(clock).context("the clock reported an invalid date")
}

fn relative_day(query: &str, clock: &dyn Clock) -> Option<Result<Date>> {
    let offset = match query.to_lowercase().as_str() {
        "" | "today" => 0,
        "tomorrow" => 1,
        "yesterday" => -1,
        _ => return None,
    };
    Some(today(clock).and_then(|date| date.checked_add_days(offset).map_err(Into::into)))
}

/// `next full moon`, `last new moon`, ...
fn moon_event(query: &str, clock: &dyn Clock) -> Option<Result<Date>> {
    let lower = query.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let [direction, kind, "moon"] = words.as_slice() else {
        return None;
    };
    let step = match *direction {
        "next" => 1,
        "last" | "previous" => -1,
        _ => return None,
    };
    let full = match *kind {
        "full" => true,
        "new" => false,
        _ => return None,
    };
    Some(today(clock).and_then(|start| nearest_extremum(start, step, full)))
}

/// Finds the first day in direction `step` whose illumination is a local
/// maximum (`full`) or minimum (new Moon).
fn nearest_extremum(start: Date, step: i64, full: bool) -> Result<Date> {
    let illumination = |offset: i64| -> Result<f64> {
        Ok(start.checked_add_days(offset)?.moon().illumination)
    };
    let signed = |value: f64| if full { value } else { -value };
    let horizon = SYNODIC_MONTH.ceil() as i64 + 1;
    for n in 1..=horizon {
        let offset = n * step;
        let here = signed(illumination(offset)?);
        if here >= signed(illumination(offset - 1)?) && here > signed(illumination(offset + 1)?) {
            return start.checked_add_days(offset).map_err(Into::into);
        }
    }
    bail!("no {} moon within one lunation", if full { "full" } else { "new" })
}

/// `days:{n}` and `jdn:{n}`.
fn prefixed_count(query: &str, _clock: &dyn Clock) -> Option<Result<Date>> {
    let (prefix, value) = query.split_once(':')?;
    let prefix = prefix.trim().to_lowercase();
    if prefix != "days" && prefix != "jdn" {
        return None;
    }
    Some(count(&prefix, value))
}

fn count(prefix: &str, value: &str) -> Result<Date> {
    let n: i64 = value
        .trim()
        .parse()
        .with_context(|| format!("expected an integer after {prefix}:"))?;
    let date = if prefix == "days" {
        Date::from_days_since_cylenian_epoch(n)?
    } else {
        Date::from_jdn(Jdn::try_from_i64(n)?)
    };
    Ok(date)
}

/// `331.2.1.7`
fn cylenian_short(query: &str, _clock: &dyn Clock) -> Option<Result<Date>> {
    let parts: Vec<&str> = query.split('.').collect();
    let [era, year, month, day] = parts.as_slice() else {
        return None;
    };
    let era = integer(era)?;
    let year = integer(year)?;
    let month = integer(month)?;
    let day = integer(day)?;
    Some(cylenian(era, year, month, day))
}

/// `Elsy'ondleð 7, 331E2` or `7th of Elsy'ondleð 331E2`.
fn cylenian_long(query: &str, _clock: &dyn Clock) -> Option<Result<Date>> {
    let (head, era_year) = query.rsplit_once(' ')?;
    let (era, year) = era_year.split_once(['E', 'e'])?;
    let (era, year) = (integer(era)?, integer(year)?);
    let head = head.trim();

    let (month, day) = head.rsplit_once(' ')?;
    let (month, day) = match day.strip_suffix(',') {
        Some(day) => (month_number(month)?, integer(day)?),
        None => {
            let (day, month) = head.split_once(" of ")?;
            (month_number(month)?, ordinal(day)?)
        }
    };
    Some(cylenian(era, year, month, day))
}

/// `90th day of winter 2016` or `2016, 90th day of winter`.
fn season_date(query: &str, _clock: &dyn Clock) -> Option<Result<Date>> {
    let (year, rest) = match query.split_once(',') {
        Some((year, rest)) => (Some(integer(year)?), rest.trim()),
        None => (None, query),
    };
    let (day, rest) = rest.split_once(" day of ")?;
    let day = ordinal(day)?;
    let (season, year) = match year {
        Some(year) => (rest.trim(), year),
        None => {
            let (season, year) = rest.trim().rsplit_once(' ')?;
            (season, integer(year)?)
        }
    };
    Some(season_day(year, season, day))
}

fn season_day(year: i64, season: &str, day: i64) -> Result<Date> {
    Ok(Date::from_season(field("year", year)?, season, field("day", day)?)?)
}

/// `2017-12-22`, `-1944-12-21`
fn gregorian(query: &str, _clock: &dyn Clock) -> Option<Result<Date>> {
    let digits = query.strip_prefix('-').unwrap_or(query);
    if digits.split('-').count() != 3
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '-')
    {
        return None;
    }
    Some(parse_gregorian(query).map(Date::from))
}

fn cylenian(era: i64, year: i64, month: i64, day: i64) -> Result<Date> {
    Ok(Date::from_cylenian(
        field("era", era)?,
        field("year", year)?,
        field("month", month)?,
        field("day", day)?,
    )?)
}

/// Narrows a parsed number to the type of its field.
fn field<T: TryFrom<i64>>(name: &str, value: i64) -> Result<T> {
    T::try_from(value).map_err(|_| anyhow::anyhow!("invalid {name}: {value}"))
}

fn integer(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

/// `1st`, `2nd`, `23rd`, `90th`, or a bare number.
fn ordinal(s: &str) -> Option<i64> {
    let s = s.trim();
    let digits = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| s.strip_suffix(suffix))
        .unwrap_or(s);
    integer(digits)
}

/// 1-based Cylenian month number of a month name, ignoring case.
fn month_number(name: &str) -> Option<i64> {
    let name = name.trim().to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|month| month.to_lowercase() == name)
        .map(|index| index as i64 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cylenian_date::FixedClock;
    use cylenian_moon::Phase;

    const CLOCK: FixedClock = FixedClock::new(2017, 12, 22);

    fn parse(query: &str) -> Date {
        parse_query(query, &CLOCK).unwrap()
    }

    fn greg(year: i32, month: u8, day: u8) -> Date {
        Date::from_gregorian(year, month, day).unwrap()
    }

    #[test]
    fn relative_days() {
        assert_eq!(parse("today"), greg(2017, 12, 22));
        assert_eq!(parse(""), greg(2017, 12, 22));
        assert_eq!(parse("Tomorrow"), greg(2017, 12, 23));
        assert_eq!(parse(" yesterday "), greg(2017, 12, 21));
    }

    #[test]
    fn cylenian_forms() {
        let expected = greg(2017, 12, 22);
        assert_eq!(parse("331.2.1.7"), expected);
        assert_eq!(parse("Elsy'ondleð 7, 331E2"), expected);
        assert_eq!(parse("elsy'ondleð 7, 331e2"), expected);
        assert_eq!(parse("7th of Elsy'ondleð 331E2"), expected);
        assert_eq!(parse("1st of Naeð Molið 1E12").cylenian().unwrap().format_short(), "1.12.13.1");
    }

    #[test]
    fn gregorian_forms() {
        assert_eq!(parse("2017-12-22"), greg(2017, 12, 22));
        assert_eq!(parse("-1944-12-21").days_since_epoch(), 0);
    }

    #[test]
    fn season_forms() {
        assert_eq!(parse("90th day of winter 2016"), greg(2017, 3, 20));
        assert_eq!(parse("2016, 90th day of Winter"), greg(2017, 3, 20));
        assert_eq!(parse("1st day of spring 2017"), greg(2017, 3, 21));
    }

    #[test]
    fn counts() {
        assert_eq!(parse("days:0"), greg(-1944, 12, 21));
        assert_eq!(parse("jdn:2451545"), greg(2000, 1, 1));
        assert_eq!(parse("JDN: 0"), greg(-4713, 11, 24));
    }

    #[test]
    fn moon_events() {
        let full = parse("next full moon");
        assert!(full > greg(2017, 12, 22));
        assert_eq!(full.moon().phase, Phase::Full);
        let new = parse("last new moon");
        assert!(new < greg(2017, 12, 22));
        assert_eq!(new.moon().phase, Phase::New);
        // Full Moon 2018-01-02 02:24 UTC, new Moon 2017-12-18 06:30 UTC.
        assert_eq!(full, greg(2018, 1, 2));
        assert_eq!(new, greg(2017, 12, 18));
    }

    #[test]
    fn invalid_fields_are_reported() {
        let err = parse_query("1.13.1.1", &CLOCK).unwrap_err();
        assert!(format!("{err:#}").contains("invalid year: 13"), "{err:#}");
        let err = parse_query("1900-02-29", &CLOCK).unwrap_err();
        assert!(format!("{err:#}").contains("invalid day: 29"), "{err:#}");
        let err = parse_query("days:-1", &CLOCK).unwrap_err();
        assert!(format!("{err:#}").contains("invalid date"), "{err:#}");
        let err = parse_query("1st day of fall 2017", &CLOCK).unwrap_err();
        assert!(format!("{err:#}").contains("fall"), "{err:#}");
        let err = parse_query("0.1.1.1", &CLOCK).unwrap_err();
        assert!(format!("{err:#}").contains("invalid era"), "{err:#}");
    }

    #[test]
    fn unrecognised_query_lists_forms() {
        let err = parse_query("the day after the feast", &CLOCK).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unrecognised date"));
        assert!(message.contains("{era}.{year}.{month}.{day}"));
    }
}
