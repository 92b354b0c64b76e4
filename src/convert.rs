//! Pure conversion functions: TOML config structs -> runtime types.

use anyhow::{Context, Result, bail};

use cylenian_calendar::GregorianDate;
use cylenian_date::{Clock, FixedClock, SystemClock};

use crate::config::{ClockToml, CylenianConfig, OutputToml};
use crate::report::Format;

/// Runtime settings shared by every subcommand.
pub struct Settings {
    pub format: Format,
    pub clock: Box<dyn Clock>,
}

/// Parses an output format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<Format> {
    match s.to_lowercase().as_str() {
        "text" => Ok(Format::Text),
        "json" => Ok(Format::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Resolves the output format; a CLI flag wins over the config file.
pub fn build_format(output: &OutputToml, flag: Option<Format>) -> Result<Format> {
    match flag {
        Some(format) => Ok(format),
        None => parse_format(&output.format),
    }
}

/// Parses a `YYYY-MM-DD` Gregorian date. A leading `-` marks a negative
/// (astronomical) year.
pub fn parse_gregorian(s: &str) -> Result<GregorianDate> {
    let s = s.trim();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let parts: Vec<&str> = rest.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        bail!("expected a date of the form YYYY-MM-DD, got {s:?}");
    };
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in {s:?}"))?;
    let month: u8 = month
        .parse()
        .with_context(|| format!("invalid month in {s:?}"))?;
    let day: u8 = day
        .parse()
        .with_context(|| format!("invalid day in {s:?}"))?;
    Ok(GregorianDate::new(sign * year, month, day)?)
}

/// Builds the clock: fixed if `[clock] today` is set, the system clock
/// otherwise.
pub fn build_clock(clock: &ClockToml) -> Result<Box<dyn Clock>> {
    match &clock.today {
        Some(today) => {
            let date = parse_gregorian(today).context("invalid [clock] today")?;
            Ok(Box::new(FixedClock::new(date.year(), date.month(), date.day())))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Builds the runtime [`Settings`] from the config file and CLI overrides.
pub fn build_settings(config: &CylenianConfig, format: Option<Format>) -> Result<Settings> {
    Ok(Settings {
        format: build_format(&config.output, format)?,
        clock: build_clock(&config.clock)?,
    })
}
