//! Era command: the year and month layout of one Cylenian era.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info_span;

use cylenian_calendar::cylenian::{self, MONTH_NAMES, YEARS_PER_ERA};
use cylenian_calendar::{CylenianDate, GregorianDate};

use crate::cli::EraArgs;
use crate::convert::Settings;
use crate::report::{Format, to_json};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EraReport {
    pub era: u32,
    pub leap: bool,
    pub days: u16,
    pub first_day: String,
    pub last_day: String,
    pub years: Vec<YearReport>,
}

#[derive(Debug, Serialize)]
pub struct YearReport {
    pub year: u8,
    pub days: u16,
    pub months: Vec<MonthReport>,
}

#[derive(Debug, Serialize)]
pub struct MonthReport {
    pub month: u8,
    pub name: &'static str,
    pub days: u8,
}

impl EraReport {
    pub fn new(era: u32) -> Result<Self> {
        let days = cylenian::days_in_era(era)?;
        let first = CylenianDate::new(era, 1, 1, 1)?;
        let last_year = YEARS_PER_ERA;
        let last_month = cylenian::months_in_year(era, last_year)?;
        let last = CylenianDate::new(
            era,
            last_year,
            last_month,
            cylenian::days_in_month(era, last_year, last_month)?,
        )
        .with_context(|| format!("era {era} does not end on the JDN axis"))?;

        let years = (1..=YEARS_PER_ERA)
            .map(|year| {
                let months = (1..=cylenian::months_in_year(era, year)?)
                    .map(|month| {
                        Ok(MonthReport {
                            month,
                            name: MONTH_NAMES[usize::from(month) - 1],
                            days: cylenian::days_in_month(era, year, month)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(YearReport {
                    year,
                    days: cylenian::days_in_year(era, year)?,
                    months,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            era,
            leap: cylenian::is_leap_era(era)?,
            days,
            first_day: GregorianDate::from_jdn(first.to_jdn()).format_short(),
            last_day: GregorianDate::from_jdn(last.to_jdn()).format_short(),
            years,
        })
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Era {}: {} days{}, {} to {}",
            self.era,
            self.days,
            if self.leap { " (leap era)" } else { "" },
            self.first_day,
            self.last_day
        );
        for year in &self.years {
            let extra: Vec<String> = year
                .months
                .iter()
                .filter(|month| month.days != cylenian::DAYS_PER_MONTH)
                .map(|month| format!("{} has {} days", month.name, month.days))
                .collect();
            let _ = write!(
                out,
                "\n  Year {:>2}: {} days, {} months",
                year.year,
                year.days,
                year.months.len()
            );
            if !extra.is_empty() {
                let _ = write!(out, " ({})", extra.join(", "));
            }
        }
        out
    }
}

/// Renders the layout of the requested era.
pub fn render(args: &EraArgs, format: Format) -> Result<String> {
    let report = EraReport::new(args.era).with_context(|| format!("invalid era {}", args.era))?;
    match format {
        Format::Text => Ok(report.to_text()),
        Format::Json => to_json(&report),
    }
}

pub fn run(args: EraArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("era", era = args.era).entered();
    println!("{}", render(&args, settings.format)?);
    Ok(())
}
