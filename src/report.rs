//! Text and JSON renderings of a date.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;

use cylenian_calendar::{CylenianDate, GregorianDate, SeasonDate, cylenian};
use cylenian_date::Date;
use cylenian_moon::MoonState;

/// Output format of every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateReport {
    pub jdn: i32,
    /// Absent for dates before the Cylenian epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cylenian: Option<CylenianReport>,
    pub gregorian: GregorianReport,
    pub season: SeasonReport,
    pub moon: MoonReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CylenianReport {
    pub date: CylenianFields,
    pub days_since_epoch: i64,
    pub format: CylenianFormat,
}

#[derive(Debug, Serialize)]
pub struct CylenianFields {
    pub era: u32,
    pub year: u8,
    pub month: u8,
    pub day: u8,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CylenianFormat {
    pub short: String,
    pub long: String,
    pub name_of_month: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GregorianReport {
    pub date: GregorianFields,
    pub format: LongShort,
}

#[derive(Debug, Serialize)]
pub struct GregorianFields {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

#[derive(Debug, Serialize)]
pub struct SeasonReport {
    pub date: SeasonFields,
    pub format: LongShort,
}

#[derive(Debug, Serialize)]
pub struct SeasonFields {
    pub year: i32,
    pub season: &'static str,
    pub day: u8,
}

#[derive(Debug, Serialize)]
pub struct LongShort {
    pub short: String,
    pub long: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonReport {
    pub phase: &'static str,
    pub phase_fraction: f64,
    pub illumination: f64,
    pub age_days: f64,
    pub distance_km: f64,
    pub angular_diameter_deg: f64,
    pub sun_distance_km: f64,
    pub sun_angular_diameter_deg: f64,
    pub format: String,
}

impl From<CylenianDate> for CylenianReport {
    fn from(date: CylenianDate) -> Self {
        Self {
            date: CylenianFields {
                era: date.era(),
                year: date.year(),
                month: date.month(),
                day: date.day(),
            },
            days_since_epoch: date.days_since_epoch(),
            format: CylenianFormat {
                short: date.format_short(),
                long: date.format_long(),
                name_of_month: date.month_name(),
            },
        }
    }
}

impl From<GregorianDate> for GregorianReport {
    fn from(date: GregorianDate) -> Self {
        Self {
            date: GregorianFields {
                year: date.year(),
                month: date.month(),
                day: date.day(),
            },
            format: LongShort {
                short: date.format_short(),
                long: date.format_long(),
            },
        }
    }
}

impl From<SeasonDate> for SeasonReport {
    fn from(date: SeasonDate) -> Self {
        Self {
            date: SeasonFields {
                year: date.year(),
                season: date.season().name(),
                day: date.day(),
            },
            format: LongShort {
                short: date.format_short(),
                long: date.format_long(),
            },
        }
    }
}

impl From<MoonState> for MoonReport {
    fn from(state: MoonState) -> Self {
        Self {
            phase: state.phase.name(),
            phase_fraction: state.phase_fraction,
            illumination: state.illumination,
            age_days: state.age_days,
            distance_km: state.distance_km,
            angular_diameter_deg: state.angular_diameter_deg,
            sun_distance_km: state.sun_distance_km,
            sun_angular_diameter_deg: state.sun_angular_diameter_deg,
            format: state.format(),
        }
    }
}

impl DateReport {
    pub fn new(date: Date) -> Self {
        Self {
            jdn: date.jdn().get(),
            cylenian: date.cylenian().ok().map(CylenianReport::from),
            gregorian: date.gregorian().into(),
            season: date.season().into(),
            moon: date.moon().into(),
        }
    }

    /// Multi-line summary of every calendar.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        match &self.cylenian {
            Some(c) => {
                let _ = writeln!(out, "Cylenian:  {} ({})", c.format.long, c.format.short);
                let _ = writeln!(out, "Days:      {} since epoch", c.days_since_epoch);
            }
            None => {
                let _ = writeln!(out, "Cylenian:  before the epoch ({})", cylenian::EPOCH);
            }
        }
        let _ = writeln!(
            out,
            "Gregorian: {} ({})",
            self.gregorian.format.long, self.gregorian.format.short
        );
        let _ = writeln!(
            out,
            "Season:    {} ({})",
            self.season.format.long, self.season.format.short
        );
        let _ = writeln!(out, "Moon:      {}", self.moon.format);
        let _ = write!(out, "JDN:       {}", self.jdn);
        out
    }
}

impl MoonReport {
    pub fn to_text(&self) -> String {
        format!(
            "{}\n\
             Moon distance:  {:.0} km ({:.4}\u{b0})\n\
             Sun distance:   {:.0} km ({:.4}\u{b0})",
            self.format,
            self.distance_km,
            self.angular_diameter_deg,
            self.sun_distance_km,
            self.sun_angular_diameter_deg
        )
    }
}

/// Renders `value` as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize report")
}
