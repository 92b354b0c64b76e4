//! Moon command: phase and distances on a date.

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::QueryArgs;
use crate::convert::Settings;
use crate::parse::parse_query;
use crate::report::{Format, MoonReport, to_json};

/// Renders the Moon on the date named by the query.
pub fn render(args: &QueryArgs, settings: &Settings) -> Result<String> {
    let query = args.query();
    let date = parse_query(&query, settings.clock.as_ref())?;
    let report = MoonReport::from(date.moon());
    info!(%date, phase = report.phase, "moon");
    match settings.format {
        Format::Text => Ok(format!("{date}: {}", report.to_text())),
        Format::Json => to_json(&report),
    }
}

pub fn run(args: QueryArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("moon").entered();
    println!("{}", render(&args, settings)?);
    Ok(())
}
