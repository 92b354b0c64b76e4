//! Show command: one date in every calendar.

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::QueryArgs;
use crate::convert::Settings;
use crate::parse::parse_query;
use crate::report::{DateReport, Format, to_json};

/// Renders the date named by the query.
pub fn render(args: &QueryArgs, settings: &Settings) -> Result<String> {
    let query = args.query();
    let date = parse_query(&query, settings.clock.as_ref())?;
    info!(%date, "showing date");
    let report = DateReport::new(date);
    match settings.format {
        Format::Text => Ok(report.to_text()),
        Format::Json => to_json(&report),
    }
}

pub fn run(args: QueryArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("show").entered();
    println!("{}", render(&args, settings)?);
    Ok(())
}
