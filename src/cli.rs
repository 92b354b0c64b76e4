use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::report::Format;

/// Cylenian calendar converter.
#[derive(Parser)]
#[command(
    name = "cylenian",
    version,
    about = "Convert dates between the Gregorian, Cylenian and season calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./cylenian.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the output format from config.
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<Format>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show a date in every calendar.
    Show(QueryArgs),
    /// Show the Moon and Sun on a date.
    Moon(QueryArgs),
    /// Show the layout of a Cylenian era.
    Era(EraArgs),
}

/// A date query, e.g. `today`, `331.2.1.7`, `2017-12-22` or
/// `90th day of winter 2016`.
#[derive(clap::Args)]
pub struct QueryArgs {
    /// Date query; words are joined with spaces. Defaults to `today`.
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,
}

impl QueryArgs {
    pub fn query(&self) -> String {
        if self.query.is_empty() {
            "today".to_string()
        } else {
            self.query.join(" ")
        }
    }
}

/// Arguments for the `era` subcommand.
#[derive(clap::Args)]
pub struct EraArgs {
    /// Era number (1-based).
    pub era: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_words_are_joined() {
        let cli = Cli::try_parse_from(["cylenian", "show", "December", "22,", "2017"]).unwrap();
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.query(), "December 22, 2017");
    }

    #[test]
    fn empty_query_is_today() {
        let cli = Cli::try_parse_from(["cylenian", "moon"]).unwrap();
        let Command::Moon(args) = cli.command else {
            panic!("expected moon");
        };
        assert_eq!(args.query(), "today");
    }

    #[test]
    fn negative_year_is_not_a_flag() {
        let cli = Cli::try_parse_from(["cylenian", "show", "-1944-12-21"]).unwrap();
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.query(), "-1944-12-21");
    }

    #[test]
    fn global_flags() {
        let cli = Cli::try_parse_from(["cylenian", "era", "4", "-vv", "--format", "json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, Some(Format::Json));
        let Command::Era(args) = cli.command else {
            panic!("expected era");
        };
        assert_eq!(args.era, 4);
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
