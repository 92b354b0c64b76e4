mod cli;
mod config;
mod convert;
mod era_cmd;
mod logging;
mod moon_cmd;
mod parse;
mod report;
mod show_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let settings = convert::build_settings(&config, cli.format)?;
    match cli.command {
        Command::Show(args) => show_cmd::run(args, &settings),
        Command::Moon(args) => moon_cmd::run(args, &settings),
        Command::Era(args) => era_cmd::run(args, &settings),
    }
}
