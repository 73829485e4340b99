mod bad_years_cmd;
mod chart;
mod cli;
mod config;
mod convert;
mod history_cmd;
mod logging;
mod year_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::History(args) => history_cmd::run(args),
        Command::BadYears(args) => bad_years_cmd::run(args),
        Command::Year(args) => year_cmd::run(args),
    }
}
