use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Drift of Alef Nissan relative to the spring equinox.
#[derive(Parser)]
#[command(
    name = "nissan",
    version,
    about = "Drift of Alef Nissan relative to the spring equinox"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Drift of every year in a range, with summary statistics.
    History(HistoryArgs),
    /// Fraction of bad years in consecutive windows.
    BadYears(BadYearsArgs),
    /// Detailed report for a single Gregorian year.
    Year(YearArgs),
}

/// Arguments for the `history` subcommand.
#[derive(clap::Args)]
pub struct HistoryArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the last year of the range.
    #[arg(long, allow_negative_numbers = true)]
    pub end_year: Option<i32>,

    /// Override how many years before the end year to start.
    #[arg(long)]
    pub years_back: Option<u32>,

    /// Override the bad-year threshold in days.
    #[arg(long)]
    pub threshold: Option<i64>,

    /// Write chart data (JSON) to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `bad-years` subcommand.
#[derive(clap::Args)]
pub struct BadYearsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the last year of the range.
    #[arg(long, allow_negative_numbers = true)]
    pub end_year: Option<i32>,

    /// Override how many years before the end year to start.
    #[arg(long)]
    pub years_back: Option<u32>,

    /// Override the window length in years.
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Override the bad-year threshold in days.
    #[arg(long)]
    pub threshold: Option<i64>,

    /// Write chart data (JSON) to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Gregorian year to report on.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
