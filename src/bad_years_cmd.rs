//! Bad-years command: windowed fraction of bad years.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use nissan_calendar::IcuCalendar;
use nissan_drift::HistoryAggregator;

use crate::chart::Chart;
use crate::cli::BadYearsArgs;
use crate::config::NissanConfig;
use crate::convert;

/// Run the windowed bad-year analysis.
pub fn run(args: BadYearsArgs) -> Result<()> {
    let _cmd = info_span!("bad_years").entered();
    let mut config = NissanConfig::load(args.config.as_deref())?;
    if let Some(end_year) = args.end_year {
        config.analysis.end_year = end_year;
    }
    if let Some(years_back) = args.years_back {
        config.analysis.years_back = years_back;
    }
    if let Some(window) = args.window {
        config.analysis.window = window;
    }
    if let Some(threshold) = args.threshold {
        config.analysis.threshold = threshold;
    }

    let drift_cfg = convert::build_drift_config(&config)?;
    let window = drift_cfg.window_size();
    let ephemeris = convert::build_ephemeris(&config.ephemeris);
    let agg = HistoryAggregator::new(ephemeris, IcuCalendar, drift_cfg)?;

    let (end_year, years_back) = (config.analysis.end_year, config.analysis.years_back);
    info!(end_year, years_back, window, "computing bad-year fractions");
    let windows = agg
        .windowed_bad_fraction(end_year, years_back, window)
        .with_context(|| {
            format!("bad-year fractions failed for {years_back} years back from {end_year}")
        })?;
    info!(n_windows = windows.len(), "bad-year fractions complete");

    println!("{}", serde_json::to_string_pretty(&windows)?);

    if let Some(path) = args.output {
        Chart::bad_year_fractions(&windows, window).write(&path)?;
    }
    Ok(())
}
