//! Year command: every intermediate of one year's drift.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info_span;

use nissan_calendar::{CalendarConverter, HebrewDate, IcuCalendar};
use nissan_drift::HistoryAggregator;

use crate::cli::YearArgs;
use crate::config::NissanConfig;
use crate::convert;

#[derive(Debug, Serialize)]
struct YearReport {
    year: i32,
    equinox_julian_day: f64,
    equinox_reported_date: String,
    equinox_civil_date: String,
    equinox_hebrew: String,
    nissan_one: String,
    drift_days: i64,
    drift_from_instant: f64,
    bad: bool,
}

/// Run the single-year report.
pub fn run(args: YearArgs) -> Result<()> {
    let _cmd = info_span!("year", year = args.year).entered();
    let config = NissanConfig::load(args.config.as_deref())?;
    let drift_cfg = convert::build_drift_config(&config)?;
    let ephemeris = convert::build_ephemeris(&config.ephemeris);
    let agg = HistoryAggregator::new(ephemeris, IcuCalendar, drift_cfg)?;

    let year = args.year;
    let located = agg
        .locator()
        .locate_detailed(year)
        .with_context(|| format!("failed to locate the equinox of {year}"))?;
    let drift_days = agg
        .calculator()
        .drift_days(located.hebrew)
        .with_context(|| format!("failed to compute the drift of {year}"))?;
    let drift_from_instant = agg
        .calculator()
        .drift_at_instant(located.instant.julian_day())?;
    let nissan = HebrewDate::nissan_one(located.hebrew.year());
    let nissan_date = IcuCalendar.hebrew_to_gregorian(nissan)?;

    let cfg = agg.config();
    let report = YearReport {
        year,
        equinox_julian_day: located.instant.julian_day(),
        equinox_reported_date: located.reported_date.to_string(),
        equinox_civil_date: located.civil_date.to_string(),
        equinox_hebrew: located.hebrew.to_string(),
        nissan_one: format!("{nissan} ({nissan_date})"),
        drift_days,
        drift_from_instant,
        bad: cfg.policy().is_bad(drift_days, cfg.threshold()),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
