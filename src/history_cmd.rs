//! History command: drift of every year in a range.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use nissan_calendar::IcuCalendar;
use nissan_drift::HistoryAggregator;

use crate::chart::Chart;
use crate::cli::HistoryArgs;
use crate::config::NissanConfig;
use crate::convert;

/// Run the drift history analysis.
pub fn run(args: HistoryArgs) -> Result<()> {
    let _cmd = info_span!("history").entered();
    let mut config = NissanConfig::load(args.config.as_deref())?;
    if let Some(end_year) = args.end_year {
        config.analysis.end_year = end_year;
    }
    if let Some(years_back) = args.years_back {
        config.analysis.years_back = years_back;
    }
    if let Some(threshold) = args.threshold {
        config.analysis.threshold = threshold;
    }

    let drift_cfg = convert::build_drift_config(&config)?;
    let ephemeris = convert::build_ephemeris(&config.ephemeris);
    let agg = HistoryAggregator::new(ephemeris, IcuCalendar, drift_cfg)?;

    let (end_year, years_back) = (config.analysis.end_year, config.analysis.years_back);
    info!(end_year, years_back, "computing drift history");
    let series = agg
        .history(end_year, years_back)
        .with_context(|| {
            format!("drift history failed for {years_back} years back from {end_year}")
        })?;
    let summary = agg.summarize(&series)?;
    info!(
        max_year = summary.max.year,
        max_drift = summary.max.drift_days,
        fraction_bad = summary.fraction_bad,
        "history complete"
    );

    println!("{}", serde_json::to_string_pretty(&summary)?);

    if let Some(path) = args.output {
        let cfg = agg.config();
        Chart::drift_history(&series, cfg.threshold(), cfg.policy()).write(&path)?;
    }
    Ok(())
}
