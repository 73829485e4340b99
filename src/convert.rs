//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use nissan_drift::{BadYearPolicy, CivilReckoning, DriftConfig, DriftFormula, JulianCorrection};
use nissan_ephemeris::MeeusEphemeris;

use crate::config::{CalendarToml, EphemerisToml, NissanConfig};

/// Parses a bad-year policy name into the corresponding enum variant.
pub fn parse_bad_year_policy(s: &str) -> Result<BadYearPolicy> {
    match s.to_lowercase().as_str() {
        "two-sided" | "two_sided" => Ok(BadYearPolicy::TwoSided),
        "one-sided" | "one_sided" => Ok(BadYearPolicy::OneSided),
        other => bail!("unknown bad-year policy: {other:?}"),
    }
}

/// Parses a civil reckoning name into the corresponding enum variant.
pub fn parse_reckoning(s: &str) -> Result<CivilReckoning> {
    match s.to_lowercase().as_str() {
        "reformed" => Ok(CivilReckoning::Reformed),
        "proleptic-gregorian" | "proleptic_gregorian" | "proleptic" => {
            Ok(CivilReckoning::ProlepticGregorian)
        }
        other => bail!("unknown civil reckoning: {other:?}"),
    }
}

/// Parses a drift formula name into the corresponding enum variant.
pub fn parse_formula(s: &str) -> Result<DriftFormula> {
    match s.to_lowercase().as_str() {
        "gregorian" | "gregorian-round-trip" => Ok(DriftFormula::GregorianRoundTrip),
        "julian-day" | "julian_day" | "jd" => Ok(DriftFormula::JulianDay),
        other => bail!("unknown drift formula: {other:?}"),
    }
}

/// Converts the TOML calendar section into an optional correction.
pub fn build_correction(calendar: &CalendarToml) -> Option<JulianCorrection> {
    let c = &calendar.julian_correction;
    c.enabled.then_some(JulianCorrection {
        cutoff_year: c.cutoff_year,
        days: c.days,
    })
}

/// Builds a [`DriftConfig`] from the TOML configuration.
pub fn build_drift_config(config: &NissanConfig) -> Result<DriftConfig> {
    let analysis = &config.analysis;
    let mut cfg = DriftConfig::new()
        .with_threshold(analysis.threshold)
        .with_window_size(analysis.window)
        .with_policy(parse_bad_year_policy(&analysis.bad_years)?)
        .with_formula(parse_formula(&analysis.formula)?)
        .with_reckoning(parse_reckoning(&config.calendar.reckoning)?);
    cfg = match build_correction(&config.calendar) {
        Some(c) => cfg.with_correction(c),
        None => cfg.without_correction(),
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Builds the ephemeris from the TOML ephemeris section.
pub fn build_ephemeris(ephemeris: &EphemerisToml) -> MeeusEphemeris {
    MeeusEphemeris::new().with_delta_t(ephemeris.delta_t)
}
