use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level analysis configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct NissanConfig {
    /// Year range and bad-year settings.
    #[serde(default)]
    pub analysis: AnalysisToml,

    /// Civil calendar settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Ephemeris settings.
    #[serde(default)]
    pub ephemeris: EphemerisToml,
}

impl NissanConfig {
    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

/// `[analysis]`: which years to analyse and what counts as a bad year.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    /// Last Gregorian year of the range.
    #[serde(default = "default_end_year")]
    pub end_year: i32,

    /// Number of years before `end_year` to include.
    #[serde(default = "default_years_back")]
    pub years_back: u32,

    /// Years per window of the bad-year fraction.
    #[serde(default = "default_window")]
    pub window: usize,

    /// Drift in days beyond which a year is bad.
    #[serde(default = "default_threshold")]
    pub threshold: i64,

    /// Bad-year policy: `"two-sided"` or `"one-sided"`.
    #[serde(default = "default_bad_years")]
    pub bad_years: String,

    /// Drift formula: `"gregorian"` or `"julian-day"`.
    #[serde(default = "default_formula")]
    pub formula: String,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            end_year: default_end_year(),
            years_back: default_years_back(),
            window: default_window(),
            threshold: default_threshold(),
            bad_years: default_bad_years(),
            formula: default_formula(),
        }
    }
}

fn default_end_year() -> i32 {
    2024
}
fn default_years_back() -> u32 {
    2000
}
fn default_window() -> usize {
    100
}
fn default_threshold() -> i64 {
    15
}
fn default_bad_years() -> String {
    "two-sided".to_string()
}
fn default_formula() -> String {
    "gregorian".to_string()
}

/// `[calendar]`: how equinox instants become civil dates.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    /// Civil reckoning: `"reformed"` or `"proleptic-gregorian"`.
    #[serde(default = "default_reckoning")]
    pub reckoning: String,

    /// Shift applied to early years.
    #[serde(default)]
    pub julian_correction: CorrectionToml,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            reckoning: default_reckoning(),
            julian_correction: CorrectionToml::default(),
        }
    }
}

fn default_reckoning() -> String {
    "reformed".to_string()
}

/// `[calendar.julian_correction]`: fixed shift for years up to `cutoff_year`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorrectionToml {
    /// Whether the shift is applied at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Last Gregorian year that is shifted.
    #[serde(default = "default_cutoff_year")]
    pub cutoff_year: i32,

    /// Days added to the civil date.
    #[serde(default = "default_correction_days")]
    pub days: i64,
}

impl Default for CorrectionToml {
    fn default() -> Self {
        Self {
            enabled: true,
            cutoff_year: default_cutoff_year(),
            days: default_correction_days(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_cutoff_year() -> i32 {
    1582
}
fn default_correction_days() -> i64 {
    13
}

/// `[ephemeris]`: equinox model settings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EphemerisToml {
    /// Convert equinox instants from dynamical time to UT.
    #[serde(default = "default_true")]
    pub delta_t: bool,
}

impl Default for EphemerisToml {
    fn default() -> Self {
        Self { delta_t: true }
    }
}
