//! Output types of the aggregator.

use serde::Serialize;

/// Drift of one Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearOffset {
    /// Gregorian year.
    pub year: i32,
    /// Days from the equinox to 1 Nissan; positive when the equinox came first.
    pub drift_days: i64,
}

impl YearOffset {
    /// Creates a new `YearOffset`.
    pub fn new(year: i32, drift_days: i64) -> Self {
        Self { year, drift_days }
    }
}

/// Fraction of bad years in one window of consecutive years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BadYearFraction {
    /// First Gregorian year of the window.
    pub window_start: i32,
    /// Number of years in the window. Only the last window can be shorter
    /// than requested.
    pub window_len: usize,
    /// Fraction of bad years, in `[0, 1]`.
    pub fraction: f64,
}

/// Descriptive statistics of a drift series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftSummary {
    /// Number of years summarised.
    pub n_years: usize,
    /// Earliest year in the series.
    pub first_year: i32,
    /// Latest year in the series.
    pub last_year: i32,
    /// Year with the smallest drift (earliest on ties).
    pub min: YearOffset,
    /// Year with the largest drift (earliest on ties).
    pub max: YearOffset,
    /// Mean drift in days.
    pub mean: f64,
    /// Median drift in days.
    pub median: f64,
    /// Sample standard deviation of the drift; `None` for a single year.
    pub sd: Option<f64>,
    /// Number of bad years.
    pub n_bad: usize,
    /// Fraction of bad years.
    pub fraction_bad: f64,
}
