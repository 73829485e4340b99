//! Drift series over ranges of Gregorian years.

use nissan_calendar::CalendarConverter;
use nissan_ephemeris::Ephemeris;
use tracing::debug;

use crate::config::DriftConfig;
use crate::drift::DriftCalculator;
use crate::error::DriftError;
use crate::locate::EquinoxLocator;
use crate::result::{BadYearFraction, DriftSummary, YearOffset};

/// Runs the locate-then-drift pipeline over year ranges and reduces the
/// results.
///
/// Batch operations stop at the first year that fails and return its error
/// unchanged.
///
/// # Example
///
/// ```
/// use nissan_calendar::IcuCalendar;
/// use nissan_drift::{DriftConfig, HistoryAggregator};
/// use nissan_ephemeris::MeeusEphemeris;
///
/// let agg = HistoryAggregator::new(MeeusEphemeris::new(), IcuCalendar, DriftConfig::new())
///     .unwrap();
/// let series = agg.history(2024, 4).unwrap();
/// assert_eq!(series.len(), 5);
/// assert_eq!(series[0].year, 2020);
/// ```
#[derive(Debug, Clone)]
pub struct HistoryAggregator<E, C> {
    locator: EquinoxLocator<E, C>,
    calculator: DriftCalculator<C>,
    config: DriftConfig,
}

impl<E: Ephemeris, C: CalendarConverter + Clone> HistoryAggregator<E, C> {
    /// Creates an aggregator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::InvalidConfig`] if `config` is invalid.
    pub fn new(ephemeris: E, calendar: C, config: DriftConfig) -> Result<Self, DriftError> {
        config.validate()?;
        let calculator = DriftCalculator::new(calendar.clone(), config.formula());
        let locator = EquinoxLocator::new(ephemeris, calendar, &config);
        Ok(Self {
            locator,
            calculator,
            config,
        })
    }

    /// Returns the equinox locator.
    pub fn locator(&self) -> &EquinoxLocator<E, C> {
        &self.locator
    }

    /// Returns the drift calculator.
    pub fn calculator(&self) -> &DriftCalculator<C> {
        &self.calculator
    }

    /// Returns the configuration.
    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Drift of one Gregorian year.
    ///
    /// # Errors
    ///
    /// Propagates the locator and calculator errors.
    pub fn nissan_shift(&self, year: i32) -> Result<i64, DriftError> {
        let equinox = self.locator.locate(year)?;
        let drift = self.calculator.drift_days(equinox)?;
        Ok(drift)
    }

    /// Drift of every year in `[end_year - years_back, end_year]`, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::InvalidRange`] if the start year underflows,
    /// otherwise the error of the first failing year.
    #[tracing::instrument(skip(self))]
    pub fn history(&self, end_year: i32, years_back: u32) -> Result<Vec<YearOffset>, DriftError> {
        let start = end_year
            .checked_sub_unsigned(years_back)
            .ok_or(DriftError::InvalidRange {
                end_year,
                years_back,
            })?;
        let series = (start..=end_year)
            .map(|year| self.offset(year))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(start, n_years = series.len(), "drift history computed");
        Ok(series)
    }

    /// Fraction of `years` that are bad under the configured threshold and
    /// policy.
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::EmptyRange`] for an empty slice, otherwise the
    /// error of the first failing year.
    pub fn fraction_bad(&self, years: &[i32]) -> Result<f64, DriftError> {
        if years.is_empty() {
            return Err(DriftError::EmptyRange);
        }
        let offsets = years
            .iter()
            .map(|&year| self.offset(year))
            .collect::<Result<Vec<_>, _>>()?;
        self.fraction_of(&offsets)
    }

    /// Fraction of bad years in consecutive windows of `window_size` years
    /// covering `[end_year - years_back, end_year]`.
    ///
    /// The last window stops at `end_year` and may hold fewer years.
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::InvalidConfig`] for a zero window, otherwise as
    /// [`HistoryAggregator::history`].
    #[tracing::instrument(skip(self))]
    pub fn windowed_bad_fraction(
        &self,
        end_year: i32,
        years_back: u32,
        window_size: usize,
    ) -> Result<Vec<BadYearFraction>, DriftError> {
        if window_size == 0 {
            return Err(DriftError::InvalidConfig {
                reason: "window_size must be greater than 0".to_string(),
            });
        }
        let series = self.history(end_year, years_back)?;
        series
            .chunks(window_size)
            .map(|window| {
                Ok(BadYearFraction {
                    window_start: window[0].year,
                    window_len: window.len(),
                    fraction: self.fraction_of(window)?,
                })
            })
            .collect()
    }

    /// Descriptive statistics of a drift series.
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::EmptyRange`] for an empty slice.
    pub fn summarize(&self, offsets: &[YearOffset]) -> Result<DriftSummary, DriftError> {
        let (Some(first), Some(last)) = (offsets.first(), offsets.last()) else {
            return Err(DriftError::EmptyRange);
        };
        let min = offsets
            .iter()
            .copied()
            .min_by_key(|o| o.drift_days)
            .ok_or(DriftError::EmptyRange)?;
        // `max_by_key` keeps the last maximum; the earliest year is wanted.
        let max = offsets
            .iter()
            .copied()
            .reduce(|best, o| if o.drift_days > best.drift_days { o } else { best })
            .ok_or(DriftError::EmptyRange)?;

        let drifts = offsets.iter().map(|o| o.drift_days).collect::<Vec<_>>();
        let mean = nissan_stats::mean(&drifts).ok_or(DriftError::EmptyRange)?;
        let median = nissan_stats::median(&drifts).ok_or(DriftError::EmptyRange)?;
        let sd = nissan_stats::sd(&drifts);

        let n_bad = offsets.iter().filter(|o| self.is_bad(o)).count();
        Ok(DriftSummary {
            n_years: offsets.len(),
            first_year: first.year,
            last_year: last.year,
            min,
            max,
            mean,
            median,
            sd,
            n_bad,
            fraction_bad: self.fraction_of(offsets)?,
        })
    }

    fn offset(&self, year: i32) -> Result<YearOffset, DriftError> {
        match self.nissan_shift(year) {
            Ok(drift_days) => Ok(YearOffset::new(year, drift_days)),
            Err(e) => {
                debug!(year, error = %e, "drift failed");
                Err(e)
            }
        }
    }

    fn is_bad(&self, offset: &YearOffset) -> bool {
        self.config
            .policy()
            .is_bad(offset.drift_days, self.config.threshold())
    }

    fn fraction_of(&self, offsets: &[YearOffset]) -> Result<f64, DriftError> {
        nissan_stats::fraction_where(offsets, |o| self.is_bad(o)).ok_or(DriftError::EmptyRange)
    }
}
