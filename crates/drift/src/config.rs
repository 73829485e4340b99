//! Configuration for the drift pipeline.

use crate::error::DriftError;

/// Which drifts count as a "bad" year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadYearPolicy {
    /// Only a late Nissan counts: `drift > threshold`.
    OneSided,
    /// Either direction counts: `|drift| > threshold`.
    #[default]
    TwoSided,
}

impl BadYearPolicy {
    /// Whether `drift_days` is bad under this policy.
    pub fn is_bad(self, drift_days: i64, threshold: i64) -> bool {
        match self {
            Self::OneSided => drift_days > threshold,
            Self::TwoSided => drift_days.abs() > threshold,
        }
    }
}

/// How the equinox instant is expressed as a civil date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CivilReckoning {
    /// Julian calendar before 15 October 1582, Gregorian from then on; the
    /// resulting fields are read as a Gregorian date.
    #[default]
    Reformed,
    /// Proleptic Gregorian calendar throughout.
    ProlepticGregorian,
}

/// How the day distance between two Hebrew dates is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DriftFormula {
    /// Convert both dates to Gregorian and subtract.
    #[default]
    GregorianRoundTrip,
    /// Convert both dates to Julian Days and subtract.
    JulianDay,
}

/// Fixed day shift applied to the equinox date for years up to a cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JulianCorrection {
    /// Last Gregorian year (inclusive) that receives the shift.
    pub cutoff_year: i32,
    /// Days added to the civil equinox date.
    pub days: i64,
}

impl Default for JulianCorrection {
    fn default() -> Self {
        Self {
            cutoff_year: 1582,
            days: 13,
        }
    }
}

impl JulianCorrection {
    /// Whether `year` receives the shift.
    pub fn applies_to(self, year: i32) -> bool {
        year <= self.cutoff_year
    }
}

/// Configuration for equinox location, drift computation and aggregation.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use nissan_drift::{BadYearPolicy, DriftConfig};
///
/// let config = DriftConfig::new()
///     .with_threshold(20)
///     .with_policy(BadYearPolicy::OneSided)
///     .without_correction();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct DriftConfig {
    threshold: i64,
    policy: BadYearPolicy,
    window_size: usize,
    correction: Option<JulianCorrection>,
    reckoning: CivilReckoning,
    formula: DriftFormula,
}

impl DriftConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `threshold = 15`, `policy = TwoSided`, `window_size = 100`,
    /// a 13-day correction up to 1582, `Reformed` reckoning and the
    /// `GregorianRoundTrip` formula.
    pub fn new() -> Self {
        Self {
            threshold: 15,
            policy: BadYearPolicy::TwoSided,
            window_size: 100,
            correction: Some(JulianCorrection::default()),
            reckoning: CivilReckoning::Reformed,
            formula: DriftFormula::GregorianRoundTrip,
        }
    }

    /// Sets the bad-year threshold in days.
    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the bad-year policy.
    pub fn with_policy(mut self, policy: BadYearPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the default window size for windowed statistics.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Sets the pre-reform correction.
    pub fn with_correction(mut self, correction: JulianCorrection) -> Self {
        self.correction = Some(correction);
        self
    }

    /// Disables the pre-reform correction.
    pub fn without_correction(mut self) -> Self {
        self.correction = None;
        self
    }

    /// Sets the civil reckoning of equinox instants.
    pub fn with_reckoning(mut self, reckoning: CivilReckoning) -> Self {
        self.reckoning = reckoning;
        self
    }

    /// Sets the drift formula.
    pub fn with_formula(mut self, formula: DriftFormula) -> Self {
        self.formula = formula;
        self
    }

    // --- Accessors ---

    /// Returns the bad-year threshold in days.
    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Returns the bad-year policy.
    pub fn policy(&self) -> BadYearPolicy {
        self.policy
    }

    /// Returns the default window size.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the pre-reform correction, if enabled.
    pub fn correction(&self) -> Option<JulianCorrection> {
        self.correction
    }

    /// Returns the civil reckoning.
    pub fn reckoning(&self) -> CivilReckoning {
        self.reckoning
    }

    /// Returns the drift formula.
    pub fn formula(&self) -> DriftFormula {
        self.formula
    }

    /// Validates this configuration.
    ///
    /// Checks that the threshold is non-negative, the window is non-empty
    /// and the correction shifts by less than a year.
    pub fn validate(&self) -> Result<(), DriftError> {
        if self.threshold < 0 {
            return Err(DriftError::InvalidConfig {
                reason: format!("threshold must be non-negative, got {}", self.threshold),
            });
        }
        if self.window_size == 0 {
            return Err(DriftError::InvalidConfig {
                reason: "window_size must be greater than 0".to_string(),
            });
        }
        if let Some(c) = self.correction {
            if c.days.abs() > 365 {
                return Err(DriftError::InvalidConfig {
                    reason: format!("correction must be within 365 days, got {}", c.days),
                });
            }
        }
        Ok(())
    }
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self::new()
    }
}
