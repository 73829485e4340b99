//! Signed distance between the equinox and 1 Nissan.

use nissan_calendar::{CalendarConverter, HebrewDate};

use crate::config::DriftFormula;
use crate::error::DriftError;

/// Computes how many days 1 Nissan lies after a Hebrew date.
///
/// The result is `date(1 Nissan) - date(equinox)`: positive when the
/// equinox precedes Nissan, negative when Nissan has already begun.
#[derive(Debug, Clone)]
pub struct DriftCalculator<C> {
    calendar: C,
    formula: DriftFormula,
}

impl<C: CalendarConverter> DriftCalculator<C> {
    /// Creates a calculator using `formula`.
    pub fn new(calendar: C, formula: DriftFormula) -> Self {
        Self { calendar, formula }
    }

    /// Returns the configured formula.
    pub fn formula(&self) -> DriftFormula {
        self.formula
    }

    /// Days from `equinox` to 1 Nissan of the same Hebrew year.
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::Conversion`] if either date does not exist.
    pub fn drift_days(&self, equinox: HebrewDate) -> Result<i64, DriftError> {
        match self.formula {
            DriftFormula::GregorianRoundTrip => self.drift_days_gregorian(equinox),
            DriftFormula::JulianDay => self.drift_days_julian(equinox),
        }
    }

    /// Drift through proleptic Gregorian dates.
    pub fn drift_days_gregorian(&self, equinox: HebrewDate) -> Result<i64, DriftError> {
        let equinox_date = self.calendar.hebrew_to_gregorian(equinox)?;
        let nissan_date = self
            .calendar
            .hebrew_to_gregorian(HebrewDate::nissan_one(equinox.year()))?;
        Ok(nissan_date.signed_duration_since(equinox_date).num_days())
    }

    /// Drift through Julian Days, skipping the Gregorian round trip.
    pub fn drift_days_julian(&self, equinox: HebrewDate) -> Result<i64, DriftError> {
        let equinox_jd = self.calendar.hebrew_to_julian_day(equinox)?;
        let nissan_jd = self
            .calendar
            .hebrew_to_julian_day(HebrewDate::nissan_one(equinox.year()))?;
        // Both are midnights, so the difference is whole up to rounding noise.
        Ok((nissan_jd - equinox_jd).round() as i64)
    }

    /// Fractional days from the instant `julian_day` to the midnight that
    /// starts 1 Nissan of the Hebrew year containing it.
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::Conversion`] if the instant lies outside the
    /// calendar's range.
    pub fn drift_at_instant(&self, julian_day: f64) -> Result<f64, DriftError> {
        let year = self.calendar.hebrew_year_from_julian_day(julian_day)?;
        let nissan_jd = self
            .calendar
            .hebrew_to_julian_day(HebrewDate::nissan_one(year))?;
        Ok(nissan_jd - julian_day)
    }
}
