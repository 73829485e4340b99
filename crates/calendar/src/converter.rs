//! The calendar-conversion seam used by the drift pipeline.

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::hebrew::HebrewDate;
use crate::julian_day::{
    gregorian_from_jdn, jdn_from_gregorian, jdn_from_julian_day, julian_day_from_jdn,
};

/// Conversions between the Gregorian calendar, the Hebrew calendar and
/// Julian Days.
///
/// Julian Days returned by this trait denote midnight at the start of the
/// civil day, so they always end in `.5`.
pub trait CalendarConverter {
    /// Converts a proleptic Gregorian date to a Hebrew date.
    fn gregorian_to_hebrew(&self, date: NaiveDate) -> Result<HebrewDate, CalendarError>;

    /// Converts a Hebrew date to a proleptic Gregorian date.
    fn hebrew_to_gregorian(&self, date: HebrewDate) -> Result<NaiveDate, CalendarError>;

    /// Returns the Julian Day of midnight starting a Gregorian date.
    fn julian_day_from_gregorian(&self, date: NaiveDate) -> f64;

    /// Returns the Hebrew year containing the instant `jd`.
    fn hebrew_year_from_julian_day(&self, jd: f64) -> Result<i32, CalendarError>;

    /// Returns the Julian Day of midnight starting a Hebrew date.
    fn hebrew_to_julian_day(&self, date: HebrewDate) -> Result<f64, CalendarError>;
}

/// [`CalendarConverter`] backed by the `icu_calendar` Hebrew calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuCalendar;

impl CalendarConverter for IcuCalendar {
    fn gregorian_to_hebrew(&self, date: NaiveDate) -> Result<HebrewDate, CalendarError> {
        HebrewDate::from_gregorian(date)
    }

    fn hebrew_to_gregorian(&self, date: HebrewDate) -> Result<NaiveDate, CalendarError> {
        date.to_gregorian()
    }

    fn julian_day_from_gregorian(&self, date: NaiveDate) -> f64 {
        julian_day_from_jdn(jdn_from_gregorian(date))
    }

    fn hebrew_year_from_julian_day(&self, jd: f64) -> Result<i32, CalendarError> {
        let date = gregorian_from_jdn(jdn_from_julian_day(jd)?)?;
        Ok(HebrewDate::from_gregorian(date)?.year())
    }

    fn hebrew_to_julian_day(&self, date: HebrewDate) -> Result<f64, CalendarError> {
        Ok(julian_day_from_jdn(jdn_from_gregorian(date.to_gregorian()?)))
    }
}
