//! Julian Day Numbers and the proleptic Gregorian calendar.
//!
//! A Julian Day Number (JDN) counts whole days and changes at noon; the
//! fractional Julian Day (JD) of midnight starting day `n` is `n - 0.5`.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// JDN of 15 October 1582, the first day of the Gregorian calendar.
pub const GREGORIAN_REFORM_JDN: i64 = 2_299_161;

/// JDN of 31 December 1 BCE (proleptic Gregorian), the day before chrono's
/// `num_days_from_ce() == 1`.
const CE_DAY_OFFSET: i64 = 1_721_425;

const MAX_JULIAN_DAY: f64 = 9_223_372_036_854_775_808.0;

/// Builds a proleptic Gregorian date, reporting an invalid triple as a
/// [`CalendarError`].
pub fn gregorian_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidCivilDate {
        calendar: "Gregorian",
        year,
        month,
        day,
    })
}

/// Returns the JDN of a proleptic Gregorian date.
pub fn jdn_from_gregorian(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + CE_DAY_OFFSET
}

/// Returns the proleptic Gregorian date of a JDN.
///
/// # Errors
///
/// Returns [`CalendarError::DayNumberOutOfRange`] if the day lies outside the
/// range `chrono` can represent.
pub fn gregorian_from_jdn(jdn: i64) -> Result<NaiveDate, CalendarError> {
    jdn.checked_sub(CE_DAY_OFFSET)
        .and_then(|days| i32::try_from(days).ok())
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or(CalendarError::DayNumberOutOfRange { jdn })
}

/// Returns the JDN of the civil day containing the instant `jd`.
///
/// # Errors
///
/// Returns [`CalendarError::NonFiniteJulianDay`] for NaN or infinite input
/// and [`CalendarError::JulianDayOutOfRange`] beyond the `i64` day range.
pub fn jdn_from_julian_day(jd: f64) -> Result<i64, CalendarError> {
    if !jd.is_finite() {
        return Err(CalendarError::NonFiniteJulianDay);
    }
    let day = (jd + 0.5).floor();
    // i64::MAX is not representable; 2^63 is the first value that overflows.
    if !(-MAX_JULIAN_DAY..MAX_JULIAN_DAY).contains(&day) {
        return Err(CalendarError::JulianDayOutOfRange { julian_day: jd });
    }
    Ok(day as i64)
}

/// Returns the Julian Day of midnight at the start of day `jdn`.
pub fn julian_day_from_jdn(jdn: i64) -> f64 {
    jdn as f64 - 0.5
}
