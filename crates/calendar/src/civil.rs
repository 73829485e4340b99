//! Julian calendar dates through `icu_calendar`, and the ISO bridge between
//! icu and chrono.

use chrono::{Datelike, NaiveDate};
use icu_calendar::julian::Julian;
use icu_calendar::{Date, Iso};

use crate::error::CalendarError;
use crate::julian_day::{gregorian_date, gregorian_from_jdn, jdn_from_gregorian};

pub(crate) fn iso_from_naive(date: NaiveDate) -> Result<Date<Iso>, CalendarError> {
    // chrono keeps the month in 1..=12 and the day in 1..=31.
    Ok(Date::try_new_iso_date(
        date.year(),
        date.month() as u8,
        date.day() as u8,
    )?)
}

pub(crate) fn naive_from_iso(iso: &Date<Iso>) -> Result<NaiveDate, CalendarError> {
    gregorian_date(iso.year().number, iso.month().ordinal, iso.day_of_month().0)
}

/// Returns the Julian calendar `(year, month, day)` of a JDN. Years are
/// arithmetic: 0 is 1 BCE.
///
/// # Errors
///
/// Returns [`CalendarError::DayNumberOutOfRange`] if the day lies outside
/// the range `chrono` can represent.
pub fn julian_calendar_from_jdn(jdn: i64) -> Result<(i32, u32, u32), CalendarError> {
    let julian = Date::new_from_iso(iso_from_naive(gregorian_from_jdn(jdn)?)?, Julian);
    let year = julian.year();
    // icu counts years before 1 CE backwards from 1 BCE.
    let year = if year.era.0.as_str() == "bce" {
        1 - year.number
    } else {
        year.number
    };
    Ok((year, julian.month().ordinal, julian.day_of_month().0))
}

/// Returns the JDN of a Julian calendar date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidCivilDate`] if the month or day does not
/// exist in the Julian calendar.
pub fn jdn_from_julian_calendar(year: i32, month: u32, day: u32) -> Result<i64, CalendarError> {
    let invalid = CalendarError::InvalidCivilDate {
        calendar: "Julian",
        year,
        month,
        day,
    };
    let (Ok(m @ 1..), Ok(d @ 1..)) = (u8::try_from(month), u8::try_from(day)) else {
        return Err(invalid);
    };
    let date = Date::try_new_julian_date(year, m, d).map_err(|_| invalid)?;
    Ok(jdn_from_gregorian(naive_from_iso(&date.to_iso())?))
}
