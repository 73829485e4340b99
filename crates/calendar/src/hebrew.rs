//! Hebrew dates with months numbered from Nissan.
//!
//! Months are numbered from Nissan: 1 = Nissan, 7 = Tishrei, 12 = Adar
//! (Adar I in leap years), 13 = Adar II. A Hebrew year starts on 1 Tishrei,
//! so months 7..=13 of year `y` precede months 1..=6 of the same year.
//!
//! The calendar itself comes from `icu_calendar`, whose ordinal months start
//! at Tishrei. [`HebrewDate`] is the boundary where the two numberings meet.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use icu_calendar::Date;
use icu_calendar::hebrew::Hebrew;

use crate::civil::{iso_from_naive, naive_from_iso};
use crate::error::CalendarError;
use crate::julian_day::jdn_from_gregorian;

/// Month number of Nissan.
pub const NISSAN: u8 = 1;

/// Month number of Tishrei, the first month of the year.
pub const TISHREI: u8 = 7;

/// First supported Hebrew year.
pub const MIN_YEAR: i32 = 1;

/// Last supported Hebrew year.
pub const MAX_YEAR: i32 = 9999;

/// JDN of 1 Tishrei of [`MIN_YEAR`].
pub const EPOCH_JDN: i64 = 347_998;

/// Last Gregorian year that can hold a day of [`MAX_YEAR`].
const LAST_GREGORIAN_YEAR: i32 = MAX_YEAR - 3759;

const MONTH_NAMES: [&str; 13] = [
    "Nissan", "Iyar", "Sivan", "Tammuz", "Av", "Elul", "Tishrei", "Cheshvan", "Kislev", "Tevet",
    "Shevat", "Adar", "Adar II",
];

/// A date in the Hebrew calendar.
///
/// Construction does not validate the fields; conversions reject dates that
/// do not exist with a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: i32,
    month: u8,
    day: u8,
}

impl HebrewDate {
    /// Creates a Hebrew date from its year, month (Nissan = 1) and day.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns 1 Nissan of `year`.
    pub fn nissan_one(year: i32) -> Self {
        Self::new(year, NISSAN, 1)
    }

    /// Returns the year (Anno Mundi).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=13, Nissan = 1).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the month name, distinguishing Adar I from Adar in leap years.
    pub fn month_name(self) -> &'static str {
        match self.month {
            12 if matches!(is_leap_year(self.year), Ok(true)) => "Adar I",
            1..=13 => MONTH_NAMES[usize::from(self.month - 1)],
            _ => "?",
        }
    }

    /// Checks that this date exists in the calendar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] for years outside [`MIN_YEAR`]..=[`MAX_YEAR`],
    /// months that the year does not have, and days beyond the month length.
    pub fn validate(self) -> Result<(), CalendarError> {
        self.to_icu().map(|_| ())
    }

    /// Returns the proleptic Gregorian date of this date.
    ///
    /// # Errors
    ///
    /// See [`HebrewDate::validate`].
    pub fn to_gregorian(self) -> Result<NaiveDate, CalendarError> {
        naive_from_iso(&self.to_icu()?.to_iso())
    }

    /// Returns the Hebrew date of a proleptic Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DayNumberOutOfRange`] for days outside the
    /// supported years.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, CalendarError> {
        let jdn = jdn_from_gregorian(date);
        if jdn < EPOCH_JDN || date.year() > LAST_GREGORIAN_YEAR {
            return Err(CalendarError::DayNumberOutOfRange { jdn });
        }
        let hebrew = Self::from_icu(&Date::new_from_iso(iso_from_naive(date)?, Hebrew));
        if hebrew.year > MAX_YEAR {
            return Err(CalendarError::DayNumberOutOfRange { jdn });
        }
        Ok(hebrew)
    }

    fn to_icu(self) -> Result<Date<Hebrew>, CalendarError> {
        let months = months_in_year(self.year)?;
        if self.month == 0 || self.month > months {
            return Err(CalendarError::InvalidHebrewMonth {
                year: self.year,
                month: self.month,
                months_in_year: months,
            });
        }
        let ordinal = icu_ordinal(self.month, months);
        let max_day = Date::try_new_hebrew_date(self.year, ordinal, 1)?.days_in_month();
        if self.day == 0 || self.day > max_day {
            return Err(CalendarError::InvalidHebrewDay {
                year: self.year,
                month: self.month,
                day: self.day,
                max_day,
            });
        }
        Ok(Date::try_new_hebrew_date(self.year, ordinal, self.day)?)
    }

    fn from_icu(date: &Date<Hebrew>) -> Self {
        // icu bounds the ordinal by 13 and the day by 30.
        let ordinal = date.month().ordinal as u8;
        let day = date.day_of_month().0 as u8;
        Self::new(
            date.year().number,
            nissan_month(ordinal, date.months_in_year()),
            day,
        )
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

/// icu ordinal (Tishrei = 1) of a Nissan-first month.
fn icu_ordinal(month: u8, months_in_year: u8) -> u8 {
    if month >= TISHREI {
        month - 6
    } else {
        month + months_in_year - 6
    }
}

/// Nissan-first month of an icu ordinal.
fn nissan_month(ordinal: u8, months_in_year: u8) -> u8 {
    let nissan = months_in_year - 5;
    if ordinal >= nissan {
        ordinal - nissan + 1
    } else {
        ordinal + 6
    }
}

fn first_of_year(year: i32) -> Result<Date<Hebrew>, CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::HebrewYearOutOfRange { year });
    }
    Ok(Date::try_new_hebrew_date(year, 1, 1)?)
}

/// Number of months in `year` (12 or 13).
///
/// # Errors
///
/// Returns [`CalendarError::HebrewYearOutOfRange`] outside the supported years.
pub fn months_in_year(year: i32) -> Result<u8, CalendarError> {
    Ok(first_of_year(year)?.months_in_year())
}

/// Whether `year` has thirteen months.
///
/// # Errors
///
/// See [`months_in_year`].
pub fn is_leap_year(year: i32) -> Result<bool, CalendarError> {
    Ok(months_in_year(year)? == 13)
}

/// Number of days in `year`.
///
/// # Errors
///
/// See [`months_in_year`].
pub fn year_length(year: i32) -> Result<u16, CalendarError> {
    Ok(first_of_year(year)?.days_in_year())
}

/// Number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the month does not exist.
pub fn month_length(year: i32, month: u8) -> Result<u8, CalendarError> {
    Ok(HebrewDate::new(year, month, 1).to_icu()?.days_in_month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian_day::gregorian_date;

    #[test]
    fn leap_years_of_cycle() {
        // 5784 was a leap year, 5785 is not.
        assert!(is_leap_year(5784).unwrap());
        assert!(!is_leap_year(5785).unwrap());
        let leaps = (1..=19)
            .filter(|&y| is_leap_year(y).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(leaps, vec![3, 6, 8, 11, 14, 17, 19]);
    }

    #[test]
    fn month_numbering_round_trips() {
        for months in [12, 13] {
            for month in 1..=months {
                let ordinal = icu_ordinal(month, months);
                assert!((1..=months).contains(&ordinal));
                assert_eq!(nissan_month(ordinal, months), month);
            }
        }
        // Nissan follows Adar, or Adar II in a leap year.
        assert_eq!(icu_ordinal(NISSAN, 12), 7);
        assert_eq!(icu_ordinal(NISSAN, 13), 8);
        assert_eq!(icu_ordinal(TISHREI, 13), 1);
        assert_eq!(icu_ordinal(13, 13), 7);
    }

    #[test]
    fn rosh_hashana_5785() {
        let date = HebrewDate::new(5785, TISHREI, 1);
        assert_eq!(
            date.to_gregorian().unwrap(),
            gregorian_date(2024, 10, 3).unwrap()
        );
    }

    #[test]
    fn epoch_day_number() {
        let first = HebrewDate::new(MIN_YEAR, TISHREI, 1).to_gregorian().unwrap();
        assert_eq!(jdn_from_gregorian(first), EPOCH_JDN);
        assert_eq!(HebrewDate::from_gregorian(first).unwrap(), HebrewDate::new(1, 7, 1));
        let before = first.pred_opt().unwrap();
        assert_eq!(
            HebrewDate::from_gregorian(before).unwrap_err(),
            CalendarError::DayNumberOutOfRange { jdn: EPOCH_JDN - 1 }
        );
    }

    #[test]
    fn year_lengths_are_legal() {
        for year in 5000..5900 {
            let len = year_length(year).unwrap();
            let ok = if is_leap_year(year).unwrap() {
                (383..=385).contains(&len)
            } else {
                (353..=355).contains(&len)
            };
            assert!(ok, "year {year} has {len} days");
        }
    }

    #[test]
    fn month_lengths_sum_to_year_length() {
        for year in 5700..5800 {
            let total: u16 = (1..=months_in_year(year).unwrap())
                .map(|m| u16::from(month_length(year, m).unwrap()))
                .sum();
            assert_eq!(total, year_length(year).unwrap(), "year {year}");
        }
    }

    #[test]
    fn gregorian_round_trip_over_three_years() {
        let start = HebrewDate::new(5700, TISHREI, 1).to_gregorian().unwrap();
        for date in start.iter_days().take(3 * 385) {
            let hebrew = HebrewDate::from_gregorian(date).unwrap();
            assert_eq!(hebrew.to_gregorian().unwrap(), date, "via {hebrew:?}");
        }
    }

    #[test]
    fn adar_names() {
        assert_eq!(HebrewDate::new(5784, 12, 1).month_name(), "Adar I");
        assert_eq!(HebrewDate::new(5784, 13, 1).month_name(), "Adar II");
        assert_eq!(HebrewDate::new(5785, 12, 1).month_name(), "Adar");
        assert_eq!(HebrewDate::new(5784, 13, 10).to_string(), "10 Adar II 5784");
    }

    #[test]
    fn rejects_adar_ii_in_common_year() {
        assert_eq!(
            HebrewDate::new(5785, 13, 1).validate().unwrap_err(),
            CalendarError::InvalidHebrewMonth {
                year: 5785,
                month: 13,
                months_in_year: 12,
            }
        );
    }

    #[test]
    fn rejects_day_beyond_month() {
        assert_eq!(
            HebrewDate::new(5785, 2, 30).validate().unwrap_err(),
            CalendarError::InvalidHebrewDay {
                year: 5785,
                month: 2,
                day: 30,
                max_day: 29,
            }
        );
        assert!(HebrewDate::new(5785, 1, 0).validate().is_err());
        assert!(HebrewDate::new(5785, 0, 1).validate().is_err());
    }

    #[test]
    fn rejects_years_outside_range() {
        for year in [0, -5, MAX_YEAR + 1, i32::MAX, i32::MIN] {
            assert_eq!(
                HebrewDate::nissan_one(year).to_gregorian().unwrap_err(),
                CalendarError::HebrewYearOutOfRange { year }
            );
        }
        assert!(HebrewDate::nissan_one(MAX_YEAR).validate().is_ok());
    }

    #[test]
    fn rejects_days_after_last_year() {
        let late = gregorian_date(LAST_GREGORIAN_YEAR + 1, 1, 1).unwrap();
        assert!(matches!(
            HebrewDate::from_gregorian(late),
            Err(CalendarError::DayNumberOutOfRange { .. })
        ));
        assert!(HebrewDate::from_gregorian(NaiveDate::MAX).is_err());
        assert!(HebrewDate::from_gregorian(NaiveDate::MIN).is_err());
    }
}
