//! Error types for the nissan-calendar crate.

/// Error type for all fallible conversions in the nissan-calendar crate.
///
/// Covers malformed Gregorian, Julian and Hebrew dates as well as day
/// numbers that fall outside the range a calendar can represent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a (year, month, day) triple is not a valid date.
    #[error("invalid {calendar} date: {year}-{month:02}-{day:02}")]
    InvalidCivilDate {
        /// Calendar the triple was interpreted in.
        calendar: &'static str,
        /// Year field.
        year: i32,
        /// Month field.
        month: u32,
        /// Day field.
        day: u32,
    },

    /// Returned when a Hebrew month does not exist in the given year.
    #[error("invalid Hebrew month: {month} in year {year} (must be 1..={months_in_year})")]
    InvalidHebrewMonth {
        /// Hebrew year.
        year: i32,
        /// The invalid month number.
        month: u8,
        /// Number of months in that year (12 or 13).
        months_in_year: u8,
    },

    /// Returned when a Hebrew day exceeds the length of its month.
    #[error("invalid Hebrew day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidHebrewDay {
        /// Hebrew year.
        year: i32,
        /// Hebrew month.
        month: u8,
        /// The invalid day number.
        day: u8,
        /// Length of that month.
        max_day: u8,
    },

    /// Returned for Hebrew years outside the supported range.
    #[error(
        "Hebrew year {year} is outside the supported range {}..={}",
        crate::hebrew::MIN_YEAR,
        crate::hebrew::MAX_YEAR
    )]
    HebrewYearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// Returned when a Julian Day Number cannot be represented.
    #[error("day number {jdn} is outside the supported range")]
    DayNumberOutOfRange {
        /// The rejected Julian Day Number.
        jdn: i64,
    },

    /// Returned when a Julian Day is NaN or infinite.
    #[error("non-finite Julian Day")]
    NonFiniteJulianDay,

    /// Returned when a Julian Day has no day number.
    #[error("Julian Day {julian_day} is outside the supported range")]
    JulianDayOutOfRange {
        /// The rejected Julian Day.
        julian_day: f64,
    },

    /// Returned when `icu_calendar` rejects a date.
    #[error("calendar conversion failed")]
    Icu(#[from] icu_calendar::CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_civil_date() {
        let err = CalendarError::InvalidCivilDate {
            calendar: "Gregorian",
            year: 1900,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "invalid Gregorian date: 1900-02-29");
    }

    #[test]
    fn error_invalid_hebrew_month() {
        let err = CalendarError::InvalidHebrewMonth {
            year: 5785,
            month: 13,
            months_in_year: 12,
        };
        assert_eq!(
            err.to_string(),
            "invalid Hebrew month: 13 in year 5785 (must be 1..=12)"
        );
    }

    #[test]
    fn error_invalid_hebrew_day() {
        let err = CalendarError::InvalidHebrewDay {
            year: 5785,
            month: 2,
            day: 30,
            max_day: 29,
        };
        assert_eq!(
            err.to_string(),
            "invalid Hebrew day: 30 for month 2 of year 5785 (max 29)"
        );
    }

    #[test]
    fn error_hebrew_year_out_of_range() {
        let err = CalendarError::HebrewYearOutOfRange { year: 0 };
        assert_eq!(
            err.to_string(),
            "Hebrew year 0 is outside the supported range 1..=9999"
        );
    }

    #[test]
    fn error_wraps_icu() {
        let err = CalendarError::from(icu_calendar::CalendarError::OutOfRange);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone() {
        let err = CalendarError::DayNumberOutOfRange { jdn: -1 };
        assert_eq!(err.clone(), err);
    }
}
