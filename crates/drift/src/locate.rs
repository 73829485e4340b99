//! Locating the spring equinox in the Hebrew calendar.

use chrono::{NaiveDate, TimeDelta};
use nissan_calendar::{
    CalendarConverter, CalendarError, GREGORIAN_REFORM_JDN, HebrewDate, gregorian_date,
    gregorian_from_jdn, jdn_from_gregorian, jdn_from_julian_day, julian_calendar_from_jdn,
};
use nissan_ephemeris::{Ephemeris, EquinoxInstant};

use crate::config::{CivilReckoning, DriftConfig, JulianCorrection};
use crate::error::DriftError;

/// Every intermediate of one equinox lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatedEquinox {
    /// Gregorian year that was looked up.
    pub year: i32,
    /// Instant reported by the ephemeris.
    pub instant: EquinoxInstant,
    /// Civil date of the instant under the configured reckoning.
    pub reported_date: NaiveDate,
    /// Date handed to the calendar, after any correction.
    pub civil_date: NaiveDate,
    /// Hebrew date of `civil_date`.
    pub hebrew: HebrewDate,
}

/// Maps a Gregorian year to the Hebrew date of its spring equinox.
#[derive(Debug, Clone)]
pub struct EquinoxLocator<E, C> {
    ephemeris: E,
    calendar: C,
    reckoning: CivilReckoning,
    correction: Option<JulianCorrection>,
}

impl<E: Ephemeris, C: CalendarConverter> EquinoxLocator<E, C> {
    /// Creates a locator using the reckoning and correction of `config`.
    pub fn new(ephemeris: E, calendar: C, config: &DriftConfig) -> Self {
        Self {
            ephemeris,
            calendar,
            reckoning: config.reckoning(),
            correction: config.correction(),
        }
    }

    /// Returns the Hebrew date of the spring equinox of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::EquinoxLookup`] if the ephemeris cannot resolve
    /// the year and [`DriftError::Conversion`] if a date conversion fails.
    pub fn locate(&self, year: i32) -> Result<HebrewDate, DriftError> {
        Ok(self.locate_detailed(year)?.hebrew)
    }

    /// Like [`EquinoxLocator::locate`], keeping the intermediate dates.
    pub fn locate_detailed(&self, year: i32) -> Result<LocatedEquinox, DriftError> {
        let instant = self.ephemeris.next_spring_equinox(year)?;
        let jdn = jdn_from_julian_day(instant.julian_day())?;
        let reported_date = match self.reckoning {
            CivilReckoning::Reformed if jdn < GREGORIAN_REFORM_JDN => {
                let (y, m, d) = julian_calendar_from_jdn(jdn)?;
                gregorian_date(y, m, d)?
            }
            _ => gregorian_from_jdn(jdn)?,
        };
        let civil_date = match self.correction {
            Some(c) if c.applies_to(year) => shift(reported_date, c.days)?,
            _ => reported_date,
        };
        let hebrew = self.calendar.gregorian_to_hebrew(civil_date)?;
        Ok(LocatedEquinox {
            year,
            instant,
            reported_date,
            civil_date,
            hebrew,
        })
    }

    /// Returns the ephemeris collaborator.
    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// Returns the calendar collaborator.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }
}

fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(CalendarError::DayNumberOutOfRange {
            jdn: jdn_from_gregorian(date) + days,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nissan_calendar::IcuCalendar;
    use nissan_ephemeris::MeeusEphemeris;

    fn locator(config: &DriftConfig) -> EquinoxLocator<MeeusEphemeris, IcuCalendar> {
        EquinoxLocator::new(MeeusEphemeris::new(), IcuCalendar, config)
    }

    #[test]
    fn equinox_2024_is_10_adar_ii() {
        let located = locator(&DriftConfig::new()).locate_detailed(2024).unwrap();
        assert_eq!(located.reported_date, gregorian_date(2024, 3, 20).unwrap());
        assert_eq!(located.civil_date, located.reported_date);
        assert_eq!(located.hebrew, HebrewDate::new(5784, 13, 10));
    }

    #[test]
    fn reformed_reckoning_reports_julian_fields_before_1582() {
        let reformed = locator(&DriftConfig::new().without_correction())
            .locate_detailed(1500)
            .unwrap();
        let proleptic = locator(
            &DriftConfig::new()
                .without_correction()
                .with_reckoning(CivilReckoning::ProlepticGregorian),
        )
        .locate_detailed(1500)
        .unwrap();
        // Julian and Gregorian calendars differ by 10 days from March 1500.
        let lag = proleptic
            .reported_date
            .signed_duration_since(reformed.reported_date)
            .num_days();
        assert_eq!(lag, 10);
    }

    #[test]
    fn correction_shifts_civil_date() {
        let located = locator(&DriftConfig::new()).locate_detailed(1500).unwrap();
        let lag = located
            .civil_date
            .signed_duration_since(located.reported_date)
            .num_days();
        assert_eq!(lag, 13);
    }

    #[test]
    fn shift_overflow_is_an_error() {
        let date = NaiveDate::MAX;
        assert!(shift(date, 1).is_err());
        assert_eq!(shift(date, 0).unwrap(), date);
    }
}
