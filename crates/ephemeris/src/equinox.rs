//! March equinox instants after Meeus, *Astronomical Algorithms*, ch. 27.

use tracing::trace;

use crate::delta_t::delta_t_seconds;
use crate::error::EphemerisError;

/// Earliest year the mean-equinox polynomials cover.
pub const MIN_YEAR: i32 = -1000;

/// Latest year the mean-equinox polynomials cover.
pub const MAX_YEAR: i32 = 3000;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Periodic terms (A, B, C) of table 27.C; B and C in degrees.
const PERIODIC_TERMS: [(f64, f64, f64); 24] = [
    (485.0, 324.96, 1934.136),
    (203.0, 337.23, 32964.467),
    (199.0, 342.08, 20.186),
    (182.0, 27.85, 445267.112),
    (156.0, 73.14, 45036.886),
    (136.0, 171.52, 22518.443),
    (77.0, 222.54, 65928.934),
    (74.0, 296.72, 3034.906),
    (70.0, 243.58, 9037.513),
    (58.0, 119.81, 33718.147),
    (52.0, 297.17, 150.678),
    (50.0, 21.02, 2281.226),
    (45.0, 247.54, 29929.562),
    (44.0, 325.15, 31555.956),
    (29.0, 60.93, 4443.417),
    (18.0, 155.12, 67555.328),
    (17.0, 288.79, 4562.452),
    (16.0, 198.04, 62894.029),
    (14.0, 199.76, 31436.921),
    (12.0, 95.39, 14577.848),
    (12.0, 287.11, 31931.756),
    (12.0, 320.81, 34777.259),
    (9.0, 227.73, 1222.114),
    (8.0, 15.45, 16859.074),
];

/// A calendar-agnostic astronomical instant, as a Julian Day in universal
/// time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EquinoxInstant {
    julian_day: f64,
}

impl EquinoxInstant {
    /// Wraps a Julian Day (UT).
    pub fn from_julian_day(julian_day: f64) -> Self {
        Self { julian_day }
    }

    /// Returns the Julian Day (UT).
    pub fn julian_day(self) -> f64 {
        self.julian_day
    }

    /// Returns the fraction of the civil day elapsed since midnight.
    pub fn day_fraction(self) -> f64 {
        (self.julian_day + 0.5).rem_euclid(1.0)
    }
}

/// Source of spring equinox instants.
pub trait Ephemeris {
    /// Returns the first northward equinox after 1 January of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`EphemerisError`] when the year cannot be resolved.
    fn next_spring_equinox(&self, year: i32) -> Result<EquinoxInstant, EphemerisError>;
}

/// Low-precision March equinox from the mean-equinox polynomials plus the
/// 24 periodic terms of Meeus. Accurate to about a minute in the modern era.
#[derive(Debug, Clone, Copy)]
pub struct MeeusEphemeris {
    apply_delta_t: bool,
}

impl MeeusEphemeris {
    /// Creates an ephemeris that converts dynamical time to UT.
    pub fn new() -> Self {
        Self {
            apply_delta_t: true,
        }
    }

    /// Sets whether Delta T is subtracted from the dynamical-time result.
    pub fn with_delta_t(mut self, apply: bool) -> Self {
        self.apply_delta_t = apply;
        self
    }

    /// Returns whether Delta T is applied.
    pub fn applies_delta_t(&self) -> bool {
        self.apply_delta_t
    }

    /// Mean March equinox in Julian Ephemeris Days (tables 27.A and 27.B).
    fn mean_equinox_jde(year: i32) -> f64 {
        if year < 1000 {
            let y = f64::from(year) / 1000.0;
            1_721_139.29189 + 365_242.13740 * y + 0.06134 * y.powi(2) + 0.00111 * y.powi(3)
                - 0.00071 * y.powi(4)
        } else {
            let y = f64::from(year - 2000) / 1000.0;
            2_451_623.80984 + 365_242.37404 * y + 0.05169 * y.powi(2)
                - 0.00411 * y.powi(3)
                - 0.00057 * y.powi(4)
        }
    }

    /// March equinox in Julian Ephemeris Days with periodic corrections.
    fn equinox_jde(year: i32) -> f64 {
        let jde0 = Self::mean_equinox_jde(year);
        let t = (jde0 - 2_451_545.0) / 36_525.0;
        let w = (35_999.373 * t - 2.47).to_radians();
        let delta_lambda = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();
        let s: f64 = PERIODIC_TERMS
            .iter()
            .map(|&(a, b, c)| a * (b + c * t).to_radians().cos())
            .sum();
        jde0 + 0.00001 * s / delta_lambda
    }
}

impl Default for MeeusEphemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl Ephemeris for MeeusEphemeris {
    fn next_spring_equinox(&self, year: i32) -> Result<EquinoxInstant, EphemerisError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(EphemerisError::YearOutOfRange {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }
        let jde = Self::equinox_jde(year);
        let jd = if self.apply_delta_t {
            // Decimal year of the equinox, late March.
            jde - delta_t_seconds(f64::from(year) + 0.22) / SECONDS_PER_DAY
        } else {
            jde
        };
        if !jd.is_finite() {
            return Err(EphemerisError::NonFinite { year });
        }
        trace!(year, jd, "spring equinox");
        Ok(EquinoxInstant::from_julian_day(jd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mean_polynomials_meet_at_year_1000() {
        let early = {
            let y: f64 = 1.0;
            1_721_139.29189 + 365_242.13740 * y + 0.06134 + 0.00111 - 0.00071
        };
        // Both tables describe the same epoch to within a few minutes.
        assert_abs_diff_eq!(MeeusEphemeris::mean_equinox_jde(1000), early, epsilon = 0.01);
    }

    #[test]
    fn periodic_correction_is_small() {
        for year in [-1000, 0, 1000, 2000, 3000] {
            let diff = MeeusEphemeris::equinox_jde(year) - MeeusEphemeris::mean_equinox_jde(year);
            assert!(diff.abs() < 0.025, "year {year}: correction {diff} days");
        }
    }

    #[test]
    fn delta_t_moves_instant_earlier() {
        let with = MeeusEphemeris::new().next_spring_equinox(2024).unwrap();
        let without = MeeusEphemeris::new()
            .with_delta_t(false)
            .next_spring_equinox(2024)
            .unwrap();
        let seconds = (without.julian_day() - with.julian_day()) * SECONDS_PER_DAY;
        assert_abs_diff_eq!(seconds, 74.0, epsilon = 1.0);
    }

    #[test]
    fn range_limits() {
        let eph = MeeusEphemeris::new();
        assert!(eph.next_spring_equinox(MIN_YEAR).is_ok());
        assert!(eph.next_spring_equinox(MAX_YEAR).is_ok());
        assert_eq!(
            eph.next_spring_equinox(MAX_YEAR + 1).unwrap_err(),
            EphemerisError::YearOutOfRange {
                year: 3001,
                min: MIN_YEAR,
                max: MAX_YEAR,
            }
        );
        assert!(eph.next_spring_equinox(MIN_YEAR - 1).is_err());
    }

    #[test]
    fn day_fraction_of_midnight_and_noon() {
        assert_abs_diff_eq!(
            EquinoxInstant::from_julian_day(2_451_544.5).day_fraction(),
            0.0
        );
        assert_abs_diff_eq!(
            EquinoxInstant::from_julian_day(2_451_545.0).day_fraction(),
            0.5
        );
    }
}
