//! Error types for the nissan-ephemeris crate.

/// Error type for equinox lookups.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EphemerisError {
    /// Returned when the requested year lies outside the range the
    /// ephemeris can resolve.
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange {
        /// The requested year.
        year: i32,
        /// Earliest supported year.
        min: i32,
        /// Latest supported year.
        max: i32,
    },

    /// Returned when the computation produced NaN or infinity.
    #[error("equinox computation for year {year} did not produce a finite instant")]
    NonFinite {
        /// The requested year.
        year: i32,
    },
}
