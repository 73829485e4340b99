//! Error types for the nissan-drift crate.

use nissan_calendar::CalendarError;
use nissan_ephemeris::EphemerisError;

/// Error type for all fallible operations in the nissan-drift crate.
///
/// Collaborator failures are passed through unchanged; the pipeline never
/// retries or skips a year.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DriftError {
    /// Returned when the calendar collaborator rejects a date.
    #[error("calendar conversion failed: {0}")]
    Conversion(#[from] CalendarError),

    /// Returned when the ephemeris cannot resolve a year's equinox.
    #[error("equinox lookup failed: {0}")]
    EquinoxLookup(#[from] EphemerisError),

    /// Returned when statistics are requested over zero years.
    #[error("statistics requested over an empty year range")]
    EmptyRange,

    /// Returned when a year range cannot be represented.
    #[error("invalid year range: {years_back} years back from {end_year}")]
    InvalidRange {
        /// Last year of the range.
        end_year: i32,
        /// Requested look-back.
        years_back: u32,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
