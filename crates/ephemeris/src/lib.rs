//! Spring equinox instants for the drift analysis.
//!
//! The [`Ephemeris`] trait is the seam the drift pipeline consumes;
//! [`MeeusEphemeris`] is the bundled implementation, valid for the years
//! -1000..=3000.
//!
//! # Quick start
//!
//! ```rust
//! use nissan_ephemeris::{Ephemeris, MeeusEphemeris};
//!
//! let instant = MeeusEphemeris::new().next_spring_equinox(2024).unwrap();
//! // 20 March 2024, shortly after 03:00 UT
//! assert!((instant.julian_day() - 2_460_389.63).abs() < 0.01);
//! ```

mod delta_t;
pub mod equinox;
pub mod error;

pub use delta_t::delta_t_seconds;
pub use equinox::{Ephemeris, EquinoxInstant, MAX_YEAR, MIN_YEAR, MeeusEphemeris};
pub use error::EphemerisError;
