//! # nissan-drift
//!
//! Drift of Alef Nissan relative to the astronomical spring equinox.
//!
//! For a Gregorian year the pipeline finds the Hebrew date of the March
//! equinox and counts the days to 1 Nissan of the same Hebrew year. A
//! positive drift means the equinox came first.
//!
//! ## Pipeline
//!
//! ```text
//! HistoryAggregator::history(end_year, years_back)
//!   └─ for each year, ascending
//!        ├─ EquinoxLocator::locate(year)         (locate.rs)
//!        │    ├─ Ephemeris::next_spring_equinox()
//!        │    ├─ civil reckoning + pre-reform correction
//!        │    └─ CalendarConverter::gregorian_to_hebrew()
//!        └─ DriftCalculator::drift_days(hebrew)  (drift.rs)
//!
//! HistoryAggregator::windowed_bad_fraction()
//!   ├─ history()
//!   └─ chunks(window_size) -> fraction of bad years
//! ```
//!
//! ## Quick start
//!
//! ```
//! use nissan_calendar::IcuCalendar;
//! use nissan_drift::{BadYearPolicy, DriftConfig, HistoryAggregator};
//! use nissan_ephemeris::MeeusEphemeris;
//!
//! let config = DriftConfig::new().with_policy(BadYearPolicy::TwoSided);
//! let agg = HistoryAggregator::new(MeeusEphemeris::new(), IcuCalendar, config).unwrap();
//!
//! assert_eq!(agg.nissan_shift(2024).unwrap(), 20);
//! let windows = agg.windowed_bad_fraction(2024, 199, 100).unwrap();
//! assert_eq!(windows.len(), 2);
//! ```

pub mod config;
pub mod drift;
pub mod error;
pub mod history;
pub mod locate;
pub mod result;

pub use config::{BadYearPolicy, CivilReckoning, DriftConfig, DriftFormula, JulianCorrection};
pub use drift::DriftCalculator;
pub use error::DriftError;
pub use history::HistoryAggregator;
pub use locate::{EquinoxLocator, LocatedEquinox};
pub use result::{BadYearFraction, DriftSummary, YearOffset};
