//! # nissan-calendar
//!
//! Hebrew, Julian and Gregorian dates over Julian Day Numbers.
//!
//! The Hebrew and Julian calendars come from `icu_calendar`; Gregorian dates
//! are `chrono::NaiveDate`.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate (Gregorian)"] -->|"jdn_from_gregorian()"| B["JDN"]
//!     B -->|"gregorian_from_jdn()"| A
//!     C["(y, m, d) Julian"] -->|"jdn_from_julian_calendar()"| B
//!     B -->|"julian_calendar_from_jdn()"| C
//!     A -->|"HebrewDate::from_gregorian()"| D["HebrewDate"]
//!     D -->|".to_gregorian()"| A
//!     E["IcuCalendar"] -.->|"implements"| F["CalendarConverter"]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use nissan_calendar::{CalendarConverter, HebrewDate, IcuCalendar, gregorian_date};
//!
//! let cal = IcuCalendar;
//! let equinox = gregorian_date(2024, 3, 20).unwrap();
//! let hebrew = cal.gregorian_to_hebrew(equinox).unwrap();
//! assert_eq!(hebrew, HebrewDate::new(5784, 13, 10)); // 10 Adar II
//!
//! let nissan = cal.hebrew_to_gregorian(HebrewDate::nissan_one(5784)).unwrap();
//! assert_eq!(nissan, gregorian_date(2024, 4, 9).unwrap());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `hebrew` | `HebrewDate`, leap years, month and year lengths |
//! | `civil` | Julian calendar dates |
//! | `julian_day` | JDN arithmetic for Gregorian dates and Julian Days |
//! | `converter` | `CalendarConverter` trait and `IcuCalendar` |
//! | `error` | Error types |

mod civil;
mod converter;
mod error;
pub mod hebrew;
mod julian_day;

pub use civil::{jdn_from_julian_calendar, julian_calendar_from_jdn};
pub use converter::{CalendarConverter, IcuCalendar};
pub use error::CalendarError;
pub use hebrew::HebrewDate;
pub use julian_day::{
    GREGORIAN_REFORM_JDN, gregorian_date, gregorian_from_jdn, jdn_from_gregorian,
    jdn_from_julian_day, julian_day_from_jdn,
};
