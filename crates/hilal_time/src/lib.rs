//! Calendar support for the crescent visibility estimator.
//!
//! This crate provides:
//! - Julian Date <-> proleptic Gregorian calendar conversions
//! - `CalendarDate`, a validated date-only value with day arithmetic
//! - `CalendarMonth`, the month a crescent report is requested for

pub mod date;
pub mod error;
pub mod julian;

pub use date::{CalendarDate, CalendarMonth, Weekday};
pub use error::TimeError;
pub use date::{MAX_YEAR, MIN_YEAR};
pub use julian::{J2000_JD, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar};
