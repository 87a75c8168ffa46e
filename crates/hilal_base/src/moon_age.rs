//! Moon age: days since the most recent new moon.
//!
//! Mean-motion estimate from a single reference new moon, reduced modulo the
//! mean synodic month. Good to within about a day of the true lunation
//! phase, which is all the crescent estimate needs.

use hilal_time::CalendarDate;

use crate::util::normalize_to_period;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_67;

/// Reference new moon, 2000-01-06 18:14, as a Julian Date.
///
/// Expressed in the same naive civil time scale as [`CalendarDate::to_jd`],
/// so date arithmetic never needs a zone offset.
pub const REFERENCE_NEW_MOON_JD: f64 = 2_451_550.259_722_222_2;

/// Moon age in days at a Julian Date, in `[0, SYNODIC_MONTH_DAYS)`.
pub fn moon_age_at_jd(jd: f64) -> f64 {
    normalize_to_period(jd - REFERENCE_NEW_MOON_JD, SYNODIC_MONTH_DAYS)
}

/// Moon age in days at 00:00 of `date`, in `[0, SYNODIC_MONTH_DAYS)`.
pub fn moon_age(date: &CalendarDate) -> f64 {
    moon_age_at_jd(date.to_jd())
}
