//! Nearest new moon to a calendar date.

use hilal_time::CalendarDate;

use crate::moon_age::moon_age;
use crate::util::round_half_up;

/// Lunation length used when stepping forward to the next new moon.
///
/// Deliberately the rounded 29.53, not [`SYNODIC_MONTH_DAYS`]; unifying the
/// two shifts some forward offsets by a day after rounding.
///
/// [`SYNODIC_MONTH_DAYS`]: crate::moon_age::SYNODIC_MONTH_DAYS
pub const NEW_MOON_STEP_DAYS: f64 = 29.53;

/// Ages below this look back to the previous new moon; 15.0 itself looks ahead.
pub const NEW_MOON_AGE_SPLIT_DAYS: f64 = 15.0;

/// Whole-day offset from a date with the given moon age to its nearest new moon.
///
/// Negative when the new moon is behind. Always within `[-15, 15]`.
pub fn new_moon_offset_days(age_days: f64) -> i64 {
    let offset = if age_days < NEW_MOON_AGE_SPLIT_DAYS {
        -age_days
    } else {
        NEW_MOON_STEP_DAYS - age_days
    };
    round_half_up(offset) as i64
}

/// Approximate date of the new moon nearest to `date`.
pub fn nearest_new_moon(date: &CalendarDate) -> CalendarDate {
    let age = moon_age(date);
    let offset = new_moon_offset_days(age);
    tracing::trace!(%date, age, offset, "nearest new moon");
    date.add_days(offset)
}
