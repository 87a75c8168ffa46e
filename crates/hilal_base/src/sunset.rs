//! Rough local sunset time for annotating a crescent report.
//!
//! `18:00 + 2h·sin(latitude) + 0.5h·sin(2π·(day − 80)/365)`, rounded to the
//! nearest quarter hour. No refraction, longitude or time zone handling.

use std::f64::consts::PI;
use std::fmt::{Display, Formatter};

use hilal_time::CalendarDate;

use crate::error::HilalError;
use crate::util::round_half_up;

/// Base sunset hour before latitude and seasonal adjustments.
const BASE_SUNSET_HOUR: f64 = 18.0;
/// Hours added per unit sin(latitude).
const LATITUDE_GAIN_HOURS: f64 = 2.0;
/// Amplitude of the seasonal adjustment in hours.
const SEASONAL_AMPLITUDE_HOURS: f64 = 0.5;
/// Day of year at which the seasonal term crosses zero (around the March equinox).
const SEASONAL_ZERO_DAY: f64 = 80.0;

/// A wall-clock time rounded to the quarter hour.
///
/// The hour is not wrapped at 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SunsetTime {
    pub hour: i64,
    pub minute: i64,
}

impl SunsetTime {
    /// Round a decimal hour to the nearest 15 minutes.
    pub fn from_decimal_hours(hours: f64) -> Self {
        let total_minutes = round_half_up(hours * 4.0) as i64 * 15;
        Self {
            hour: total_minutes.div_euclid(60),
            minute: total_minutes.rem_euclid(60),
        }
    }
}

impl Display for SunsetTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Unrounded sunset estimate as a decimal hour.
pub fn sunset_hours(latitude_deg: f64, date: &CalendarDate) -> f64 {
    let day_of_year = date.day_of_year() as f64;
    let latitude_term = latitude_deg.to_radians().sin() * LATITUDE_GAIN_HOURS;
    let seasonal_term =
        ((day_of_year - SEASONAL_ZERO_DAY) / 365.0 * 2.0 * PI).sin() * SEASONAL_AMPLITUDE_HOURS;
    BASE_SUNSET_HOUR + latitude_term + seasonal_term
}

/// Estimate the local sunset time at `latitude_deg` on `date`.
pub fn estimate_sunset(latitude_deg: f64, date: &CalendarDate) -> Result<SunsetTime, HilalError> {
    if !latitude_deg.is_finite() {
        return Err(HilalError::NonFiniteInput("latitude"));
    }
    Ok(SunsetTime::from_decimal_hours(sunset_hours(latitude_deg, date)))
}
