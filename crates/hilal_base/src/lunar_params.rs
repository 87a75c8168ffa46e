//! Synthesized lunar parameters for the visibility criterion.
//!
//! This is not an ephemeris. β and φ follow a seasonal sine and a lunation
//! sine around fixed means, plus uniform jitter standing in for everything
//! the model ignores. Two calls with the same date can therefore disagree.

use std::f64::consts::PI;

use hilal_time::CalendarDate;

use crate::jitter::JitterSource;
use crate::location::GeoLocation;

/// Mean lunar declination term in degrees.
pub const BETA_MEAN_DEG: f64 = -4.48;
/// Amplitude of the seasonal β swing in degrees.
pub const BETA_SEASONAL_AMPLITUDE_DEG: f64 = 2.0;
/// Half-width of the β jitter interval in degrees.
pub const BETA_JITTER_DEG: f64 = 0.5;
/// Maximum β in degrees (close to the 5.145° lunar orbit inclination).
pub const MAX_BETA_DEG: f64 = 5.148;
/// Mean φ in degrees.
pub const PHI_MEAN_DEG: f64 = 1.22;
/// Amplitude of the lunation φ swing in degrees.
pub const PHI_LUNATION_AMPLITUDE_DEG: f64 = 0.5;
/// Half-width of the φ jitter interval in degrees.
pub const PHI_JITTER_DEG: f64 = 0.15;

/// Year length used for the seasonal term.
const SEASON_DAYS: f64 = 365.0;
/// Lunation length used for the φ term.
const LUNATION_DAYS: f64 = 29.53;

/// Inputs to the arcus visionis criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarParameters {
    /// β, the moon's declination-like angle, in degrees.
    pub beta_deg: f64,
    /// Maximum β in degrees. Must be non-zero.
    pub max_beta_deg: f64,
    /// φ in degrees. cos(φ) must be non-zero.
    pub phi_deg: f64,
    /// sin(φ), dimensionless.
    pub sin_phi: f64,
}

impl LunarParameters {
    /// Parameters with `sin_phi` derived from `phi_deg`.
    pub fn new(beta_deg: f64, max_beta_deg: f64, phi_deg: f64) -> Self {
        Self {
            beta_deg,
            max_beta_deg,
            phi_deg,
            sin_phi: phi_deg.to_radians().sin(),
        }
    }

    /// Parameters exactly as supplied, e.g. from advanced-mode input.
    ///
    /// `sin_phi` is not checked against `phi_deg`.
    pub fn from_raw(beta_deg: f64, max_beta_deg: f64, phi_deg: f64, sin_phi: f64) -> Self {
        Self {
            beta_deg,
            max_beta_deg,
            phi_deg,
            sin_phi,
        }
    }
}

/// Synthesize lunar parameters for `date` as seen from `location`.
///
/// Latitude is read but does not influence the result; see the
/// `latitude_has_no_effect` test.
pub fn synthesize_lunar_parameters<J: JitterSource + ?Sized>(
    date: &CalendarDate,
    location: &GeoLocation,
    jitter: &mut J,
) -> LunarParameters {
    let day_of_year = date.day_of_year() as f64;
    // Not yet part of the model.
    let _latitude_effect = location.latitude_rad().sin();

    let beta_deg = BETA_MEAN_DEG
        + (day_of_year / SEASON_DAYS * 2.0 * PI).sin() * BETA_SEASONAL_AMPLITUDE_DEG
        + jitter.uniform(-BETA_JITTER_DEG, BETA_JITTER_DEG);
    let phi_deg = PHI_MEAN_DEG
        + (day_of_year / LUNATION_DAYS * 2.0 * PI).sin() * PHI_LUNATION_AMPLITUDE_DEG
        + jitter.uniform(-PHI_JITTER_DEG, PHI_JITTER_DEG);

    let params = LunarParameters::new(beta_deg, MAX_BETA_DEG, phi_deg);
    tracing::debug!(%date, ?params, "synthesized lunar parameters");
    params
}
