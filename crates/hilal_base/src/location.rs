//! Observer location.
//!
//! Only the latitude feeds any formula (the sunset estimate); the remaining
//! fields are carried through for display.

use crate::error::HilalError;

/// A named place on Earth's surface.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    /// Place name, e.g. "Mecca" or "Your Location".
    pub name: String,
    /// Country, when known.
    pub country: Option<String>,
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a validated location.
    pub fn new(
        name: impl Into<String>,
        country: Option<String>,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, HilalError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(HilalError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(HilalError::InvalidLocation("longitude must be in [-180, 180]"));
        }
        Ok(Self {
            name: name.into(),
            country: country.filter(|c| !c.is_empty()),
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// "Name, Country", or just the name when no country is set.
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_location() {
        let loc = GeoLocation::new("Mecca", Some("Saudi Arabia".into()), 21.4225, 39.8262)
            .unwrap();
        assert_eq!(loc.display_name(), "Mecca, Saudi Arabia");
        assert!((loc.latitude_rad() - 21.4225_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn empty_country_is_dropped() {
        let loc =
            GeoLocation::new("Your Location", Some(String::new()), 10.0, 20.0).unwrap();
        assert_eq!(loc.country, None);
        assert_eq!(loc.display_name(), "Your Location");
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert_eq!(
            GeoLocation::new("x", None, 91.0, 0.0),
            Err(HilalError::InvalidLocation("latitude must be in [-90, 90]"))
        );
        assert!(GeoLocation::new("x", None, f64::NAN, 0.0).is_err());
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert!(GeoLocation::new("x", None, 0.0, -180.5).is_err());
        assert!(GeoLocation::new("x", None, 0.0, f64::INFINITY).is_err());
        assert!(GeoLocation::new("x", None, -90.0, 180.0).is_ok());
    }
}
