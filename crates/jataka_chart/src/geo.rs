//! Geographic position of the birth event.

use crate::error::ChartError;

/// Geographic position on Earth's surface, north/east positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    /// Geodetic latitude in degrees. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoPosition {
    /// Create a validated geographic position.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, ChartError> {
        if !latitude_deg.is_finite() || latitude_deg.abs() > 90.0 {
            return Err(ChartError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !longitude_deg.is_finite() || longitude_deg.abs() > 180.0 {
            return Err(ChartError::InvalidLocation(
                "longitude must be in [-180, 180]",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_position() {
        let p = GeoPosition::new(51.5, -0.17).unwrap();
        assert!((p.latitude_deg - 51.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_latitude() {
        assert!(GeoPosition::new(91.0, 0.0).is_err());
        assert!(GeoPosition::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn rejects_bad_longitude() {
        assert!(GeoPosition::new(0.0, 181.0).is_err());
    }

    #[test]
    fn poles_are_valid() {
        assert!(GeoPosition::new(90.0, 0.0).is_ok());
        assert!(GeoPosition::new(-90.0, 0.0).is_ok());
    }
}
