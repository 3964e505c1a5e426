//! A positioned object: longitude, latitude, speed and orb.

use jataka_math::normalize_360;

use crate::ids::Sign;

/// A celestial object, house cusp or angle with a resolved ecliptic
/// position.
///
/// The zodiac sign is derived from the longitude rather than stored, so a
/// rotation can never leave the two inconsistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedObject {
    /// Ecliptic longitude in degrees [0, 360).
    pub lon: f64,
    /// Ecliptic latitude in degrees.
    pub lat: f64,
    /// Longitudinal speed in degrees/day; negative while retrograde.
    pub speed: f64,
    /// Orb in degrees, used by aspect-matching consumers.
    pub orb: f64,
}

impl PositionedObject {
    /// New positioned object with no orb assigned yet.
    pub fn new(lon: f64, lat: f64, speed: f64) -> Self {
        Self {
            lon: normalize_360(lon),
            lat,
            speed,
            orb: 0.0,
        }
    }

    /// The zodiac sign containing this longitude.
    pub fn sign(&self) -> Sign {
        Sign::from_longitude(self.lon)
    }

    /// Degrees into the sign, [0, 30).
    pub fn sign_lon(&self) -> f64 {
        self.lon % 30.0
    }

    /// Whether the object is in retrograde motion.
    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }

    /// Move the object to a new longitude, keeping latitude/speed/orb.
    pub fn relocate(&mut self, lon: f64) {
        self.lon = normalize_360(lon);
    }
}
