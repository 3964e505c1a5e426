//! Nakshatra (lunar mansion) lookup.
//!
//! The zodiac divides into 27 nakshatras of 13 deg 20' each. The lord
//! assignment follows the Vimshottari scheme, repeating every nine
//! nakshatras from Ashwini = Ketu.

use jataka_chart::CelestialBody;
use jataka_math::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// The 27 nakshatra names from Ashwini to Revati.
pub const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// Vimshottari lord cycle from Ashwini.
const LORD_CYCLE: [CelestialBody; 9] = [
    CelestialBody::Ketu,
    CelestialBody::Venus,
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Mars,
    CelestialBody::Rahu,
    CelestialBody::Jupiter,
    CelestialBody::Saturn,
    CelestialBody::Mercury,
];

/// Where a longitude falls in the nakshatra wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// 0-based index (0 = Ashwini .. 26 = Revati).
    pub index: u8,
    /// Vimshottari lord of the nakshatra.
    pub lord: CelestialBody,
    /// Fraction of the nakshatra traversed, [0, 1).
    pub fraction: f64,
}

impl NakshatraInfo {
    /// Name of the nakshatra.
    pub fn name(&self) -> &'static str {
        NAKSHATRA_NAMES[self.index as usize]
    }
}

/// Nakshatra containing an ecliptic longitude.
pub fn nakshatra_info(longitude_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(longitude_deg);
    let index = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let fraction = (lon - index as f64 * NAKSHATRA_SPAN) / NAKSHATRA_SPAN;
    NakshatraInfo {
        index,
        lord: LORD_CYCLE[(index % 9) as usize],
        fraction,
    }
}
