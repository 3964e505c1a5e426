//! Analytic ephemeris for chart casting.
//!
//! Closed-form, low-precision positions of the Sun, Moon, planets and the
//! mean lunar nodes, together with sidereal time, the Ascendant/MC, house
//! division, ayanamsa resolution, and a bright fixed-star catalog.
//!
//! Accuracy is arcminute-level, which is sufficient for sign, nakshatra and
//! house placement. All formulas come from published sources (Meeus,
//! "Astronomical Algorithms" 2nd ed.; IERS Conventions 2010; the JPL
//! approximate planetary elements for 1800-2050).

pub mod ayanamsa;
pub mod error;
pub mod frames;
pub mod houses;
pub mod moon;
pub mod nodes;
pub mod planets;
pub mod sidereal;
pub mod stars;
pub mod sun;

pub use ayanamsa::{Ayanamsa, ayanamsa_deg};
pub use error::EphemError;
pub use frames::{
    OBLIQUITY_J2000_RAD, general_precession_longitude_deg, jd_to_centuries, mean_obliquity_rad,
};
pub use houses::{HouseFrame, HouseSystem, MAX_LATITUDE_DEG, compute_houses};
pub use moon::{moon_latitude_deg, moon_longitude_deg};
pub use nodes::{mean_ketu_deg, mean_rahu_deg};
pub use planets::{Planet, planet_ecliptic};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use stars::{FixedStar, fixed_star_position};
pub use sun::sun_longitude_deg;
