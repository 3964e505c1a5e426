//! Mean lunar node (Rahu/Ketu) longitudes.
//!
//! Mean ascending node polynomial from Meeus, "Astronomical Algorithms"
//! (2nd ed.), Eq. 47.7. Ketu is the descending node, always Rahu + 180 deg.
//! The mean node regresses through the zodiac at about -0.0529 deg/day.

use jataka_math::normalize_360;

use crate::frames::jd_to_centuries;

/// Mean Rahu (ascending node) ecliptic longitude in degrees [0, 360).
pub fn mean_rahu_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let omega = 125.044_547_9 - 1934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0
        - t4 / 60_616_000.0;
    normalize_360(omega)
}

/// Mean Ketu (descending node) ecliptic longitude in degrees [0, 360).
pub fn mean_ketu_deg(jd: f64) -> f64 {
    normalize_360(mean_rahu_deg(jd) + 180.0)
}
