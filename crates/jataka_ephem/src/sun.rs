//! Low-precision solar longitude.
//!
//! Meeus, "Astronomical Algorithms" (2nd ed.), Chapter 25: geometric mean
//! longitude plus the equation of centre, with the constant aberration
//! correction. Accuracy is better than 0.01 deg over several centuries
//! around J2000.

use jataka_math::normalize_360;

use crate::frames::jd_to_centuries;

/// Apparent ecliptic longitude of the Sun in degrees [0, 360).
pub fn sun_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);

    // Geometric mean longitude and mean anomaly (deg)
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t;
    let m_rad = m.to_radians();

    // Equation of centre (deg)
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    // Constant aberration correction to the true longitude
    normalize_360(l0 + c - 0.005_69)
}
