//! Reference-frame constants: obliquity and general precession.
//!
//! Sources: IAU 2006 precession (Capitaine et al. 2003), Meeus Eq. 22.2
//! for the mean obliquity polynomial.

use jataka_time::J2000_JD;

/// Mean obliquity of the ecliptic at J2000.0 in radians (23.4392911 deg).
pub const OBLIQUITY_J2000_RAD: f64 = 0.409_092_804_222_329;

/// Convert a Julian Date to Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Mean obliquity of the ecliptic in radians at `t` Julian centuries
/// since J2000.0.
///
/// Meeus Eq. 22.2: 23 deg 26' 21.448" - 46.8150" t - 0.00059" t^2 + 0.001813" t^3.
pub fn mean_obliquity_rad(t: f64) -> f64 {
    let arcsec = 84_381.448 - 46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    (arcsec / 3600.0).to_radians()
}

/// IAU 2006 general precession in ecliptic longitude, in arcseconds,
/// accumulated over `t` Julian centuries since J2000.0.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796_195 * t + 1.105_434_8 * t2 + 0.000_079_64 * t3 - 0.000_023_857 * t4
        - 0.000_000_038_3 * t5
}

/// General precession in ecliptic longitude, in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}
