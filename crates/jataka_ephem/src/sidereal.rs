//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.
//!
//! Functions take UTC Julian Dates; for the arcminute accuracy targeted by
//! this crate the UT1-UTC difference (< 0.9 s) is negligible.

use std::f64::consts::{PI, TAU};

use jataka_time::J2000_JD;

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle at a given Julian Date.
///
/// theta = 2*pi * (0.7790572732640 + 1.00273781191135448 * Du),
/// Du = JD - 2451545.0. Returns radians in [0, 2*pi).
pub fn earth_rotation_angle_rad(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a given Julian Date.
///
/// GMST = ERA + polynomial(T), T in Julian centuries from J2000.0.
/// Returns radians in [0, 2*pi).
pub fn gmst_rad(jd: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd);
    let t = (jd - J2000_JD) / 36_525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014_506 + 4612.156_534 * t + 1.391_581_7 * t2 - 0.000_000_44 * t3
        - 0.000_029_956 * t4
        - 0.000_000_036_8 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and observer east longitude.
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}
