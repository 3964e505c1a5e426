//! Truncated lunar theory.
//!
//! Meeus, "Astronomical Algorithms" (2nd ed.), Chapter 47: mean elements
//! plus the dominant periodic terms of the ELP-derived series. The
//! truncation keeps every longitude term above 0.03 deg and every latitude
//! term above 0.03 deg, giving roughly 0.05 deg accuracy, ample for sign
//! and nakshatra placement.

use jataka_math::normalize_360;

use crate::frames::jd_to_centuries;

/// Mean elements of the lunar orbit at `t` centuries since J2000.0,
/// all in radians: (L', D, M, M', F).
fn mean_elements(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    // Mean longitude, mean elongation, solar anomaly, lunar anomaly,
    // argument of latitude (Meeus 47.1-47.5, truncated to t^2).
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2;
    (
        lp.to_radians(),
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    )
}

/// Principal longitude terms: [nD, nM, nM', nF, amplitude_deg].
#[rustfmt::skip]
const LONGITUDE_TERMS: [[f64; 5]; 13] = [
    [0.0,  0.0,  1.0,  0.0,  6.288_774],
    [2.0,  0.0, -1.0,  0.0,  1.274_027],
    [2.0,  0.0,  0.0,  0.0,  0.658_314],
    [0.0,  0.0,  2.0,  0.0,  0.213_618],
    [0.0,  1.0,  0.0,  0.0, -0.185_116],
    [0.0,  0.0,  0.0,  2.0, -0.114_332],
    [2.0,  0.0, -2.0,  0.0,  0.058_793],
    [2.0, -1.0, -1.0,  0.0,  0.057_066],
    [2.0,  0.0,  1.0,  0.0,  0.053_322],
    [2.0, -1.0,  0.0,  0.0,  0.045_758],
    [0.0,  1.0, -1.0,  0.0, -0.040_923],
    [1.0,  0.0,  0.0,  0.0, -0.034_720],
    [0.0,  1.0,  1.0,  0.0, -0.030_383],
];

/// Principal latitude terms: [nD, nM, nM', nF, amplitude_deg].
#[rustfmt::skip]
const LATITUDE_TERMS: [[f64; 5]; 7] = [
    [0.0,  0.0,  0.0,  1.0,  5.128_122],
    [0.0,  0.0,  1.0,  1.0,  0.280_602],
    [0.0,  0.0,  1.0, -1.0,  0.277_693],
    [2.0,  0.0,  0.0, -1.0,  0.173_237],
    [2.0,  0.0, -1.0,  1.0,  0.055_413],
    [2.0,  0.0, -1.0, -1.0,  0.046_271],
    [2.0,  0.0,  0.0,  1.0,  0.032_573],
];

fn series_deg(terms: &[[f64; 5]], d: f64, m: f64, mp: f64, f: f64) -> f64 {
    let mut sum = 0.0_f64;
    for term in terms {
        let arg = term[0] * d + term[1] * m + term[2] * mp + term[3] * f;
        sum += term[4] * arg.sin();
    }
    sum
}

/// Geocentric ecliptic longitude of the Moon in degrees [0, 360).
pub fn moon_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let (lp, d, m, mp, f) = mean_elements(t);
    let correction = series_deg(&LONGITUDE_TERMS, d, m, mp, f);
    normalize_360(lp.to_degrees() + correction)
}

/// Geocentric ecliptic latitude of the Moon in degrees (roughly +/-5.3).
pub fn moon_latitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let (_lp, d, m, mp, f) = mean_elements(t);
    series_deg(&LATITUDE_TERMS, d, m, mp, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_time::J2000_JD;

    #[test]
    fn moon_at_j2000() {
        // 2000-01-01 12:00 UTC: Moon near 223 deg (Scorpio)
        let lon = moon_longitude_deg(J2000_JD);
        assert!((lon - 223.0).abs() < 1.0, "lon = {lon}");
    }

    #[test]
    fn latitude_bounded() {
        for i in 0..200 {
            let lat = moon_latitude_deg(J2000_JD + (i as f64) * 3.1);
            assert!(lat.abs() < 5.6, "lat = {lat}");
        }
    }

    #[test]
    fn daily_motion_about_13_deg() {
        let a = moon_longitude_deg(J2000_JD);
        let b = moon_longitude_deg(J2000_JD + 1.0);
        let daily = jataka_math::closest_distance(a, b);
        assert!((11.0..16.0).contains(&daily), "daily motion = {daily}");
    }

    #[test]
    fn sidereal_month_closes_the_circle() {
        // After ~27.32 days the Moon returns to the same longitude
        let a = moon_longitude_deg(J2000_JD);
        let b = moon_longitude_deg(J2000_JD + 27.321_661);
        assert!(jataka_math::closest_distance(a, b).abs() < 2.5);
    }
}
