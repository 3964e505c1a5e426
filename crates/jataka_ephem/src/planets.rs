//! Geocentric planetary longitudes from Keplerian mean elements.
//!
//! Uses the JPL approximate elements for 1800 AD - 2050 AD (Standish,
//! "Keplerian Elements for Approximate Positions of the Major Planets"),
//! solving Kepler's equation by Newton iteration and differencing the
//! heliocentric position of the planet against the Earth-Moon barycenter.
//! Worst-case errors over the validity span are a few arcminutes.

use std::f64::consts::PI;

use jataka_math::normalize_360;

use crate::frames::jd_to_centuries;

/// Planets resolvable from mean elements. The Sun, Moon and lunar nodes
/// have their own modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Osculating elements at J2000.0 and their per-century rates.
///
/// Fields: semi-major axis (AU), eccentricity, inclination, mean
/// longitude, longitude of perihelion, longitude of ascending node
/// (angles in degrees).
struct Elements {
    a: f64,
    a_dot: f64,
    e: f64,
    e_dot: f64,
    i: f64,
    i_dot: f64,
    l: f64,
    l_dot: f64,
    peri: f64,
    peri_dot: f64,
    node: f64,
    node_dot: f64,
}

/// Earth-Moon barycenter elements (used as the observer).
const EARTH: Elements = Elements {
    a: 1.000_002_61,
    a_dot: 0.000_005_62,
    e: 0.016_711_23,
    e_dot: -0.000_043_92,
    i: -0.000_015_31,
    i_dot: -0.012_946_68,
    l: 100.464_571_66,
    l_dot: 35_999.372_449_81,
    peri: 102.937_681_93,
    peri_dot: 0.323_273_64,
    node: 0.0,
    node_dot: 0.0,
};

const fn elements(planet: Planet) -> Elements {
    match planet {
        Planet::Mercury => Elements {
            a: 0.387_099_27,
            a_dot: 0.000_000_37,
            e: 0.205_635_93,
            e_dot: 0.000_019_06,
            i: 7.004_979_02,
            i_dot: -0.005_947_49,
            l: 252.250_323_50,
            l_dot: 149_472.674_111_75,
            peri: 77.457_796_28,
            peri_dot: 0.160_476_89,
            node: 48.330_765_93,
            node_dot: -0.125_340_81,
        },
        Planet::Venus => Elements {
            a: 0.723_335_66,
            a_dot: 0.000_003_90,
            e: 0.006_776_72,
            e_dot: -0.000_041_07,
            i: 3.394_676_05,
            i_dot: -0.000_788_90,
            l: 181.979_099_50,
            l_dot: 58_517.815_387_29,
            peri: 131.602_467_18,
            peri_dot: 0.002_683_29,
            node: 76.679_842_55,
            node_dot: -0.277_694_18,
        },
        Planet::Mars => Elements {
            a: 1.523_710_34,
            a_dot: 0.000_018_47,
            e: 0.093_394_10,
            e_dot: 0.000_078_82,
            i: 1.849_691_42,
            i_dot: -0.008_131_31,
            l: -4.553_432_05,
            l_dot: 19_140.302_684_99,
            peri: -23.943_629_59,
            peri_dot: 0.444_410_88,
            node: 49.559_538_91,
            node_dot: -0.292_573_43,
        },
        Planet::Jupiter => Elements {
            a: 5.202_887_00,
            a_dot: -0.000_116_07,
            e: 0.048_386_24,
            e_dot: -0.000_132_53,
            i: 1.304_396_95,
            i_dot: -0.001_837_14,
            l: 34.396_440_51,
            l_dot: 3034.746_127_75,
            peri: 14.728_479_83,
            peri_dot: 0.212_526_68,
            node: 100.473_909_09,
            node_dot: 0.204_691_06,
        },
        Planet::Saturn => Elements {
            a: 9.536_675_94,
            a_dot: -0.001_250_60,
            e: 0.053_861_79,
            e_dot: -0.000_509_91,
            i: 2.485_991_87,
            i_dot: 0.001_936_09,
            l: 49.954_244_23,
            l_dot: 1222.493_622_01,
            peri: 92.598_878_31,
            peri_dot: -0.418_972_16,
            node: 113.662_424_48,
            node_dot: -0.288_677_94,
        },
        Planet::Uranus => Elements {
            a: 19.189_164_64,
            a_dot: -0.001_961_76,
            e: 0.047_257_44,
            e_dot: -0.000_043_97,
            i: 0.772_637_83,
            i_dot: -0.002_429_39,
            l: 313.238_104_51,
            l_dot: 428.482_027_85,
            peri: 170.954_276_30,
            peri_dot: 0.408_052_81,
            node: 74.016_925_03,
            node_dot: 0.042_405_89,
        },
        Planet::Neptune => Elements {
            a: 30.069_922_76,
            a_dot: 0.000_262_91,
            e: 0.008_590_48,
            e_dot: 0.000_051_05,
            i: 1.770_043_47,
            i_dot: 0.000_353_72,
            l: -55.120_029_69,
            l_dot: 218.459_453_25,
            peri: 44.964_762_27,
            peri_dot: -0.322_414_64,
            node: 131.784_225_74,
            node_dot: -0.005_086_64,
        },
        Planet::Pluto => Elements {
            a: 39.482_116_75,
            a_dot: -0.000_315_96,
            e: 0.248_827_30,
            e_dot: 0.000_051_70,
            i: 17.140_012_06,
            i_dot: 0.000_048_18,
            l: 238.929_038_33,
            l_dot: 145.207_805_15,
            peri: 224.068_916_29,
            peri_dot: -0.040_629_42,
            node: 110.303_936_84,
            node_dot: -0.011_834_82,
        },
    }
}

impl Planet {
    /// All planets in table order.
    pub const fn all() -> &'static [Planet] {
        &[
            Planet::Mercury,
            Planet::Venus,
            Planet::Mars,
            Planet::Jupiter,
            Planet::Saturn,
            Planet::Uranus,
            Planet::Neptune,
            Planet::Pluto,
        ]
    }
}

/// Solve Kepler's equation M = E - e*sin(E) by Newton iteration.
fn eccentric_anomaly(m_rad: f64, e: f64) -> f64 {
    let mut ecc = m_rad + e * m_rad.sin();
    for _ in 0..20 {
        let delta = (m_rad - (ecc - e * ecc.sin())) / (1.0 - e * ecc.cos());
        ecc += delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc
}

/// Heliocentric J2000-ecliptic position in AU.
fn heliocentric(el: &Elements, t: f64) -> [f64; 3] {
    let a = el.a + el.a_dot * t;
    let e = el.e + el.e_dot * t;
    let i = (el.i + el.i_dot * t).to_radians();
    let l = el.l + el.l_dot * t;
    let peri = el.peri + el.peri_dot * t;
    let node = el.node + el.node_dot * t;

    let omega = (peri - node).to_radians();
    let node_rad = node.to_radians();

    // Mean anomaly, reduced to [-pi, pi] for the Newton start
    let m_deg = normalize_360(l - peri);
    let m_rad = if m_deg > 180.0 {
        (m_deg - 360.0).to_radians()
    } else {
        m_deg.to_radians()
    };
    let ecc = eccentric_anomaly(m_rad, e);

    // Orbital-plane coordinates
    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let (sin_o, cos_o) = omega.sin_cos();
    let (sin_n, cos_n) = node_rad.sin_cos();
    let (sin_i, cos_i) = i.sin_cos();

    [
        (cos_o * cos_n - sin_o * sin_n * cos_i) * xp + (-sin_o * cos_n - cos_o * sin_n * cos_i) * yp,
        (cos_o * sin_n + sin_o * cos_n * cos_i) * xp + (-sin_o * sin_n + cos_o * cos_n * cos_i) * yp,
        sin_o * sin_i * xp + cos_o * sin_i * yp,
    ]
}

/// Geocentric ecliptic longitude and latitude of a planet in degrees.
pub fn planet_ecliptic(planet: Planet, jd: f64) -> (f64, f64) {
    let t = jd_to_centuries(jd);
    let p = heliocentric(&elements(planet), t);
    let e = heliocentric(&EARTH, t);

    let x = p[0] - e[0];
    let y = p[1] - e[1];
    let z = p[2] - e[2];

    let lon = f64::atan2(y, x).rem_euclid(2.0 * PI).to_degrees();
    let lat = f64::atan2(z, (x * x + y * y).sqrt()).to_degrees();
    (lon, lat)
}
