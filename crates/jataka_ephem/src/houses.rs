//! Ascendant, MC, Vertex and house-cusp computation.
//!
//! The angles use the standard spherical-astronomy formulas (Meeus Ch. 13,
//! Montenbruck & Pfleger). Six house-division methods are provided:
//! Whole Sign, Equal, Porphyry (quadrant trisection), Placidus (iterative
//! semi-arc trisection), Koch (MC semi-arc division) and Meridian (equator
//! division projected to the ecliptic).

use std::f64::consts::{PI, TAU};

use jataka_math::{arc_forward, normalize_360};

use crate::error::EphemError;
use crate::frames::{jd_to_centuries, mean_obliquity_rad};
use crate::sidereal::{gmst_rad, local_sidereal_time_rad};

/// Maximum latitude (degrees) for the time-based house systems, where the
/// semi-arc iteration degenerates inside the polar circles.
pub const MAX_LATITUDE_DEG: f64 = 66.5;

/// Supported house-division methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HouseSystem {
    /// Each house is one zodiac sign; house 1 is the Ascendant's sign.
    WholeSign,
    /// Twelve 30-degree houses from the Ascendant degree.
    Equal,
    /// Quadrant arcs between the angles, trisected on the ecliptic.
    Porphyry,
    /// Time-based semi-arc trisection.
    Placidus,
    /// MC-declination semi-arc division.
    Koch,
    /// Equator divided from the RAMC, projected to the ecliptic.
    Meridian,
}

/// All supported house systems in declaration order.
pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 6] = [
    HouseSystem::WholeSign,
    HouseSystem::Equal,
    HouseSystem::Porphyry,
    HouseSystem::Placidus,
    HouseSystem::Koch,
    HouseSystem::Meridian,
];

impl HouseSystem {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::WholeSign => "Whole Sign",
            Self::Equal => "Equal",
            Self::Porphyry => "Porphyry",
            Self::Placidus => "Placidus",
            Self::Koch => "Koch",
            Self::Meridian => "Meridian",
        }
    }

    /// Whether the method breaks down inside the polar circles.
    pub const fn latitude_limited(self) -> bool {
        matches!(self, Self::Placidus | Self::Koch)
    }

    /// All supported house systems.
    pub const fn all() -> &'static [HouseSystem] {
        &ALL_HOUSE_SYSTEMS
    }
}

/// Raw output of a house computation: 12 cusp longitudes plus the five
/// chart angles, all in tropical ecliptic degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseFrame {
    pub cusps: [f64; 12],
    pub asc: f64,
    pub mc: f64,
    pub desc: f64,
    pub ic: f64,
    pub vertex: f64,
}

/// Ecliptic longitude rising on the eastern horizon (Meeus Ch. 13).
///
/// `Asc = atan2(cos(RAMC), -(sin(RAMC)*cos(eps) + tan(phi)*sin(eps)))`
///
/// At the equator with the vernal point culminating (RAMC = 0) this gives
/// 90 deg: the point 90 deg of right ascension east of the meridian rises.
fn ascendant_rad(lst: f64, lat: f64, eps: f64) -> f64 {
    f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + lat.tan() * eps.sin())).rem_euclid(TAU)
}

/// Ecliptic longitude on the meridian: `MC = atan2(sin(LST), cos(LST)*cos(eps))`.
fn mc_rad(lst: f64, eps: f64) -> f64 {
    f64::atan2(lst.sin(), lst.cos() * eps.cos()).rem_euclid(TAU)
}

/// Diurnal or nocturnal semi-arc in radians:
/// `acos(-tan(dec) * tan(lat))`, nocturnal = pi - diurnal.
fn semi_arc_rad(dec: f64, lat: f64, diurnal: bool) -> f64 {
    let cos_ha = -(dec.tan() * lat.tan());
    let ha = cos_ha.clamp(-1.0, 1.0).acos();
    if diurnal { ha } else { PI - ha }
}

/// Project an equatorial point at right ascension `ra` (with the
/// declination it has as an ecliptic-circle division point) onto the
/// ecliptic, returning the longitude in radians.
fn equator_to_ecliptic_rad(ra: f64, eps: f64) -> f64 {
    let dec = (eps.sin() * ra.sin()).asin();
    let sin_lon = ra.sin() * eps.cos() + dec.tan() * eps.sin();
    f64::atan2(sin_lon, ra.cos()).rem_euclid(TAU)
}

fn compute_whole_sign(asc_deg: f64) -> [f64; 12] {
    let start = (asc_deg / 30.0).floor() * 30.0;
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(start + (i as f64) * 30.0);
    }
    cusps
}

fn compute_equal(asc_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(asc_deg + (i as f64) * 30.0);
    }
    cusps
}

/// Porphyry: trisect the four quadrant arcs between Asc/IC/Desc/MC.
fn compute_porphyry(asc_deg: f64, mc_deg: f64) -> [f64; 12] {
    let desc_deg = normalize_360(asc_deg + 180.0);
    let ic_deg = normalize_360(mc_deg + 180.0);

    let mut cusps = [0.0; 12];
    cusps[0] = asc_deg;
    cusps[3] = ic_deg;
    cusps[6] = desc_deg;
    cusps[9] = mc_deg;

    let arc1 = arc_forward(asc_deg, ic_deg);
    cusps[1] = normalize_360(asc_deg + arc1 / 3.0);
    cusps[2] = normalize_360(asc_deg + 2.0 * arc1 / 3.0);

    let arc2 = arc_forward(ic_deg, desc_deg);
    cusps[4] = normalize_360(ic_deg + arc2 / 3.0);
    cusps[5] = normalize_360(ic_deg + 2.0 * arc2 / 3.0);

    let arc3 = arc_forward(desc_deg, mc_deg);
    cusps[7] = normalize_360(desc_deg + arc3 / 3.0);
    cusps[8] = normalize_360(desc_deg + 2.0 * arc3 / 3.0);

    let arc4 = arc_forward(mc_deg, asc_deg);
    cusps[10] = normalize_360(mc_deg + arc4 / 3.0);
    cusps[11] = normalize_360(mc_deg + 2.0 * arc4 / 3.0);

    cusps
}

/// One Placidus cusp by iterative semi-arc trisection.
///
/// Diurnal cusps (11, 12) sit at `RA = RAMC + fraction * SA_d` between the
/// MC and the rising point; nocturnal cusps (2, 3) at
/// `RA = RAMC + 180 - fraction * SA_n` between the rising point and the IC.
/// The declination feeding the semi-arc depends on the RA being solved
/// for, hence the fixed-point iteration.
fn placidus_cusp(ramc: f64, lat: f64, eps: f64, fraction: f64, above_horizon: bool) -> f64 {
    let mut ra = if above_horizon {
        ramc + fraction * PI / 2.0
    } else {
        ramc + PI - fraction * PI / 2.0
    };

    for _ in 0..50 {
        let dec = (eps.sin() * ra.sin()).asin();
        let semi_arc = semi_arc_rad(dec, lat, above_horizon);
        let f = fraction * semi_arc;

        let new_ra = if above_horizon { ramc + f } else { ramc + PI - f };
        if (new_ra - ra).abs() < 1e-10 {
            ra = new_ra;
            break;
        }
        ra = new_ra;
    }

    normalize_360(equator_to_ecliptic_rad(ra, eps).to_degrees())
}

fn compute_placidus(asc_deg: f64, mc_deg: f64, ramc: f64, lat: f64, eps: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    cusps[0] = asc_deg;
    cusps[3] = normalize_360(mc_deg + 180.0);
    cusps[6] = normalize_360(asc_deg + 180.0);
    cusps[9] = mc_deg;

    cusps[10] = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, true);
    cusps[11] = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, true);
    cusps[1] = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, false);
    cusps[2] = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, false);

    cusps[4] = normalize_360(cusps[10] + 180.0);
    cusps[5] = normalize_360(cusps[11] + 180.0);
    cusps[7] = normalize_360(cusps[1] + 180.0);
    cusps[8] = normalize_360(cusps[2] + 180.0);

    cusps
}

/// Koch: Ascendant-type points at sidereal times shifted by thirds of the
/// MC degree's ascensional difference.
fn compute_koch(asc_deg: f64, mc_deg: f64, ramc: f64, lat: f64, eps: f64) -> [f64; 12] {
    let dec_mc = (eps.sin() * ramc.sin()).asin();
    // Ascensional difference of the MC degree
    let ad = (lat.tan() * dec_mc.tan()).clamp(-1.0, 1.0).asin();
    let third = PI / 6.0;

    // Asc-type point at a shifted sidereal time
    let koch = |shift: f64| {
        normalize_360(ascendant_rad(ramc + shift, lat, eps).to_degrees())
    };

    let mut cusps = [0.0; 12];
    cusps[0] = asc_deg;
    cusps[3] = normalize_360(mc_deg + 180.0);
    cusps[6] = normalize_360(asc_deg + 180.0);
    cusps[9] = mc_deg;

    cusps[10] = koch(-2.0 * third - 2.0 * ad / 3.0);
    cusps[11] = koch(-third - ad / 3.0);
    cusps[1] = koch(third + ad / 3.0);
    cusps[2] = koch(2.0 * third + 2.0 * ad / 3.0);

    cusps[4] = normalize_360(cusps[10] + 180.0);
    cusps[5] = normalize_360(cusps[11] + 180.0);
    cusps[7] = normalize_360(cusps[1] + 180.0);
    cusps[8] = normalize_360(cusps[2] + 180.0);

    cusps
}

/// Meridian (axial rotation): RAMC + 30-degree equator arcs, projected to
/// the ecliptic. Independent of latitude.
fn compute_meridian(ramc: f64, eps: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        let ra = ramc + PI / 2.0 + (i as f64) * PI / 6.0;
        *cusp = normalize_360(equator_to_ecliptic_rad(ra, eps).to_degrees());
    }
    cusps
}

/// Compute the full set of cusps and angles for a date and location.
///
/// `latitude_deg` north positive, `longitude_east_deg` east positive.
pub fn compute_houses(
    jd: f64,
    latitude_deg: f64,
    longitude_east_deg: f64,
    system: HouseSystem,
) -> Result<HouseFrame, EphemError> {
    if system.latitude_limited() && latitude_deg.abs() > MAX_LATITUDE_DEG {
        return Err(EphemError::InvalidLocation(
            "latitude exceeds 66.5 deg limit for this house system",
        ));
    }

    let eps = mean_obliquity_rad(jd_to_centuries(jd));
    let lat = latitude_deg.to_radians();
    let lst = local_sidereal_time_rad(gmst_rad(jd), longitude_east_deg.to_radians());
    let ramc = lst;

    let asc_rad = ascendant_rad(lst, lat, eps);
    let asc_deg = normalize_360(asc_rad.to_degrees());
    let mc_deg = normalize_360(mc_rad(lst, eps).to_degrees());

    // Vertex: the Ascendant formula reflected through the prime vertical
    // (RAMC + 180 deg, co-latitude).
    let colat = PI / 2.0 - lat;
    let vertex_deg = normalize_360(ascendant_rad(lst + PI, colat, eps).to_degrees());

    let cusps = match system {
        HouseSystem::WholeSign => compute_whole_sign(asc_deg),
        HouseSystem::Equal => compute_equal(asc_deg),
        HouseSystem::Porphyry => compute_porphyry(asc_deg, mc_deg),
        HouseSystem::Placidus => compute_placidus(asc_deg, mc_deg, ramc, lat, eps),
        HouseSystem::Koch => compute_koch(asc_deg, mc_deg, ramc, lat, eps),
        HouseSystem::Meridian => compute_meridian(ramc, eps),
    };

    Ok(HouseFrame {
        cusps,
        asc: asc_deg,
        mc: mc_deg,
        desc: normalize_360(asc_deg + 180.0),
        ic: normalize_360(mc_deg + 180.0),
        vertex: vertex_deg,
    })
}
