//! The ephemeris provider contract and the built-in analytic adapter.
//!
//! A provider turns (object ids, julian day, position, zodiac mode) into
//! positioned objects, and (julian day, position, house system, mode) into
//! house cusps and chart angles. Tropical positions are returned when the
//! ayanamsa is absent; otherwise the ayanamsa offset for the date is
//! subtracted from every longitude.

use jataka_ephem::{
    Ayanamsa, FixedStar, HouseSystem, ayanamsa_deg, compute_houses, fixed_star_position,
    mean_ketu_deg, mean_rahu_deg, moon_latitude_deg, moon_longitude_deg, planet_ecliptic,
    sun_longitude_deg,
};
use jataka_math::{closest_distance, normalize_360};

use crate::error::ChartError;
use crate::geo::GeoPosition;
use crate::ids::{CelestialBody, ChartAngle};
use crate::position::PositionedObject;

/// One consistent set of house cusps and chart angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    /// Cusps of houses 1-12 in order.
    pub cusps: [PositionedObject; 12],
    /// The five chart angles.
    pub angles: [(ChartAngle, PositionedObject); 5],
}

/// Contract between the chart aggregate and an ephemeris implementation.
pub trait EphemerisProvider {
    /// Positions for the requested bodies at a UTC Julian Date.
    fn objects(
        &self,
        ids: &[CelestialBody],
        jd: f64,
        pos: &GeoPosition,
        ayanamsa: Option<Ayanamsa>,
    ) -> Result<Vec<(CelestialBody, PositionedObject)>, ChartError>;

    /// House cusps and angles for a date, position and house system.
    fn houses(
        &self,
        jd: f64,
        pos: &GeoPosition,
        system: HouseSystem,
        ayanamsa: Option<Ayanamsa>,
    ) -> Result<ChartFrame, ChartError>;

    /// Ayanamsa offset in degrees at a Julian Date.
    fn ayanamsa_offset(&self, jd: f64, ayanamsa: Ayanamsa) -> f64;

    /// Position of one fixed star (always tropical).
    fn fixed_star(&self, star: FixedStar, jd: f64) -> Result<PositionedObject, ChartError>;

    /// Positions of several fixed stars.
    fn fixed_stars(
        &self,
        stars: &[FixedStar],
        jd: f64,
    ) -> Result<Vec<(FixedStar, PositionedObject)>, ChartError> {
        stars
            .iter()
            .map(|&star| Ok((star, self.fixed_star(star, jd)?)))
            .collect()
    }
}

/// Self-contained provider backed by the analytic series in `jataka_ephem`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Tropical ecliptic (longitude, latitude) of a body.
    fn body_ecliptic(body: CelestialBody, jd: f64) -> (f64, f64) {
        use jataka_ephem::Planet;
        match body {
            CelestialBody::Sun => (sun_longitude_deg(jd), 0.0),
            CelestialBody::Moon => (moon_longitude_deg(jd), moon_latitude_deg(jd)),
            CelestialBody::Mercury => planet_ecliptic(Planet::Mercury, jd),
            CelestialBody::Venus => planet_ecliptic(Planet::Venus, jd),
            CelestialBody::Mars => planet_ecliptic(Planet::Mars, jd),
            CelestialBody::Jupiter => planet_ecliptic(Planet::Jupiter, jd),
            CelestialBody::Saturn => planet_ecliptic(Planet::Saturn, jd),
            CelestialBody::Uranus => planet_ecliptic(Planet::Uranus, jd),
            CelestialBody::Neptune => planet_ecliptic(Planet::Neptune, jd),
            CelestialBody::Pluto => planet_ecliptic(Planet::Pluto, jd),
            CelestialBody::Rahu => (mean_rahu_deg(jd), 0.0),
            CelestialBody::Ketu => (mean_ketu_deg(jd), 0.0),
        }
    }

    /// Tropical position with the speed from a one-day central difference.
    fn body_position(body: CelestialBody, jd: f64) -> PositionedObject {
        let (lon, lat) = Self::body_ecliptic(body, jd);
        let (before, _) = Self::body_ecliptic(body, jd - 0.5);
        let (after, _) = Self::body_ecliptic(body, jd + 0.5);
        let speed = closest_distance(before, after);
        PositionedObject::new(lon, lat, speed)
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn objects(
        &self,
        ids: &[CelestialBody],
        jd: f64,
        _pos: &GeoPosition,
        ayanamsa: Option<Ayanamsa>,
    ) -> Result<Vec<(CelestialBody, PositionedObject)>, ChartError> {
        let offset = ayanamsa.map(|a| ayanamsa_deg(a, jd)).unwrap_or(0.0);
        Ok(ids
            .iter()
            .map(|&body| {
                let mut obj = Self::body_position(body, jd);
                obj.relocate(obj.lon - offset);
                (body, obj)
            })
            .collect())
    }

    fn houses(
        &self,
        jd: f64,
        pos: &GeoPosition,
        system: HouseSystem,
        ayanamsa: Option<Ayanamsa>,
    ) -> Result<ChartFrame, ChartError> {
        let frame = compute_houses(jd, pos.latitude_deg, pos.longitude_deg, system)?;
        let offset = ayanamsa.map(|a| ayanamsa_deg(a, jd)).unwrap_or(0.0);
        let cusp = |lon: f64| PositionedObject::new(normalize_360(lon - offset), 0.0, 0.0);

        let mut cusps = [PositionedObject::new(0.0, 0.0, 0.0); 12];
        for (i, &lon) in frame.cusps.iter().enumerate() {
            cusps[i] = cusp(lon);
        }

        Ok(ChartFrame {
            cusps,
            angles: [
                (ChartAngle::Asc, cusp(frame.asc)),
                (ChartAngle::Mc, cusp(frame.mc)),
                (ChartAngle::Desc, cusp(frame.desc)),
                (ChartAngle::Ic, cusp(frame.ic)),
                (ChartAngle::Vertex, cusp(frame.vertex)),
            ],
        })
    }

    fn ayanamsa_offset(&self, jd: f64, ayanamsa: Ayanamsa) -> f64 {
        ayanamsa_deg(ayanamsa, jd)
    }

    fn fixed_star(&self, star: FixedStar, jd: f64) -> Result<PositionedObject, ChartError> {
        let (lon, lat) = fixed_star_position(star, jd);
        Ok(PositionedObject::new(lon, lat, 0.0))
    }
}
