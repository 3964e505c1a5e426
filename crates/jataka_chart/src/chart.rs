//! The chart aggregate.

use std::collections::BTreeMap;

use jataka_ephem::{Ayanamsa, FixedStar, HouseSystem};
use jataka_math::closest_distance;
use jataka_time::CivilDateTime;

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::geo::GeoPosition;
use crate::ids::{CelestialBody, ChartAngle, ChartRef};
use crate::orbs::OrbTable;
use crate::position::PositionedObject;
use crate::provider::EphemerisProvider;

/// Angular proximity below which a cusp and an angle count as identical:
/// one arc-second.
const ANGLE_PROXIMITY_DEG: f64 = 0.0003;

/// A consistent snapshot of positioned objects, house cusps and angles
/// for one birth event.
///
/// Since houses 1 and 10 do not coincide with the Ascendant and MC in
/// every house system, the angles are kept as their own collection; use
/// them whenever an angle's exact longitude matters.
#[derive(Debug, Clone)]
pub struct Chart {
    date: CivilDateTime,
    jd: f64,
    position: GeoPosition,
    house_system: HouseSystem,
    ayanamsa: Option<Ayanamsa>,
    houses_offset: i8,
    orbs: OrbTable,
    objects: BTreeMap<CelestialBody, PositionedObject>,
    houses: BTreeMap<u8, PositionedObject>,
    angles: BTreeMap<ChartAngle, PositionedObject>,
}

impl Chart {
    /// Cast a chart for a date and location.
    ///
    /// The configuration is validated first; then the provider is asked
    /// once for the objects and once for the houses and angles, both under
    /// the identical resolved (jd, position, house system, ayanamsa)
    /// tuple, so the three collections can never mix zodiac modes.
    pub fn new(
        provider: &dyn EphemerisProvider,
        date: CivilDateTime,
        position: GeoPosition,
        config: ChartConfig,
    ) -> Result<Self, ChartError> {
        let resolved = config.resolve()?;
        let jd = date.to_jd_utc();

        let raw_objects = provider.objects(&resolved.bodies, jd, &position, resolved.ayanamsa)?;
        let frame = provider.houses(jd, &position, resolved.house_system, resolved.ayanamsa)?;

        let mut objects = BTreeMap::new();
        for (body, mut obj) in raw_objects {
            obj.orb = resolved.orbs.orb(body);
            objects.insert(body, obj);
        }

        let mut houses = BTreeMap::new();
        for n in 1..=12u8 {
            let idx = (n as i16 - 1 + resolved.houses_offset as i16).rem_euclid(12) as usize;
            houses.insert(n, frame.cusps[idx]);
        }

        let angles = frame.angles.into_iter().collect();

        Ok(Self {
            date,
            jd,
            position,
            house_system: resolved.house_system,
            ayanamsa: resolved.ayanamsa,
            houses_offset: resolved.houses_offset,
            orbs: resolved.orbs,
            objects,
            houses,
            angles,
        })
    }

    // === Lookups === //

    /// A positioned object, or `None` when the body was not requested.
    pub fn object(&self, body: CelestialBody) -> Option<&PositionedObject> {
        self.objects.get(&body)
    }

    /// A house cusp by number (1-12), or `None` for numbers outside 1-12.
    pub fn house(&self, number: u8) -> Option<&PositionedObject> {
        self.houses.get(&number)
    }

    /// A chart angle.
    pub fn angle(&self, angle: ChartAngle) -> Option<&PositionedObject> {
        self.angles.get(&angle)
    }

    /// Dispatch over the three collections.
    pub fn get(&self, r: ChartRef) -> Option<&PositionedObject> {
        match r {
            ChartRef::Object(body) => self.object(body),
            ChartRef::House(n) => self.house(n),
            ChartRef::Angle(a) => self.angle(a),
        }
    }

    // === Scalar accessors === //

    pub fn date(&self) -> &CivilDateTime {
        &self.date
    }

    /// UTC Julian Date of the chart instant.
    pub fn julian_day(&self) -> f64 {
        self.jd
    }

    pub fn position(&self) -> &GeoPosition {
        &self.position
    }

    pub fn house_system(&self) -> HouseSystem {
        self.house_system
    }

    /// The sidereal mode, or `None` for a tropical chart.
    pub fn ayanamsa(&self) -> Option<Ayanamsa> {
        self.ayanamsa
    }

    pub fn houses_offset(&self) -> i8 {
        self.houses_offset
    }

    pub fn orbs(&self) -> &OrbTable {
        &self.orbs
    }

    /// All positioned objects.
    pub fn objects(&self) -> impl Iterator<Item = (CelestialBody, &PositionedObject)> {
        self.objects.iter().map(|(&body, obj)| (body, obj))
    }

    /// All twelve house cusps in order.
    pub fn houses(&self) -> impl Iterator<Item = (u8, &PositionedObject)> {
        self.houses.iter().map(|(&n, obj)| (n, obj))
    }

    /// All chart angles.
    pub fn angles(&self) -> impl Iterator<Item = (ChartAngle, &PositionedObject)> {
        self.angles.iter().map(|(&a, obj)| (a, obj))
    }

    // === Transforms === //

    /// Rigidly rotate every object, house and angle by `offset` degrees.
    ///
    /// Used to produce relocated or precession-shifted variants without
    /// another provider round-trip.
    pub fn rotate(&mut self, offset: f64) {
        for obj in self.objects.values_mut() {
            let lon = obj.lon + offset;
            obj.relocate(lon);
        }
        for obj in self.houses.values_mut() {
            let lon = obj.lon + offset;
            obj.relocate(lon);
        }
        for obj in self.angles.values_mut() {
            let lon = obj.lon + offset;
            obj.relocate(lon);
        }
    }

    /// A copy of this chart re-expressed on a sidereal zodiac.
    ///
    /// Copies the chart, rotates it by minus the ayanamsa offset at the
    /// chart's own date, and records the new mode. The original chart is
    /// untouched.
    pub fn to_sidereal(&self, provider: &dyn EphemerisProvider, ayanamsa: Ayanamsa) -> Chart {
        let mut chart = self.clone();
        let offset = provider.ayanamsa_offset(self.jd, ayanamsa);
        chart.rotate(-offset);
        chart.ayanamsa = Some(ayanamsa);
        chart
    }

    // === Houses vs angles === //

    /// True when the house 1 cusp coincides with the Ascendant.
    pub fn is_house1_asc(&self) -> bool {
        match (self.house(1), self.angle(ChartAngle::Asc)) {
            (Some(h), Some(a)) => closest_distance(h.lon, a.lon).abs() < ANGLE_PROXIMITY_DEG,
            _ => false,
        }
    }

    /// True when the house 10 cusp coincides with the MC.
    pub fn is_house10_mc(&self) -> bool {
        match (self.house(10), self.angle(ChartAngle::Mc)) {
            (Some(h), Some(a)) => closest_distance(h.lon, a.lon).abs() < ANGLE_PROXIMITY_DEG,
            _ => false,
        }
    }

    // === Fixed stars === //

    // Fixed-star positions are comparatively expensive and rarely needed
    // in bulk, so they bypass the stored collections and hit the provider
    // on every call.

    /// Position of one fixed star at the chart's date.
    pub fn fixed_star(
        &self,
        provider: &dyn EphemerisProvider,
        star: FixedStar,
    ) -> Result<PositionedObject, ChartError> {
        provider.fixed_star(star, self.jd)
    }

    /// Positions of the whole star catalog at the chart's date.
    pub fn fixed_stars(
        &self,
        provider: &dyn EphemerisProvider,
    ) -> Result<Vec<(FixedStar, PositionedObject)>, ChartError> {
        provider.fixed_stars(FixedStar::all(), self.jd)
    }
}
