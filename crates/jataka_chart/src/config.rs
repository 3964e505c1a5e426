//! Chart configuration and validation.
//!
//! All options are optional with documented defaults; the one hard rule is
//! the Krishnamurti-Paddhati pairing: a KP chart uses the Krishnamurti
//! ayanamsa with Placidus houses, and any other explicit combination is
//! rejected before a single ephemeris call is made.

use jataka_ephem::{Ayanamsa, HouseSystem};

use crate::error::ChartError;
use crate::ids::{CelestialBody, TRADITIONAL_BODIES, VEDIC_BODIES};
use crate::orbs::OrbTable;

/// Options accepted at chart construction.
#[derive(Debug, Clone, Default)]
pub struct ChartConfig {
    /// House system; defaults to Whole Sign (Placidus for KP charts).
    pub house_system: Option<HouseSystem>,
    /// Sidereal mode; absent means tropical longitudes.
    pub ayanamsa: Option<Ayanamsa>,
    /// Explicit object list; defaults depend on the zodiac mode.
    pub bodies: Option<Vec<CelestialBody>>,
    /// House-numbering offset: house n is served by cusp (n-1+offset) mod 12.
    pub houses_offset: i8,
    /// Orb overrides; defaults to the tight table.
    pub orbs: Option<OrbTable>,
    /// Krishnamurti-Paddhati chart conventions.
    pub kp: bool,
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_house_system(mut self, system: HouseSystem) -> Self {
        self.house_system = Some(system);
        self
    }

    pub fn with_ayanamsa(mut self, ayanamsa: Ayanamsa) -> Self {
        self.ayanamsa = Some(ayanamsa);
        self
    }

    pub fn with_bodies(mut self, bodies: Vec<CelestialBody>) -> Self {
        self.bodies = Some(bodies);
        self
    }

    pub fn with_houses_offset(mut self, offset: i8) -> Self {
        self.houses_offset = offset;
        self
    }

    pub fn with_orbs(mut self, orbs: OrbTable) -> Self {
        self.orbs = Some(orbs);
        self
    }

    pub fn kp(mut self) -> Self {
        self.kp = true;
        self
    }
}

/// A fully-defaulted, validated configuration.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub house_system: HouseSystem,
    pub ayanamsa: Option<Ayanamsa>,
    pub bodies: Vec<CelestialBody>,
    pub houses_offset: i8,
    pub orbs: OrbTable,
}

impl ChartConfig {
    pub(crate) fn resolve(self) -> Result<ResolvedConfig, ChartError> {
        let (house_system, ayanamsa) = if self.kp {
            match self.ayanamsa {
                Some(Ayanamsa::Krishnamurti) | None => {}
                Some(_) => {
                    return Err(ChartError::InvalidConfig(
                        "KP charts require the Krishnamurti ayanamsa",
                    ));
                }
            }
            match self.house_system {
                Some(HouseSystem::Placidus) | None => {}
                Some(_) => {
                    return Err(ChartError::InvalidConfig(
                        "KP charts require Placidus houses",
                    ));
                }
            }
            (HouseSystem::Placidus, Some(Ayanamsa::Krishnamurti))
        } else {
            (
                self.house_system.unwrap_or(HouseSystem::WholeSign),
                self.ayanamsa,
            )
        };

        if let Some(a) = ayanamsa {
            let recommended = recommended_house_systems(a);
            if !recommended.contains(&house_system) {
                log::warn!(
                    "{} houses are not a recommended pairing for the {} ayanamsa",
                    house_system.name(),
                    a.name()
                );
            }
        }

        let bodies = self.bodies.unwrap_or_else(|| {
            if ayanamsa.is_some() {
                VEDIC_BODIES.to_vec()
            } else {
                TRADITIONAL_BODIES.to_vec()
            }
        });

        Ok(ResolvedConfig {
            house_system,
            ayanamsa,
            bodies,
            houses_offset: self.houses_offset,
            orbs: self.orbs.unwrap_or_default(),
        })
    }
}

/// House systems traditionally paired with an ayanamsa.
pub fn recommended_house_systems(ayanamsa: Ayanamsa) -> &'static [HouseSystem] {
    match ayanamsa {
        Ayanamsa::Lahiri => &[HouseSystem::WholeSign, HouseSystem::Equal],
        Ayanamsa::Krishnamurti => &[HouseSystem::Placidus],
        _ => &[HouseSystem::WholeSign],
    }
}
