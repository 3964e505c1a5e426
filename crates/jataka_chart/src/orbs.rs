//! Per-object orb tables used by aspect-matching consumers.

use std::collections::BTreeMap;

use crate::ids::CelestialBody;

/// Mapping from object to its orb in degrees.
///
/// The default is the traditional wide ("tight-match") table; `wide()`
/// offers the narrow alternative. Individual orbs can be overridden with
/// [`OrbTable::with_orb`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrbTable {
    orbs: BTreeMap<CelestialBody, f64>,
}

/// (body, orb) pairs of the default table.
const DEFAULT_ORBS: [(CelestialBody, f64); 12] = [
    (CelestialBody::Sun, 15.0),
    (CelestialBody::Moon, 12.0),
    (CelestialBody::Mercury, 7.0),
    (CelestialBody::Venus, 7.0),
    (CelestialBody::Mars, 8.0),
    (CelestialBody::Jupiter, 9.0),
    (CelestialBody::Saturn, 9.0),
    (CelestialBody::Uranus, 5.0),
    (CelestialBody::Neptune, 5.0),
    (CelestialBody::Pluto, 5.0),
    (CelestialBody::Rahu, 12.0),
    (CelestialBody::Ketu, 12.0),
];

/// (body, orb) pairs of the narrow table.
const WIDE_ORBS: [(CelestialBody, f64); 12] = [
    (CelestialBody::Sun, 5.0),
    (CelestialBody::Moon, 4.0),
    (CelestialBody::Mercury, 2.0),
    (CelestialBody::Venus, 2.0),
    (CelestialBody::Mars, 3.0),
    (CelestialBody::Jupiter, 3.0),
    (CelestialBody::Saturn, 3.0),
    (CelestialBody::Uranus, 2.0),
    (CelestialBody::Neptune, 1.0),
    (CelestialBody::Pluto, 3.0),
    (CelestialBody::Rahu, 2.0),
    (CelestialBody::Ketu, 2.0),
];

impl OrbTable {
    /// The default orb table.
    pub fn tight() -> Self {
        Self {
            orbs: DEFAULT_ORBS.into_iter().collect(),
        }
    }

    /// Narrow orbs for strict aspect matching.
    pub fn wide() -> Self {
        Self {
            orbs: WIDE_ORBS.into_iter().collect(),
        }
    }

    /// Orb for a body in degrees; unknown bodies get 0.
    pub fn orb(&self, body: CelestialBody) -> f64 {
        self.orbs.get(&body).copied().unwrap_or(0.0)
    }

    /// Override one body's orb.
    pub fn with_orb(mut self, body: CelestialBody, orb_deg: f64) -> Self {
        self.orbs.insert(body, orb_deg);
        self
    }
}

impl Default for OrbTable {
    fn default() -> Self {
        Self::tight()
    }
}
