//! Per-system configuration tables.
//!
//! A [`DashaSystemConfig`] is the complete strategy for one dasha system:
//! the ordered ruler cycle with its year table, how the zodiac is sliced
//! to find the starting ruler (27 nakshatras or 12 signs), and which chart
//! longitude seeds the walk.

use jataka_chart::{CelestialBody, Sign};

use crate::types::{DashaRuler, DashaSystem};

/// Which chart longitude seeds the balance computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthReference {
    /// Moon longitude (nakshatra-based systems).
    MoonLongitude,
    /// Ascendant longitude (sign-based systems).
    AscendantLongitude,
}

/// Full parameterization of one dasha system.
#[derive(Debug, Clone)]
pub struct DashaSystemConfig {
    pub system: DashaSystem,
    /// Ruler cycle in dasha order.
    pub rulers: Vec<DashaRuler>,
    /// Full-cycle years for each ruler in `rulers`.
    pub years: Vec<f64>,
    /// Sum of `years`.
    pub total_years: f64,
    /// Longitude that seeds the walk.
    pub birth_reference: BirthReference,
    /// Number of equal zodiac slices (27 nakshatras or 12 signs).
    pub slice_count: u8,
    /// Slice index to starting-ruler index.
    pub slice_to_ruler: Vec<u8>,
}

impl DashaSystemConfig {
    /// Width of one slice in degrees.
    pub fn slice_width_deg(&self) -> f64 {
        360.0 / self.slice_count as f64
    }

    /// Configuration for a system.
    pub fn for_system(system: DashaSystem) -> Self {
        match system {
            DashaSystem::Vimshottari => vimshottari(),
            DashaSystem::Ashtottari => ashtottari(),
            DashaSystem::Chara => chara(),
            DashaSystem::Sthira => sthira(),
        }
    }
}

/// Vimshottari graha cycle, starting from Ashwini's lord.
const VIMSHOTTARI_GRAHAS: [CelestialBody; 9] = [
    CelestialBody::Ketu,
    CelestialBody::Venus,
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Mars,
    CelestialBody::Rahu,
    CelestialBody::Jupiter,
    CelestialBody::Saturn,
    CelestialBody::Mercury,
];

/// Vimshottari years per graha. Total: 120.
const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// 120-year Vimshottari configuration.
///
/// The nakshatra lords repeat every 9 nakshatras starting from
/// Ashwini = Ketu.
fn vimshottari() -> DashaSystemConfig {
    DashaSystemConfig {
        system: DashaSystem::Vimshottari,
        rulers: VIMSHOTTARI_GRAHAS.iter().map(|&g| DashaRuler::Graha(g)).collect(),
        years: VIMSHOTTARI_YEARS.to_vec(),
        total_years: VIMSHOTTARI_YEARS.iter().sum(),
        birth_reference: BirthReference::MoonLongitude,
        slice_count: 27,
        slice_to_ruler: (0..27).map(|i| i % 9).collect(),
    }
}

/// Ashtottari graha cycle (8 grahas, no Ketu).
const ASHTOTTARI_GRAHAS: [CelestialBody; 8] = [
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Mars,
    CelestialBody::Mercury,
    CelestialBody::Saturn,
    CelestialBody::Jupiter,
    CelestialBody::Rahu,
    CelestialBody::Venus,
];

/// Ashtottari years per graha. Total: 108.
const ASHTOTTARI_YEARS: [f64; 8] = [6.0, 15.0, 8.0, 17.0, 10.0, 19.0, 12.0, 21.0];

/// 108-year Ashtottari configuration.
///
/// The starting graha cycles through the sequence from Ashwini = Venus,
/// so nakshatra i maps to sequence index (i + 7) mod 8.
fn ashtottari() -> DashaSystemConfig {
    DashaSystemConfig {
        system: DashaSystem::Ashtottari,
        rulers: ASHTOTTARI_GRAHAS.iter().map(|&g| DashaRuler::Graha(g)).collect(),
        years: ASHTOTTARI_YEARS.to_vec(),
        total_years: ASHTOTTARI_YEARS.iter().sum(),
        birth_reference: BirthReference::MoonLongitude,
        slice_count: 27,
        slice_to_ruler: (0..27).map(|i| (i + 7) % 8).collect(),
    }
}

/// Chara years per sign from Aries. Deliberately non-monotonic. Total: 78.
const CHARA_YEARS: [f64; 12] = [
    10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 11.0, 12.0,
];

/// 78-year Chara configuration: signs in zodiacal order from the
/// Ascendant's sign.
fn chara() -> DashaSystemConfig {
    sign_config(DashaSystem::Chara, &CHARA_YEARS)
}

/// Sthira years per sign from Aries. Total: 150.
const STHIRA_YEARS: [f64; 12] = [
    7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0,
];

/// 150-year Sthira configuration: signs in zodiacal order from the
/// Ascendant's sign.
fn sthira() -> DashaSystemConfig {
    sign_config(DashaSystem::Sthira, &STHIRA_YEARS)
}

fn sign_config(system: DashaSystem, years: &[f64; 12]) -> DashaSystemConfig {
    DashaSystemConfig {
        system,
        rulers: Sign::all().iter().map(|&s| DashaRuler::Sign(s)).collect(),
        years: years.to_vec(),
        total_years: years.iter().sum(),
        birth_reference: BirthReference::AscendantLongitude,
        slice_count: 12,
        slice_to_ruler: (0..12).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vimshottari_sums_to_120() {
        let cfg = DashaSystemConfig::for_system(DashaSystem::Vimshottari);
        assert!((cfg.total_years - 120.0).abs() < 1e-12);
        assert_eq!(cfg.rulers.len(), 9);
        assert_eq!(cfg.slice_count, 27);
    }

    #[test]
    fn ashtottari_sums_to_108() {
        let cfg = DashaSystemConfig::for_system(DashaSystem::Ashtottari);
        assert!((cfg.total_years - 108.0).abs() < 1e-12);
        assert_eq!(cfg.rulers.len(), 8);
    }

    #[test]
    fn chara_sums_to_78() {
        let cfg = DashaSystemConfig::for_system(DashaSystem::Chara);
        assert!((cfg.total_years - 78.0).abs() < 1e-12);
        assert_eq!(cfg.rulers.len(), 12);
        assert_eq!(cfg.birth_reference, BirthReference::AscendantLongitude);
    }

    #[test]
    fn sthira_sums_to_150() {
        let cfg = DashaSystemConfig::for_system(DashaSystem::Sthira);
        assert!((cfg.total_years - 150.0).abs() < 1e-12);
    }

    #[test]
    fn ashtottari_ashwini_starts_with_venus() {
        let cfg = DashaSystemConfig::for_system(DashaSystem::Ashtottari);
        let idx = cfg.slice_to_ruler[0] as usize;
        assert_eq!(cfg.rulers[idx], DashaRuler::Graha(CelestialBody::Venus));
        // Bharani continues with the Sun
        let idx = cfg.slice_to_ruler[1] as usize;
        assert_eq!(cfg.rulers[idx], DashaRuler::Graha(CelestialBody::Sun));
    }

    #[test]
    fn vimshottari_lords_repeat_every_nine() {
        let cfg = DashaSystemConfig::for_system(DashaSystem::Vimshottari);
        for i in 0..27usize {
            assert_eq!(cfg.slice_to_ruler[i], (i % 9) as u8);
        }
        // Ashwini, Magha and Mula all start with Ketu
        assert_eq!(cfg.rulers[0], DashaRuler::Graha(CelestialBody::Ketu));
    }

    #[test]
    fn slice_widths() {
        let nak = DashaSystemConfig::for_system(DashaSystem::Vimshottari);
        assert!((nak.slice_width_deg() - 360.0 / 27.0).abs() < 1e-12);
        let sign = DashaSystemConfig::for_system(DashaSystem::Chara);
        assert!((sign.slice_width_deg() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn sign_maps_are_identity() {
        for system in [DashaSystem::Chara, DashaSystem::Sthira] {
            let cfg = DashaSystemConfig::for_system(system);
            for i in 0..12usize {
                assert_eq!(cfg.slice_to_ruler[i] as usize, i);
            }
        }
    }

    #[test]
    fn years_align_with_rulers() {
        for &system in DashaSystem::all() {
            let cfg = DashaSystemConfig::for_system(system);
            assert_eq!(cfg.rulers.len(), cfg.years.len());
            assert!((cfg.total_years - system.total_years()).abs() < 1e-12);
            for &idx in &cfg.slice_to_ruler {
                assert!((idx as usize) < cfg.rulers.len());
            }
        }
    }
}
