//! Timeline construction: the shared mahadasha walk and proportional
//! antardasha subdivision.

use crate::balance::birth_balance;
use crate::systems::DashaSystemConfig;
use crate::types::{Antardasha, DAYS_PER_YEAR, DashaTimeline, Mahadasha};

/// Build the complete two-level timeline for one system.
///
/// The walk starts at the ruler owning the birth longitude's slice; the
/// first mahadasha gets the remaining balance, every later one its full
/// year length. One full cycle is emitted.
pub fn build_timeline(
    birth_jd: f64,
    utc_offset_hours: f64,
    reference_longitude_deg: f64,
    config: &DashaSystemConfig,
) -> DashaTimeline {
    let balance = birth_balance(reference_longitude_deg, config);
    let n = config.rulers.len();

    let mut mahadashas = Vec::with_capacity(n);
    let mut cursor = birth_jd;

    for step in 0..n {
        let idx = (balance.ruler_index as usize + step) % n;
        let years = if step == 0 {
            balance.balance_years
        } else {
            config.years[idx]
        };
        let end = cursor + years * DAYS_PER_YEAR;

        mahadashas.push(Mahadasha {
            ruler: config.rulers[idx],
            start_jd: cursor,
            end_jd: end,
            years,
            antardashas: subdivide(cursor, end, years, idx, config),
        });
        cursor = end;
    }

    DashaTimeline {
        system: config.system,
        birth_jd,
        utc_offset_hours,
        mahadashas,
    }
}

/// Proportional antardashas for one mahadasha.
///
/// Walks the ruler cycle from the parent's own ruler; each sub-ruler gets
/// the fraction of the parent period proportional to its share of the
/// whole cycle. The last boundary is snapped to the parent's end to
/// absorb floating-point drift.
fn subdivide(
    parent_start_jd: f64,
    parent_end_jd: f64,
    parent_years: f64,
    parent_ruler_idx: usize,
    config: &DashaSystemConfig,
) -> Vec<Antardasha> {
    let n = config.rulers.len();
    let mut antardashas = Vec::with_capacity(n);
    let mut cursor = parent_start_jd;

    for step in 0..n {
        let idx = (parent_ruler_idx + step) % n;
        let years = config.years[idx] / config.total_years * parent_years;
        let end = cursor + years * DAYS_PER_YEAR;

        antardashas.push(Antardasha {
            ruler: config.rulers[idx],
            start_jd: cursor,
            end_jd: end,
            years,
        });
        cursor = end;
    }

    if let Some(last) = antardashas.last_mut() {
        last.end_jd = parent_end_jd;
    }
    antardashas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DashaRuler, DashaSystem};
    use jataka_chart::{CelestialBody, Sign};

    const BIRTH_JD: f64 = 2_451_545.0;

    #[test]
    fn vimshottari_from_ashwini_start() {
        let cfg = DashaSystemConfig::for_system(DashaSystem::Vimshottari);
        let timeline = build_timeline(BIRTH_JD, 0.0, 0.0, &cfg);

        assert_eq!(timeline.mahadashas.len(), 9);
        let first = &timeline.mahadashas[0];
        assert_eq!(first.ruler, DashaRuler::Graha(CelestialBody::Ketu));
        assert!((first.years - 7.0).abs() < 1e-9);

        let total_years: f64 = timeline.mahadashas.iter().map(|m| m.years).sum();
        assert!((total_years - 120.0).abs() < 1e-9);
    }

    #[test]
    fn first_mahadasha_carries_the_balance() {
        let cfg = DashaSystemConfig::for_system(DashaSystem::Vimshottari);
        // Mid-Ashwini: Ketu retains 3.5 of 7 years
        let mid_ashwini = 360.0 / 27.0 / 2.0;
        let timeline = build_timeline(BIRTH_JD, 0.0, mid_ashwini, &cfg);
        assert!((timeline.mahadashas[0].years - 3.5).abs() < 1e-9);
        // Everyone else keeps their full period
        assert!((timeline.mahadashas[1].years - 20.0).abs() < 1e-9);
    }

    #[test]
    fn mahadashas_are_contiguous() {
        for &system in DashaSystem::all() {
            let cfg = DashaSystemConfig::for_system(system);
            let timeline = build_timeline(BIRTH_JD, 0.0, 123.456, &cfg);
            for pair in timeline.mahadashas.windows(2) {
                assert!(
                    (pair[0].end_jd - pair[1].start_jd).abs() < 1e-9,
                    "{system:?}: gap between mahadashas"
                );
            }
        }
    }

    #[test]
    fn antardashas_partition_each_mahadasha() {
        for &system in DashaSystem::all() {
            let cfg = DashaSystemConfig::for_system(system);
            let timeline = build_timeline(BIRTH_JD, 0.0, 200.0, &cfg);
            for m in &timeline.mahadashas {
                assert_eq!(m.antardashas.len(), cfg.rulers.len());
                assert!((m.antardashas[0].start_jd - m.start_jd).abs() < 1e-9);
                assert!(
                    (m.antardashas.last().unwrap().end_jd - m.end_jd).abs() < 1e-9,
                    "{system:?}: last antardasha must close the mahadasha"
                );
                for pair in m.antardashas.windows(2) {
                    assert!((pair[0].end_jd - pair[1].start_jd).abs() < 1e-9);
                }
                let dur: f64 = m.antardashas.iter().map(|a| a.duration_days()).sum();
                assert!((dur - m.duration_days()).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn antardasha_walk_starts_from_parent_ruler() {
        let cfg = DashaSystemConfig::for_system(DashaSystem::Ashtottari);
        let timeline = build_timeline(BIRTH_JD, 0.0, 0.0, &cfg);
        for m in &timeline.mahadashas {
            assert_eq!(m.antardashas[0].ruler, m.ruler);
        }
    }

    #[test]
    fn antardasha_years_are_proportional() {
        let cfg = DashaSystemConfig::for_system(DashaSystem::Ashtottari);
        let timeline = build_timeline(BIRTH_JD, 0.0, 100.0, &cfg);
        let m = &timeline.mahadashas[1];
        for a in &m.antardashas {
            let ruler_idx = cfg
                .rulers
                .iter()
                .position(|&r| r == a.ruler)
                .expect("antardasha ruler must be in the cycle");
            let expected = cfg.years[ruler_idx] / cfg.total_years * m.years;
            assert!((a.years - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn chara_walk_is_zodiacal_from_the_ascendant_sign() {
        let cfg = DashaSystemConfig::for_system(DashaSystem::Chara);
        // Ascendant in Gemini
        let timeline = build_timeline(BIRTH_JD, 0.0, 75.0, &cfg);
        assert_eq!(timeline.mahadashas[0].ruler, DashaRuler::Sign(Sign::Gemini));
        assert_eq!(timeline.mahadashas[1].ruler, DashaRuler::Sign(Sign::Cancer));
        assert_eq!(
            timeline.mahadashas[11].ruler,
            DashaRuler::Sign(Sign::Taurus)
        );
    }

    #[test]
    fn active_queries_respect_boundaries() {
        let cfg = DashaSystemConfig::for_system(DashaSystem::Vimshottari);
        let timeline = build_timeline(BIRTH_JD, 0.0, 0.0, &cfg);

        // Before birth: nothing
        assert!(timeline.active_at(BIRTH_JD - 1.0).is_none());
        // At birth: the first period
        let at_birth = timeline.active_at(BIRTH_JD).unwrap();
        assert_eq!(at_birth.mahadasha.ruler, timeline.mahadashas[0].ruler);
        // Beyond the horizon: nothing
        assert!(timeline.active_at(timeline.horizon_end_jd()).is_none());
    }

    #[test]
    fn active_antardasha_belongs_to_active_mahadasha() {
        let cfg = DashaSystemConfig::for_system(DashaSystem::Sthira);
        let timeline = build_timeline(BIRTH_JD, 0.0, 222.0, &cfg);
        let jd = BIRTH_JD + 10_000.0;
        let active = timeline.active_at(jd).unwrap();
        let antardasha = active.antardasha.expect("inside the horizon");
        assert!(active.mahadasha.contains(jd));
        assert!(antardasha.contains(jd));
        assert!(
            active
                .mahadasha
                .antardashas
                .iter()
                .any(|a| a.start_jd == antardasha.start_jd && a.ruler == antardasha.ruler)
        );
    }
}
