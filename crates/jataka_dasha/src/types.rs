//! Core types for dasha timelines.

use jataka_chart::{CelestialBody, Sign};
use jataka_time::CivilDateTime;

/// Year length used for all dasha period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// The supported dasha systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashaSystem {
    /// 120-year nakshatra cycle over 9 grahas.
    Vimshottari,
    /// 108-year nakshatra cycle over 8 grahas (no Ketu).
    Ashtottari,
    /// 78-year sign cycle seeded by the Ascendant.
    Chara,
    /// 150-year sign cycle seeded by the Ascendant.
    Sthira,
}

/// All supported systems in order.
pub const ALL_DASHA_SYSTEMS: [DashaSystem; 4] = [
    DashaSystem::Vimshottari,
    DashaSystem::Ashtottari,
    DashaSystem::Chara,
    DashaSystem::Sthira,
];

impl DashaSystem {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vimshottari => "Vimshottari",
            Self::Ashtottari => "Ashtottari",
            Self::Chara => "Chara",
            Self::Sthira => "Sthira",
        }
    }

    /// Full cycle length in years.
    pub const fn total_years(self) -> f64 {
        match self {
            Self::Vimshottari => 120.0,
            Self::Ashtottari => 108.0,
            Self::Chara => 78.0,
            Self::Sthira => 150.0,
        }
    }

    /// All supported systems.
    pub const fn all() -> &'static [DashaSystem] {
        &ALL_DASHA_SYSTEMS
    }
}

/// What rules a dasha period: a graha for nakshatra-based systems, a sign
/// for sign-based ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashaRuler {
    Graha(CelestialBody),
    Sign(Sign),
}

impl DashaRuler {
    /// Display name of the ruling entity.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Graha(g) => g.name(),
            Self::Sign(s) => s.name(),
        }
    }
}

/// A sub-period within one mahadasha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Antardasha {
    pub ruler: DashaRuler,
    /// UTC Julian Date, inclusive.
    pub start_jd: f64,
    /// UTC Julian Date, exclusive.
    pub end_jd: f64,
    /// Duration in years.
    pub years: f64,
}

impl Antardasha {
    /// Duration in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether the period is active at a Julian Date.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }

    /// Civil start date in the given UTC offset.
    pub fn start_date(&self, utc_offset_hours: f64) -> CivilDateTime {
        CivilDateTime::from_jd_utc(self.start_jd, utc_offset_hours)
    }

    /// Civil end date in the given UTC offset.
    pub fn end_date(&self, utc_offset_hours: f64) -> CivilDateTime {
        CivilDateTime::from_jd_utc(self.end_jd, utc_offset_hours)
    }
}

/// A major period, owning its sub-periods.
///
/// The antardashas partition the mahadasha exactly: contiguous boundaries,
/// durations summing to the parent's.
#[derive(Debug, Clone, PartialEq)]
pub struct Mahadasha {
    pub ruler: DashaRuler,
    /// UTC Julian Date, inclusive.
    pub start_jd: f64,
    /// UTC Julian Date, exclusive.
    pub end_jd: f64,
    /// Duration in years (the first mahadasha carries the birth balance).
    pub years: f64,
    pub antardashas: Vec<Antardasha>,
}

impl Mahadasha {
    /// Duration in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether the period is active at a Julian Date.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }

    /// The sub-period active at a Julian Date.
    pub fn antardasha_at(&self, jd: f64) -> Option<&Antardasha> {
        self.antardashas.iter().find(|a| a.contains(jd))
    }

    /// Civil start date in the given UTC offset.
    pub fn start_date(&self, utc_offset_hours: f64) -> CivilDateTime {
        CivilDateTime::from_jd_utc(self.start_jd, utc_offset_hours)
    }

    /// Civil end date in the given UTC offset.
    pub fn end_date(&self, utc_offset_hours: f64) -> CivilDateTime {
        CivilDateTime::from_jd_utc(self.end_jd, utc_offset_hours)
    }
}

/// The active periods at one query date, borrowed from a timeline.
#[derive(Debug, Clone, Copy)]
pub struct ActiveDasha<'a> {
    pub mahadasha: &'a Mahadasha,
    /// `None` only if the query date matched no sub-period boundary case.
    pub antardasha: Option<&'a Antardasha>,
}

/// An owned snapshot of the active periods, as returned by the
/// chart-level query.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentDasha {
    pub mahadasha: Mahadasha,
    pub antardasha: Option<Antardasha>,
}

impl CurrentDasha {
    /// Ruler of the active mahadasha.
    pub fn mahadasha_lord(&self) -> DashaRuler {
        self.mahadasha.ruler
    }

    /// Ruler of the active antardasha, if one matched.
    pub fn antardasha_lord(&self) -> Option<DashaRuler> {
        self.antardasha.as_ref().map(|a| a.ruler)
    }
}

/// The complete precomputed timeline for one (chart, system) pair.
///
/// Covers exactly one full cycle from birth: the balance-shortened first
/// mahadasha followed by the remaining rulers. Queries outside that
/// horizon return `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaTimeline {
    pub system: DashaSystem,
    /// Birth instant, UTC Julian Date.
    pub birth_jd: f64,
    /// UTC offset of the birth record, for civil date conversions.
    pub utc_offset_hours: f64,
    pub mahadashas: Vec<Mahadasha>,
}

impl DashaTimeline {
    /// The mahadasha active at a Julian Date.
    pub fn mahadasha_at(&self, jd: f64) -> Option<&Mahadasha> {
        self.mahadashas.iter().find(|m| m.contains(jd))
    }

    /// The antardasha active at a Julian Date.
    pub fn antardasha_at(&self, jd: f64) -> Option<&Antardasha> {
        self.mahadasha_at(jd).and_then(|m| m.antardasha_at(jd))
    }

    /// Both active periods at a Julian Date.
    pub fn active_at(&self, jd: f64) -> Option<ActiveDasha<'_>> {
        let mahadasha = self.mahadasha_at(jd)?;
        Some(ActiveDasha {
            mahadasha,
            antardasha: mahadasha.antardasha_at(jd),
        })
    }

    /// End of the computed horizon, UTC Julian Date.
    pub fn horizon_end_jd(&self) -> f64 {
        self.mahadashas.last().map(|m| m.end_jd).unwrap_or(self.birth_jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_totals() {
        assert!((DashaSystem::Vimshottari.total_years() - 120.0).abs() < 1e-12);
        assert!((DashaSystem::Ashtottari.total_years() - 108.0).abs() < 1e-12);
        assert!((DashaSystem::Chara.total_years() - 78.0).abs() < 1e-12);
        assert!((DashaSystem::Sthira.total_years() - 150.0).abs() < 1e-12);
    }

    #[test]
    fn ruler_names() {
        assert_eq!(DashaRuler::Graha(CelestialBody::Sun).name(), "Sun");
        assert_eq!(DashaRuler::Sign(Sign::Aries).name(), "Aries");
    }

    #[test]
    fn period_containment_is_half_open() {
        let period = Antardasha {
            ruler: DashaRuler::Graha(CelestialBody::Sun),
            start_jd: 100.0,
            end_jd: 200.0,
            years: 0.27,
        };
        assert!(period.contains(100.0));
        assert!(period.contains(199.999));
        assert!(!period.contains(200.0));
        assert!(!period.contains(99.999));
    }

    #[test]
    fn empty_timeline_has_collapsed_horizon() {
        let timeline = DashaTimeline {
            system: DashaSystem::Vimshottari,
            birth_jd: 2_451_545.0,
            utc_offset_hours: 0.0,
            mahadashas: Vec::new(),
        };
        assert!((timeline.horizon_end_jd() - 2_451_545.0).abs() < 1e-12);
        assert!(timeline.active_at(2_451_545.0).is_none());
    }
}
