//! Chart-level dasha entry points.
//!
//! These mirror the consumer-facing surface: build a timeline for a
//! chart, find the active periods at a date (defaulting to the chart's
//! own birth date), and extract ruling lords defensively.

use jataka_chart::{CelestialBody, Chart, ChartAngle};
use jataka_time::CivilDateTime;

use crate::engine::build_timeline;
use crate::error::DashaError;
use crate::systems::{BirthReference, DashaSystemConfig};
use crate::types::{Antardasha, CurrentDasha, DashaRuler, DashaSystem, DashaTimeline, Mahadasha};

/// Seed longitude for a system: the Moon for nakshatra systems, the
/// Ascendant for sign systems.
fn reference_longitude(chart: &Chart, config: &DashaSystemConfig) -> Result<f64, DashaError> {
    match config.birth_reference {
        BirthReference::MoonLongitude => chart
            .object(CelestialBody::Moon)
            .map(|moon| moon.lon)
            .ok_or(DashaError::MissingMoon),
        BirthReference::AscendantLongitude => chart
            .angle(ChartAngle::Asc)
            .map(|asc| asc.lon)
            .ok_or(DashaError::MissingAscendant),
    }
}

/// The full precomputed timeline for a chart under one dasha system.
pub fn dasha_timeline(chart: &Chart, system: DashaSystem) -> Result<DashaTimeline, DashaError> {
    let config = DashaSystemConfig::for_system(system);
    let lon = reference_longitude(chart, &config)?;
    Ok(build_timeline(
        chart.julian_day(),
        chart.date().utc_offset_hours,
        lon,
        &config,
    ))
}

/// Remaining years of the first mahadasha at birth.
pub fn dasha_balance(chart: &Chart, system: DashaSystem) -> Result<f64, DashaError> {
    let config = DashaSystemConfig::for_system(system);
    let lon = reference_longitude(chart, &config)?;
    Ok(crate::balance::birth_balance(lon, &config).balance_years)
}

/// The active mahadasha/antardasha pair at a date.
///
/// `date` defaults to the chart's own birth date. Returns `Ok(None)` when
/// the date falls outside the computed timeline horizon.
pub fn current_dasha(
    chart: &Chart,
    system: DashaSystem,
    date: Option<&CivilDateTime>,
) -> Result<Option<CurrentDasha>, DashaError> {
    let timeline = dasha_timeline(chart, system)?;
    let target_jd = date.map(|d| d.to_jd_utc()).unwrap_or(chart.julian_day());
    Ok(timeline.active_at(target_jd).map(|active| CurrentDasha {
        mahadasha: active.mahadasha.clone(),
        antardasha: active.antardasha.copied(),
    }))
}

/// The active mahadasha at a date.
pub fn mahadasha(
    chart: &Chart,
    system: DashaSystem,
    date: Option<&CivilDateTime>,
) -> Result<Option<Mahadasha>, DashaError> {
    Ok(current_dasha(chart, system, date)?.map(|c| c.mahadasha))
}

/// The active antardasha at a date.
pub fn antardasha(
    chart: &Chart,
    system: DashaSystem,
    date: Option<&CivilDateTime>,
) -> Result<Option<Antardasha>, DashaError> {
    Ok(current_dasha(chart, system, date)?.and_then(|c| c.antardasha))
}

/// Ruling lord of a mahadasha, absent-safe.
pub fn dasha_lord(period: Option<&Mahadasha>) -> Option<DashaRuler> {
    period.map(|m| m.ruler)
}

/// Ruling lord of an antardasha, absent-safe.
pub fn antardasha_lord(period: Option<&Antardasha>) -> Option<DashaRuler> {
    period.map(|a| a.ruler)
}
