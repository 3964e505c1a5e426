//! Bounded, injectable position cache.
//!
//! `CachedEphemeris` wraps any provider and memoizes per-body and
//! per-star positions keyed by (id, julian day bits, mode). The cache is
//! bounded (FIFO eviction), can be cleared explicitly, and a capacity of
//! zero disables it entirely. It only ever short-circuits the inner
//! provider, so results are identical with caching on or off.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use jataka_ephem::{Ayanamsa, FixedStar, HouseSystem};

use crate::error::ChartError;
use crate::geo::GeoPosition;
use crate::ids::CelestialBody;
use crate::position::PositionedObject;
use crate::provider::{ChartFrame, EphemerisProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum CacheKey {
    Body(CelestialBody, u64, Option<Ayanamsa>),
    Star(FixedStar, u64),
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<CacheKey, PositionedObject>,
    order: VecDeque<CacheKey>,
}

/// Caching wrapper around an [`EphemerisProvider`].
#[derive(Debug)]
pub struct CachedEphemeris<P> {
    inner: P,
    capacity: usize,
    state: Mutex<CacheState>,
}

impl<P> CachedEphemeris<P> {
    /// Wrap a provider with a cache holding up to `capacity` positions.
    pub fn new(inner: P, capacity: usize) -> Self {
        Self {
            inner,
            capacity,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Maximum number of cached positions.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of currently cached positions.
    pub fn len(&self) -> usize {
        self.state.lock().map(|s| s.entries.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached position.
    pub fn clear(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.entries.clear();
            state.order.clear();
        }
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    fn lookup(&self, key: CacheKey) -> Option<PositionedObject> {
        if self.capacity == 0 {
            return None;
        }
        self.state
            .lock()
            .ok()
            .and_then(|state| state.entries.get(&key).copied())
    }

    fn store(&self, key: CacheKey, value: PositionedObject) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut state) = self.state.lock() {
            if state.entries.contains_key(&key) {
                return;
            }
            while state.entries.len() >= self.capacity {
                match state.order.pop_front() {
                    Some(oldest) => {
                        state.entries.remove(&oldest);
                    }
                    None => break,
                }
            }
            state.entries.insert(key, value);
            state.order.push_back(key);
        }
    }
}

impl<P: EphemerisProvider> EphemerisProvider for CachedEphemeris<P> {
    fn objects(
        &self,
        ids: &[CelestialBody],
        jd: f64,
        pos: &GeoPosition,
        ayanamsa: Option<Ayanamsa>,
    ) -> Result<Vec<(CelestialBody, PositionedObject)>, ChartError> {
        let jd_bits = jd.to_bits();
        let mut result = Vec::with_capacity(ids.len());
        let mut missing = Vec::new();
        for &body in ids {
            match self.lookup(CacheKey::Body(body, jd_bits, ayanamsa)) {
                Some(obj) => result.push((body, obj)),
                None => missing.push(body),
            }
        }
        if !missing.is_empty() {
            for (body, obj) in self.inner.objects(&missing, jd, pos, ayanamsa)? {
                self.store(CacheKey::Body(body, jd_bits, ayanamsa), obj);
                result.push((body, obj));
            }
        }
        // Preserve the caller's requested order
        result.sort_by_key(|(body, _)| ids.iter().position(|&b| b == *body));
        Ok(result)
    }

    fn houses(
        &self,
        jd: f64,
        pos: &GeoPosition,
        system: HouseSystem,
        ayanamsa: Option<Ayanamsa>,
    ) -> Result<ChartFrame, ChartError> {
        // House geometry is cheap relative to body series; pass through.
        self.inner.houses(jd, pos, system, ayanamsa)
    }

    fn ayanamsa_offset(&self, jd: f64, ayanamsa: Ayanamsa) -> f64 {
        self.inner.ayanamsa_offset(jd, ayanamsa)
    }

    fn fixed_star(&self, star: FixedStar, jd: f64) -> Result<PositionedObject, ChartError> {
        let key = CacheKey::Star(star, jd.to_bits());
        if let Some(obj) = self.lookup(key) {
            return Ok(obj);
        }
        let obj = self.inner.fixed_star(star, jd)?;
        self.store(key, obj);
        Ok(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::AnalyticEphemeris;
    use jataka_time::J2000_JD;

    fn london() -> GeoPosition {
        GeoPosition::new(51.5, -0.17).unwrap()
    }

    #[test]
    fn cached_results_match_uncached() {
        let plain = AnalyticEphemeris::new();
        let cached = CachedEphemeris::new(AnalyticEphemeris::new(), 64);
        let ids = [CelestialBody::Sun, CelestialBody::Moon, CelestialBody::Mars];

        let a = plain.objects(&ids, J2000_JD, &london(), None).unwrap();
        let b = cached.objects(&ids, J2000_JD, &london(), None).unwrap();
        // Second call is served from the cache
        let c = cached.objects(&ids, J2000_JD, &london(), None).unwrap();

        for i in 0..ids.len() {
            assert_eq!(a[i].0, b[i].0);
            assert!((a[i].1.lon - b[i].1.lon).abs() < 1e-12);
            assert!((b[i].1.lon - c[i].1.lon).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_capacity_disables_caching() {
        let cached = CachedEphemeris::new(AnalyticEphemeris::new(), 0);
        cached
            .objects(&[CelestialBody::Sun], J2000_JD, &london(), None)
            .unwrap();
        assert_eq!(cached.len(), 0);
    }

    #[test]
    fn capacity_is_enforced() {
        let cached = CachedEphemeris::new(AnalyticEphemeris::new(), 2);
        for i in 0..5 {
            cached
                .objects(&[CelestialBody::Sun], J2000_JD + i as f64, &london(), None)
                .unwrap();
        }
        assert!(cached.len() <= 2);
    }

    #[test]
    fn clear_empties_the_cache() {
        let cached = CachedEphemeris::new(AnalyticEphemeris::new(), 16);
        cached
            .objects(&[CelestialBody::Sun], J2000_JD, &london(), None)
            .unwrap();
        assert!(!cached.is_empty());
        cached.clear();
        assert!(cached.is_empty());
    }

    #[test]
    fn modes_are_cached_separately() {
        let cached = CachedEphemeris::new(AnalyticEphemeris::new(), 16);
        let tropical = cached
            .objects(&[CelestialBody::Sun], J2000_JD, &london(), None)
            .unwrap()[0]
            .1;
        let sidereal = cached
            .objects(&[CelestialBody::Sun], J2000_JD, &london(), Some(Ayanamsa::Lahiri))
            .unwrap()[0]
            .1;
        assert!((tropical.lon - sidereal.lon).abs() > 20.0);
    }

    #[test]
    fn requested_order_is_preserved() {
        let cached = CachedEphemeris::new(AnalyticEphemeris::new(), 16);
        // Warm the cache with Moon only, then ask for Sun first
        cached
            .objects(&[CelestialBody::Moon], J2000_JD, &london(), None)
            .unwrap();
        let result = cached
            .objects(&[CelestialBody::Sun, CelestialBody::Moon], J2000_JD, &london(), None)
            .unwrap();
        assert_eq!(result[0].0, CelestialBody::Sun);
        assert_eq!(result[1].0, CelestialBody::Moon);
    }
}
