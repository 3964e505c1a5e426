//! Chart construction over an ephemeris provider.
//!
//! A [`Chart`] binds a birth date/time, a geographic position, a house
//! system and an optional ayanamsa into one consistent snapshot of
//! positioned objects, house cusps and chart angles. All three collections
//! are populated from a single provider call pair made at construction
//! under the same resolved configuration; afterwards the chart is a plain
//! value that can be deep-copied, rigidly rotated, or re-expressed on a
//! different sidereal zodiac.

pub mod cache;
pub mod chart;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod orbs;
pub mod position;
pub mod provider;

pub use cache::CachedEphemeris;
pub use chart::Chart;
pub use config::{ChartConfig, recommended_house_systems};
pub use error::ChartError;
pub use geo::GeoPosition;
pub use ids::{
    CelestialBody, ChartAngle, ChartRef, Sign, TRADITIONAL_BODIES, VEDIC_BODIES,
};
pub use orbs::OrbTable;
pub use position::PositionedObject;
pub use provider::{AnalyticEphemeris, ChartFrame, EphemerisProvider};

pub use jataka_ephem::{Ayanamsa, FixedStar, HouseSystem};
