//! Dasha (ruling-period) computation.
//!
//! All supported systems (Vimshottari, Ashtottari, Chara, Sthira) share
//! one algorithm: find the ruler whose slice of the zodiac contains the
//! birth longitude, shorten that ruler's first period by the fraction
//! already traversed, walk the fixed ruler cycle to lay out the
//! mahadashas, and subdivide each mahadasha proportionally into
//! antardashas. The systems differ only in their [`DashaSystemConfig`]:
//! the ruler cycle, the year table, the slice width (nakshatra or sign)
//! and whether the Moon or the Ascendant seeds the walk.

pub mod balance;
pub mod chart;
pub mod engine;
pub mod error;
pub mod nakshatra;
pub mod systems;
pub mod types;

pub use balance::{BirthBalance, birth_balance};
pub use chart::{
    antardasha, antardasha_lord, current_dasha, dasha_balance, dasha_lord, dasha_timeline,
    mahadasha,
};
pub use engine::build_timeline;
pub use error::DashaError;
pub use nakshatra::{NAKSHATRA_NAMES, NAKSHATRA_SPAN, NakshatraInfo, nakshatra_info};
pub use systems::{BirthReference, DashaSystemConfig};
pub use types::{
    ActiveDasha, Antardasha, CurrentDasha, DAYS_PER_YEAR, DashaRuler, DashaSystem, DashaTimeline,
    Mahadasha,
};
