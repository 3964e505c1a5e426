//! Civil date/time handling and Julian Day conversion.
//!
//! `CivilDateTime` is the canonical birth-event representation used
//! throughout the workspace: a calendar date plus wall-clock time plus a
//! fixed UTC offset. All ephemeris math runs on the Julian Day number, and
//! the conversion both ways is exact (no truncation of minutes or seconds).

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::CivilDateTime;
pub use error::TimeError;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar};
