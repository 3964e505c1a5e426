//! Error types for chart construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jataka_ephem::EphemError;
use jataka_time::TimeError;

/// Errors from chart configuration and construction.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Invalid configuration combination, rejected before any ephemeris call.
    InvalidConfig(&'static str),
    /// Invalid geographic position.
    InvalidLocation(&'static str),
    /// Error from the ephemeris provider.
    Ephemeris(EphemError),
    /// Error from date/time conversion.
    Time(TimeError),
    /// A legacy string identifier that names no known object, house or angle.
    UnknownRef(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid chart configuration: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::UnknownRef(id) => write!(f, "unknown chart reference: {id}"),
        }
    }
}

impl Error for ChartError {}

impl From<EphemError> for ChartError {
    fn from(e: EphemError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
