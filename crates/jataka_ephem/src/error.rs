//! Error types for ephemeris computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from analytic ephemeris calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for EphemError {}
