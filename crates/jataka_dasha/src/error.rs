//! Error types for dasha computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the chart-level dasha entry points.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DashaError {
    /// The chart holds no Moon object (required by nakshatra-based systems).
    MissingMoon,
    /// The chart holds no Ascendant angle (required by sign-based systems).
    MissingAscendant,
}

impl Display for DashaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMoon => write!(f, "Moon object not found in the chart"),
            Self::MissingAscendant => write!(f, "Ascendant not found in the chart"),
        }
    }
}

impl Error for DashaError {}
