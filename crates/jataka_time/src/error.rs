//! Error types for date/time conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time construction.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar field outside its valid range.
    InvalidDate(&'static str),
    /// UTC offset outside the supported range.
    InvalidOffset(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidOffset(msg) => write!(f, "invalid utc offset: {msg}"),
        }
    }
}

impl Error for TimeError {}
