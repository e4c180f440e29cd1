//! Error types for pillar computation and calendar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_base::BaseError;

/// Errors from the external calendar-conversion capability.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConvertError {
    /// The converter could not be reached (e.g. program not installed).
    Unavailable(String),
    /// The converter ran but produced no usable answer.
    Failed(String),
    /// Other I/O error while talking to the converter.
    Io(String),
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "calendar converter unavailable: {msg}"),
            Self::Failed(msg) => write!(f, "calendar conversion failed: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for ConvertError {}

impl From<std::io::Error> for ConvertError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::Unavailable(e.to_string()),
            _ => Self::Io(e.to_string()),
        }
    }
}

/// Errors from computing four pillars.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PillarError {
    /// Year/month/day do not form a proleptic Gregorian date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23.
    InvalidHour(u32),
    /// Error from the calendar-conversion capability.
    Conversion(ConvertError),
    /// Converter returned text that is not a pillar.
    Base(BaseError),
}

impl Display for PillarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidHour(h) => write!(f, "invalid hour: {h} (expected 0-23)"),
            Self::Conversion(e) => write!(f, "{e}"),
            Self::Base(e) => write!(f, "pillar error: {e}"),
        }
    }
}

impl Error for PillarError {}

impl From<ConvertError> for PillarError {
    fn from(e: ConvertError) -> Self {
        Self::Conversion(e)
    }
}

impl From<BaseError> for PillarError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}
