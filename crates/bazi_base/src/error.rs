//! Error types for table lookups and pillar parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing stems, branches, or pillars.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaseError {
    /// Character is not one of the ten stems.
    UnknownStem(char),
    /// Character is not one of the twelve branches.
    UnknownBranch(char),
    /// Pillar text is not exactly one stem followed by one branch.
    MalformedPillar(String),
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStem(c) => write!(f, "unknown stem: {c}"),
            Self::UnknownBranch(c) => write!(f, "unknown branch: {c}"),
            Self::MalformedPillar(s) => write!(f, "malformed pillar: {s:?}"),
        }
    }
}

impl Error for BaseError {}
