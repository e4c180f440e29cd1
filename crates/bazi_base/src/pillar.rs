//! Pillars: (stem, branch) pairs and the 60-pair sexagenary cycle.
//!
//! Pairing stems (mod 10) and branches (mod 12) by a shared index yields 60
//! valid combinations. Index 0 is 甲子, index 59 is 癸亥. A stem and branch
//! of different parity never meet in the cycle.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::BaseError;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// A stem-branch pair.
///
/// Serializes as its two-character text, e.g. `"甲子"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at a position in the sexagenary cycle; any integer is reduced
    /// modulo 60.
    pub fn from_cycle_index(n: i64) -> Self {
        let i = n.rem_euclid(CYCLE_LEN as i64);
        Self {
            stem: Stem::from_cycle(i),
            branch: Branch::from_cycle(i),
        }
    }

    /// 0-based position in the sexagenary cycle (0..59).
    ///
    /// Returns `None` when stem and branch differ in parity, i.e. the pair
    /// never occurs in the cycle.
    pub fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        if s % 2 != b % 2 {
            return None;
        }
        // i ≡ s (mod 10), i ≡ b (mod 12): i = s + 10k for the k in 0..6 that matches.
        (0..6u8)
            .map(|k| s + 10 * k)
            .find(|i| i % 12 == b)
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Pillar {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(BaseError::MalformedPillar(s.to_string()));
        };
        let stem = Stem::from_char(sc).ok_or(BaseError::UnknownStem(sc))?;
        let branch = Branch::from_char(bc).ok_or(BaseError::UnknownBranch(bc))?;
        Ok(Self { stem, branch })
    }
}

impl TryFrom<String> for Pillar {
    type Error = BaseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pillar> for String {
    fn from(p: Pillar) -> Self {
        p.to_string()
    }
}
