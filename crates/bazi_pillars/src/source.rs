//! The pillar-source seam: anything that turns a civil date-time into four
//! pillars.

use bazi_base::Pillar;
use serde::{Deserialize, Serialize};

use crate::civil::CivilDateTime;
use crate::error::PillarError;

/// Year, month, day and hour pillars of one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// The pillars in year, month, day, hour order.
    pub fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// A strategy for deriving four pillars.
pub trait PillarSource: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Four pillars for a civil date-time.
    fn four_pillars(&self, at: &CivilDateTime) -> Result<FourPillars, PillarError>;
}
