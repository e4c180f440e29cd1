//! Closed-form pillar approximation.
//!
//! Used whenever no calendar converter is configured, or when the converter
//! fails for a particular date. The arithmetic is NOT calendrically exact:
//!
//! - The year changes on 1 January, not at Lichun.
//! - The month pillar ignores solar-term boundaries entirely.
//! - The day pillar does not roll over at 23:00.
//!
//! Hours 23 and 0 both fall in the Zi (子) block. Since the day does not
//! advance at 23:00, both hours also get the same hour stem.

use bazi_base::{Branch, Pillar, Stem};
use chrono::{Datelike, NaiveDate};

use crate::civil::CivilDateTime;
use crate::error::PillarError;
use crate::source::{FourPillars, PillarSource};

/// CE year whose year pillar is 甲子 (cycle index 0).
pub const YEAR_EPOCH: i32 = 1984;

/// Days from CE of 2000-01-01, the day-pillar reference date.
pub const DAY_EPOCH_DAYS_FROM_CE: i32 = 730_120;

/// Cycle index of the 2000-01-01 day pillar (庚辰).
pub const DAY_EPOCH_CYCLE_INDEX: i64 = 16;

/// Year pillar: cycle index (year − 1984) mod 60.
pub fn year_pillar(year: i32) -> Pillar {
    Pillar::from_cycle_index(year as i64 - YEAR_EPOCH as i64)
}

/// Month pillar from the civil month (1-12).
///
/// Stem: ((year − 4) mod 10) × 2 + month, mod 10. Branch: (month + 1) mod 12.
pub fn month_pillar(year: i32, month: u32) -> Pillar {
    let year_stem = (year as i64 - 4).rem_euclid(10);
    Pillar::new(
        Stem::from_cycle(year_stem * 2 + month as i64),
        Branch::from_cycle(month as i64 + 1),
    )
}

/// Signed whole days from 2000-01-01 to `date`.
pub fn days_since_day_epoch(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 - DAY_EPOCH_DAYS_FROM_CE as i64
}

/// Day pillar: cycle index (16 + days since 2000-01-01) mod 60.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    Pillar::from_cycle_index(DAY_EPOCH_CYCLE_INDEX + days_since_day_epoch(date))
}

/// Hour pillar from the day stem and the hour of day (0-23).
///
/// Branch: ((hour + 1) div 2) mod 12, so 23:00-00:59 is Zi.
/// Stem: (day stem × 2 + branch) mod 10.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let branch = ((hour as i64 + 1) / 2).rem_euclid(12);
    Pillar::new(
        Stem::from_cycle(day_stem.index() as i64 * 2 + branch),
        Branch::from_cycle(branch),
    )
}

/// Four pillars by closed-form arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximatePillarSource;

impl ApproximatePillarSource {
    pub fn new() -> Self {
        Self
    }

    /// Infallible variant of [`PillarSource::four_pillars`].
    pub fn pillars(&self, at: &CivilDateTime) -> FourPillars {
        let day = day_pillar(at.date());
        FourPillars {
            year: year_pillar(at.year()),
            month: month_pillar(at.year(), at.month()),
            day,
            hour: hour_pillar(day.stem, at.hour()),
        }
    }
}

impl PillarSource for ApproximatePillarSource {
    fn name(&self) -> &'static str {
        "approximate"
    }

    fn four_pillars(&self, at: &CivilDateTime) -> Result<FourPillars, PillarError> {
        Ok(self.pillars(at))
    }
}
