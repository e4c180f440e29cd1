//! Civil (proleptic Gregorian) date with a whole hour.

use chrono::{Datelike, NaiveDate};

use crate::error::PillarError;

/// A validated civil date and hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDateTime {
    date: NaiveDate,
    hour: u32,
}

impl CivilDateTime {
    /// Build from calendar fields, rejecting impossible dates and hours
    /// outside 0..=23.
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Result<Self, PillarError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(PillarError::InvalidDate { year, month, day })?;
        if hour > 23 {
            return Err(PillarError::InvalidHour(hour));
        }
        Ok(Self { date, hour })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{:02}:00", self.date.format("%Y-%m-%d"), self.hour)
    }
}
