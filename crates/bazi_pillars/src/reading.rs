//! A complete reading: pillars, nayin and element profile.

use bazi_base::{Nayin, Pillar, nayin_element_by_name};
use serde::{Deserialize, Serialize};

use crate::analysis::{ElementProfile, analyze};
use crate::source::FourPillars;

/// Nayin names of the pillars.
///
/// A pillar outside the 60-pair cycle (the approximate month formula can
/// produce one) has an empty nayin.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NayinInfo {
    pub year_nayin: String,
    pub year_nayin_wuxing: String,
    pub month_nayin: String,
    pub day_nayin: String,
    pub hour_nayin: String,
}

fn nayin_name(pillar: Pillar) -> String {
    Nayin::of(pillar)
        .map(|n| n.name().to_string())
        .unwrap_or_default()
}

impl NayinInfo {
    pub fn from_pillars(pillars: &FourPillars) -> Self {
        let year_nayin = nayin_name(pillars.year);
        let year_nayin_wuxing = nayin_element_by_name(&year_nayin)
            .map(|e| e.name().to_string())
            .unwrap_or_default();
        Self {
            year_nayin,
            year_nayin_wuxing,
            month_nayin: nayin_name(pillars.month),
            day_nayin: nayin_name(pillars.day),
            hour_nayin: nayin_name(pillars.hour),
        }
    }
}

/// Everything derived from one birth date and hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub bazi: FourPillars,
    pub nayin: NayinInfo,
    pub wuxing: ElementProfile,
}

impl Reading {
    pub fn from_pillars(bazi: FourPillars) -> Self {
        Self {
            nayin: NayinInfo::from_pillars(&bazi),
            wuxing: analyze(&bazi),
            bazi,
        }
    }

    /// Pretty-printed JSON with element names in Chinese.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
