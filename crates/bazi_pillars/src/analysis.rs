//! Five-element (wuxing) profile of four pillars.
//!
//! Each pillar contributes 1 for its stem's element, 1 for its branch's
//! element and 0.5 for the element of the branch's primary hidden stem, so
//! every profile totals 10.

use bazi_base::{ALL_ELEMENTS, Element};
use serde::{Deserialize, Serialize};

use crate::source::FourPillars;

/// Weight of a branch's primary hidden stem.
pub const HIDDEN_STEM_WEIGHT: f64 = 0.5;

/// Counts strictly below this (and above zero) are weak.
pub const WEAK_THRESHOLD: f64 = 1.5;

/// Counts at or above this are strong.
pub const STRONG_THRESHOLD: f64 = 3.0;

/// Per-element tally, in canonical element order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementCounts {
    #[serde(rename = "木")]
    pub wood: f64,
    #[serde(rename = "火")]
    pub fire: f64,
    #[serde(rename = "土")]
    pub earth: f64,
    #[serde(rename = "金")]
    pub metal: f64,
    #[serde(rename = "水")]
    pub water: f64,
}

impl ElementCounts {
    pub fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn slot(&mut self, element: Element) -> &mut f64 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    pub fn add(&mut self, element: Element, weight: f64) {
        *self.slot(element) += weight;
    }

    /// (element, count) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        ALL_ELEMENTS.into_iter().map(|e| (e, self.get(e)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, c)| c).sum()
    }

    fn matching(&self, pred: impl Fn(f64) -> bool) -> Vec<Element> {
        self.iter()
            .filter(|&(_, c)| pred(c))
            .map(|(e, _)| e)
            .collect()
    }
}

/// Element tally plus derived classifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementProfile {
    pub count: ElementCounts,
    /// Elements with a count of exactly zero.
    pub missing: Vec<Element>,
    /// Elements with 0 < count < 1.5.
    pub weak: Vec<Element>,
    /// Elements with count ≥ 3.
    pub strong: Vec<Element>,
    /// Element of the day pillar's stem.
    pub day_master: Element,
}

/// Tally the elements of four pillars.
pub fn analyze(pillars: &FourPillars) -> ElementProfile {
    let mut count = ElementCounts::default();
    for p in pillars.as_array() {
        count.add(p.stem.element(), 1.0);
        count.add(p.branch.element(), 1.0);
        count.add(p.branch.primary_hidden_stem().element(), HIDDEN_STEM_WEIGHT);
    }

    ElementProfile {
        missing: count.matching(|c| c == 0.0),
        weak: count.matching(|c| c > 0.0 && c < WEAK_THRESHOLD),
        strong: count.matching(|c| c >= STRONG_THRESHOLD),
        day_master: pillars.day.stem.element(),
        count,
    }
}
