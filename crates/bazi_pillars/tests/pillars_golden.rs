//! Integration tests for four-pillar computation and element analysis.
//!
//! Approximate arithmetic only; no external converter is installed.

use bazi_base::{Branch, Element, Stem};
use chrono::{Datelike, NaiveDate};
use bazi_pillars::{
    CalendarConverter, CivilDateTime, ConvertError, FourPillars, PillarCalculator, PillarError,
    Reading, analyze, render_text,
};

fn calc() -> PillarCalculator {
    PillarCalculator::approximate()
}

// ---------------------------------------------------------------------------
// Fallback arithmetic
// ---------------------------------------------------------------------------

#[test]
fn year_pillar_repeats_every_sixty_years() {
    let base = calc().compute(1984, 6, 15, 12).unwrap().year;
    assert_eq!(base.to_string(), "甲子");
    for k in -40..=40 {
        let year = 1984 + 60 * k;
        let p = calc().compute(year, 6, 15, 12).unwrap();
        assert_eq!(p.year, base, "year {year}");
    }
}

#[test]
fn day_reference_point_any_hour() {
    for hour in 0..24 {
        let p = calc().compute(2000, 1, 1, hour).unwrap();
        assert_eq!(p.day.stem, Stem::Geng);
        assert_eq!(p.day.branch, Branch::Chen);
        assert_eq!(p.day.cycle_index(), Some(16));
    }
}

#[test]
fn day_pillar_advances_one_per_day() {
    let mut prev = calc().compute(1999, 12, 1, 0).unwrap().day;
    let mut at = NaiveDate::from_ymd_opt(1999, 12, 2).unwrap();
    for _ in 0..120 {
        let p = calc().compute(at.year(), at.month(), at.day(), 6).unwrap().day;
        let expected = (prev.cycle_index().unwrap() + 1) % 60;
        assert_eq!(p.cycle_index(), Some(expected), "{at}");
        prev = p;
        at = at.succ_opt().unwrap();
    }
}

#[test]
fn day_pillar_sixty_days_apart_match() {
    let a = calc().compute(1970, 3, 1, 0).unwrap().day;
    let b = calc().compute(1970, 4, 30, 0).unwrap().day;
    assert_eq!(a, b);
}

#[test]
fn hour_23_and_hour_0_share_zi_block() {
    let midnight = calc().compute(2010, 7, 4, 0).unwrap();
    let late = calc().compute(2010, 7, 4, 23).unwrap();
    assert_eq!(midnight.hour.branch, Branch::Zi);
    assert_eq!(late.hour.branch, Branch::Zi);
    // Day does not roll over at 23:00, so the hour stem matches too.
    assert_eq!(late.day, midnight.day);
    assert_eq!(late.hour, midnight.hour);
}

#[test]
fn end_to_end_2000_01_01() {
    let p = calc().compute(2000, 1, 1, 0).unwrap();
    let stems = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];
    let branches = ['子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥'];
    let expected: String = [stems[6], branches[4]].iter().collect();
    assert_eq!(p.day.to_string(), expected);
    assert_eq!(p.to_string(), "庚辰 丁寅 庚辰 丙子");
}

#[test]
fn invalid_dates_are_errors() {
    assert_eq!(
        calc().compute(2000, 2, 30, 0),
        Err(PillarError::InvalidDate { year: 2000, month: 2, day: 30 })
    );
    assert_eq!(calc().compute(2000, 1, 1, 25), Err(PillarError::InvalidHour(25)));
}

// ---------------------------------------------------------------------------
// Element profile
// ---------------------------------------------------------------------------

fn sample_years() -> impl Iterator<Item = FourPillars> {
    (1900..2100).step_by(7).map(|y| {
        let month = (y % 12 + 1) as u32;
        let day = (y % 28 + 1) as u32;
        let hour = (y % 24) as u32;
        calc().compute(y, month, day, hour).unwrap()
    })
}

#[test]
fn profile_totals_ten() {
    for p in sample_years() {
        assert_eq!(analyze(&p).count.total(), 10.0, "{p}");
    }
}

#[test]
fn missing_weak_strong_are_disjoint() {
    for p in sample_years() {
        let profile = analyze(&p);
        for e in bazi_base::ALL_ELEMENTS {
            let hits = [&profile.missing, &profile.weak, &profile.strong]
                .iter()
                .filter(|list| list.contains(&e))
                .count();
            assert!(hits <= 1, "{e} in {hits} lists for {p}");

            let c = profile.count.get(e);
            assert_eq!(profile.missing.contains(&e), c == 0.0);
            assert_eq!(profile.weak.contains(&e), c > 0.0 && c < 1.5);
            assert_eq!(profile.strong.contains(&e), c >= 3.0);
        }
        assert_eq!(profile.day_master, p.day.stem.element());
    }
}

#[test]
fn reading_json_round_trip() {
    for p in sample_years().take(10) {
        let reading = Reading::from_pillars(p);
        let text = reading.to_json_pretty().unwrap();
        assert_eq!(Reading::from_json(&text).unwrap(), reading);
    }
}

#[test]
fn text_report_lists_pillars() {
    let reading = Reading::from_pillars(calc().compute(2000, 1, 1, 0).unwrap());
    let text = render_text(&reading);
    assert!(text.starts_with("\n八字: 庚辰 丁寅 庚辰 丙子\n"));
    assert!(text.contains("年柱纳音: 白蜡金 (金)\n"));
    assert!(text.contains("日主: 金\n"));
    assert_eq!(reading.wuxing.strong, vec![Element::Earth]);
}

// ---------------------------------------------------------------------------
// External converter
// ---------------------------------------------------------------------------

struct AlwaysFails;

impl CalendarConverter for AlwaysFails {
    fn convert(&self, _at: &CivilDateTime) -> Result<[String; 4], ConvertError> {
        Err(ConvertError::Failed("boom".into()))
    }
}

struct Exact;

impl CalendarConverter for Exact {
    fn convert(&self, _at: &CivilDateTime) -> Result<[String; 4], ConvertError> {
        // 2000-01-01 00:00 by a solar-term calendar.
        Ok(["己卯", "丙子", "戊午", "壬子"].map(String::from))
    }
}

#[test]
fn converter_answer_is_used() {
    let calc = PillarCalculator::with_converter(Exact);
    let p = calc.compute(2000, 1, 1, 0).unwrap();
    assert_eq!(p.to_string(), "己卯 丙子 戊午 壬子");
}

#[test]
fn failing_converter_matches_approximation() {
    let with = PillarCalculator::with_converter(AlwaysFails);
    for (y, m, d, h) in [(2000, 1, 1, 0), (1850, 7, 9, 23), (2099, 12, 31, 11)] {
        assert_eq!(
            with.compute(y, m, d, h).unwrap(),
            calc().compute(y, m, d, h).unwrap()
        );
    }
}
