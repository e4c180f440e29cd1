//! Human-readable text report.

use std::fmt::Write;

use bazi_base::Element;

use crate::reading::Reading;

fn joined(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|e| e.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a reading as the fixed multi-line text report.
pub fn render_text(reading: &Reading) -> String {
    let mut out = String::new();
    write_text(&mut out, reading).unwrap_or_default();
    out
}

fn write_text(out: &mut String, reading: &Reading) -> std::fmt::Result {
    let wuxing = &reading.wuxing;
    writeln!(out)?;
    writeln!(out, "八字: {}", reading.bazi)?;
    writeln!(
        out,
        "年柱纳音: {} ({})",
        reading.nayin.year_nayin, reading.nayin.year_nayin_wuxing
    )?;
    writeln!(out, "日主: {}", wuxing.day_master)?;
    writeln!(out)?;
    writeln!(out, "五行统计:")?;
    for (element, count) in wuxing.count.iter() {
        writeln!(out, "  {element}: {count}")?;
    }

    if !wuxing.missing.is_empty() {
        writeln!(out)?;
        writeln!(out, "缺失五行: {}", joined(&wuxing.missing))?;
    }
    if !wuxing.weak.is_empty() {
        writeln!(out, "偏弱五行: {}", joined(&wuxing.weak))?;
    }
    if !wuxing.strong.is_empty() {
        writeln!(out, "偏强五行: {}", joined(&wuxing.strong))?;
    }
    Ok(())
}
