//! Nayin (纳音): the 30 sound-element names of the sexagenary cycle.
//!
//! Consecutive cycle positions 2k and 2k+1 share the k-th nayin, so 甲子 and
//! 乙丑 are both 海中金 (metal). Each nayin carries its own element, which is
//! independent of the stem and branch elements.
//!
//! Lookups by text never fail: an unknown key yields `None`.

use crate::element::Element;
use crate::pillar::Pillar;

/// The 30 nayin, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Nayin {
    HaiZhongJin,
    LuZhongHuo,
    DaLinMu,
    LuPangTu,
    JianFengJin,
    ShanTouHuo,
    JianXiaShui,
    ChengTouTu,
    BaiLaJin,
    YangLiuMu,
    QuanZhongShui,
    WuShangTu,
    PiLiHuo,
    SongBaiMu,
    ChangLiuShui,
    ShaZhongJin,
    ShanXiaHuo,
    PingDiMu,
    BiShangTu,
    JinBoJin,
    FuDengHuo,
    TianHeShui,
    DaYiTu,
    ChaiChuanJin,
    SangZheMu,
    DaXiShui,
    ShaZhongTu,
    TianShangHuo,
    ShiLiuMu,
    DaHaiShui,
}

/// All 30 nayin in order (index 0 = 海中金).
pub const ALL_NAYINS: [Nayin; 30] = [
    Nayin::HaiZhongJin,
    Nayin::LuZhongHuo,
    Nayin::DaLinMu,
    Nayin::LuPangTu,
    Nayin::JianFengJin,
    Nayin::ShanTouHuo,
    Nayin::JianXiaShui,
    Nayin::ChengTouTu,
    Nayin::BaiLaJin,
    Nayin::YangLiuMu,
    Nayin::QuanZhongShui,
    Nayin::WuShangTu,
    Nayin::PiLiHuo,
    Nayin::SongBaiMu,
    Nayin::ChangLiuShui,
    Nayin::ShaZhongJin,
    Nayin::ShanXiaHuo,
    Nayin::PingDiMu,
    Nayin::BiShangTu,
    Nayin::JinBoJin,
    Nayin::FuDengHuo,
    Nayin::TianHeShui,
    Nayin::DaYiTu,
    Nayin::ChaiChuanJin,
    Nayin::SangZheMu,
    Nayin::DaXiShui,
    Nayin::ShaZhongTu,
    Nayin::TianShangHuo,
    Nayin::ShiLiuMu,
    Nayin::DaHaiShui,
];

const NAYIN_NAMES: [&str; 30] = [
    "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火", "涧下水", "城头土", "白蜡金",
    "杨柳木", "泉中水", "屋上土", "霹雳火", "松柏木", "长流水", "沙中金", "山下火", "平地木",
    "壁上土", "金箔金", "覆灯火", "天河水", "大驿土", "钗钏金", "桑柘木", "大溪水", "沙中土",
    "天上火", "石榴木", "大海水",
];

const NAYIN_ELEMENTS: [Element; 30] = [
    Element::Metal,
    Element::Fire,
    Element::Wood,
    Element::Earth,
    Element::Metal,
    Element::Fire,
    Element::Water,
    Element::Earth,
    Element::Metal,
    Element::Wood,
    Element::Water,
    Element::Earth,
    Element::Fire,
    Element::Wood,
    Element::Water,
    Element::Metal,
    Element::Fire,
    Element::Wood,
    Element::Earth,
    Element::Metal,
    Element::Fire,
    Element::Water,
    Element::Earth,
    Element::Metal,
    Element::Wood,
    Element::Water,
    Element::Earth,
    Element::Fire,
    Element::Wood,
    Element::Water,
];

impl Nayin {
    /// 0-based index (海中金=0 .. 大海水=29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese name of the nayin.
    pub fn name(self) -> &'static str {
        NAYIN_NAMES[self.index() as usize]
    }

    /// Element of the nayin.
    pub fn element(self) -> Element {
        NAYIN_ELEMENTS[self.index() as usize]
    }

    /// Nayin of a pillar, or `None` if the pair is not in the cycle.
    pub fn of(pillar: Pillar) -> Option<Self> {
        pillar
            .cycle_index()
            .map(|i| ALL_NAYINS[(i / 2) as usize])
    }

    /// Look up a nayin by its Chinese name.
    pub fn from_name(name: &str) -> Option<Self> {
        NAYIN_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| ALL_NAYINS[i])
    }
}

impl std::fmt::Display for Nayin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Nayin for a two-character stem-branch text such as `"甲子"`.
pub fn nayin_for_ganzhi(ganzhi: &str) -> Option<Nayin> {
    ganzhi.parse::<Pillar>().ok().and_then(Nayin::of)
}

/// Element for a nayin name such as `"海中金"`.
pub fn nayin_element_by_name(name: &str) -> Option<Element> {
    Nayin::from_name(name).map(Nayin::element)
}
