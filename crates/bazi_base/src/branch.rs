//! The twelve earthly branches (dizhi) and their hidden stems.
//!
//! Branches cycle with period 12. Each branch carries one element and an
//! ordered list of 1-3 hidden stems (canggan); the first hidden stem is the
//! branch's primary qi.

use crate::element::Element;
use crate::stem::Stem;

/// The 12 earthly branches, starting from Zi (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_CHARS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// Hidden stems per branch, primary qi first.
const HIDDEN_STEMS: [&[Stem]; 12] = [
    &[Stem::Gui],
    &[Stem::Ji, Stem::Gui, Stem::Xin],
    &[Stem::Jia, Stem::Bing, Stem::Wu],
    &[Stem::Yi],
    &[Stem::Wu, Stem::Yi, Stem::Gui],
    &[Stem::Bing, Stem::Wu, Stem::Geng],
    &[Stem::Ding, Stem::Ji],
    &[Stem::Ji, Stem::Ding, Stem::Yi],
    &[Stem::Geng, Stem::Ren, Stem::Wu],
    &[Stem::Xin],
    &[Stem::Wu, Stem::Xin, Stem::Ding],
    &[Stem::Ren, Stem::Jia],
];

impl Branch {
    /// Chinese character of the branch.
    pub fn character(self) -> char {
        BRANCH_CHARS[self.index() as usize]
    }

    /// Pinyin name of the branch.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Zi | Self::Hai => Element::Water,
        }
    }

    /// Hidden stems of the branch, primary qi first.
    pub fn hidden_stems(self) -> &'static [Stem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// Primary hidden stem (main qi).
    pub fn primary_hidden_stem(self) -> Stem {
        // Every table row is non-empty.
        HIDDEN_STEMS[self.index() as usize][0]
    }

    /// Branch at a cyclic position; any integer is reduced modulo 12.
    pub fn from_cycle(n: i64) -> Self {
        ALL_BRANCHES[n.rem_euclid(12) as usize]
    }

    /// Look up a branch by its Chinese character.
    pub fn from_char(c: char) -> Option<Self> {
        BRANCH_CHARS
            .iter()
            .position(|&b| b == c)
            .map(|i| ALL_BRANCHES[i])
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.character())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn pinyin_names() {
        assert_eq!(Branch::Zi.pinyin(), "Zi");
        assert_eq!(Branch::Wu.pinyin(), "Wu");
        assert_eq!(Branch::Hai.pinyin(), "Hai");
        for (i, a) in ALL_BRANCHES.iter().enumerate() {
            for b in &ALL_BRANCHES[i + 1..] {
                assert_ne!(a.pinyin(), b.pinyin());
            }
        }
    }

    #[test]
    fn hidden_stem_counts() {
        for b in ALL_BRANCHES {
            let n = b.hidden_stems().len();
            assert!((1..=3).contains(&n), "{b}: {n} hidden stems");
        }
        assert_eq!(Branch::Zi.hidden_stems(), &[Stem::Gui]);
        assert_eq!(Branch::Hai.hidden_stems(), &[Stem::Ren, Stem::Jia]);
    }

    #[test]
    fn primary_hidden_stem_is_first() {
        assert_eq!(Branch::Chou.primary_hidden_stem(), Stem::Ji);
        assert_eq!(Branch::Shen.primary_hidden_stem(), Stem::Geng);
    }

    #[test]
    fn earth_branches() {
        let earth: Vec<Branch> = ALL_BRANCHES
            .into_iter()
            .filter(|b| b.element() == Element::Earth)
            .collect();
        assert_eq!(earth, vec![Branch::Chou, Branch::Chen, Branch::Wei, Branch::Xu]);
    }

    #[test]
    fn from_cycle_wraps_negative() {
        assert_eq!(Branch::from_cycle(12), Branch::Zi);
        assert_eq!(Branch::from_cycle(-1), Branch::Hai);
    }

    #[test]
    fn from_char_round_trip() {
        for b in ALL_BRANCHES {
            assert_eq!(Branch::from_char(b.character()), Some(b));
        }
        assert_eq!(Branch::from_char('甲'), None);
    }
}
