//! Heavenly Stems, Earthly Branches and the sexagenary (GanZhi) cycle.
//!
//! Index conventions: 甲=0 .. 癸=9, 子=0 .. 亥=11. A stem/branch pair is
//! a valid GanZhi only when both indices share the same parity, which gives
//! exactly 60 combinations.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The five phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }
}

/// The ten Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

/// All 10 stems in cycle order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem for an index; wraps modulo 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Stem `steps` positions along the cycle (negative steps go back).
    pub const fn offset(self, steps: i32) -> Self {
        ALL_STEMS[(self.index() as i32 + steps).rem_euclid(10) as usize]
    }

    pub const fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// Look up a stem by its Chinese character.
    pub fn from_name(name: &str) -> Option<Self> {
        STEM_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| ALL_STEMS[i])
    }

    /// Yang stems sit at even indices.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    pub const fn element(self) -> Element {
        match self.index() / 2 {
            0 => Element::Wood,
            1 => Element::Fire,
            2 => Element::Earth,
            3 => Element::Metal,
            _ => Element::Water,
        }
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The twelve Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

/// All 12 branches in cycle order (index 0 = 子).
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

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
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

    /// Branch for an index; wraps modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Branch `steps` positions clockwise (negative steps go counter-clockwise).
    pub const fn offset(self, steps: i32) -> Self {
        ALL_BRANCHES[(self.index() as i32 + steps).rem_euclid(12) as usize]
    }

    /// Clockwise distance from `self` to `other`, in 0..12.
    pub const fn steps_to(self, other: Branch) -> u8 {
        (other.index() as i32 - self.index() as i32).rem_euclid(12) as u8
    }

    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Look up a branch by its Chinese character.
    pub fn from_name(name: &str) -> Option<Self> {
        BRANCH_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| ALL_BRANCHES[i])
    }

    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// The triad (三合) group 0..4 this branch belongs to:
    /// 0 = 申子辰, 1 = 亥卯未, 2 = 寅午戌, 3 = 巳酉丑.
    pub const fn triad(self) -> u8 {
        match self {
            Self::Shen | Self::Zi | Self::Chen => 0,
            Self::Hai | Self::Mao | Self::Wei => 1,
            Self::Yin | Self::Wu | Self::Xu => 2,
            Self::Si | Self::You | Self::Chou => 3,
        }
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A stem/branch pair of matching parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GanZhi {
    pub stem: Stem,
    pub branch: Branch,
}

/// 甲子, the first pair of the cycle.
pub const JIAZI: GanZhi = GanZhi {
    stem: Stem::Jia,
    branch: Branch::Zi,
};

impl GanZhi {
    /// Pair a stem with a branch; `None` when their parities differ.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// The pair at position `index` of the 60-cycle (wraps modulo 60).
    pub const fn from_cycle_index(index: u8) -> Self {
        let i = index % 60;
        Self {
            stem: Stem::from_index(i % 10),
            branch: Branch::from_index(i % 12),
        }
    }

    /// Position within the 60-cycle, 甲子 = 0.
    pub const fn cycle_index(self) -> u8 {
        (6 * self.stem.index() as i32 - 5 * self.branch.index() as i32).rem_euclid(60) as u8
    }

    /// Pair `steps` positions along the 60-cycle.
    pub const fn offset(self, steps: i32) -> Self {
        Self::from_cycle_index((self.cycle_index() as i32 + steps).rem_euclid(60) as u8)
    }

    /// Sexagenary year pair for a (solar-term adjusted) Gregorian year.
    pub const fn for_year(year: i32) -> Self {
        Self::from_cycle_index((year - 4).rem_euclid(60) as u8)
    }

    /// Parse a two-character label such as "甲子".
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let stem = Stem::from_name(&chars.next()?.to_string())?;
        let branch = Branch::from_name(&chars.next()?.to_string())?;
        if chars.next().is_some() {
            return None;
        }
        Self::new(stem, branch)
    }
}

impl Display for GanZhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// Stem that the 寅 month (or palace) takes for a given year stem,
/// the "Five Tigers" rule: 甲己→丙, 乙庚→戊, 丙辛→庚, 丁壬→壬, 戊癸→甲.
pub const fn five_tigers_stem(year_stem: Stem) -> Stem {
    Stem::from_index((year_stem.index() % 5) * 2 + 2)
}

/// Stem that the 子 hour takes for a given day stem, the "Five Rats" rule:
/// 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬.
pub const fn five_rats_stem(day_stem: Stem) -> Stem {
    Stem::from_index((day_stem.index() % 5) * 2)
}
