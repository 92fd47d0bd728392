//! The twelve palaces: roles, positions of the life and body palaces,
//! palace stems and the geometric relationships between palaces.
//!
//! Palaces are addressed by their fixed Earthly Branch. Roles rotate with
//! the life palace and run counter-clockwise from it.

use serde::{Deserialize, Serialize};
use ziwei_calendar::{ALL_BRANCHES, Branch, Stem, five_tigers_stem};

/// The 12 palace roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PalaceRole {
    #[serde(rename = "命宫")]
    Life,
    #[serde(rename = "兄弟")]
    Siblings,
    #[serde(rename = "夫妻")]
    Spouse,
    #[serde(rename = "子女")]
    Children,
    #[serde(rename = "财帛")]
    Wealth,
    #[serde(rename = "疾厄")]
    Health,
    #[serde(rename = "迁移")]
    Travel,
    #[serde(rename = "交友")]
    Friends,
    #[serde(rename = "官禄")]
    Career,
    #[serde(rename = "田宅")]
    Property,
    #[serde(rename = "福德")]
    Fortune,
    #[serde(rename = "父母")]
    Parents,
}

/// All 12 roles, counter-clockwise from the life palace.
pub const ALL_PALACE_ROLES: [PalaceRole; 12] = [
    PalaceRole::Life,
    PalaceRole::Siblings,
    PalaceRole::Spouse,
    PalaceRole::Children,
    PalaceRole::Wealth,
    PalaceRole::Health,
    PalaceRole::Travel,
    PalaceRole::Friends,
    PalaceRole::Career,
    PalaceRole::Property,
    PalaceRole::Fortune,
    PalaceRole::Parents,
];

impl PalaceRole {
    /// 0-based index into [`ALL_PALACE_ROLES`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "官禄",
            Self::Property => "田宅",
            Self::Fortune => "福德",
            Self::Parents => "父母",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Life => "Life",
            Self::Siblings => "Siblings",
            Self::Spouse => "Spouse",
            Self::Children => "Children",
            Self::Wealth => "Wealth",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Friends => "Friends",
            Self::Career => "Career",
            Self::Property => "Property",
            Self::Fortune => "Fortune",
            Self::Parents => "Parents",
        }
    }
}

/// Life palace: from 寅 count the lunar month forward, then the time
/// branch backward.
pub const fn life_palace(lunar_month: u8, time_branch: Branch) -> Branch {
    Branch::Yin.offset(lunar_month as i32 - 1 - time_branch.index() as i32)
}

/// Body palace: from 寅 count the lunar month forward, then the time
/// branch forward.
pub const fn body_palace(lunar_month: u8, time_branch: Branch) -> Branch {
    Branch::Yin.offset(lunar_month as i32 - 1 + time_branch.index() as i32)
}

/// Stem of the palace at `branch` for a year stem.
///
/// 寅 takes the Five Tigers stem and stems run on through 亥; 子 and 丑
/// continue the count and so repeat the stems of 寅 and 卯.
pub const fn palace_stem(year_stem: Stem, branch: Branch) -> Stem {
    five_tigers_stem(year_stem).offset(Branch::Yin.steps_to(branch) as i32)
}

/// Stems of all 12 palaces, indexed by branch.
pub fn palace_stems(year_stem: Stem) -> [Stem; 12] {
    ALL_BRANCHES.map(|b| palace_stem(year_stem, b))
}

/// Role of the palace at `branch` for a given life palace.
pub const fn role_at(life: Branch, branch: Branch) -> PalaceRole {
    ALL_PALACE_ROLES[branch.steps_to(life) as usize]
}

/// Branch holding `role` for a given life palace.
pub const fn branch_of_role(life: Branch, role: PalaceRole) -> Branch {
    life.offset(-(role.index() as i32))
}

/// Palace directly across the chart (对宫).
pub const fn opposite(branch: Branch) -> Branch {
    branch.offset(6)
}

/// The two trine palaces (三合), four steps either way.
pub const fn trines(branch: Branch) -> [Branch; 2] {
    [branch.offset(4), branch.offset(8)]
}

/// 三方四正: the palace itself, its two trines and the opposite palace.
pub const fn san_fang_si_zheng(branch: Branch) -> [Branch; 4] {
    [branch, branch.offset(4), branch.offset(8), branch.offset(6)]
}

/// 来因宫: the palace among 寅..亥 whose stem equals the year stem.
///
/// Each stem occurs exactly once among those ten palaces.
pub const fn laiyin_palace(year_stem: Stem) -> Branch {
    let start = five_tigers_stem(year_stem);
    let steps = (year_stem.index() as i32 - start.index() as i32).rem_euclid(10);
    Branch::Yin.offset(steps)
}

/// 斗君: palace of lunar month 1 for a year with branch `year_branch`.
///
/// From the year branch count the birth month backward, then the time
/// branch forward.
pub const fn dou_jun(year_branch: Branch, lunar_month: u8, time_branch: Branch) -> Branch {
    year_branch.offset(-(lunar_month as i32 - 1) + time_branch.index() as i32)
}
