//! Five Elements Bureau (五行局).
//!
//! The bureau is the 纳音 element of the life palace's stem-branch pair.
//! It fixes the step used by the 紫微 placement and the age at which the
//! first decade period begins.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use ziwei_calendar::{Branch, Element, Stem};

use crate::palace::life_palace;

/// The five bureaus, ordered by step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bureau {
    #[serde(rename = "水二局")]
    Water2,
    #[serde(rename = "木三局")]
    Wood3,
    #[serde(rename = "金四局")]
    Metal4,
    #[serde(rename = "土五局")]
    Earth5,
    #[serde(rename = "火六局")]
    Fire6,
}

pub const ALL_BUREAUS: [Bureau; 5] = [
    Bureau::Water2,
    Bureau::Wood3,
    Bureau::Metal4,
    Bureau::Earth5,
    Bureau::Fire6,
];

impl Bureau {
    /// Step count 2..=6.
    pub const fn step(self) -> u8 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Water2 => Element::Water,
            Self::Wood3 => Element::Wood,
            Self::Metal4 => Element::Metal,
            Self::Earth5 => Element::Earth,
            Self::Fire6 => Element::Fire,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }
}

impl Display for Bureau {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

use Bureau::{Earth5 as E, Fire6 as F, Metal4 as M, Water2 as W, Wood3 as T};

/// Rows: year-stem group 甲己, 乙庚, 丙辛, 丁壬, 戊癸.
/// Columns: life-palace pair 子丑, 寅卯, 辰巳, 午未, 申酉, 戌亥.
pub const BUREAU_TABLE: [[Bureau; 6]; 5] = [
    [W, F, T, E, M, F],
    [F, E, M, T, W, E],
    [E, T, W, M, F, T],
    [T, M, F, W, E, M],
    [M, W, E, F, T, W],
];

/// Bureau for a year stem and an already-known life palace.
pub const fn bureau_for_life_palace(year_stem: Stem, life: Branch) -> Bureau {
    BUREAU_TABLE[(year_stem.index() % 5) as usize][(life.index() / 2) as usize]
}

/// Bureau from the year stem, lunar month and time branch.
pub const fn calculate_bureau(year_stem: Stem, lunar_month: u8, time_branch: Branch) -> Bureau {
    bureau_for_life_palace(year_stem, life_palace(lunar_month, time_branch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palace::palace_stem;
    use ziwei_calendar::{ALL_BRANCHES, ALL_STEMS, GanZhi};

    /// 纳音 element by 60-cycle pair index / 2.
    const NAYIN: [Element; 30] = {
        use Element::*;
        [
            Metal, Fire, Wood, Earth, Metal, Fire, Water, Earth, Metal, Wood, Water, Earth, Fire,
            Wood, Water, Metal, Fire, Wood, Earth, Metal, Fire, Water, Earth, Metal, Wood, Water,
            Earth, Fire, Wood, Water,
        ]
    };

    #[test]
    fn table_equals_nayin_of_life_palace() {
        for s in ALL_STEMS {
            for b in ALL_BRANCHES {
                let gz = GanZhi::new(palace_stem(s, b), b).unwrap();
                let nayin = NAYIN[(gz.cycle_index() / 2) as usize];
                assert_eq!(bureau_for_life_palace(s, b).element(), nayin, "{s} {b}");
            }
        }
    }

    #[test]
    fn steps() {
        let steps: Vec<u8> = ALL_BUREAUS.iter().map(|b| b.step()).collect();
        assert_eq!(steps, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn jia_year_first_month_zi_hour() {
        // Life palace 寅 with stem 丙: 丙寅 炉中火.
        assert_eq!(calculate_bureau(Stem::Jia, 1, Branch::Zi), Bureau::Fire6);
    }

    #[test]
    fn birth_data_goes_through_life_palace() {
        for s in ALL_STEMS {
            for month in 1..=12 {
                for t in ALL_BRANCHES {
                    assert_eq!(
                        calculate_bureau(s, month, t),
                        bureau_for_life_palace(s, life_palace(month, t)),
                        "{s} {month} {t}"
                    );
                }
            }
        }
    }
}
