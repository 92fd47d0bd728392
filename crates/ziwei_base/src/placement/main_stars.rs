//! The 14 main stars.
//!
//! 紫微 is located from the lunar day and the bureau step: borrow the
//! smallest `x` that makes `day + x` divisible by the step, count the
//! quotient from 寅, then move `x` forward when `x` is even and backward
//! when it is odd. 天府 mirrors 紫微 across the 寅–申 axis. The other
//! twelve sit at fixed offsets from one of the two.

use ziwei_calendar::Branch;

use super::StarPlacement;
use crate::bureau::Bureau;
use crate::star::StarName;

/// 紫微 series offsets, counter-clockwise from 紫微.
pub const ZIWEI_SERIES: [(StarName, i32); 6] = [
    (StarName::ZiWei, 0),
    (StarName::TianJi, -1),
    (StarName::TaiYang, -3),
    (StarName::WuQu, -4),
    (StarName::TianTong, -5),
    (StarName::LianZhen, -8),
];

/// 天府 series offsets, clockwise from 天府.
pub const TIANFU_SERIES: [(StarName, i32); 8] = [
    (StarName::TianFu, 0),
    (StarName::TaiYin, 1),
    (StarName::TanLang, 2),
    (StarName::JuMen, 3),
    (StarName::TianXiang, 4),
    (StarName::TianLiang, 5),
    (StarName::QiSha, 6),
    (StarName::PoJun, 10),
];

/// Palace of 紫微 for a bureau and lunar day (1..=30).
pub const fn ziwei_position(bureau: Bureau, lunar_day: u8) -> Branch {
    let step = bureau.step() as i32;
    let day = lunar_day as i32;
    let borrowed = (step - day % step) % step;
    let quotient = (day + borrowed) / step;
    let shift = if borrowed % 2 == 0 {
        borrowed
    } else {
        -borrowed
    };
    Branch::Yin.offset(quotient - 1 + shift)
}

/// Palace of 天府 given 紫微's palace.
pub const fn tianfu_position(ziwei: Branch) -> Branch {
    Branch::Yin.offset(-(Branch::Yin.steps_to(ziwei) as i32))
}

pub fn place_main_stars(bureau: Bureau, lunar_day: u8) -> Vec<StarPlacement> {
    let ziwei = ziwei_position(bureau, lunar_day);
    let tianfu = tianfu_position(ziwei);
    ZIWEI_SERIES
        .iter()
        .map(|&(star, off)| StarPlacement::new(star, ziwei.offset(off)))
        .chain(
            TIANFU_SERIES
                .iter()
                .map(|&(star, off)| StarPlacement::new(star, tianfu.offset(off))),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bureau::ALL_BUREAUS;

    #[test]
    fn first_day_positions_per_bureau() {
        assert_eq!(ziwei_position(Bureau::Water2, 1), Branch::Chou);
        assert_eq!(ziwei_position(Bureau::Wood3, 1), Branch::Chen);
        assert_eq!(ziwei_position(Bureau::Metal4, 1), Branch::Hai);
        assert_eq!(ziwei_position(Bureau::Earth5, 1), Branch::Wu);
        assert_eq!(ziwei_position(Bureau::Fire6, 1), Branch::You);
    }

    #[test]
    fn exact_multiples_count_from_yin() {
        assert_eq!(ziwei_position(Bureau::Water2, 2), Branch::Yin);
        assert_eq!(ziwei_position(Bureau::Wood3, 3), Branch::Yin);
        assert_eq!(ziwei_position(Bureau::Fire6, 30), Branch::Wu);
        assert_eq!(ziwei_position(Bureau::Water2, 24), Branch::Chou);
    }

    #[test]
    fn wood_bureau_second_day() {
        // 2 + 1 = 3, quotient 1 at 寅, one step back.
        assert_eq!(ziwei_position(Bureau::Wood3, 2), Branch::Chou);
    }

    #[test]
    fn tianfu_mirrors_across_yin_shen() {
        assert_eq!(tianfu_position(Branch::Yin), Branch::Yin);
        assert_eq!(tianfu_position(Branch::Shen), Branch::Shen);
        assert_eq!(tianfu_position(Branch::Zi), Branch::Chen);
        assert_eq!(tianfu_position(Branch::Wu), Branch::Xu);
        for z in ziwei_calendar::ALL_BRANCHES {
            assert_eq!(tianfu_position(tianfu_position(z)), z);
        }
    }

    #[test]
    fn fourteen_distinct_stars_every_day() {
        for bureau in ALL_BUREAUS {
            for day in 1..=30 {
                let stars = place_main_stars(bureau, day);
                assert_eq!(stars.len(), 14);
                for (i, a) in stars.iter().enumerate() {
                    assert!(stars[i + 1..].iter().all(|b| b.star != a.star));
                }
            }
        }
    }

    #[test]
    fn ziwei_in_zi_layout() {
        // 水二局 day 22: 22 / 2 = 11 → 寅 + 10 = 子.
        let stars = place_main_stars(Bureau::Water2, 22);
        let at = |s: StarName| stars.iter().find(|p| p.star == s).map(|p| p.branch);
        assert_eq!(at(StarName::ZiWei), Some(Branch::Zi));
        assert_eq!(at(StarName::TianJi), Some(Branch::Hai));
        assert_eq!(at(StarName::LianZhen), Some(Branch::Chen));
        assert_eq!(at(StarName::TianFu), Some(Branch::Chen));
        assert_eq!(at(StarName::PoJun), Some(Branch::Yin));
    }
}
