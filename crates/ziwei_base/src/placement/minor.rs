//! Minor stars.
//!
//! 三台 八座 恩光 天贵 ride on the auxiliary stars and count the lunar
//! day from them.

use ziwei_calendar::{Branch, Stem};

use super::auxiliary::{wen_chang, wen_qu, you_bi, zuo_fu};
use super::{PlacementInput, StarPlacement};
use crate::star::StarName;

/// 天官 by year stem.
pub const fn tian_guan(year_stem: Stem) -> Branch {
    const TABLE: [Branch; 10] = [
        Branch::Wei,
        Branch::Chen,
        Branch::Si,
        Branch::Yin,
        Branch::Mao,
        Branch::You,
        Branch::Hai,
        Branch::You,
        Branch::Xu,
        Branch::Wu,
    ];
    TABLE[year_stem.index() as usize]
}

/// 天福 by year stem.
pub const fn tian_fu_minor(year_stem: Stem) -> Branch {
    const TABLE: [Branch; 10] = [
        Branch::You,
        Branch::Shen,
        Branch::Zi,
        Branch::Hai,
        Branch::Mao,
        Branch::Yin,
        Branch::Wu,
        Branch::Si,
        Branch::Wu,
        Branch::Si,
    ];
    TABLE[year_stem.index() as usize]
}

pub fn place_minor_stars(input: &PlacementInput) -> Vec<StarPlacement> {
    let m = input.month_steps();
    let t = input.hour_steps();
    let d = input.lunar_day as i32;
    vec![
        StarPlacement::new(StarName::TianXing, Branch::You.offset(m)),
        StarPlacement::new(StarName::TaiFu, Branch::Wu.offset(t)),
        StarPlacement::new(StarName::FengGao, Branch::Yin.offset(t)),
        StarPlacement::new(StarName::SanTai, zuo_fu(input.lunar_month).offset(d - 1)),
        StarPlacement::new(StarName::BaZuo, you_bi(input.lunar_month).offset(-(d - 1))),
        StarPlacement::new(StarName::EnGuang, wen_chang(input.time_branch).offset(d - 2)),
        StarPlacement::new(StarName::TianGui, wen_qu(input.time_branch).offset(d - 2)),
        StarPlacement::new(StarName::TianGuan, tian_guan(input.year_stem)),
        StarPlacement::new(StarName::TianFuMinor, tian_fu_minor(input.year_stem)),
    ]
}
