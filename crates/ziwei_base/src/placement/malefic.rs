//! Malefic stars (六煞).
//!
//! 擎羊 and 陀罗 flank 禄存. 火星 and 铃星 each start from an anchor fixed
//! by the year-branch triad and both step clockwise by the time branch.
//! 地空 and 地劫 start together at 亥 and part with the hour.

use ziwei_calendar::Branch;

use super::auxiliary::lu_cun;
use super::{PlacementInput, StarPlacement};
use crate::star::StarName;

/// (火星, 铃星) anchors for a year branch.
pub const fn fire_bell_anchors(year_branch: Branch) -> (Branch, Branch) {
    match year_branch.triad() {
        // 申子辰
        0 => (Branch::Yin, Branch::Xu),
        // 亥卯未
        1 => (Branch::You, Branch::Xu),
        // 寅午戌
        2 => (Branch::Chou, Branch::Mao),
        // 巳酉丑
        _ => (Branch::Mao, Branch::Xu),
    }
}

pub const fn huo_xing(year_branch: Branch, time_branch: Branch) -> Branch {
    fire_bell_anchors(year_branch)
        .0
        .offset(time_branch.index() as i32)
}

pub const fn ling_xing(year_branch: Branch, time_branch: Branch) -> Branch {
    fire_bell_anchors(year_branch)
        .1
        .offset(time_branch.index() as i32)
}

pub fn place_malefic_stars(input: &PlacementInput) -> Vec<StarPlacement> {
    let lu = lu_cun(input.year_stem);
    let t = input.hour_steps();
    vec![
        StarPlacement::new(StarName::QingYang, lu.offset(1)),
        StarPlacement::new(StarName::TuoLuo, lu.offset(-1)),
        StarPlacement::new(
            StarName::HuoXing,
            huo_xing(input.year_branch, input.time_branch),
        ),
        StarPlacement::new(
            StarName::LingXing,
            ling_xing(input.year_branch, input.time_branch),
        ),
        StarPlacement::new(StarName::DiKong, Branch::Hai.offset(-t)),
        StarPlacement::new(StarName::DiJie, Branch::Hai.offset(t)),
    ]
}
