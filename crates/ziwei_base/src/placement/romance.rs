//! Romance (peach-blossom) stars.

use ziwei_calendar::Branch;

use super::{PlacementInput, StarPlacement};
use crate::star::StarName;

/// 红鸾: from 卯 backward by the year branch.
pub const fn hong_luan(year_branch: Branch) -> Branch {
    Branch::Mao.offset(-(year_branch.index() as i32))
}

/// 咸池: the 沐浴 branch of the year-branch triad.
pub const fn xian_chi(year_branch: Branch) -> Branch {
    match year_branch.triad() {
        0 => Branch::You,
        1 => Branch::Zi,
        2 => Branch::Mao,
        _ => Branch::Wu,
    }
}

/// 天姚: from 丑 forward by month.
pub const fn tian_yao(lunar_month: u8) -> Branch {
    Branch::Chou.offset(lunar_month as i32 - 1)
}

pub fn place_romance_stars(input: &PlacementInput) -> Vec<StarPlacement> {
    let luan = hong_luan(input.year_branch);
    vec![
        StarPlacement::new(StarName::HongLuan, luan),
        StarPlacement::new(StarName::TianXi, luan.offset(6)),
        StarPlacement::new(StarName::TianYao, tian_yao(input.lunar_month)),
        StarPlacement::new(StarName::XianChi, xian_chi(input.year_branch)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tian_yao_chen_year_eighth_month() {
        assert_eq!(tian_yao(8), Branch::Shen);
        assert_eq!(tian_yao(1), Branch::Chou);
        assert_eq!(tian_yao(12), Branch::Zi);
    }

    #[test]
    fn hong_luan_and_tian_xi_are_opposite() {
        assert_eq!(hong_luan(Branch::Zi), Branch::Mao);
        assert_eq!(hong_luan(Branch::Chen), Branch::Hai);
        for yb in ziwei_calendar::ALL_BRANCHES {
            assert_eq!(hong_luan(yb).offset(6).steps_to(hong_luan(yb)), 6);
        }
    }

    #[test]
    fn xian_chi_by_triad() {
        assert_eq!(xian_chi(Branch::Chen), Branch::You);
        assert_eq!(xian_chi(Branch::Chou), Branch::Wu);
        assert_eq!(xian_chi(Branch::Xu), Branch::Mao);
        assert_eq!(xian_chi(Branch::Wei), Branch::Zi);
    }
}
