//! Auxiliary stars (六吉 and 禄马).
//!
//! Four disjoint families: month (左辅 右弼), hour (文昌 文曲), year stem
//! (天魁 天钺 禄存) and year branch (天马).

use ziwei_calendar::{Branch, Stem};

use super::{PlacementInput, StarPlacement};
use crate::star::StarName;

/// 左辅: from 辰 forward by month.
pub const fn zuo_fu(lunar_month: u8) -> Branch {
    Branch::Chen.offset(lunar_month as i32 - 1)
}

/// 右弼: from 戌 backward by month.
pub const fn you_bi(lunar_month: u8) -> Branch {
    Branch::Xu.offset(-(lunar_month as i32 - 1))
}

/// 文昌: from 戌 backward by hour.
pub const fn wen_chang(time_branch: Branch) -> Branch {
    Branch::Xu.offset(-(time_branch.index() as i32))
}

/// 文曲: from 辰 forward by hour.
pub const fn wen_qu(time_branch: Branch) -> Branch {
    Branch::Chen.offset(time_branch.index() as i32)
}

/// (天魁, 天钺) for a year stem.
pub const fn kui_yue(year_stem: Stem) -> (Branch, Branch) {
    match year_stem {
        Stem::Jia | Stem::Wu | Stem::Geng => (Branch::Chou, Branch::Wei),
        Stem::Yi | Stem::Ji => (Branch::Zi, Branch::Shen),
        Stem::Bing | Stem::Ding => (Branch::Hai, Branch::You),
        Stem::Xin => (Branch::Wu, Branch::Yin),
        Stem::Ren | Stem::Gui => (Branch::Mao, Branch::Si),
    }
}

/// 禄存: the 临官 branch of the year stem.
pub const fn lu_cun(year_stem: Stem) -> Branch {
    match year_stem {
        Stem::Jia => Branch::Yin,
        Stem::Yi => Branch::Mao,
        Stem::Bing | Stem::Wu => Branch::Si,
        Stem::Ding | Stem::Ji => Branch::Wu,
        Stem::Geng => Branch::Shen,
        Stem::Xin => Branch::You,
        Stem::Ren => Branch::Hai,
        Stem::Gui => Branch::Zi,
    }
}

/// 天马: the branch clashing the first member of the year-branch triad.
pub const fn tian_ma(year_branch: Branch) -> Branch {
    match year_branch.triad() {
        0 => Branch::Yin,
        1 => Branch::Si,
        2 => Branch::Shen,
        _ => Branch::Hai,
    }
}

pub fn place_auxiliary_stars(input: &PlacementInput) -> Vec<StarPlacement> {
    let (kui, yue) = kui_yue(input.year_stem);
    vec![
        StarPlacement::new(StarName::WenChang, wen_chang(input.time_branch)),
        StarPlacement::new(StarName::WenQu, wen_qu(input.time_branch)),
        StarPlacement::new(StarName::ZuoFu, zuo_fu(input.lunar_month)),
        StarPlacement::new(StarName::YouBi, you_bi(input.lunar_month)),
        StarPlacement::new(StarName::TianKui, kui),
        StarPlacement::new(StarName::TianYue, yue),
        StarPlacement::new(StarName::LuCun, lu_cun(input.year_stem)),
        StarPlacement::new(StarName::TianMa, tian_ma(input.year_branch)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_calendar::ALL_STEMS;

    #[test]
    fn month_pair_is_symmetric_about_chen_xu() {
        assert_eq!(zuo_fu(1), Branch::Chen);
        assert_eq!(you_bi(1), Branch::Xu);
        assert_eq!(zuo_fu(12), Branch::Mao);
        assert_eq!(you_bi(12), Branch::Hai);
        for m in 1..=12 {
            assert_eq!((zuo_fu(m).index() + you_bi(m).index()) % 12, 2);
        }
    }

    #[test]
    fn hour_pair() {
        assert_eq!(wen_chang(Branch::Zi), Branch::Xu);
        assert_eq!(wen_qu(Branch::Zi), Branch::Chen);
        assert_eq!(wen_chang(Branch::Wu), Branch::Chen);
        assert_eq!(wen_qu(Branch::Wu), Branch::Xu);
    }

    #[test]
    fn lu_cun_never_on_earth_branches() {
        for s in ALL_STEMS {
            let b = lu_cun(s);
            assert!(!matches!(b, Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu));
        }
    }

    #[test]
    fn kui_yue_table() {
        assert_eq!(kui_yue(Stem::Geng), (Branch::Chou, Branch::Wei));
        assert_eq!(kui_yue(Stem::Xin), (Branch::Wu, Branch::Yin));
        assert_eq!(kui_yue(Stem::Gui), (Branch::Mao, Branch::Si));
    }

    #[test]
    fn tian_ma_by_triad() {
        assert_eq!(tian_ma(Branch::Zi), Branch::Yin);
        assert_eq!(tian_ma(Branch::Mao), Branch::Si);
        assert_eq!(tian_ma(Branch::Wu), Branch::Shen);
        assert_eq!(tian_ma(Branch::You), Branch::Hai);
    }
}
