//! Star catalog: names, kinds and brightness by palace.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use ziwei_calendar::Branch;

/// Rule family a star belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarKind {
    Main,
    Auxiliary,
    Malefic,
    Romance,
    Minor,
}

/// Brightness grade of a star in a palace, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brightness {
    #[serde(rename = "庙")]
    Temple,
    #[serde(rename = "旺")]
    Prosperous,
    #[serde(rename = "得")]
    Gain,
    #[serde(rename = "利")]
    Benefit,
    #[serde(rename = "平")]
    Neutral,
    #[serde(rename = "陷")]
    Fall,
}

impl Brightness {
    /// 5 for 庙 down to 0 for 陷.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Temple => 5,
            Self::Prosperous => 4,
            Self::Gain => 3,
            Self::Benefit => 2,
            Self::Neutral => 1,
            Self::Fall => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Temple => "庙",
            Self::Prosperous => "旺",
            Self::Gain => "得",
            Self::Benefit => "利",
            Self::Neutral => "平",
            Self::Fall => "陷",
        }
    }
}

impl PartialOrd for Brightness {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Brightness {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl Display for Brightness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Every star the engine places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StarName {
    // 紫微 series
    #[serde(rename = "紫微")]
    ZiWei,
    #[serde(rename = "天机")]
    TianJi,
    #[serde(rename = "太阳")]
    TaiYang,
    #[serde(rename = "武曲")]
    WuQu,
    #[serde(rename = "天同")]
    TianTong,
    #[serde(rename = "廉贞")]
    LianZhen,
    // 天府 series
    #[serde(rename = "天府")]
    TianFu,
    #[serde(rename = "太阴")]
    TaiYin,
    #[serde(rename = "贪狼")]
    TanLang,
    #[serde(rename = "巨门")]
    JuMen,
    #[serde(rename = "天相")]
    TianXiang,
    #[serde(rename = "天梁")]
    TianLiang,
    #[serde(rename = "七杀")]
    QiSha,
    #[serde(rename = "破军")]
    PoJun,
    // auxiliary
    #[serde(rename = "文昌")]
    WenChang,
    #[serde(rename = "文曲")]
    WenQu,
    #[serde(rename = "左辅")]
    ZuoFu,
    #[serde(rename = "右弼")]
    YouBi,
    #[serde(rename = "天魁")]
    TianKui,
    #[serde(rename = "天钺")]
    TianYue,
    #[serde(rename = "禄存")]
    LuCun,
    #[serde(rename = "天马")]
    TianMa,
    // malefic
    #[serde(rename = "擎羊")]
    QingYang,
    #[serde(rename = "陀罗")]
    TuoLuo,
    #[serde(rename = "火星")]
    HuoXing,
    #[serde(rename = "铃星")]
    LingXing,
    #[serde(rename = "地空")]
    DiKong,
    #[serde(rename = "地劫")]
    DiJie,
    // romance
    #[serde(rename = "红鸾")]
    HongLuan,
    #[serde(rename = "天喜")]
    TianXi,
    #[serde(rename = "天姚")]
    TianYao,
    #[serde(rename = "咸池")]
    XianChi,
    // minor
    #[serde(rename = "天刑")]
    TianXing,
    #[serde(rename = "台辅")]
    TaiFu,
    #[serde(rename = "封诰")]
    FengGao,
    #[serde(rename = "三台")]
    SanTai,
    #[serde(rename = "八座")]
    BaZuo,
    #[serde(rename = "恩光")]
    EnGuang,
    #[serde(rename = "天贵")]
    TianGui,
    #[serde(rename = "天官")]
    TianGuan,
    #[serde(rename = "天福")]
    TianFuMinor,
}

/// Number of stars in the catalog.
pub const STAR_COUNT: usize = 41;

/// The 14 main stars: the 紫微 series then the 天府 series.
pub const MAIN_STARS: [StarName; 14] = [
    StarName::ZiWei,
    StarName::TianJi,
    StarName::TaiYang,
    StarName::WuQu,
    StarName::TianTong,
    StarName::LianZhen,
    StarName::TianFu,
    StarName::TaiYin,
    StarName::TanLang,
    StarName::JuMen,
    StarName::TianXiang,
    StarName::TianLiang,
    StarName::QiSha,
    StarName::PoJun,
];

const STAR_NAMES: [&str; STAR_COUNT] = [
    "紫微", "天机", "太阳", "武曲", "天同", "廉贞", "天府", "太阴", "贪狼", "巨门", "天相", "天梁",
    "七杀", "破军", "文昌", "文曲", "左辅", "右弼", "天魁", "天钺", "禄存", "天马", "擎羊", "陀罗",
    "火星", "铃星", "地空", "地劫", "红鸾", "天喜", "天姚", "咸池", "天刑", "台辅", "封诰", "三台",
    "八座", "恩光", "天贵", "天官", "天福",
];

impl StarName {
    /// 0-based catalog index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        STAR_NAMES[self.index() as usize]
    }

    /// Look up a star by its Chinese name.
    pub fn from_name(name: &str) -> Option<Self> {
        STAR_NAMES
            .iter()
            .position(|n| *n == name)
            .and_then(|i| ALL_STARS.get(i).copied())
    }

    pub const fn kind(self) -> StarKind {
        match self.index() {
            0..=13 => StarKind::Main,
            14..=21 => StarKind::Auxiliary,
            22..=27 => StarKind::Malefic,
            28..=31 => StarKind::Romance,
            _ => StarKind::Minor,
        }
    }

    pub const fn is_main(self) -> bool {
        matches!(self.kind(), StarKind::Main)
    }

    /// Brightness of this star in the palace at `branch`.
    pub const fn brightness_at(self, branch: Branch) -> Brightness {
        match brightness_table(self) {
            Some(row) => row[branch.index() as usize],
            None => Brightness::Neutral,
        }
    }
}

impl Display for StarName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// All stars in catalog order.
pub const ALL_STARS: [StarName; STAR_COUNT] = {
    use StarName::*;
    [
        ZiWei, TianJi, TaiYang, WuQu, TianTong, LianZhen, TianFu, TaiYin, TanLang, JuMen,
        TianXiang, TianLiang, QiSha, PoJun, WenChang, WenQu, ZuoFu, YouBi, TianKui, TianYue,
        LuCun, TianMa, QingYang, TuoLuo, HuoXing, LingXing, DiKong, DiJie, HongLuan, TianXi,
        TianYao, XianChi, TianXing, TaiFu, FengGao, SanTai, BaZuo, EnGuang, TianGui, TianGuan,
        TianFuMinor,
    ]
};

use Brightness::{Benefit as L, Fall as X, Gain as D, Neutral as P, Prosperous as W, Temple as M};

// Rows are indexed by branch, 子 first.
const ZIWEI_B: [Brightness; 12] = [P, M, M, W, D, W, M, M, W, W, D, W];
const TIANJI_B: [Brightness; 12] = [M, X, D, W, L, P, M, X, D, W, L, P];
const TAIYANG_B: [Brightness; 12] = [X, X, W, M, W, W, W, D, D, P, X, X];
const WUQU_B: [Brightness; 12] = [W, M, D, L, M, P, W, M, D, L, M, P];
const TIANTONG_B: [Brightness; 12] = [W, X, L, P, P, M, X, X, W, P, P, M];
const LIANZHEN_B: [Brightness; 12] = [P, L, M, P, L, X, P, L, M, P, L, X];
const TIANFU_B: [Brightness; 12] = [M, M, M, D, M, D, W, M, D, W, M, D];
const TAIYIN_B: [Brightness; 12] = [M, M, W, X, X, X, X, X, L, X, W, M];
const TANLANG_B: [Brightness; 12] = [W, M, P, L, M, X, W, M, P, L, M, X];
const JUMEN_B: [Brightness; 12] = [W, X, M, M, X, W, W, X, M, M, X, W];
const TIANXIANG_B: [Brightness; 12] = [M, M, M, X, D, D, M, D, M, X, D, D];
const TIANLIANG_B: [Brightness; 12] = [M, W, M, M, W, X, M, W, X, D, W, X];
const QISHA_B: [Brightness; 12] = [W, M, M, W, M, P, W, M, M, M, M, P];
const POJUN_B: [Brightness; 12] = [M, W, D, X, W, P, M, W, D, X, W, P];
const WENCHANG_B: [Brightness; 12] = [D, M, X, L, D, M, X, L, D, M, X, L];
const WENQU_B: [Brightness; 12] = [D, M, P, W, D, M, X, W, D, M, X, W];
const QINGYANG_B: [Brightness; 12] = [X, M, P, X, M, P, X, M, P, X, M, P];
const TUOLUO_B: [Brightness; 12] = [P, M, X, P, M, X, P, M, X, P, M, X];
const HUOXING_B: [Brightness; 12] = [X, D, M, L, X, D, M, L, X, D, M, L];
const LINGXING_B: [Brightness; 12] = [X, D, M, L, X, D, M, L, X, D, M, L];

const fn brightness_table(star: StarName) -> Option<&'static [Brightness; 12]> {
    use StarName::*;
    match star {
        ZiWei => Some(&ZIWEI_B),
        TianJi => Some(&TIANJI_B),
        TaiYang => Some(&TAIYANG_B),
        WuQu => Some(&WUQU_B),
        TianTong => Some(&TIANTONG_B),
        LianZhen => Some(&LIANZHEN_B),
        TianFu => Some(&TIANFU_B),
        TaiYin => Some(&TAIYIN_B),
        TanLang => Some(&TANLANG_B),
        JuMen => Some(&JUMEN_B),
        TianXiang => Some(&TIANXIANG_B),
        TianLiang => Some(&TIANLIANG_B),
        QiSha => Some(&QISHA_B),
        PoJun => Some(&POJUN_B),
        WenChang => Some(&WENCHANG_B),
        WenQu => Some(&WENQU_B),
        QingYang => Some(&QINGYANG_B),
        TuoLuo => Some(&TUOLUO_B),
        HuoXing => Some(&HUOXING_B),
        LingXing => Some(&LINGXING_B),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_consistent() {
        for (i, s) in ALL_STARS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(StarName::from_name(s.name()), Some(*s));
        }
        assert_eq!(StarName::from_name("不存在"), None);
    }

    #[test]
    fn kinds() {
        assert!(MAIN_STARS.iter().all(|s| s.is_main()));
        assert_eq!(ALL_STARS.iter().filter(|s| s.is_main()).count(), 14);
        assert_eq!(StarName::LuCun.kind(), StarKind::Auxiliary);
        assert_eq!(StarName::DiJie.kind(), StarKind::Malefic);
        assert_eq!(StarName::XianChi.kind(), StarKind::Romance);
        assert_eq!(StarName::TianFuMinor.kind(), StarKind::Minor);
    }

    #[test]
    fn brightness_lookup() {
        assert_eq!(StarName::ZiWei.brightness_at(Branch::Wu), Brightness::Temple);
        assert_eq!(StarName::ZiWei.brightness_at(Branch::Zi), Brightness::Neutral);
        assert_eq!(StarName::TaiYang.brightness_at(Branch::Hai), Brightness::Fall);
        assert_eq!(StarName::TaiYin.brightness_at(Branch::Hai), Brightness::Temple);
        assert_eq!(StarName::HongLuan.brightness_at(Branch::Mao), Brightness::Neutral);
    }

    #[test]
    fn brightness_orders_temple_highest() {
        assert!(Brightness::Temple > Brightness::Prosperous);
        assert!(Brightness::Neutral > Brightness::Fall);
        assert_eq!(
            serde_json::to_string(&Brightness::Temple).unwrap(),
            "\"庙\""
        );
    }
}
