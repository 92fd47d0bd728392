//! Four transformations (四化).
//!
//! A stem turns four stars into 禄, 权, 科 and 忌. The birth-year stem
//! gives the natal set; each palace stem "flies" the same four roles onto
//! whichever palaces hold those stars. A flight that lands on the palace
//! it left is a self-transformation: facing (向心自化) when the star
//! already carries a birth transformation, departing (离心自化) otherwise.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use ziwei_calendar::{ALL_BRANCHES, Branch, Stem};

use crate::placement::StarLayout;
use crate::star::StarName;

/// The four transformation roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SihuaRole {
    /// 化禄, prosperity.
    #[serde(rename = "禄")]
    Lu,
    /// 化权, authority.
    #[serde(rename = "权")]
    Quan,
    /// 化科, fame.
    #[serde(rename = "科")]
    Ke,
    /// 化忌, adversity.
    #[serde(rename = "忌")]
    Ji,
}

pub const ALL_SIHUA_ROLES: [SihuaRole; 4] =
    [SihuaRole::Lu, SihuaRole::Quan, SihuaRole::Ke, SihuaRole::Ji];

impl SihuaRole {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lu => "禄",
            Self::Quan => "权",
            Self::Ke => "科",
            Self::Ji => "忌",
        }
    }
}

impl Display for SihuaRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The four stars a stem transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SihuaInfo {
    pub stem: Stem,
    pub lu: StarName,
    pub quan: StarName,
    pub ke: StarName,
    pub ji: StarName,
}

impl SihuaInfo {
    pub const fn star(&self, role: SihuaRole) -> StarName {
        match role {
            SihuaRole::Lu => self.lu,
            SihuaRole::Quan => self.quan,
            SihuaRole::Ke => self.ke,
            SihuaRole::Ji => self.ji,
        }
    }

    /// First role that transforms `star`, in 禄权科忌 order.
    pub fn role_of(&self, star: StarName) -> Option<SihuaRole> {
        ALL_SIHUA_ROLES.into_iter().find(|r| self.star(*r) == star)
    }

    /// (role, star) pairs in 禄权科忌 order.
    pub fn pairs(&self) -> [(SihuaRole, StarName); 4] {
        ALL_SIHUA_ROLES.map(|r| (r, self.star(r)))
    }
}

/// Birth transformation table.
pub const fn sihua_for_stem(stem: Stem) -> SihuaInfo {
    use StarName::*;
    let (lu, quan, ke, ji) = match stem {
        Stem::Jia => (LianZhen, PoJun, WuQu, TaiYang),
        Stem::Yi => (TianJi, TianLiang, ZiWei, TaiYin),
        Stem::Bing => (TianTong, TianJi, WenChang, LianZhen),
        Stem::Ding => (TaiYin, TianTong, TianJi, JuMen),
        Stem::Wu => (TanLang, TaiYin, YouBi, TianJi),
        Stem::Ji => (WuQu, TanLang, TianLiang, WenQu),
        Stem::Geng => (TaiYang, WuQu, TianTong, TianXiang),
        Stem::Xin => (JuMen, TaiYang, WenQu, WenChang),
        Stem::Ren => (TianLiang, ZiWei, ZuoFu, WuQu),
        Stem::Gui => (PoJun, JuMen, TaiYin, TanLang),
    };
    SihuaInfo {
        stem,
        lu,
        quan,
        ke,
        ji,
    }
}

/// One role flown from a palace stem onto the palace holding its star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlyingTransformation {
    pub from: Branch,
    pub from_stem: Stem,
    pub to: Branch,
    pub to_stem: Stem,
    pub role: SihuaRole,
    pub star: StarName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfTransformKind {
    /// 离心自化: the palace's own stem transforms a star with no birth role.
    Departing,
    /// 向心自化: the palace's own stem transforms a star that has a birth role.
    Facing,
}

impl SelfTransformKind {
    /// Conventional chart marker.
    pub const fn marker(self) -> char {
        match self {
            Self::Departing => 'x',
            Self::Facing => 'i',
        }
    }
}

/// Self-transformation marker on a star in a palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelfTransformation {
    pub branch: Branch,
    pub star: StarName,
    pub role: SihuaRole,
    pub kind: SelfTransformKind,
}

/// All palace-stem flights of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlyingTable {
    flights: Vec<FlyingTransformation>,
    self_transforms: Vec<SelfTransformation>,
}

impl FlyingTable {
    /// Fly every palace stem over a star layout. `stems` is indexed by
    /// branch; `birth` is the natal set that splits self-transformations.
    pub fn build(layout: &StarLayout, stems: &[Stem; 12], birth: &SihuaInfo) -> Self {
        let mut flights = Vec::with_capacity(48);
        for from in ALL_BRANCHES {
            let from_stem = stems[from.index() as usize];
            for (role, star) in sihua_for_stem(from_stem).pairs() {
                if let Some(to) = layout.position(star) {
                    flights.push(FlyingTransformation {
                        from,
                        from_stem,
                        to,
                        to_stem: stems[to.index() as usize],
                        role,
                        star,
                    });
                }
            }
        }

        let self_transforms = flights
            .iter()
            .filter(|f| f.from == f.to)
            .map(|f| SelfTransformation {
                branch: f.to,
                star: f.star,
                role: f.role,
                kind: if birth.role_of(f.star).is_some() {
                    SelfTransformKind::Facing
                } else {
                    SelfTransformKind::Departing
                },
            })
            .collect();

        Self {
            flights,
            self_transforms,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlyingTransformation> {
        self.flights.iter()
    }

    pub fn flights_from(&self, branch: Branch) -> impl Iterator<Item = &FlyingTransformation> {
        self.flights.iter().filter(move |f| f.from == branch)
    }

    pub fn flights_into(&self, branch: Branch) -> impl Iterator<Item = &FlyingTransformation> {
        self.flights.iter().filter(move |f| f.to == branch)
    }

    pub fn self_transformations(
        &self,
        branch: Branch,
    ) -> impl Iterator<Item = &SelfTransformation> {
        self.self_transforms.iter().filter(move |s| s.branch == branch)
    }

    pub fn all_self_transformations(&self) -> &[SelfTransformation] {
        &self.self_transforms
    }
}
