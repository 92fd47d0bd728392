//! The chart aggregate.

use serde::{Deserialize, Serialize};
use ziwei_base::{
    BaZiParams, Brightness, Bureau, DecadePeriod, FlyingTable, Masters, PalaceRole,
    SelfTransformKind, SihuaInfo, SihuaRole, StarKind, StarName,
};
use ziwei_calendar::{Branch, Stem};

/// A self-transformation marker carried by a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelfMarker {
    pub kind: SelfTransformKind,
    pub role: SihuaRole,
}

/// A star as it sits in one palace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedStar {
    pub name: StarName,
    pub kind: StarKind,
    pub brightness: Brightness,
    /// Birth-year transformation, if the year stem transforms this star.
    pub birth_sihua: Option<SihuaRole>,
    /// Self-transformations from this palace's own stem.
    pub self_transforms: Vec<SelfMarker>,
}

/// Inclusive nominal-age span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeSpan {
    pub start_age: u32,
    pub end_age: u32,
}

/// One of the twelve palaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palace {
    pub branch: Branch,
    pub stem: Stem,
    pub role: PalaceRole,
    pub is_body_palace: bool,
    pub stars: Vec<PlacedStar>,
    /// Decade span (大限) that falls on this palace.
    pub decade: Option<AgeSpan>,
    /// Nominal ages up to 120 whose minor limit falls here.
    pub minor_limit_ages: Vec<u32>,
}

impl Palace {
    pub fn main_stars(&self) -> impl Iterator<Item = &PlacedStar> {
        self.stars.iter().filter(|s| s.kind == StarKind::Main)
    }

    pub fn has_star(&self, star: StarName) -> bool {
        self.stars.iter().any(|s| s.name == star)
    }

    /// An empty palace (空宫) holds no main star.
    pub fn is_empty(&self) -> bool {
        self.main_stars().next().is_none()
    }
}

/// A complete natal chart. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiweiChart {
    pub params: BaZiParams,
    pub bureau: Bureau,
    /// Indexed by branch, 子 first.
    pub palaces: [Palace; 12],
    pub life_palace: Branch,
    pub body_palace: Branch,
    pub masters: Masters,
    pub sihua: SihuaInfo,
    pub flying: FlyingTable,
    /// 来因宫.
    pub laiyin_palace: Branch,
    /// 斗君 of the birth year.
    pub dou_jun: Branch,
    pub decade_forward: bool,
    pub decades: Vec<DecadePeriod>,
}

impl ZiweiChart {
    pub fn palace(&self, branch: Branch) -> &Palace {
        &self.palaces[branch.index() as usize]
    }

    pub fn palace_by_role(&self, role: PalaceRole) -> &Palace {
        self.palace(ziwei_base::branch_of_role(self.life_palace, role))
    }

    /// Palace holding `star`.
    pub fn star_position(&self, star: StarName) -> Option<Branch> {
        self.palaces
            .iter()
            .find(|p| p.has_star(star))
            .map(|p| p.branch)
    }

    /// True when the calendar oracle failed and the chart rests on the
    /// 甲子 sentinel.
    pub fn is_degraded(&self) -> bool {
        self.params.is_degraded()
    }
}
