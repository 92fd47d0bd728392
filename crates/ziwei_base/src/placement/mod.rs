//! Star placement.
//!
//! Five independent rule families each return a list of
//! [`StarPlacement`]s:
//! - main stars anchored on the bureau and lunar day
//! - auxiliary stars from month, hour, year stem and year branch
//! - malefic stars stepped from year-dependent anchors
//! - romance stars anchored on the year branch
//! - minor stars derived from the above and the birth data
//!
//! [`place_all_stars`] concatenates them in that order. Several stars may
//! share a palace; nothing is ever overwritten.

pub mod auxiliary;
pub mod main_stars;
pub mod malefic;
pub mod minor;
pub mod romance;

use serde::{Deserialize, Serialize};
use ziwei_calendar::{Branch, Stem};

use crate::bazi::BaZiParams;
use crate::bureau::Bureau;
use crate::star::{Brightness, StarKind, StarName};

pub use auxiliary::{kui_yue, lu_cun, place_auxiliary_stars, tian_ma, wen_chang, wen_qu, you_bi, zuo_fu};
pub use main_stars::{TIANFU_SERIES, ZIWEI_SERIES, place_main_stars, tianfu_position, ziwei_position};
pub use malefic::{fire_bell_anchors, huo_xing, ling_xing, place_malefic_stars};
pub use minor::place_minor_stars;
pub use romance::{hong_luan, place_romance_stars, tian_yao, xian_chi};

/// One star at one palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StarPlacement {
    pub star: StarName,
    pub branch: Branch,
}

impl StarPlacement {
    pub const fn new(star: StarName, branch: Branch) -> Self {
        Self { star, branch }
    }

    pub const fn kind(&self) -> StarKind {
        self.star.kind()
    }

    pub const fn brightness(&self) -> Brightness {
        self.star.brightness_at(self.branch)
    }
}

/// Birth quantities the placement rules read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacementInput {
    pub bureau: Bureau,
    pub year_stem: Stem,
    pub year_branch: Branch,
    /// Lunar month 1..=12 after the leap-month rule.
    pub lunar_month: u8,
    /// Lunar day 1..=30.
    pub lunar_day: u8,
    pub time_branch: Branch,
}

impl PlacementInput {
    pub fn from_params(params: &BaZiParams, bureau: Bureau) -> Self {
        Self {
            bureau,
            year_stem: params.year_stem(),
            year_branch: params.year_branch(),
            lunar_month: params.chart_month,
            lunar_day: params.lunar_day,
            time_branch: params.time_branch,
        }
    }

    /// Month steps from the first month, 0..=11.
    pub(crate) const fn month_steps(&self) -> i32 {
        self.lunar_month as i32 - 1
    }

    pub(crate) const fn hour_steps(&self) -> i32 {
        self.time_branch.index() as i32
    }
}

/// All placements of a chart in family order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StarLayout {
    placements: Vec<StarPlacement>,
}

impl StarLayout {
    /// Append a family's placements.
    pub fn extend(&mut self, family: impl IntoIterator<Item = StarPlacement>) {
        self.placements.extend(family);
    }

    pub fn iter(&self) -> impl Iterator<Item = &StarPlacement> {
        self.placements.iter()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Palace of `star`, if placed.
    pub fn position(&self, star: StarName) -> Option<Branch> {
        self.placements
            .iter()
            .find(|p| p.star == star)
            .map(|p| p.branch)
    }

    /// Stars in the palace at `branch`, in placement order.
    pub fn stars_at(&self, branch: Branch) -> impl Iterator<Item = StarName> + '_ {
        self.placements
            .iter()
            .filter(move |p| p.branch == branch)
            .map(|p| p.star)
    }

    /// How many times `star` was placed.
    pub fn count(&self, star: StarName) -> usize {
        self.placements.iter().filter(|p| p.star == star).count()
    }
}

/// Run all five families.
pub fn place_all_stars(input: &PlacementInput) -> StarLayout {
    let mut layout = StarLayout::default();
    layout.extend(place_main_stars(input.bureau, input.lunar_day));
    layout.extend(place_auxiliary_stars(input));
    layout.extend(place_malefic_stars(input));
    layout.extend(place_romance_stars(input));
    layout.extend(place_minor_stars(input));
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star::{ALL_STARS, STAR_COUNT};

    fn input() -> PlacementInput {
        PlacementInput {
            bureau: Bureau::Wood3,
            year_stem: Stem::Geng,
            year_branch: Branch::Wu,
            lunar_month: 4,
            lunar_day: 21,
            time_branch: Branch::Wei,
        }
    }

    #[test]
    fn every_star_placed_once() {
        let layout = place_all_stars(&input());
        assert_eq!(layout.len(), STAR_COUNT);
        for s in ALL_STARS {
            assert_eq!(layout.count(s), 1, "{s}");
        }
    }

    #[test]
    fn families_in_order() {
        let layout = place_all_stars(&input());
        let kinds: Vec<StarKind> = layout.iter().map(|p| p.kind()).collect();
        let first_aux = kinds.iter().position(|k| *k == StarKind::Auxiliary).unwrap();
        assert_eq!(first_aux, 14);
        assert!(kinds[..14].iter().all(|k| *k == StarKind::Main));
    }

    #[test]
    fn shared_palaces_keep_every_star() {
        let layout = place_all_stars(&input());
        let total: usize = ziwei_calendar::ALL_BRANCHES
            .iter()
            .map(|b| layout.stars_at(*b).count())
            .sum();
        assert_eq!(total, layout.len());
    }
}
