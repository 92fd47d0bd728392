//! Chart assembly: runs every calculator over one [`BaZiParams`].

use tracing::debug;
use ziwei_base::{
    BaZiParams, FlyingTable, MAIN_STARS, Masters, PlacementInput, SihuaInfo, StarLayout,
    body_palace, bureau_for_life_palace, decade_forward, decade_periods, dou_jun, laiyin_palace,
    life_palace, minor_limit_ages, palace_stems, place_all_stars, role_at, sihua_for_stem,
};
use ziwei_calendar::{ALL_BRANCHES, Branch};

use crate::chart::{AgeSpan, Palace, PlacedStar, SelfMarker, ZiweiChart};

/// Build the chart for a parameter record.
///
/// # Panics
/// If a rule table places a main star other than exactly once.
pub fn assemble_chart(params: BaZiParams) -> ZiweiChart {
    let year_stem = params.year_stem();
    let year_branch = params.year_branch();
    let life = life_palace(params.chart_month, params.time_branch);
    let body = body_palace(params.chart_month, params.time_branch);
    let bureau = bureau_for_life_palace(year_stem, life);
    let stems = palace_stems(year_stem);

    let layout = place_all_stars(&PlacementInput::from_params(&params, bureau));
    for star in MAIN_STARS {
        let n = layout.count(star);
        assert!(n == 1, "main star {star} placed {n} times");
    }

    let sihua = sihua_for_stem(year_stem);
    let flying = FlyingTable::build(&layout, &stems, &sihua);
    let forward = decade_forward(year_stem, params.gender);
    let decades = decade_periods(life, bureau, forward, params.lunar_year, &stems);
    let minor_ages = minor_limit_ages(year_branch, params.gender);
    let mut minor_ages = minor_ages.into_iter();

    let palaces = ALL_BRANCHES.map(|branch| {
        let decade = decades
            .iter()
            .find(|d| d.branch == branch)
            .map(|d| AgeSpan {
                start_age: d.start_age,
                end_age: d.end_age,
            });
        Palace {
            branch,
            stem: stems[branch.index() as usize],
            role: role_at(life, branch),
            is_body_palace: branch == body,
            stars: stars_in(branch, &layout, &sihua, &flying),
            decade,
            minor_limit_ages: minor_ages.next().unwrap_or_default(),
        }
    });

    let chart = ZiweiChart {
        bureau,
        palaces,
        life_palace: life,
        body_palace: body,
        masters: Masters::for_year_branch(year_branch),
        sihua,
        flying,
        laiyin_palace: laiyin_palace(year_stem),
        dou_jun: dou_jun(year_branch, params.chart_month, params.time_branch),
        decade_forward: forward,
        decades,
        params,
    };
    debug!(
        bureau = %chart.bureau,
        life_palace = %chart.life_palace,
        body_palace = %chart.body_palace,
        degraded = chart.is_degraded(),
        "chart assembled"
    );
    chart
}

fn stars_in(
    branch: Branch,
    layout: &StarLayout,
    sihua: &SihuaInfo,
    flying: &FlyingTable,
) -> Vec<PlacedStar> {
    layout
        .stars_at(branch)
        .map(|name| PlacedStar {
            name,
            kind: name.kind(),
            brightness: name.brightness_at(branch),
            birth_sihua: sihua.role_of(name),
            self_transforms: flying
                .self_transformations(branch)
                .filter(|s| s.star == name)
                .map(|s| SelfMarker {
                    kind: s.kind,
                    role: s.role,
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_base::{ChartConfig, SolarDate, to_bazi_params};
    use ziwei_calendar::{AstronomicalOracle, Gender};

    fn chart(y: i32, m: u32, d: u32, h: u32, g: Gender) -> ZiweiChart {
        let params = to_bazi_params(
            &AstronomicalOracle::new(),
            SolarDate::new(y, m, d, h),
            g,
            &ChartConfig::default(),
        )
        .unwrap();
        assemble_chart(params)
    }

    #[test]
    fn palaces_are_indexed_by_branch() {
        let c = chart(1990, 5, 15, 14, Gender::Male);
        for (i, p) in c.palaces.iter().enumerate() {
            assert_eq!(p.branch.index() as usize, i);
        }
        assert_eq!(c.palace(c.life_palace).role, ziwei_base::PalaceRole::Life);
        assert_eq!(c.palaces.iter().filter(|p| p.is_body_palace).count(), 1);
    }

    #[test]
    fn decade_annotations_cover_ten_palaces() {
        let c = chart(1985, 11, 3, 7, Gender::Female);
        assert_eq!(c.palaces.iter().filter(|p| p.decade.is_some()).count(), 10);
        assert_eq!(
            c.palace(c.life_palace).decade.map(|d| d.start_age),
            Some(c.bureau.step() as u32)
        );
    }

    #[test]
    fn birth_sihua_marks_four_slots() {
        let c = chart(2000, 8, 8, 20, Gender::Male);
        let marked = c
            .palaces
            .iter()
            .flat_map(|p| p.stars.iter())
            .filter(|s| s.birth_sihua.is_some())
            .count();
        assert_eq!(marked, 4);
        assert!(c.star_position(c.sihua.lu).is_some());
    }

    #[test]
    fn self_markers_match_flying_table() {
        let c = chart(1977, 3, 21, 3, Gender::Male);
        let on_stars: usize = c
            .palaces
            .iter()
            .flat_map(|p| p.stars.iter())
            .map(|s| s.self_transforms.len())
            .sum();
        assert_eq!(on_stars, c.flying.all_self_transformations().len());
    }

    #[test]
    fn self_markers_come_from_own_stem_and_split_on_birth_role() {
        use ziwei_base::{SelfTransformKind, sihua_for_stem};
        for (y, m, d, h) in [(1977, 3, 21, 3), (1990, 5, 15, 14), (2003, 11, 2, 22)] {
            let c = chart(y, m, d, h, Gender::Female);
            for p in &c.palaces {
                let own = sihua_for_stem(p.stem);
                for s in &p.stars {
                    for mark in &s.self_transforms {
                        assert_eq!(own.role_of(s.name), Some(mark.role));
                        let expected = if s.birth_sihua.is_some() {
                            SelfTransformKind::Facing
                        } else {
                            SelfTransformKind::Departing
                        };
                        assert_eq!(mark.kind, expected);
                    }
                }
            }
        }
    }
}
