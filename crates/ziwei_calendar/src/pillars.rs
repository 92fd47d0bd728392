//! The four pillars (四柱): year, month, day and hour GanZhi.
//!
//! Year and month pillars change at sectional solar terms (立春 and the
//! following 节), evaluated at the exact instant. The day pillar follows
//! the civil date; the hour pillar follows the double-hour branch.

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::ganzhi::{Branch, GanZhi, Stem, five_rats_stem, five_tigers_stem};
use crate::solar::{solar_longitude_at, solar_term_in_year};

/// Solar longitude of 立春, where the 寅 month and the sexagenary year begin.
pub const LICHUN_DEG: f64 = 315.0;

const SOLAR_MONTH_SPAN_DEG: f64 = 30.0;

/// Double-hour branch for each clock hour 0..=23.
///
/// 午 covers only hour 12; the forenoon hours 9–11 stay with 巳.
pub const HOUR_BRANCHES: [Branch; 24] = [
    Branch::Zi,   // 0
    Branch::Chou, // 1
    Branch::Chou, // 2
    Branch::Yin,  // 3
    Branch::Yin,  // 4
    Branch::Mao,  // 5
    Branch::Mao,  // 6
    Branch::Chen, // 7
    Branch::Chen, // 8
    Branch::Si,   // 9
    Branch::Si,   // 10
    Branch::Si,   // 11
    Branch::Wu,   // 12
    Branch::Wei,  // 13
    Branch::Wei,  // 14
    Branch::Shen, // 15
    Branch::Shen, // 16
    Branch::You,  // 17
    Branch::You,  // 18
    Branch::Xu,   // 19
    Branch::Xu,   // 20
    Branch::Hai,  // 21
    Branch::Hai,  // 22
    Branch::Zi,   // 23
];

/// Double-hour branch for a clock hour, `None` outside 0..=23.
pub fn hour_branch(hour: u32) -> Option<Branch> {
    HOUR_BRANCHES.get(hour as usize).copied()
}

/// Time-branch index (子=0 .. 亥=11) for a clock hour.
pub fn time_branch_index(hour: u32) -> Option<u8> {
    hour_branch(hour).map(Branch::index)
}

/// Year, month, day and hour pillars of a birth instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: GanZhi,
    pub hour: GanZhi,
}

/// Gregorian year whose 立春 most recently preceded `jd_ut`.
pub fn solar_year_at(jd_ut: f64, calendar_year: i32) -> Result<i32, CalendarError> {
    let lichun = solar_term_in_year(calendar_year, LICHUN_DEG)?;
    Ok(if jd_ut < lichun {
        calendar_year - 1
    } else {
        calendar_year
    })
}

/// Year pillar for the instant `jd_ut` falling in Gregorian `calendar_year`.
pub fn year_pillar(jd_ut: f64, calendar_year: i32) -> Result<GanZhi, CalendarError> {
    Ok(GanZhi::for_year(solar_year_at(jd_ut, calendar_year)?))
}

/// Solar month ordinal at `jd_ut`: 0 = 寅 month (from 立春) .. 11 = 丑 month.
pub fn solar_month_ordinal(jd_ut: f64) -> u8 {
    let past_lichun = (solar_longitude_at(jd_ut) - LICHUN_DEG).rem_euclid(360.0);
    ((past_lichun / SOLAR_MONTH_SPAN_DEG).floor() as u8).min(11)
}

/// Month pillar from the solar month ordinal and the year stem in force.
pub fn month_pillar(ordinal: u8, year_stem: Stem) -> GanZhi {
    let steps = ordinal as i32;
    GanZhi {
        stem: five_tigers_stem(year_stem).offset(steps),
        branch: Branch::Yin.offset(steps),
    }
}

/// Day pillar for a Julian Day Number; 2000-01-01 (JDN 2451545) is 戊午.
pub fn day_pillar(jdn: i64) -> GanZhi {
    GanZhi::from_cycle_index((jdn + 49).rem_euclid(60) as u8)
}

/// Hour pillar from the day stem and the double-hour branch.
pub fn hour_pillar(day_stem: Stem, branch: Branch) -> GanZhi {
    GanZhi {
        stem: five_rats_stem(day_stem).offset(branch.index() as i32),
        branch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::{calendar_to_jd, day_number};

    #[test]
    fn hour_table_boundaries() {
        assert_eq!(time_branch_index(12), Some(6));
        assert_eq!(time_branch_index(13), Some(7));
        assert_eq!(time_branch_index(11), Some(5));
        assert_eq!(time_branch_index(23), Some(0));
        assert_eq!(time_branch_index(0), Some(0));
        assert_eq!(time_branch_index(24), None);
        let noon_hours = (0..24).filter(|&h| time_branch_index(h) == Some(6)).count();
        assert_eq!(noon_hours, 1);
    }

    #[test]
    fn every_branch_reachable() {
        for b in 0..12u8 {
            assert!((0..24).any(|h| time_branch_index(h) == Some(b)));
        }
    }

    #[test]
    fn day_pillar_reference_dates() {
        assert_eq!(day_pillar(day_number(2000, 1, 1)).to_string(), "戊午");
        assert_eq!(day_pillar(day_number(2024, 2, 10)).to_string(), "甲辰");
        assert_eq!(day_pillar(day_number(1949, 10, 1)).to_string(), "甲子");
    }

    #[test]
    fn year_changes_at_lichun() {
        // 立春 2024 at 2024-02-04 08:27 UT.
        let before = calendar_to_jd(2024, 2, 4.0 + 6.0 / 24.0);
        let after = calendar_to_jd(2024, 2, 4.0 + 10.0 / 24.0);
        assert_eq!(year_pillar(before, 2024).unwrap().to_string(), "癸卯");
        assert_eq!(year_pillar(after, 2024).unwrap().to_string(), "甲辰");
    }

    #[test]
    fn month_pillars() {
        assert_eq!(month_pillar(0, Stem::Jia).to_string(), "丙寅");
        assert_eq!(month_pillar(11, Stem::Jia).to_string(), "丁丑");
        assert_eq!(month_pillar(0, Stem::Gui).to_string(), "甲寅");
        let mid_may = calendar_to_jd(2024, 5, 15.0);
        assert_eq!(solar_month_ordinal(mid_may), 3);
    }

    #[test]
    fn hour_pillars() {
        assert_eq!(hour_pillar(Stem::Jia, Branch::Zi).to_string(), "甲子");
        assert_eq!(hour_pillar(Stem::Wu, Branch::Wu).to_string(), "戊午");
        assert_eq!(hour_pillar(Stem::Yi, Branch::Hai).to_string(), "丁亥");
    }
}
