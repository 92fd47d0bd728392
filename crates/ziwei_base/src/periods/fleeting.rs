//! Fleeting year (流年) and fleeting month (流月).

use ziwei_calendar::{Branch, GanZhi, Stem, five_tigers_stem};

use super::types::{FleetingMonth, FleetingYear};
use crate::palace::{dou_jun, role_at};

/// Fleeting year for a target lunar year.
///
/// The year's palace is the palace of its own branch; the role is read
/// against the natal life palace.
pub fn fleeting_year(
    life: Branch,
    birth_lunar_year: i32,
    birth_lunar_month: u8,
    time_branch: Branch,
    target_lunar_year: i32,
) -> FleetingYear {
    let ganzhi = GanZhi::for_year(target_lunar_year);
    let branch = ganzhi.branch;
    let age = (target_lunar_year - birth_lunar_year).max(0) as u32;
    FleetingYear {
        year: target_lunar_year,
        ganzhi,
        branch,
        role: role_at(life, branch),
        age,
        nominal_age: age + 1,
        dou_jun: dou_jun(branch, birth_lunar_month, time_branch),
    }
}

/// Fleeting month `lunar_month` of a year whose stem is `year_stem`.
pub fn fleeting_month(
    life: Branch,
    year_stem: Stem,
    lunar_month: u8,
    is_leap: bool,
) -> FleetingMonth {
    let steps = lunar_month as i32 - 1;
    let branch = Branch::Yin.offset(steps);
    // 寅 month stems from the Five Tigers rule are all yang.
    let ganzhi = GanZhi {
        stem: five_tigers_stem(year_stem).offset(steps),
        branch,
    };
    FleetingMonth {
        month: lunar_month,
        is_leap,
        ganzhi,
        branch,
        role: role_at(life, branch),
    }
}
