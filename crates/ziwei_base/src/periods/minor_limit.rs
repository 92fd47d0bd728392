//! Minor limit (小限).
//!
//! Nominal age 1 starts on a palace fixed by the year-branch triad; men
//! move clockwise one palace per year, women counter-clockwise.

use ziwei_calendar::{ALL_BRANCHES, Branch, Gender};

use super::types::MinorLimit;
use crate::palace::role_at;

/// Ages tracked when listing the minor-limit ages of each palace.
pub const MINOR_LIMIT_MAX_AGE: u32 = 120;

/// Palace of nominal age 1.
pub const fn minor_limit_start(year_branch: Branch) -> Branch {
    match year_branch.triad() {
        // 申子辰
        0 => Branch::Xu,
        // 亥卯未
        1 => Branch::Chou,
        // 寅午戌
        2 => Branch::Chen,
        // 巳酉丑
        _ => Branch::Wei,
    }
}

/// Minor-limit palace for a nominal age (ages below 1 count as 1).
pub const fn minor_limit_branch(year_branch: Branch, gender: Gender, nominal_age: u32) -> Branch {
    let steps = if nominal_age == 0 {
        0
    } else {
        ((nominal_age - 1) % 12) as i32
    };
    let dir = if gender.is_male() { 1 } else { -1 };
    minor_limit_start(year_branch).offset(dir * steps)
}

pub fn minor_limit(
    life: Branch,
    year_branch: Branch,
    gender: Gender,
    nominal_age: u32,
) -> MinorLimit {
    let branch = minor_limit_branch(year_branch, gender, nominal_age);
    MinorLimit {
        nominal_age,
        branch,
        role: role_at(life, branch),
    }
}

/// Nominal ages 1..=120 whose minor limit falls on each palace, by branch.
pub fn minor_limit_ages(year_branch: Branch, gender: Gender) -> [Vec<u32>; 12] {
    let mut ages: [Vec<u32>; 12] = Default::default();
    let start = minor_limit_start(year_branch);
    for b in ALL_BRANCHES {
        let steps = if gender.is_male() {
            start.steps_to(b)
        } else {
            b.steps_to(start)
        };
        let first = steps as u32 + 1;
        ages[b.index() as usize] = (first..=MINOR_LIMIT_MAX_AGE).step_by(12).collect();
    }
    ages
}
