//! Age arithmetic.

use super::types::TargetDate;

/// Completed years between birth and target; never negative.
pub fn western_age(birth: TargetDate, target: TargetDate) -> u32 {
    let mut years = target.year - birth.year;
    if (target.month, target.day) < (birth.month, birth.day) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Nominal age (虚岁): one in the year of birth, plus one each new year.
pub fn nominal_age(birth_year: i32, target_year: i32) -> u32 {
    (target_year - birth_year + 1).max(1) as u32
}
