//! Result types of the time-period calculators.

use serde::{Deserialize, Serialize};
use ziwei_calendar::{Branch, GanZhi, Stem};

use crate::palace::PalaceRole;

/// A calendar date to evaluate periods at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl TargetDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// One 10-year span (大限) mapped onto a palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecadePeriod {
    /// 0-based position in the sequence.
    pub index: u8,
    pub branch: Branch,
    pub stem: Stem,
    pub role: PalaceRole,
    /// Nominal (虚岁) ages, inclusive.
    pub start_age: u32,
    pub end_age: u32,
    pub start_year: i32,
    pub end_year: i32,
}

impl DecadePeriod {
    pub const fn contains_age(&self, nominal_age: u32) -> bool {
        nominal_age >= self.start_age && nominal_age <= self.end_age
    }
}

/// The fleeting year (流年).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FleetingYear {
    /// Lunar year number.
    pub year: i32,
    pub ganzhi: GanZhi,
    pub branch: Branch,
    pub role: PalaceRole,
    pub age: u32,
    pub nominal_age: u32,
    /// 斗君: palace of the year's first month.
    pub dou_jun: Branch,
}

/// The fleeting month (流月).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FleetingMonth {
    pub month: u8,
    pub is_leap: bool,
    pub ganzhi: GanZhi,
    pub branch: Branch,
    pub role: PalaceRole,
}

/// The minor limit (小限) for one nominal age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinorLimit {
    pub nominal_age: u32,
    pub branch: Branch,
    pub role: PalaceRole,
}
