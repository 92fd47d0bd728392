//! Decade periods (大限).
//!
//! The first span starts at the bureau step as a nominal age and sits on
//! the life palace. Each following span moves one palace clockwise when
//! the chart runs forward and counter-clockwise otherwise.
//!
//! Direction only picks the palace walk. Ages are the same either way:
//! span `i` always covers `step + 10i ..= step + 10i + 9`.

use tracing::trace;
use ziwei_calendar::{Branch, Gender, Stem, is_forward};

use super::types::DecadePeriod;
use crate::bureau::Bureau;
use crate::palace::role_at;

pub const DECADE_COUNT: usize = 10;
pub const DECADE_SPAN_YEARS: u32 = 10;

/// Forward for a yang year stem with a male native or a yin year stem
/// with a female native.
pub const fn decade_forward(year_stem: Stem, gender: Gender) -> bool {
    is_forward(year_stem, gender)
}

/// The ten decade periods. `stems` holds the palace stems by branch.
pub fn decade_periods(
    life: Branch,
    bureau: Bureau,
    forward: bool,
    birth_year: i32,
    stems: &[Stem; 12],
) -> Vec<DecadePeriod> {
    let dir = if forward { 1 } else { -1 };
    let periods: Vec<DecadePeriod> = (0..DECADE_COUNT as u8)
        .map(|i| {
            let branch = life.offset(dir * i as i32);
            let start_age = bureau.step() as u32 + DECADE_SPAN_YEARS * i as u32;
            let end_age = start_age + DECADE_SPAN_YEARS - 1;
            DecadePeriod {
                index: i,
                branch,
                stem: stems[branch.index() as usize],
                role: role_at(life, branch),
                start_age,
                end_age,
                start_year: birth_year + start_age as i32 - 1,
                end_year: birth_year + end_age as i32 - 1,
            }
        })
        .collect();
    trace!(%life, %bureau, forward, count = periods.len(), "decade periods");
    periods
}

/// Decade containing a nominal age, if any.
pub fn current_decade(periods: &[DecadePeriod], nominal_age: u32) -> Option<&DecadePeriod> {
    periods.iter().find(|p| p.contains_age(nominal_age))
}
