//! BaZi decade fortunes (大运) and the starting offset (起运).
//!
//! Direction is forward for a yang year stem with a male native or a yin
//! year stem with a female native, backward otherwise. The starting offset
//! is the time from birth to the next (forward) or previous (backward)
//! sectional term, scaled so that three days count as one year.

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::ganzhi::{GanZhi, Stem};
use crate::pillars::LICHUN_DEG;
use crate::solar::{TROPICAL_YEAR_DAYS, find_solar_longitude, solar_longitude_at};

/// Number of decade fortunes generated.
pub const FORTUNE_COUNT: usize = 10;

const MINUTES_PER_YEAR: i64 = 3 * 24 * 60;
const MINUTES_PER_MONTH: i64 = 12 * 60;
const MINUTES_PER_DAY: i64 = 12;
const SECTIONAL_SPAN_DEG: f64 = 30.0;

/// Sex of the native.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

/// Whether fortunes run forward for this year stem and gender.
pub const fn is_forward(year_stem: Stem, gender: Gender) -> bool {
    year_stem.is_yang() == gender.is_male()
}

/// Time from birth until the first fortune begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Qiyun {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl Qiyun {
    /// Scale the span between birth and the governing term.
    pub fn from_span_days(span_days: f64) -> Self {
        let minutes = (span_days.abs() * 1440.0).round() as i64;
        let years = minutes / MINUTES_PER_YEAR;
        let rest = minutes % MINUTES_PER_YEAR;
        Self {
            years: years as u32,
            months: (rest / MINUTES_PER_MONTH) as u32,
            days: ((rest % MINUTES_PER_MONTH) / MINUTES_PER_DAY) as u32,
        }
    }
}

/// One decade fortune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecadeFortune {
    /// 1-based position in the sequence.
    pub ordinal: u8,
    pub ganzhi: GanZhi,
    /// Nominal (虚岁) age at which the fortune begins.
    pub start_age: u32,
    pub end_age: u32,
    pub start_year: i32,
    pub end_year: i32,
}

/// Direction, starting offset and the decade fortunes of a native.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FortuneTable {
    pub forward: bool,
    pub qiyun: Qiyun,
    pub periods: Vec<DecadeFortune>,
}

/// UT instant of the sectional term bracketing `jd_ut` in the given direction.
fn governing_sectional_term(jd_ut: f64, forward: bool) -> Result<f64, CalendarError> {
    let past = (solar_longitude_at(jd_ut) - LICHUN_DEG).rem_euclid(360.0);
    let ordinal = (past / SECTIONAL_SPAN_DEG).floor();
    let (target_past, gap) = if forward {
        let t = ordinal + 1.0;
        (t, t * SECTIONAL_SPAN_DEG - past)
    } else {
        (ordinal, ordinal * SECTIONAL_SPAN_DEG - past)
    };
    let target = (LICHUN_DEG + target_past * SECTIONAL_SPAN_DEG).rem_euclid(360.0);
    let guess = jd_ut + gap * TROPICAL_YEAR_DAYS / 360.0;
    find_solar_longitude(target, guess)
}

/// Build the decade-fortune table for a birth at `jd_ut`.
///
/// `birth_year` is the Gregorian year used for the calendar-year columns;
/// `month_pillar` seeds the sequence, stepping one pair per decade.
pub fn decade_fortunes(
    jd_ut: f64,
    birth_year: i32,
    year_stem: Stem,
    month_pillar: GanZhi,
    gender: Gender,
) -> Result<FortuneTable, CalendarError> {
    let forward = is_forward(year_stem, gender);
    let term = governing_sectional_term(jd_ut, forward)?;
    let qiyun = Qiyun::from_span_days(term - jd_ut);
    let step = if forward { 1 } else { -1 };

    let periods = (0..FORTUNE_COUNT)
        .map(|i| {
            let start_age = qiyun.years + 1 + 10 * i as u32;
            let start_year = birth_year + qiyun.years as i32 + 10 * i as i32;
            DecadeFortune {
                ordinal: i as u8 + 1,
                ganzhi: month_pillar.offset(step * (i as i32 + 1)),
                start_age,
                end_age: start_age + 9,
                start_year,
                end_year: start_year + 9,
            }
        })
        .collect();

    Ok(FortuneTable {
        forward,
        qiyun,
        periods,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::Branch;
    use crate::julian::calendar_to_jd;

    #[test]
    fn direction_rule() {
        assert!(is_forward(Stem::Jia, Gender::Male));
        assert!(!is_forward(Stem::Jia, Gender::Female));
        assert!(is_forward(Stem::Yi, Gender::Female));
        assert!(!is_forward(Stem::Gui, Gender::Male));
    }

    #[test]
    fn qiyun_scaling() {
        // 3 days = 1 year, 12 hours = 1 month, 2 hours = 10 days
        let q = Qiyun::from_span_days(3.0 + 0.5 + 2.0 / 24.0);
        assert_eq!(
            q,
            Qiyun {
                years: 1,
                months: 1,
                days: 10
            }
        );
        assert_eq!(Qiyun::from_span_days(-6.0).years, 2);
    }

    #[test]
    fn forward_fortunes_step_month_pillar() {
        let jd = calendar_to_jd(1990, 5, 15.0 + 4.0 / 24.0);
        let month = GanZhi::new(Stem::Xin, Branch::Si).unwrap();
        let table = decade_fortunes(jd, 1990, Stem::Geng, month, Gender::Male).unwrap();
        assert!(table.forward);
        assert_eq!(table.periods.len(), FORTUNE_COUNT);
        assert_eq!(table.periods[0].ganzhi.to_string(), "壬午");
        assert_eq!(table.periods[1].ganzhi.to_string(), "癸未");
        // Next 节 is 芒种 (June 6), about 22 days away: roughly 7 years.
        assert_eq!(table.qiyun.years, 7);
        for pair in table.periods.windows(2) {
            assert_eq!(pair[1].start_age, pair[0].end_age + 1);
        }
    }

    #[test]
    fn backward_fortunes_count_to_previous_term() {
        let jd = calendar_to_jd(1990, 5, 15.0 + 4.0 / 24.0);
        let month = GanZhi::new(Stem::Xin, Branch::Si).unwrap();
        let table = decade_fortunes(jd, 1990, Stem::Geng, month, Gender::Female).unwrap();
        assert!(!table.forward);
        assert_eq!(table.periods[0].ganzhi.to_string(), "庚辰");
        // Previous 节 is 立夏 (May 6), about 9 days back: 3 years.
        assert_eq!(table.qiyun.years, 3);
    }
}
