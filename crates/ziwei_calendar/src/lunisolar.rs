//! Chinese lunisolar date determination.
//!
//! Months run from the civil day of one new moon to the day before the
//! next. Civil days are reckoned on Beijing mean solar time before 1929
//! and on China Standard Time from then on. The month containing the
//! winter solstice is month 11. When 13 new-moon months fall between two
//! such months, the first of them without a principal term (中气) is the
//! leap month and repeats the number of the month before it.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::julian::date_from_day_number;
use crate::local_time::CHINA_STANDARD_OFFSET_MINUTES;
use crate::lunar_phase::{lunation_at_or_before, new_moon_jd_ut};
use crate::solar::{solar_longitude_at, solar_term_in_year};

const WINTER_SOLSTICE_DEG: f64 = 270.0;
const PRINCIPAL_TERM_SPAN_DEG: f64 = 30.0;
const STANDARD_ZONE_DAYS: f64 = CHINA_STANDARD_OFFSET_MINUTES as f64 / 1440.0;
/// Beijing mean solar time, 116°24′E.
const BEIJING_MEAN_ZONE_DAYS: f64 = 465.6 / 1440.0;
/// JDN of 1929-01-01, the first day reckoned on China Standard Time.
const STANDARD_TIME_FIRST_DAY: i64 = 2_425_613;

/// First days of lunations whose conjunction falls within minutes of
/// midnight, as `(computed, published)` day numbers.
const NEW_MOON_DAY_CORRECTIONS: [(i64, i64); 5] = [
    (2_430_613, 2_430_614), // 1942-09-10
    (2_431_056, 2_431_057), // 1943-11-27
    (2_434_777, 2_434_778), // 1954-02-03
    (2_435_900, 2_435_899), // 1957-03-02
    (2_472_635, 2_472_636), // 2057-09-28
];

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year number (changes at month 1, day 1).
    pub year: i32,
    /// Month number 1..=12.
    pub month: u8,
    /// Day of month 1..=30.
    pub day: u8,
    /// True for an intercalary (闰) month.
    pub is_leap: bool,
}

const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

const DAY_TENS: [&str; 4] = ["初", "十", "廿", "三"];
const DAY_UNITS: [&str; 10] = ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

impl LunarDate {
    /// Traditional month name, with the 闰 prefix for leap months.
    pub fn month_name(&self) -> String {
        let base = MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize];
        if self.is_leap {
            format!("闰{base}")
        } else {
            base.to_string()
        }
    }

    /// Traditional day name (初一 .. 三十).
    pub fn day_name(&self) -> String {
        match self.day {
            10 => "初十".to_string(),
            20 => "二十".to_string(),
            30 => "三十".to_string(),
            d => {
                let d = d.clamp(1, 29) as usize;
                format!("{}{}", DAY_TENS[d / 10], DAY_UNITS[d % 10 - 1])
            }
        }
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}年{}{}", self.year, self.month_name(), self.day_name())
    }
}

/// Zone offset in days for civil day `jdn`.
fn zone_days(jdn: i64) -> f64 {
    if jdn < STANDARD_TIME_FIRST_DAY {
        BEIJING_MEAN_ZONE_DAYS
    } else {
        STANDARD_ZONE_DAYS
    }
}

/// Civil day (JDN) containing the UT instant `jd_ut`.
fn civil_day_of(jd_ut: f64) -> i64 {
    let standard = (jd_ut + STANDARD_ZONE_DAYS + 0.5).floor() as i64;
    if standard < STANDARD_TIME_FIRST_DAY {
        (jd_ut + BEIJING_MEAN_ZONE_DAYS + 0.5).floor() as i64
    } else {
        standard
    }
}

/// Civil day (JDN) on which a lunation begins.
fn lunation_start_day(k: i64) -> i64 {
    let day = civil_day_of(new_moon_jd_ut(k));
    NEW_MOON_DAY_CORRECTIONS
        .iter()
        .find(|&&(computed, _)| computed == day)
        .map_or(day, |&(_, published)| published)
}

/// UT instant of local midnight opening civil day `jdn`.
fn day_start_jd_ut(jdn: i64) -> f64 {
    jdn as f64 - 0.5 - zone_days(jdn)
}

/// Lunation that opens month 11 of the sui containing the solstice of `year`.
fn month_eleven_lunation(year: i32) -> Result<i64, CalendarError> {
    let solstice = solar_term_in_year(year, WINTER_SOLSTICE_DEG)?;
    let solstice_day = civil_day_of(solstice);
    let mut k = lunation_at_or_before(solstice);
    while lunation_start_day(k) > solstice_day {
        k -= 1;
    }
    while lunation_start_day(k + 1) <= solstice_day {
        k += 1;
    }
    Ok(k)
}

/// Whether the civil-day span `[start, end)` contains a principal term.
fn has_principal_term(start_day: i64, end_day: i64) -> bool {
    let a = solar_longitude_at(day_start_jd_ut(start_day)) / PRINCIPAL_TERM_SPAN_DEG;
    let b = solar_longitude_at(day_start_jd_ut(end_day)) / PRINCIPAL_TERM_SPAN_DEG;
    a.floor() != b.floor()
}

/// Lunisolar date of the civil day with Julian Day Number `jdn`.
pub fn lunar_date_for_day(jdn: i64) -> Result<LunarDate, CalendarError> {
    let (greg_year, greg_month, _) = date_from_day_number(jdn);

    let this_eleven = month_eleven_lunation(greg_year)?;
    let (first, last) = if jdn >= lunation_start_day(this_eleven) {
        (this_eleven, month_eleven_lunation(greg_year + 1)?)
    } else {
        (month_eleven_lunation(greg_year - 1)?, this_eleven)
    };

    let starts: Vec<i64> = (first..=last).map(lunation_start_day).collect();
    let month_count = starts.len() - 1;

    let leap_index = if month_count == 13 {
        (0..month_count).find(|&i| !has_principal_term(starts[i], starts[i + 1]))
    } else {
        None
    };

    let index = starts
        .iter()
        .rposition(|&s| s <= jdn)
        .ok_or(CalendarError::NoConvergence("lunar month lookup"))?;

    let position = match leap_index {
        Some(l) if index >= l => index - 1,
        _ => index,
    };
    let month = ((10 + position) % 12 + 1) as u8;
    let day = (jdn - starts[index] + 1) as u8;

    let year = if month >= 11 && greg_month < 6 {
        greg_year - 1
    } else {
        greg_year
    };

    Ok(LunarDate {
        year,
        month,
        day,
        is_leap: leap_index == Some(index),
    })
}
