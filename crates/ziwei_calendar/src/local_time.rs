//! Civil date/time with a fixed UTC offset.
//!
//! `LocalTime` is the input type of every calendar query. The Chinese
//! calendar itself is defined on China Standard Time (UTC+8); callers in
//! other zones pass their own offset and the absolute instant is recovered
//! through [`LocalTime::jd_ut`].

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::julian::{calendar_to_jd, date_from_day_number, day_number};

/// UTC offset of China Standard Time, in minutes.
pub const CHINA_STANDARD_OFFSET_MINUTES: i32 = 480;

const MINUTES_PER_DAY: i64 = 1440;

/// Wall-clock date and time at a fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Minutes east of UTC.
    pub utc_offset_minutes: i32,
}

impl LocalTime {
    /// A China Standard Time wall-clock instant.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_minutes: CHINA_STANDARD_OFFSET_MINUTES,
        }
    }

    /// Same wall-clock reading, interpreted at a different offset.
    pub fn with_offset(self, utc_offset_minutes: i32) -> Self {
        Self {
            utc_offset_minutes,
            ..self
        }
    }

    /// Julian Date (UT) of this instant.
    pub fn jd_ut(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0
            - self.utc_offset_minutes as f64 / 1440.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Julian Day Number of the civil date as written.
    pub fn day_number(&self) -> i64 {
        day_number(self.year, self.month, self.day)
    }

    /// The same instant expressed at another UTC offset.
    pub fn to_offset(&self, utc_offset_minutes: i32) -> Self {
        let minute_of_day = self.hour as i64 * 60
            + self.minute as i64
            + (utc_offset_minutes - self.utc_offset_minutes) as i64;
        let carry = minute_of_day.div_euclid(MINUTES_PER_DAY);
        let minute_of_day = minute_of_day.rem_euclid(MINUTES_PER_DAY);
        let (year, month, day) = date_from_day_number(self.day_number() + carry);
        Self {
            year,
            month,
            day,
            hour: (minute_of_day / 60) as u32,
            minute: (minute_of_day % 60) as u32,
            second: self.second,
            utc_offset_minutes,
        }
    }
}

impl Display for LocalTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.utc_offset_minutes < 0 { '-' } else { '+' };
        let off = self.utc_offset_minutes.unsigned_abs();
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second as u32,
            sign,
            off / 60,
            off % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beijing_midnight_is_previous_utc_day() {
        let t = LocalTime::new(2000, 1, 1, 0, 0, 0.0);
        // 2000-01-01T00:00+08:00 = 1999-12-31T16:00Z
        let expected = calendar_to_jd(1999, 12, 31.0 + 16.0 / 24.0);
        assert!((t.jd_ut() - expected).abs() < 1e-9);
    }

    #[test]
    fn offset_conversion_crosses_day() {
        let ny = LocalTime::new(2023, 12, 31, 20, 30, 0.0).with_offset(-300);
        let bj = ny.to_offset(CHINA_STANDARD_OFFSET_MINUTES);
        assert_eq!((bj.year, bj.month, bj.day, bj.hour, bj.minute), (2024, 1, 1, 9, 30));
        assert!((ny.jd_ut() - bj.jd_ut()).abs() < 1e-9);
    }

    #[test]
    fn display_format() {
        let t = LocalTime::new(1990, 5, 15, 12, 5, 0.0);
        assert_eq!(t.to_string(), "1990-05-15T12:05:00+08:00");
        assert_eq!(
            t.with_offset(-330).to_string(),
            "1990-05-15T12:05:00-05:30"
        );
    }
}
