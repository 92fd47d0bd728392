//! Calendar adapter and the canonical BaZi parameter record.
//!
//! Every downstream calculator reads a [`BaZiParams`]. It is built once per
//! chart from a [`CalendarOracle`] reading. An oracle failure does not
//! abort the chart: the record is filled with the 甲子 sentinel and tagged
//! [`CalendarStatus::Degraded`] so callers can branch on it explicitly.

use serde::{Deserialize, Serialize};
use tracing::warn;
use ziwei_calendar::{
    Branch, CalendarOracle, DecadeFortune, GanZhi, Gender, JIAZI, LocalTime, OracleReading,
    Qiyun, Stem, days_in_month, hour_branch,
};

use crate::config::ChartConfig;
use crate::error::ZiweiError;

/// Earliest supported birth year.
pub const MIN_YEAR: i32 = 1900;
/// Latest supported birth year.
pub const MAX_YEAR: i32 = 2100;

/// Birth date and clock hour as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl SolarDate {
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }
}

/// One BaZi decade period as carried on the parameter record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MajorPeriod {
    pub ordinal: u8,
    pub ganzhi: GanZhi,
    pub start_age: u32,
    pub end_age: u32,
    pub start_year: i32,
    pub end_year: i32,
}

impl From<DecadeFortune> for MajorPeriod {
    fn from(f: DecadeFortune) -> Self {
        Self {
            ordinal: f.ordinal,
            ganzhi: f.ganzhi,
            start_age: f.start_age,
            end_age: f.end_age,
            start_year: f.start_year,
            end_year: f.end_year,
        }
    }
}

/// Whether the calendar data behind a record is real or the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalendarStatus {
    Exact,
    Degraded { reason: String },
}

/// Tagged result of querying the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarReading {
    Exact(OracleReading),
    Degraded(String),
}

/// Canonical parameters shared by every chart calculator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaZiParams {
    pub solar: SolarDate,
    pub gender: Gender,
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: GanZhi,
    pub hour: GanZhi,
    pub lunar_year: i32,
    /// Lunar month number 1..=12 as reported by the calendar.
    pub lunar_month: u8,
    pub lunar_day: u8,
    pub is_leap_month: bool,
    /// Month number after the configured leap-month rule; used for placement.
    pub chart_month: u8,
    pub time_branch: Branch,
    pub major_periods: Vec<MajorPeriod>,
    pub qiyun: Qiyun,
    /// Nominal age at which the first major period begins.
    pub start_age: u32,
    pub fortune_forward: bool,
    pub calendar: CalendarStatus,
}

impl BaZiParams {
    pub fn year_stem(&self) -> Stem {
        self.year.stem
    }

    pub fn year_branch(&self) -> Branch {
        self.year.branch
    }

    /// Time-branch index 0..=11 (子 = 0).
    pub fn time_branch_index(&self) -> u8 {
        self.time_branch.index()
    }

    /// True when the record carries the 甲子 sentinel instead of calendar data.
    pub fn is_degraded(&self) -> bool {
        matches!(self.calendar, CalendarStatus::Degraded { .. })
    }

    /// Build the record from a validated birth input and an oracle reading.
    pub fn from_reading(
        solar: SolarDate,
        gender: Gender,
        time_branch: Branch,
        reading: CalendarReading,
        config: &ChartConfig,
    ) -> Self {
        match reading {
            CalendarReading::Exact(r) => {
                let chart_month =
                    config
                        .leap_month
                        .chart_month(r.lunar.month, r.lunar.day, r.lunar.is_leap);
                let start_age = r.fortune.qiyun.years + 1;
                Self {
                    solar,
                    gender,
                    year: r.pillars.year,
                    month: r.pillars.month,
                    day: r.pillars.day,
                    hour: r.pillars.hour,
                    lunar_year: r.lunar.year,
                    lunar_month: r.lunar.month,
                    lunar_day: r.lunar.day,
                    is_leap_month: r.lunar.is_leap,
                    chart_month,
                    time_branch,
                    major_periods: r.fortune.periods.into_iter().map(MajorPeriod::from).collect(),
                    qiyun: r.fortune.qiyun,
                    start_age,
                    fortune_forward: r.fortune.forward,
                    calendar: CalendarStatus::Exact,
                }
            }
            CalendarReading::Degraded(reason) => {
                let lunar_month = solar.month as u8;
                Self {
                    solar,
                    gender,
                    year: JIAZI,
                    month: JIAZI,
                    day: JIAZI,
                    hour: JIAZI,
                    lunar_year: solar.year,
                    lunar_month,
                    lunar_day: solar.day.min(30) as u8,
                    is_leap_month: false,
                    chart_month: lunar_month,
                    time_branch,
                    major_periods: Vec::new(),
                    qiyun: Qiyun::default(),
                    start_age: 0,
                    fortune_forward: ziwei_calendar::is_forward(JIAZI.stem, gender),
                    calendar: CalendarStatus::Degraded { reason },
                }
            }
        }
    }
}

fn invalid(field: &'static str, value: i64, expected: &'static str) -> ZiweiError {
    ZiweiError::InvalidInput {
        field,
        value,
        expected,
    }
}

/// Reject out-of-domain birth fields before any calculation.
pub fn validate_birth(year: i32, month: u32, day: u32, hour: u32) -> Result<(), ZiweiError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(invalid("year", year as i64, "1900..=2100"));
    }
    if !(1..=12).contains(&month) {
        return Err(invalid("month", month as i64, "1..=12"));
    }
    if !(1..=31).contains(&day) {
        return Err(invalid("day", day as i64, "1..=31"));
    }
    if day > days_in_month(year, month) {
        return Err(invalid("day", day as i64, "a day within the month"));
    }
    if hour > 23 {
        return Err(invalid("hour", hour as i64, "0..=23"));
    }
    Ok(())
}

/// Query the oracle, mapping any failure to the degraded reading.
pub fn read_calendar<O: CalendarOracle>(
    oracle: &O,
    instant: &LocalTime,
    gender: Gender,
) -> CalendarReading {
    match oracle.read(instant, gender) {
        Ok(r) => CalendarReading::Exact(r),
        Err(e) => {
            warn!(%instant, error = %e, "calendar oracle failed; using 甲子 sentinel");
            CalendarReading::Degraded(e.to_string())
        }
    }
}

/// Convert a birth instant into [`BaZiParams`].
pub fn to_bazi_params<O: CalendarOracle>(
    oracle: &O,
    solar: SolarDate,
    gender: Gender,
    config: &ChartConfig,
) -> Result<BaZiParams, ZiweiError> {
    validate_birth(solar.year, solar.month, solar.day, solar.hour)?;
    let time_branch =
        hour_branch(solar.hour).ok_or(invalid("hour", solar.hour as i64, "0..=23"))?;
    let instant = LocalTime::new(solar.year, solar.month, solar.day, solar.hour, 0, 0.0)
        .with_offset(config.utc_offset_minutes);
    let reading = read_calendar(oracle, &instant, gender);
    Ok(BaZiParams::from_reading(
        solar,
        gender,
        time_branch,
        reading,
        config,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_calendar::{AstronomicalOracle, CalendarError};

    struct FailingOracle;

    impl CalendarOracle for FailingOracle {
        fn read(&self, _: &LocalTime, _: Gender) -> Result<OracleReading, CalendarError> {
            Err(CalendarError::Oracle("offline".into()))
        }
    }

    #[test]
    fn validation_rejects_out_of_range_fields() {
        assert!(validate_birth(1990, 13, 1, 0).is_err());
        assert!(validate_birth(1990, 1, 32, 0).is_err());
        assert!(validate_birth(1990, 1, 1, 24).is_err());
        assert!(validate_birth(1899, 1, 1, 0).is_err());
        assert!(validate_birth(1990, 2, 29, 0).is_err());
        assert!(validate_birth(1992, 2, 29, 23).is_ok());
    }

    #[test]
    fn validation_names_the_field() {
        match validate_birth(1990, 13, 1, 0) {
            Err(ZiweiError::InvalidInput { field, value, .. }) => {
                assert_eq!(field, "month");
                assert_eq!(value, 13);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn exact_params_from_builtin_oracle() {
        let p = to_bazi_params(
            &AstronomicalOracle::new(),
            SolarDate::new(2024, 2, 10, 12),
            Gender::Female,
            &ChartConfig::default(),
        )
        .unwrap();
        assert!(!p.is_degraded());
        assert_eq!(p.year.to_string(), "甲辰");
        assert_eq!((p.lunar_month, p.lunar_day, p.chart_month), (1, 1, 1));
        assert_eq!(p.time_branch_index(), 6);
        assert_eq!(p.major_periods.len(), 10);
        assert_eq!(p.start_age, p.major_periods[0].start_age);
    }

    #[test]
    fn utc_offset_shifts_lunar_date_to_beijing() {
        let config = ChartConfig {
            utc_offset_minutes: -300,
            ..ChartConfig::default()
        };
        let p = to_bazi_params(
            &AstronomicalOracle::new(),
            SolarDate::new(2024, 2, 9, 13),
            Gender::Male,
            &config,
        )
        .unwrap();
        assert_eq!(p.year.to_string(), "甲辰");
        assert_eq!(p.day.to_string(), "甲辰");
        assert_eq!((p.lunar_year, p.lunar_month, p.lunar_day), (2024, 1, 1));
        // The chart's time branch stays on the local wall clock.
        assert_eq!(p.time_branch_index(), 7);
    }

    #[test]
    fn oracle_failure_yields_sentinel() {
        let p = to_bazi_params(
            &FailingOracle,
            SolarDate::new(1990, 5, 31, 13),
            Gender::Male,
            &ChartConfig::default(),
        )
        .unwrap();
        assert!(p.is_degraded());
        for gz in [p.year, p.month, p.day, p.hour] {
            assert_eq!(gz, JIAZI);
        }
        assert_eq!((p.lunar_month, p.lunar_day), (5, 30));
        assert_eq!(p.time_branch_index(), 7);
        assert!(p.major_periods.is_empty());
    }

    #[test]
    fn validation_precedes_oracle() {
        let err = to_bazi_params(
            &FailingOracle,
            SolarDate::new(1990, 5, 1, 24),
            Gender::Male,
            &ChartConfig::default(),
        );
        assert!(matches!(err, Err(ZiweiError::InvalidInput { field: "hour", .. })));
    }
}
