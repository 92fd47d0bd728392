//! Sexagenary calendar support for the Ziwei chart engine.
//!
//! This crate provides:
//! - Heavenly Stems, Earthly Branches and the 60-pair GanZhi cycle
//! - Julian Date ↔ proleptic Gregorian conversions
//! - Apparent solar longitude, the 24 solar terms and new moons
//! - Chinese lunisolar dates with leap months
//! - The four pillars and the BaZi decade-fortune table
//! - The [`CalendarOracle`] seam and its built-in [`AstronomicalOracle`]
//!
//! Clean-room implementation from public astronomical formulas (Meeus)
//! and the published rules of the Chinese calendar.

pub mod error;
pub mod ganzhi;
pub mod julian;
pub mod local_time;
pub mod lunar_phase;
pub mod lunisolar;
pub mod oracle;
pub mod pillars;
pub mod solar;
pub mod yun;

pub use error::CalendarError;
pub use ganzhi::{
    ALL_BRANCHES, ALL_STEMS, Branch, Element, GanZhi, JIAZI, Stem, five_rats_stem,
    five_tigers_stem,
};
pub use julian::{
    calendar_to_jd, date_from_day_number, day_number, days_in_month, is_leap_year, is_valid_date,
    jd_to_calendar,
};
pub use local_time::{CHINA_STANDARD_OFFSET_MINUTES, LocalTime};
pub use lunar_phase::{lunation_at_or_before, new_moon_jd_ut};
pub use lunisolar::{LunarDate, lunar_date_for_day};
pub use oracle::{AstronomicalOracle, CalendarOracle, OracleReading};
pub use pillars::{FourPillars, HOUR_BRANCHES, hour_branch, time_branch_index};
pub use solar::{
    ALL_SOLAR_TERMS, SolarTerm, SolarTermEvent, next_solar_term, prev_solar_term,
    solar_longitude_at,
};
pub use yun::{DecadeFortune, FORTUNE_COUNT, FortuneTable, Gender, Qiyun, is_forward};
