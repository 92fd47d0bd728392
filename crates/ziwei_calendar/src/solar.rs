//! Apparent solar longitude and the 24 solar terms (节气).
//!
//! Solar longitude uses the low-precision theory of Meeus ch. 25
//! (accuracy about 0.01°, i.e. a quarter of an hour in term times).
//! ΔT follows the Espenak–Meeus polynomial fits.

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::julian::{jd_to_calendar, jd_to_centuries};

/// Mean length of the tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_19;

/// Degrees of solar longitude between consecutive terms.
pub const TERM_SPAN_DEG: f64 = 15.0;

/// Years for which the polynomial theories are trusted.
pub const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = -1000..=3000;

const MAX_ITERATIONS: usize = 50;
const CONVERGENCE_DEG: f64 = 1e-7;

/// ΔT = TT − UT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if (1860.0..1900.0).contains(&y) {
        let t = y - 1860.0;
        7.62 + 0.5737 * t - 0.251_754 * t.powi(2) + 0.016_806_68 * t.powi(3)
            - 0.000_447_362_4 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if (1900.0..1920.0).contains(&y) {
        let t = y - 1900.0;
        -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
            - 0.000_197 * t.powi(4)
    } else if (1920.0..1941.0).contains(&y) {
        let t = y - 1920.0;
        21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
    } else if (1941.0..1961.0).contains(&y) {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if (1961.0..1986.0).contains(&y) {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if (1986.0..2005.0).contains(&y) {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else if (2005.0..2050.0).contains(&y) {
        let t = y - 2000.0;
        62.92 + 0.322_17 * t + 0.005_589 * t.powi(2)
    } else if (2050.0..2150.0).contains(&y) {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// Convert a Julian Date in UT to Julian Ephemeris Date (TT).
pub fn jd_ut_to_jde(jd_ut: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jd_ut);
    let decimal_year = year as f64 + (month as f64 - 0.5) / 12.0;
    jd_ut + delta_t_seconds(decimal_year) / 86_400.0
}

/// Convert a Julian Ephemeris Date back to UT.
pub fn jde_to_jd_ut(jde: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jde);
    let decimal_year = year as f64 + (month as f64 - 0.5) / 12.0;
    jde - delta_t_seconds(decimal_year) / 86_400.0
}

/// Apparent geocentric ecliptic longitude of the Sun, degrees in [0, 360).
pub fn apparent_solar_longitude(jde: f64) -> f64 {
    let t = jd_to_centuries(jde);
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    (l0 + c - 0.005_69 - 0.004_78 * omega.sin()).rem_euclid(360.0)
}

/// Solar longitude at a UT instant.
pub fn solar_longitude_at(jd_ut: f64) -> f64 {
    apparent_solar_longitude(jd_ut_to_jde(jd_ut))
}

/// Wrap an angle difference into [-180, 180).
pub(crate) fn normalize_to_pm180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Find the UT instant near `jd_guess` at which the Sun reaches `target_deg`.
pub fn find_solar_longitude(target_deg: f64, jd_guess: f64) -> Result<f64, CalendarError> {
    let mut jd = jd_guess;
    for _ in 0..MAX_ITERATIONS {
        let diff = normalize_to_pm180(target_deg - solar_longitude_at(jd));
        if diff.abs() < CONVERGENCE_DEG {
            return Ok(jd);
        }
        jd += diff * TROPICAL_YEAR_DAYS / 360.0;
    }
    Err(CalendarError::NoConvergence("solar longitude search"))
}

/// The 24 solar terms, indexed by solar longitude / 15° (春分 = 0°).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarTerm {
    #[serde(rename = "春分")]
    ChunFen,
    #[serde(rename = "清明")]
    QingMing,
    #[serde(rename = "谷雨")]
    GuYu,
    #[serde(rename = "立夏")]
    LiXia,
    #[serde(rename = "小满")]
    XiaoMan,
    #[serde(rename = "芒种")]
    MangZhong,
    #[serde(rename = "夏至")]
    XiaZhi,
    #[serde(rename = "小暑")]
    XiaoShu,
    #[serde(rename = "大暑")]
    DaShu,
    #[serde(rename = "立秋")]
    LiQiu,
    #[serde(rename = "处暑")]
    ChuShu,
    #[serde(rename = "白露")]
    BaiLu,
    #[serde(rename = "秋分")]
    QiuFen,
    #[serde(rename = "寒露")]
    HanLu,
    #[serde(rename = "霜降")]
    ShuangJiang,
    #[serde(rename = "立冬")]
    LiDong,
    #[serde(rename = "小雪")]
    XiaoXue,
    #[serde(rename = "大雪")]
    DaXue,
    #[serde(rename = "冬至")]
    DongZhi,
    #[serde(rename = "小寒")]
    XiaoHan,
    #[serde(rename = "大寒")]
    DaHan,
    #[serde(rename = "立春")]
    LiChun,
    #[serde(rename = "雨水")]
    YuShui,
    #[serde(rename = "惊蛰")]
    JingZhe,
}

/// All 24 terms in longitude order (index 0 = 春分).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
];

const SOLAR_TERM_NAMES: [&str; 24] = [
    "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑", "立秋", "处暑", "白露",
    "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒", "立春", "雨水", "惊蛰",
];

impl SolarTerm {
    /// 0-based index (春分=0 .. 惊蛰=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        SOLAR_TERM_NAMES[self.index() as usize]
    }

    /// Solar longitude at which the term begins.
    pub fn longitude_deg(self) -> f64 {
        self.index() as f64 * TERM_SPAN_DEG
    }

    /// Sectional terms (节) open a solar month; the others are principal
    /// terms (中气) at multiples of 30°.
    pub fn is_sectional(self) -> bool {
        self.index() % 2 == 1
    }

    /// Term beginning at the given longitude bucket.
    pub fn from_longitude(lon_deg: f64) -> Self {
        let idx = (lon_deg.rem_euclid(360.0) / TERM_SPAN_DEG).floor() as usize;
        ALL_SOLAR_TERMS[idx.min(23)]
    }
}

/// A solar term together with the UT instant it begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    pub jd_ut: f64,
}

/// The most recent term at or before `jd_ut`.
pub fn prev_solar_term(jd_ut: f64) -> Result<SolarTermEvent, CalendarError> {
    let lon = solar_longitude_at(jd_ut);
    let term = SolarTerm::from_longitude(lon);
    let behind = (lon - term.longitude_deg()).rem_euclid(360.0);
    let guess = jd_ut - behind * TROPICAL_YEAR_DAYS / 360.0;
    let found = find_solar_longitude(term.longitude_deg(), guess)?;
    Ok(SolarTermEvent { term, jd_ut: found })
}

/// The first term strictly after `jd_ut`.
pub fn next_solar_term(jd_ut: f64) -> Result<SolarTermEvent, CalendarError> {
    let lon = solar_longitude_at(jd_ut);
    let term = ALL_SOLAR_TERMS[(SolarTerm::from_longitude(lon).index() as usize + 1) % 24];
    let ahead = (term.longitude_deg() - lon).rem_euclid(360.0);
    let guess = jd_ut + ahead * TROPICAL_YEAR_DAYS / 360.0;
    let found = find_solar_longitude(term.longitude_deg(), guess)?;
    Ok(SolarTermEvent { term, jd_ut: found })
}

/// Instant of the term at `longitude_deg` falling in Gregorian `year`.
pub fn solar_term_in_year(year: i32, longitude_deg: f64) -> Result<f64, CalendarError> {
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(CalendarError::OutOfRange(year));
    }
    // 春分 falls near March 20; walk from there.
    let vernal = crate::julian::calendar_to_jd(year, 3, 20.5);
    let mut guess = vernal + longitude_deg.rem_euclid(360.0) * TROPICAL_YEAR_DAYS / 360.0;
    if guess >= crate::julian::calendar_to_jd(year + 1, 1, 1.0) {
        guess -= TROPICAL_YEAR_DAYS;
    }
    find_solar_longitude(longitude_deg, guess)
}
