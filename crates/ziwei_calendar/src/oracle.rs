//! Calendar oracle: everything the chart engine needs to know about a
//! birth instant in sexagenary terms.
//!
//! [`CalendarOracle`] is the seam an external calendar library plugs into.
//! [`AstronomicalOracle`] is the built-in implementation computed from the
//! solar and lunar theories in this crate.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::CalendarError;
use crate::julian::is_valid_date;
use crate::local_time::{CHINA_STANDARD_OFFSET_MINUTES, LocalTime};
use crate::lunisolar::{LunarDate, lunar_date_for_day};
use crate::pillars::{
    FourPillars, day_pillar, hour_branch, hour_pillar, month_pillar, solar_month_ordinal,
    year_pillar,
};
use crate::solar::SUPPORTED_YEARS;
use crate::yun::{FortuneTable, Gender, decade_fortunes};

/// Everything an oracle reports for one birth instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OracleReading {
    pub pillars: FourPillars,
    pub lunar: LunarDate,
    pub fortune: FortuneTable,
}

/// Source of sexagenary calendar data.
///
/// Implementations must be deterministic and free of side effects so the
/// engine can call them concurrently.
pub trait CalendarOracle {
    fn read(&self, instant: &LocalTime, gender: Gender) -> Result<OracleReading, CalendarError>;
}

impl<T: CalendarOracle + ?Sized> CalendarOracle for &T {
    fn read(&self, instant: &LocalTime, gender: Gender) -> Result<OracleReading, CalendarError> {
        (**self).read(instant, gender)
    }
}

/// Built-in oracle based on analytic solar and lunar theories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AstronomicalOracle {
    /// Hour 23 advances the day pillar to the following day (晚子时换日).
    pub late_zi_next_day: bool,
}

impl AstronomicalOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_late_zi_next_day(mut self, enabled: bool) -> Self {
        self.late_zi_next_day = enabled;
        self
    }

    /// Four pillars of `instant` without the fortune table.
    ///
    /// Day and hour pillars are read on the Beijing wall clock.
    pub fn pillars(&self, instant: &LocalTime) -> Result<FourPillars, CalendarError> {
        check_instant(instant)?;
        let cst = instant.to_offset(CHINA_STANDARD_OFFSET_MINUTES);
        let branch = hour_branch(cst.hour).ok_or(CalendarError::InvalidTime {
            hour: cst.hour,
            minute: cst.minute,
        })?;
        let jd_ut = instant.jd_ut();

        let year = year_pillar(jd_ut, cst.year)?;
        let month = month_pillar(solar_month_ordinal(jd_ut), year.stem);

        let mut jdn = cst.day_number();
        if self.late_zi_next_day && cst.hour == 23 {
            jdn += 1;
        }
        let day = day_pillar(jdn);
        let hour = hour_pillar(day.stem, branch);

        Ok(FourPillars {
            year,
            month,
            day,
            hour,
        })
    }
}

fn check_instant(instant: &LocalTime) -> Result<(), CalendarError> {
    if !SUPPORTED_YEARS.contains(&instant.year) {
        return Err(CalendarError::OutOfRange(instant.year));
    }
    if !is_valid_date(instant.year, instant.month, instant.day) {
        return Err(CalendarError::InvalidDate {
            year: instant.year,
            month: instant.month,
            day: instant.day,
        });
    }
    if instant.hour > 23 || instant.minute > 59 {
        return Err(CalendarError::InvalidTime {
            hour: instant.hour,
            minute: instant.minute,
        });
    }
    Ok(())
}

impl CalendarOracle for AstronomicalOracle {
    fn read(&self, instant: &LocalTime, gender: Gender) -> Result<OracleReading, CalendarError> {
        let pillars = self.pillars(instant)?;
        let cst = instant.to_offset(CHINA_STANDARD_OFFSET_MINUTES);
        let lunar = lunar_date_for_day(cst.day_number())?;
        let fortune = decade_fortunes(
            instant.jd_ut(),
            instant.year,
            pillars.year.stem,
            pillars.month,
            gender,
        )?;
        trace!(
            %instant,
            year = %pillars.year,
            month = %pillars.month,
            day = %pillars.day,
            hour = %pillars.hour,
            lunar = %lunar,
            "calendar reading"
        );
        Ok(OracleReading {
            pillars,
            lunar,
            fortune,
        })
    }
}
