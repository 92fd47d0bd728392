//! Engine facade: one oracle and one configuration, any number of charts.

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};
use ziwei_base::{
    CalendarReading, CalendarStatus, ChartConfig, DecadePeriod, FleetingMonth, FleetingYear,
    MinorLimit, SolarDate, TargetDate, ZiweiError, current_decade, fleeting_month,
    fleeting_year, minor_limit, nominal_age, read_calendar, to_bazi_params, validate_birth,
    western_age,
};
use ziwei_calendar::{AstronomicalOracle, CalendarOracle, GanZhi, Gender, LocalTime};

use crate::assemble::assemble_chart;
use crate::chart::ZiweiChart;

/// Hour at which a target date is read from the calendar.
const TARGET_HOUR: u32 = 12;

/// Periods in force on a target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriods {
    pub target: TargetDate,
    pub lunar_year: i32,
    pub lunar_month: u8,
    pub is_leap_month: bool,
    pub western_age: u32,
    pub nominal_age: u32,
    /// `None` before the first decade starts or after the last ends.
    pub decade_period: Option<DecadePeriod>,
    pub fleeting_year: FleetingYear,
    pub fleeting_month: FleetingMonth,
    pub minor_limit: MinorLimit,
    pub calendar: CalendarStatus,
}

/// Chart engine over a calendar oracle.
#[derive(Debug, Clone)]
pub struct ZiweiEngine<O = AstronomicalOracle> {
    oracle: O,
    config: ChartConfig,
}

impl ZiweiEngine<AstronomicalOracle> {
    /// Engine over the built-in oracle, configured from `config`.
    pub fn new(config: ChartConfig) -> Self {
        Self {
            oracle: config.oracle(),
            config,
        }
    }
}

impl Default for ZiweiEngine<AstronomicalOracle> {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl<O: CalendarOracle> ZiweiEngine<O> {
    pub fn with_oracle(oracle: O, config: ChartConfig) -> Self {
        Self { oracle, config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Natal chart for a civil birth date and hour (0..=23).
    pub fn generate_chart(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        gender: Gender,
    ) -> Result<ZiweiChart, ZiweiError> {
        let span = debug_span!("generate_chart", year, month, day, hour);
        let _guard = span.enter();
        let params = to_bazi_params(
            &self.oracle,
            SolarDate::new(year, month, day, hour),
            gender,
            &self.config,
        )?;
        Ok(assemble_chart(params))
    }

    /// Decade, fleeting year, fleeting month and minor limit on `target`.
    pub fn compute_time_periods(
        &self,
        chart: &ZiweiChart,
        target: TargetDate,
    ) -> Result<TimePeriods, ZiweiError> {
        validate_birth(target.year, target.month, target.day, TARGET_HOUR)?;
        let solar = chart.params.solar;
        let birth = TargetDate::new(solar.year, solar.month, solar.day);
        if target < birth {
            return Err(ZiweiError::InvalidInput {
                field: "target",
                value: target.year as i64,
                expected: "a date on or after the birth date",
            });
        }

        let instant = LocalTime::new(target.year, target.month, target.day, TARGET_HOUR, 0, 0.0)
            .with_offset(self.config.utc_offset_minutes);
        let (lunar_year, lunar_month, month_number, is_leap, calendar) =
            match read_calendar(&self.oracle, &instant, chart.params.gender) {
                CalendarReading::Exact(r) => (
                    r.lunar.year,
                    r.lunar.month,
                    self.config
                        .leap_month
                        .chart_month(r.lunar.month, r.lunar.day, r.lunar.is_leap),
                    r.lunar.is_leap,
                    CalendarStatus::Exact,
                ),
                CalendarReading::Degraded(reason) => (
                    target.year,
                    target.month as u8,
                    target.month as u8,
                    false,
                    CalendarStatus::Degraded { reason },
                ),
            };

        let params = &chart.params;
        let nominal = nominal_age(params.lunar_year, lunar_year);
        let year = fleeting_year(
            chart.life_palace,
            params.lunar_year,
            params.chart_month,
            params.time_branch,
            lunar_year,
        );
        let month = fleeting_month(
            chart.life_palace,
            GanZhi::for_year(lunar_year).stem,
            month_number,
            is_leap,
        );
        let periods = TimePeriods {
            target,
            lunar_year,
            lunar_month,
            is_leap_month: is_leap,
            western_age: western_age(birth, target),
            nominal_age: nominal,
            decade_period: current_decade(&chart.decades, nominal).copied(),
            fleeting_year: year,
            fleeting_month: month,
            minor_limit: minor_limit(
                chart.life_palace,
                params.year_branch(),
                params.gender,
                nominal,
            ),
            calendar,
        };
        debug!(
            lunar_year,
            lunar_month,
            nominal_age = nominal,
            fleeting_year = %periods.fleeting_year.branch,
            "time periods"
        );
        Ok(periods)
    }
}

/// Natal chart with the built-in oracle and default configuration.
pub fn generate_chart(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    gender: Gender,
) -> Result<ZiweiChart, ZiweiError> {
    ZiweiEngine::default().generate_chart(year, month, day, hour, gender)
}

/// Time periods with the built-in oracle and default configuration.
pub fn compute_time_periods(
    chart: &ZiweiChart,
    target: TargetDate,
) -> Result<TimePeriods, ZiweiError> {
    ZiweiEngine::default().compute_time_periods(chart, target)
}
