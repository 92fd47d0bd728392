//! Calculation conventions that vary between schools.

use serde::{Deserialize, Serialize};
use ziwei_calendar::{AstronomicalOracle, CHINA_STANDARD_OFFSET_MINUTES};

/// How a leap lunar month feeds the month-based placement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapMonthRule {
    /// A leap month counts as the month it repeats.
    #[default]
    SameMonth,
    /// Days 1–15 count as the repeated month, days 16+ as the next month.
    SplitAtFifteenth,
}

impl LeapMonthRule {
    /// Month number fed to the chart for a lunar date.
    pub fn chart_month(self, month: u8, day: u8, is_leap: bool) -> u8 {
        match self {
            Self::SplitAtFifteenth if is_leap && day > 15 => month % 12 + 1,
            _ => month,
        }
    }
}

/// Configuration for chart generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Offset of the birth wall-clock time from UTC, in minutes.
    pub utc_offset_minutes: i32,
    pub leap_month: LeapMonthRule,
    /// Hour 23 advances the day pillar to the next day.
    pub late_zi_next_day: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: CHINA_STANDARD_OFFSET_MINUTES,
            leap_month: LeapMonthRule::SameMonth,
            late_zi_next_day: false,
        }
    }
}

impl ChartConfig {
    /// Built-in oracle honouring this configuration.
    pub fn oracle(&self) -> AstronomicalOracle {
        AstronomicalOracle::new().with_late_zi_next_day(self.late_zi_next_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_month_rules() {
        assert_eq!(LeapMonthRule::SameMonth.chart_month(4, 20, true), 4);
        assert_eq!(LeapMonthRule::SplitAtFifteenth.chart_month(4, 15, true), 4);
        assert_eq!(LeapMonthRule::SplitAtFifteenth.chart_month(4, 16, true), 5);
        assert_eq!(LeapMonthRule::SplitAtFifteenth.chart_month(12, 20, true), 1);
        assert_eq!(LeapMonthRule::SplitAtFifteenth.chart_month(4, 20, false), 4);
    }

    #[test]
    fn default_is_china_standard_time() {
        let cfg = ChartConfig::default();
        assert_eq!(cfg.utc_offset_minutes, 480);
        assert!(!cfg.oracle().late_zi_next_day);
    }
}
