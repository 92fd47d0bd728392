//! End-to-end chart generation through the engine facade.

use std::collections::HashSet;

use proptest::prelude::*;
use ziwei_base::{ChartConfig, MAIN_STARS, PalaceRole, TargetDate, ZiweiError};
use ziwei_calendar::{
    CalendarError, CalendarOracle, Gender, JIAZI, LocalTime, OracleReading,
};
use ziwei_chart::{ZiweiEngine, compute_time_periods, generate_chart};

struct FailingOracle;

impl CalendarOracle for FailingOracle {
    fn read(&self, _: &LocalTime, _: Gender) -> Result<OracleReading, CalendarError> {
        Err(CalendarError::Oracle("ephemeris unavailable".into()))
    }
}

#[test]
fn chart_is_idempotent() {
    let a = generate_chart(1990, 5, 15, 14, Gender::Male).unwrap();
    let b = generate_chart(1990, 5, 15, 14, Gender::Male).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn json_round_trips() {
    let chart = generate_chart(1984, 2, 4, 23, Gender::Female).unwrap();
    let json = serde_json::to_string(&chart).unwrap();
    let back: ziwei_chart::ZiweiChart = serde_json::from_str(&json).unwrap();
    assert_eq!(back, chart);
}

#[test]
fn twelve_palaces_with_distinct_roles() {
    let chart = generate_chart(1975, 10, 30, 6, Gender::Female).unwrap();
    let branches: HashSet<_> = chart.palaces.iter().map(|p| p.branch).collect();
    let roles: HashSet<_> = chart.palaces.iter().map(|p| p.role).collect();
    assert_eq!(branches.len(), 12);
    assert_eq!(roles.len(), 12);
    assert_eq!(chart.palace_by_role(PalaceRole::Life).branch, chart.life_palace);
}

#[test]
fn every_main_star_sits_in_one_palace() {
    let chart = generate_chart(2010, 7, 7, 19, Gender::Male).unwrap();
    for star in MAIN_STARS {
        let n = chart.palaces.iter().filter(|p| p.has_star(star)).count();
        assert_eq!(n, 1, "{star}");
    }
}

#[test]
fn out_of_range_fields_rejected() {
    for (m, d, h, field) in [(13, 1, 0, "month"), (1, 32, 0, "day"), (1, 1, 24, "hour")] {
        match generate_chart(1990, m, d, h, Gender::Male) {
            Err(ZiweiError::InvalidInput { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected InvalidInput for {field}, got {other:?}"),
        }
    }
    assert!(generate_chart(1800, 1, 1, 0, Gender::Male).is_err());
}

#[test]
fn failing_oracle_yields_degraded_chart() {
    let engine = ZiweiEngine::with_oracle(FailingOracle, ChartConfig::default());
    let chart = engine.generate_chart(1990, 5, 15, 14, Gender::Male).unwrap();
    assert!(chart.is_degraded());
    let p = &chart.params;
    for gz in [p.year, p.month, p.day, p.hour] {
        assert_eq!(gz, JIAZI);
    }
    for star in MAIN_STARS {
        assert!(chart.star_position(star).is_some());
    }

    let periods = engine
        .compute_time_periods(&chart, TargetDate::new(2020, 3, 1))
        .unwrap();
    assert!(matches!(
        periods.calendar,
        ziwei_base::CalendarStatus::Degraded { .. }
    ));
}

#[test]
fn periods_walk_forward_with_the_target() {
    let chart = generate_chart(1988, 8, 8, 8, Gender::Female).unwrap();
    let a = compute_time_periods(&chart, TargetDate::new(2020, 8, 1)).unwrap();
    let b = compute_time_periods(&chart, TargetDate::new(2021, 8, 1)).unwrap();
    assert_eq!(b.nominal_age, a.nominal_age + 1);
    assert_eq!(b.fleeting_year.branch, a.fleeting_year.branch.offset(1));
    // Female minor limits run backward.
    assert_eq!(b.minor_limit.branch, a.minor_limit.branch.offset(-1));
}

#[test]
fn late_zi_policy_only_touches_day_and_hour_pillars() {
    let next_day = ChartConfig {
        late_zi_next_day: true,
        ..ChartConfig::default()
    };
    let same_day = ChartConfig {
        late_zi_next_day: false,
        ..ChartConfig::default()
    };
    let a = ZiweiEngine::new(next_day)
        .generate_chart(2001, 3, 3, 23, Gender::Male)
        .unwrap();
    let b = ZiweiEngine::new(same_day)
        .generate_chart(2001, 3, 3, 23, Gender::Male)
        .unwrap();
    assert_eq!(a.params.year, b.params.year);
    assert_ne!(a.params.day, b.params.day);
    assert_eq!(a.life_palace, b.life_palace);
}

#[test]
fn foreign_utc_offset_uses_beijing_lunar_date() {
    let eastern = ChartConfig {
        utc_offset_minutes: -300,
        ..ChartConfig::default()
    };
    let chart = ZiweiEngine::new(eastern)
        .generate_chart(2024, 2, 9, 13, Gender::Female)
        .unwrap();
    let p = &chart.params;
    assert_eq!((p.lunar_year, p.lunar_month, p.lunar_day), (2024, 1, 1));
    assert_eq!(p.year.to_string(), "甲辰");

    let beijing = generate_chart(2024, 2, 9, 13, Gender::Female).unwrap();
    assert_eq!(beijing.params.lunar_year, 2023);
    assert_eq!(beijing.params.lunar_month, 12);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn any_valid_birth_builds_a_consistent_chart(
        year in 1901i32..2099,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        male in any::<bool>(),
    ) {
        let gender = if male { Gender::Male } else { Gender::Female };
        let chart = generate_chart(year, month, day, hour, gender).unwrap();
        let roles: HashSet<_> = chart.palaces.iter().map(|p| p.role).collect();
        prop_assert_eq!(roles.len(), 12);
        prop_assert_eq!(chart.palaces.iter().filter(|p| p.is_body_palace).count(), 1);
        prop_assert_eq!(chart.decades.len(), 10);
        let minor: usize = chart.palaces.iter().map(|p| p.minor_limit_ages.len()).sum();
        prop_assert_eq!(minor, 120);
    }
}
