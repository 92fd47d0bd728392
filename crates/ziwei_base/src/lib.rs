//! Pure calculation layer of the Ziwei Doushu (紫微斗数) chart engine.
//!
//! This crate provides:
//! - The calendar adapter and canonical [`BaZiParams`] record
//! - Five Elements Bureau lookup
//! - Palace positions, stems, roles and relationships
//! - The star catalog, brightness tables and the five placement families
//! - Birth and flying four transformations (四化)
//! - Life and body masters
//! - Decade, fleeting-year, fleeting-month and minor-limit periods
//!
//! Every table is a `const` and every calculator is a pure function.

pub mod bazi;
pub mod bureau;
pub mod config;
pub mod error;
pub mod masters;
pub mod palace;
pub mod periods;
pub mod placement;
pub mod sihua;
pub mod star;

pub use bazi::{
    BaZiParams, CalendarReading, CalendarStatus, MAX_YEAR, MIN_YEAR, MajorPeriod, SolarDate,
    read_calendar, to_bazi_params, validate_birth,
};
pub use bureau::{ALL_BUREAUS, BUREAU_TABLE, Bureau, bureau_for_life_palace, calculate_bureau};
pub use config::{ChartConfig, LeapMonthRule};
pub use error::ZiweiError;
pub use masters::{Masters, body_master, life_master};
pub use palace::{
    ALL_PALACE_ROLES, PalaceRole, body_palace, branch_of_role, dou_jun, laiyin_palace,
    life_palace, opposite, palace_stem, palace_stems, role_at, san_fang_si_zheng, trines,
};
pub use periods::{
    DecadePeriod, FleetingMonth, FleetingYear, MinorLimit, TargetDate, current_decade,
    decade_forward, decade_periods, fleeting_month, fleeting_year, minor_limit, minor_limit_ages,
    nominal_age, western_age,
};
pub use placement::{PlacementInput, StarLayout, StarPlacement, place_all_stars};
pub use sihua::{
    ALL_SIHUA_ROLES, FlyingTable, FlyingTransformation, SelfTransformKind, SelfTransformation,
    SihuaInfo, SihuaRole, sihua_for_stem,
};
pub use star::{ALL_STARS, Brightness, MAIN_STARS, STAR_COUNT, StarKind, StarName};
