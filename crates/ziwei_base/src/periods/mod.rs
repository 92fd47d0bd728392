//! Time periods: decade (大限), fleeting year (流年), fleeting month (流月)
//! and minor limit (小限).
//!
//! Every calculator is a pure function of natal quantities and a target.

pub mod age;
pub mod decade;
pub mod fleeting;
pub mod minor_limit;
pub mod types;

pub use age::{nominal_age, western_age};
pub use decade::{DECADE_COUNT, DECADE_SPAN_YEARS, current_decade, decade_forward, decade_periods};
pub use fleeting::{fleeting_month, fleeting_year};
pub use minor_limit::{
    MINOR_LIMIT_MAX_AGE, minor_limit, minor_limit_ages, minor_limit_branch, minor_limit_start,
};
pub use types::{DecadePeriod, FleetingMonth, FleetingYear, MinorLimit, TargetDate};
