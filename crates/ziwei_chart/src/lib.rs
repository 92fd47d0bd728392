//! Purple Star (紫微斗数) chart assembly.
//!
//! This crate provides:
//! - [`ZiweiChart`], the read-only aggregate of twelve palaces
//! - [`assemble_chart`], which runs every calculator over one parameter record
//! - [`ZiweiEngine`], the facade binding a calendar oracle to a configuration
//! - [`compute_time_periods`] for decade, fleeting and minor-limit periods
//!
//! ```no_run
//! use ziwei_calendar::Gender;
//! use ziwei_chart::generate_chart;
//!
//! let chart = generate_chart(1990, 5, 15, 14, Gender::Male).unwrap();
//! println!("{} {}", chart.life_palace, chart.bureau);
//! ```

pub mod assemble;
pub mod chart;
pub mod engine;

pub use assemble::assemble_chart;
pub use chart::{AgeSpan, Palace, PlacedStar, SelfMarker, ZiweiChart};
pub use engine::{TimePeriods, ZiweiEngine, compute_time_periods, generate_chart};
pub use ziwei_base::{ChartConfig, TargetDate, ZiweiError};
