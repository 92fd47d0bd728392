//! Error types for calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar conversion or the astronomical searches behind it.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Date fields do not name a real proleptic Gregorian day.
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
    },
    /// Clock fields outside 00:00..23:59.
    InvalidTime {
        hour: u32,
        minute: u32,
    },
    /// Year lies outside the range the analytic theories are valid for.
    OutOfRange(i32),
    /// Iterative search did not converge.
    NoConvergence(&'static str),
    /// Failure reported by an external calendar oracle.
    Oracle(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime { hour, minute } => {
                write!(f, "invalid time of day: {hour:02}:{minute:02}")
            }
            Self::OutOfRange(year) => write!(f, "year {year} outside supported range"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::Oracle(msg) => write!(f, "calendar oracle error: {msg}"),
        }
    }
}

impl Error for CalendarError {}
