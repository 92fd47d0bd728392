//! Error types for chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ziwei_calendar::CalendarError;

/// Errors from chart input validation and calendar lookups.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ZiweiError {
    /// A birth or target field is outside its domain.
    InvalidInput {
        field: &'static str,
        value: i64,
        expected: &'static str,
    },
    /// Error surfaced from the calendar layer.
    Calendar(CalendarError),
}

impl Display for ZiweiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput {
                field,
                value,
                expected,
            } => write!(f, "invalid {field}: {value} (expected {expected})"),
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
        }
    }
}

impl Error for ZiweiError {}

impl From<CalendarError> for ZiweiError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}
