//! Configuration errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from loading or resolving configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    Io(String),
    /// The file is not valid TOML or has unknown keys.
    Parse(String),
    /// A value parsed but is out of range.
    InvalidValue { key: String, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::InvalidValue { key, reason } => write!(f, "invalid config value {key}: {reason}"),
        }
    }
}

impl Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
