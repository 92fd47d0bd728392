//! Layered configuration for the Purple Star engine.
//!
//! This crate provides:
//! - [`ZiweiConfigFile`], the TOML file format (`[chart]` table)
//! - [`resolve`]: defaults, then the file named by `--config` or
//!   `ZIWEI_CONFIG`, then the `ZIWEI_UTC_OFFSET` override
//!
//! ```toml
//! [chart]
//! utc_offset_minutes = 480
//! leap_month = "split_at_fifteenth"
//! late_zi_next_day = true
//! ```

pub mod error;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use ziwei_base::ChartConfig;

pub use error::ConfigError;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "ZIWEI_CONFIG";
/// Environment variable overriding `chart.utc_offset_minutes`.
pub const UTC_OFFSET_ENV_VAR: &str = "ZIWEI_UTC_OFFSET";

/// Largest accepted UTC offset magnitude, in minutes.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// On-disk configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZiweiConfigFile {
    pub chart: ChartConfig,
}

impl ZiweiConfigFile {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: Self = toml::from_str(s)?;
        file.validate()?;
        Ok(file)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let file = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), "loaded config");
        Ok(file)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_offset(self.chart.utc_offset_minutes)
    }
}

/// Resolve the chart configuration from `path` and the process environment.
pub fn resolve(path: Option<&Path>) -> Result<ChartConfig, ConfigError> {
    resolve_with(path, |key| std::env::var(key).ok())
}

/// [`resolve`] with an explicit environment lookup.
pub fn resolve_with<F>(path: Option<&Path>, env: F) -> Result<ChartConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let file_path = path
        .map(Path::to_path_buf)
        .or_else(|| env(CONFIG_ENV_VAR).map(PathBuf::from));
    let mut config = match file_path {
        Some(p) => ZiweiConfigFile::load(&p)?.chart,
        None => ChartConfig::default(),
    };
    if let Some(raw) = env(UTC_OFFSET_ENV_VAR) {
        let minutes = raw
            .trim()
            .parse::<i32>()
            .map_err(|e| ConfigError::InvalidValue {
                key: UTC_OFFSET_ENV_VAR.into(),
                reason: e.to_string(),
            })?;
        check_offset(minutes)?;
        config.utc_offset_minutes = minutes;
    }
    Ok(config)
}

fn check_offset(minutes: i32) -> Result<(), ConfigError> {
    if minutes.abs() > MAX_OFFSET_MINUTES {
        return Err(ConfigError::InvalidValue {
            key: "utc_offset_minutes".into(),
            reason: format!("{minutes} is outside -840..=840"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_base::LeapMonthRule;

    #[test]
    fn empty_file_is_default() {
        let file = ZiweiConfigFile::from_toml_str("").unwrap();
        assert_eq!(file.chart, ChartConfig::default());
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let file = ZiweiConfigFile::from_toml_str("[chart]\nlate_zi_next_day = true\n").unwrap();
        assert!(file.chart.late_zi_next_day);
        assert_eq!(file.chart.utc_offset_minutes, 480);
        assert_eq!(file.chart.leap_month, LeapMonthRule::SameMonth);
    }

    #[test]
    fn offset_bound() {
        assert!(check_offset(840).is_ok());
        assert!(check_offset(-841).is_err());
    }
}
