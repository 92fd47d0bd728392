//! Layering of defaults, file and environment.

use std::collections::HashMap;
use std::path::PathBuf;

use ziwei_base::{ChartConfig, LeapMonthRule};
use ziwei_config::{
    CONFIG_ENV_VAR, ConfigError, UTC_OFFSET_ENV_VAR, ZiweiConfigFile, resolve_with,
};

fn write_config(name: &str, body: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ziwei_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn nothing_set_gives_defaults() {
    assert_eq!(resolve_with(None, env(&[])).unwrap(), ChartConfig::default());
}

#[test]
fn file_values_are_applied() {
    let path = write_config(
        "full.toml",
        "[chart]\nutc_offset_minutes = 540\nleap_month = \"split_at_fifteenth\"\n",
    );
    let cfg = resolve_with(Some(&path), env(&[])).unwrap();
    assert_eq!(cfg.utc_offset_minutes, 540);
    assert_eq!(cfg.leap_month, LeapMonthRule::SplitAtFifteenth);
    assert!(!cfg.late_zi_next_day);
}

#[test]
fn env_names_the_file_and_overrides_offset() {
    let path = write_config("env.toml", "[chart]\nlate_zi_next_day = true\n");
    let path_str = path.to_string_lossy().into_owned();
    let cfg = resolve_with(
        None,
        env(&[(CONFIG_ENV_VAR, path_str.as_str()), (UTC_OFFSET_ENV_VAR, "-300")]),
    )
    .unwrap();
    assert!(cfg.late_zi_next_day);
    assert_eq!(cfg.utc_offset_minutes, -300);
}

#[test]
fn explicit_path_wins_over_env_path() {
    let explicit = write_config("explicit.toml", "[chart]\nutc_offset_minutes = 0\n");
    let cfg = resolve_with(
        Some(&explicit),
        env(&[(CONFIG_ENV_VAR, "/nonexistent/ziwei.toml")]),
    )
    .unwrap();
    assert_eq!(cfg.utc_offset_minutes, 0);
}

#[test]
fn unknown_keys_rejected() {
    assert!(matches!(
        ZiweiConfigFile::from_toml_str("[chart]\nschool = \"north\"\n"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        ZiweiConfigFile::from_toml_str("[render]\ncolor = true\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn bad_values_reported() {
    assert!(matches!(
        resolve_with(None, env(&[(UTC_OFFSET_ENV_VAR, "eight")])),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        ZiweiConfigFile::from_toml_str("[chart]\nutc_offset_minutes = 2000\n"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        resolve_with(Some(std::path::Path::new("/nonexistent/ziwei.toml")), env(&[])),
        Err(ConfigError::Io(_))
    ));
}
