//! This module handles the player's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Missing or malformed files degrade to defaults rather than failing: a bad
//! settings file must never prevent playback.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SmartPlayer";

/// Whether playback starts automatically once media is loaded.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Initial volume slider position.
pub const DEFAULT_VOLUME_PERCENT: u8 = 100;

/// Consecutive empty frame polls tolerated before the transport gives up
/// and pauses (3 seconds at the 30 fps fallback cadence).
pub const DEFAULT_STALL_TICK_LIMIT: u32 = 90;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub autoplay: Option<bool>,
    #[serde(default)]
    pub volume_percent: Option<u8>,
    #[serde(default)]
    pub stall_tick_limit: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autoplay: Some(DEFAULT_AUTOPLAY),
            volume_percent: Some(DEFAULT_VOLUME_PERCENT),
            stall_tick_limit: Some(DEFAULT_STALL_TICK_LIMIT),
        }
    }
}

impl Config {
    /// Effective autoplay setting.
    #[must_use]
    pub fn autoplay(&self) -> bool {
        self.autoplay.unwrap_or(DEFAULT_AUTOPLAY)
    }

    /// Effective initial volume in percent.
    #[must_use]
    pub fn volume_percent(&self) -> u8 {
        self.volume_percent.unwrap_or(DEFAULT_VOLUME_PERCENT)
    }

    /// Effective stall escalation limit in ticks.
    #[must_use]
    pub fn stall_tick_limit(&self) -> u32 {
        self.stall_tick_limit.unwrap_or(DEFAULT_STALL_TICK_LIMIT)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            autoplay: Some(false),
            volume_percent: Some(40),
            stall_tick_limit: Some(120),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.autoplay, config.autoplay);
        assert_eq!(loaded.volume_percent, config.volume_percent);
        assert_eq!(loaded.stall_tick_limit, config.stall_tick_limit);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.autoplay());
        assert_eq!(loaded.volume_percent(), DEFAULT_VOLUME_PERCENT);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn accessors_fall_back_to_defaults_for_missing_fields() {
        let config = Config {
            autoplay: None,
            volume_percent: None,
            stall_tick_limit: None,
        };
        assert_eq!(config.autoplay(), DEFAULT_AUTOPLAY);
        assert_eq!(config.volume_percent(), DEFAULT_VOLUME_PERCENT);
        assert_eq!(config.stall_tick_limit(), DEFAULT_STALL_TICK_LIMIT);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "autoplay = false\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert!(!loaded.autoplay());
        assert_eq!(loaded.volume_percent(), DEFAULT_VOLUME_PERCENT);
        assert_eq!(loaded.stall_tick_limit(), DEFAULT_STALL_TICK_LIMIT);
    }
}
