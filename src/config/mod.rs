// SPDX-License-Identifier: MPL-2.0
//! Player settings stored in `settings.toml`.
//!
//! The file lives in `<config dir>/WsVideoPlayer/`. Every key is optional;
//! a missing or unreadable value falls back to the defaults in
//! [`defaults`], and a `[player]` table gives the demo its player inputs.
//!
//! ```
//! use ws_video_player::config::Config;
//!
//! let config: Config = toml::from_str(
//!     r#"
//!     seek_step_secs = 10.0
//!
//!     [player]
//!     video_src = "talk.mp4"
//!     "#,
//! )
//! .expect("valid settings");
//! assert_eq!(config.seek_step().value(), 10.0);
//! assert_eq!(config.player.map(|p| p.video_src).as_deref(), Some("talk.mp4"));
//! ```

pub mod defaults;
pub mod player;

pub use player::PlayerOptions;

use crate::domain::video::{SeekStep, Volume};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "WsVideoPlayer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    /// Keyboard seek step in seconds.
    #[serde(default)]
    pub seek_step_secs: Option<f64>,
    /// Volume applied when a player attaches.
    #[serde(default)]
    pub volume: Option<f64>,
    /// Default player inputs for the demo application.
    #[serde(default)]
    pub player: Option<PlayerOptions>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            seek_step_secs: Some(defaults::DEFAULT_SEEK_STEP_SECS),
            volume: Some(defaults::DEFAULT_VOLUME),
            player: None,
        }
    }
}

impl Config {
    /// Keyboard seek step, clamped to the supported range.
    #[must_use]
    pub fn seek_step(&self) -> SeekStep {
        self.seek_step_secs.map(SeekStep::new).unwrap_or_default()
    }

    /// Initial volume, clamped to [0, 1].
    #[must_use]
    pub fn initial_volume(&self) -> Volume {
        self.volume.map(Volume::new).unwrap_or_default()
    }
}

fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

/// Loads the user's settings, or the defaults when there is no file yet.
pub fn load() -> Result<Config> {
    match settings_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

pub fn save(config: &Config) -> Result<()> {
    settings_path().map_or(Ok(()), |path| save_to_path(config, &path))
}

/// Reads a config file. Unparsable content falls back to the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            seek_step_secs: Some(10.0),
            volume: Some(0.4),
            player: Some(
                PlayerOptions::new("movie.mp4")
                    .with_captions("movie.vtt")
                    .with_accent_color("#3366ff"),
            ),
        };
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("player").join("settings.toml");

        save_to_path(&config, &path).expect("save settings");
        let loaded = load_from_path(&path).expect("load settings");

        assert_eq!(loaded, config);
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "seek_step_secs = = 3").expect("write settings");

        let loaded = load_from_path(&path).expect("invalid content is not an error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let result = load_from_path(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn seek_step_is_clamped() {
        let config = Config {
            seek_step_secs: Some(120.0),
            ..Config::default()
        };
        assert_abs_diff_eq!(config.seek_step().value(), 30.0);

        let config = Config {
            seek_step_secs: None,
            ..Config::default()
        };
        assert_abs_diff_eq!(config.seek_step().value(), 5.0);
    }

    #[test]
    fn initial_volume_is_clamped() {
        let config = Config {
            volume: Some(3.0),
            ..Config::default()
        };
        assert_abs_diff_eq!(config.initial_volume().value(), 1.0);
        assert_abs_diff_eq!(Config::default().initial_volume().value(), 1.0);
    }
}
