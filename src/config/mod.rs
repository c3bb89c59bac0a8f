// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gestures]` - Recognizer thresholds (long-press duration, tap window, slop)
//! - `[display]` - Panel size and the gallery image directory
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `GESTURE_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use gesture_gallery::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Make long presses a little shorter
//! config.gestures.long_press_secs = Some(1.5);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the notice shown when the settings file cannot be read.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::System,
        }
    }
}

/// Gesture recognizer thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Hold duration before a long press completes (seconds).
    #[serde(
        default = "default_long_press_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub long_press_secs: Option<f32>,

    /// Movement tolerance while holding a long press (logical pixels).
    #[serde(
        default = "default_long_press_slop",
        skip_serializing_if = "Option::is_none"
    )]
    pub long_press_slop: Option<f32>,

    /// Maximum gap between the two taps of a double tap (milliseconds).
    #[serde(
        default = "default_double_tap_window_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_window_ms: Option<u64>,

    /// Movement tolerance for a press/release to count as a tap (logical pixels).
    #[serde(default = "default_tap_slop", skip_serializing_if = "Option::is_none")]
    pub tap_slop: Option<f32>,

    /// Distance before a press turns into a drag (logical pixels).
    #[serde(
        default = "default_drag_min_distance",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_min_distance: Option<f32>,

    /// Relative magnitude change per mouse-wheel notch on the pinch panel.
    #[serde(
        default = "default_wheel_zoom_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_zoom_step: Option<f32>,

    /// Wheel inactivity that ends a wheel-driven pinch (milliseconds).
    #[serde(
        default = "default_wheel_idle_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_idle_ms: Option<u64>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press_secs: default_long_press_secs(),
            long_press_slop: default_long_press_slop(),
            double_tap_window_ms: default_double_tap_window_ms(),
            tap_slop: default_tap_slop(),
            drag_min_distance: default_drag_min_distance(),
            wheel_zoom_step: default_wheel_zoom_step(),
            wheel_idle_ms: default_wheel_idle_ms(),
        }
    }
}

impl GestureConfig {
    /// Long-press duration, clamped to the supported range.
    #[must_use]
    pub fn long_press_duration(&self) -> Duration {
        let secs = self
            .long_press_secs
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_LONG_PRESS_SECS)
            .clamp(MIN_LONG_PRESS_SECS, MAX_LONG_PRESS_SECS);
        Duration::from_secs_f32(secs)
    }

    /// Double-tap window, clamped to the supported range.
    #[must_use]
    pub fn double_tap_window(&self) -> Duration {
        let ms = self
            .double_tap_window_ms
            .unwrap_or(DEFAULT_DOUBLE_TAP_WINDOW_MS)
            .clamp(MIN_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS);
        Duration::from_millis(ms)
    }

    /// Wheel idle timeout, clamped to the supported range.
    #[must_use]
    pub fn wheel_idle(&self) -> Duration {
        let ms = self
            .wheel_idle_ms
            .unwrap_or(DEFAULT_WHEEL_IDLE_MS)
            .clamp(MIN_WHEEL_IDLE_MS, MAX_WHEEL_IDLE_MS);
        Duration::from_millis(ms)
    }

    /// Wheel zoom step, clamped to the supported range.
    #[must_use]
    pub fn wheel_zoom_step(&self) -> f32 {
        self.wheel_zoom_step
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_WHEEL_ZOOM_STEP)
            .clamp(MIN_WHEEL_ZOOM_STEP, MAX_WHEEL_ZOOM_STEP)
    }

    #[must_use]
    pub fn long_press_slop(&self) -> f32 {
        clamp_slop(self.long_press_slop, DEFAULT_LONG_PRESS_SLOP)
    }

    #[must_use]
    pub fn tap_slop(&self) -> f32 {
        clamp_slop(self.tap_slop, DEFAULT_TAP_SLOP)
    }

    #[must_use]
    pub fn drag_min_distance(&self) -> f32 {
        clamp_slop(self.drag_min_distance, DEFAULT_DRAG_MIN_DISTANCE)
    }
}

fn clamp_slop(value: Option<f32>, default: f32) -> f32 {
    value
        .filter(|v| v.is_finite())
        .unwrap_or(default)
        .clamp(0.0, MAX_SLOP)
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Edge length of the square frame each image is fitted into.
    #[serde(default = "default_panel_size", skip_serializing_if = "Option::is_none")]
    pub panel_size: Option<f32>,

    /// Directory holding `bag`, `chair`, `sink`, `daido` and `wanderer` images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            panel_size: default_panel_size(),
            assets_dir: None,
        }
    }
}

impl DisplayConfig {
    /// Panel size, clamped to the supported range.
    #[must_use]
    pub fn panel_size(&self) -> f32 {
        self.panel_size
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_PANEL_SIZE)
            .clamp(MIN_PANEL_SIZE, MAX_PANEL_SIZE)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gesture recognizer thresholds.
    #[serde(default)]
    pub gestures: GestureConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_long_press_secs() -> Option<f32> {
    Some(DEFAULT_LONG_PRESS_SECS)
}

fn default_long_press_slop() -> Option<f32> {
    Some(DEFAULT_LONG_PRESS_SLOP)
}

fn default_double_tap_window_ms() -> Option<u64> {
    Some(DEFAULT_DOUBLE_TAP_WINDOW_MS)
}

fn default_tap_slop() -> Option<f32> {
    Some(DEFAULT_TAP_SLOP)
}

fn default_drag_min_distance() -> Option<f32> {
    Some(DEFAULT_DRAG_MIN_DISTANCE)
}

fn default_wheel_zoom_step() -> Option<f32> {
    Some(DEFAULT_WHEEL_ZOOM_STEP)
}

fn default_wheel_idle_ms() -> Option<u64> {
    Some(DEFAULT_WHEEL_IDLE_MS)
}

fn default_panel_size() -> Option<f32> {
    Some(DEFAULT_PANEL_SIZE)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Returns the config file path that [`load`] and [`save`] use.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    get_config_path_with_override(None)
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config(
            "no config directory available on this platform".to_string(),
        )),
    }
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gestures: GestureConfig {
                long_press_secs: Some(1.5),
                double_tap_window_ms: Some(400),
                ..GestureConfig::default()
            },
            display: DisplayConfig {
                panel_size: Some(240.0),
                assets_dir: Some(PathBuf::from("/srv/gallery")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_warning_for_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_keys_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gestures]\nlong_press_secs = 3.0\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");

        assert_eq!(loaded.gestures.long_press_secs, Some(3.0));
        assert_eq!(
            loaded.gestures.double_tap_window_ms,
            Some(DEFAULT_DOUBLE_TAP_WINDOW_MS)
        );
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(loaded.display.panel_size, Some(DEFAULT_PANEL_SIZE));
    }

    #[test]
    fn gesture_values_are_clamped() {
        let gestures = GestureConfig {
            long_press_secs: Some(1000.0),
            double_tap_window_ms: Some(1),
            tap_slop: Some(-5.0),
            wheel_zoom_step: Some(f32::NAN),
            ..GestureConfig::default()
        };

        assert_eq!(
            gestures.long_press_duration(),
            Duration::from_secs_f32(MAX_LONG_PRESS_SECS)
        );
        assert_eq!(
            gestures.double_tap_window(),
            Duration::from_millis(MIN_DOUBLE_TAP_WINDOW_MS)
        );
        assert_eq!(gestures.tap_slop(), 0.0);
        assert_eq!(gestures.wheel_zoom_step(), DEFAULT_WHEEL_ZOOM_STEP);
    }

    #[test]
    fn default_long_press_is_two_seconds() {
        let gestures = GestureConfig::default();
        assert_eq!(gestures.long_press_duration(), Duration::from_secs(2));
    }

    #[test]
    fn panel_size_is_clamped() {
        let display = DisplayConfig {
            panel_size: Some(5.0),
            assets_dir: None,
        };
        assert_eq!(display.panel_size(), MIN_PANEL_SIZE);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
