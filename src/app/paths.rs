// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`GESTURE_GALLERY_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! Gallery images are looked up separately, see [`resolve_assets_dir`].

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "GestureGallery";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "GESTURE_GALLERY_CONFIG_DIR";

/// Assets directory used when neither the CLI nor the config names one.
pub const DEFAULT_ASSETS_DIR: &str = "assets/gallery";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Only the first call has an effect; later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized, ignoring");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/GestureGallery/`
/// - macOS: `~/Library/Application Support/GestureGallery/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\GestureGallery\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Picks the directory holding the five gallery images.
///
/// The CLI value wins over the configured one; without either, the
/// relative [`DEFAULT_ASSETS_DIR`] is used.
#[must_use]
pub fn resolve_assets_dir(cli: Option<PathBuf>, configured: Option<PathBuf>) -> PathBuf {
    cli.or(configured)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/gesture-gallery-test");

        let path = get_app_config_dir().expect("env override should resolve");
        assert_eq!(path, PathBuf::from("/tmp/gesture-gallery-test"));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert_ne!(path, PathBuf::from(""));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn explicit_override_takes_priority() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/from-env");

        let path = get_app_config_dir_with_override(Some(PathBuf::from("/tmp/explicit")));
        assert_eq!(path, Some(PathBuf::from("/tmp/explicit")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn assets_dir_prefers_cli_then_config() {
        let cli = Some(PathBuf::from("/cli"));
        let configured = Some(PathBuf::from("/configured"));

        assert_eq!(
            resolve_assets_dir(cli, configured.clone()),
            PathBuf::from("/cli")
        );
        assert_eq!(
            resolve_assets_dir(None, configured),
            PathBuf::from("/configured")
        );
        assert_eq!(
            resolve_assets_dir(None, None),
            PathBuf::from(DEFAULT_ASSETS_DIR)
        );
    }
}
