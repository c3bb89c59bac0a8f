// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// Periodic tick while a time-based gesture is pending.
    Tick(Instant),
    DismissConfigWarning,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GESTURE_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory holding the gallery images.
    pub assets_dir: Option<String>,
}
