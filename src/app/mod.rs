// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires together localization, theme and the gallery
//! screen, and turns gallery messages and ticks into state updates.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::gesture::Thresholds;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::gallery::{self, HueShift};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    theme_mode: ThemeMode,
    /// Translation key of a startup warning, until dismissed.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("images_loaded", &self.gallery.images().is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: gallery::State::default(),
            theme_mode: ThemeMode::System,
            config_warning: None,
        }
    }
}

impl App {
    /// Loads settings and starts decoding the gallery images in the
    /// background.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app, assets_dir) = Self::from_config(flags, &config, config_warning);

        info!(assets = %assets_dir.display(), "loading gallery images");
        let task = Task::perform(
            media::load_gallery_async(assets_dir, HueShift::SHIFT_DEGREES),
            |images| Message::Gallery(gallery::Message::ImagesLoaded(images)),
        );

        (app, task)
    }

    /// Builds the application state from an already loaded config. Returns
    /// the directory the gallery images should be read from.
    fn from_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, PathBuf) {
        let i18n = I18n::new(flags.lang, config);
        let thresholds = Thresholds::from(&config.gestures);
        let gallery = gallery::State::new(&thresholds, config.display.panel_size());
        let assets_dir = paths::resolve_assets_dir(
            flags.assets_dir.map(PathBuf::from),
            config.display.assets_dir.clone(),
        );

        let app = App {
            i18n,
            gallery,
            theme_mode: config.general.theme_mode,
            config_warning,
        };
        (app, assets_dir)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.gallery.needs_tick())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => {
                self.gallery.handle(message);
            }
            Message::Tick(instant) => {
                self.gallery.handle(gallery::Message::Tick(instant));
            }
            Message::DismissConfigWarning => {
                self.config_warning = None;
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            warning_key: self.config_warning.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayConfig, GeneralConfig, GestureConfig};
    use crate::gesture::{Button, PointerEvent};
    use crate::ui::gallery::Panel;
    use iced::Point;
    use std::time::{Duration, Instant};

    fn app_with(config: Config) -> (App, PathBuf) {
        App::from_config(
            Flags {
                lang: Some("en-US".to_string()),
                ..Flags::default()
            },
            &config,
            None,
        )
    }

    #[test]
    fn title_is_translated() {
        let (app, _) = app_with(Config::default());
        assert_eq!(app.title(), "Gesture Gallery");
    }

    #[test]
    fn theme_follows_config() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        let (app, _) = app_with(config);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn assets_dir_prefers_cli_over_config() {
        let config = Config {
            display: DisplayConfig {
                assets_dir: Some(PathBuf::from("/from/config")),
                ..DisplayConfig::default()
            },
            ..Config::default()
        };

        let (_, dir) = app_with(config.clone());
        assert_eq!(dir, PathBuf::from("/from/config"));

        let (_, dir) = App::from_config(
            Flags {
                assets_dir: Some("/from/cli".to_string()),
                ..Flags::default()
            },
            &config,
            None,
        );
        assert_eq!(dir, PathBuf::from("/from/cli"));
    }

    #[test]
    fn configured_long_press_duration_is_used() {
        let config = Config {
            gestures: GestureConfig {
                long_press_secs: Some(0.5),
                ..GestureConfig::default()
            },
            ..Config::default()
        };
        let (mut app, _) = app_with(config);

        let _ = app.update(Message::Gallery(gallery::Message::Pointer {
            panel: Panel::Hue,
            event: PointerEvent::Pressed {
                button: Button::Primary,
                position: Point::ORIGIN,
            },
        }));
        assert!(app.gallery.needs_tick());

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_millis(600)));
        assert!(app.gallery.gallery().hue().is_active());
    }

    #[test]
    fn config_warning_can_be_dismissed() {
        let (mut app, _) = App::from_config(
            Flags::default(),
            &Config::default(),
            Some(config::CONFIG_LOAD_WARNING_KEY.to_string()),
        );
        assert!(app.config_warning.is_some());

        let _ = app.update(Message::DismissConfigWarning);
        assert!(app.config_warning.is_none());
    }
}
