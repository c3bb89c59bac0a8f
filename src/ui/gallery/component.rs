// SPDX-License-Identifier: MPL-2.0
//! Gallery component: routes pointer input to each panel's recognizer and
//! applies completed gestures to the shared [`GalleryState`].

use crate::gesture::{
    Drag, DragRecognizer, LongPressRecognizer, Magnify, MagnifyRecognizer, PointerEvent, Rotate,
    RotateRecognizer, TapRecognizer, Thresholds,
};
use crate::i18n::fluent::I18n;
use crate::media::{GalleryImages, ImageData};
use crate::ui::design_tokens::spacing;
use crate::ui::gallery::pad::Visual;
use crate::ui::gallery::panel;
use crate::ui::gallery::state::{GalleryState, Panel};
use iced::widget::Column;
use iced::{Alignment, Element, Length};
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone)]
pub enum Message {
    Pointer { panel: Panel, event: PointerEvent },
    Reset(Panel),
    Tick(Instant),
    ImagesLoaded(GalleryImages),
}

/// One recognizer per panel.
#[derive(Debug, Clone)]
struct Recognizers {
    magnify: MagnifyRecognizer,
    rotate: RotateRecognizer,
    drag: DragRecognizer,
    double_tap: TapRecognizer,
    long_press: LongPressRecognizer,
}

impl Recognizers {
    fn new(thresholds: &Thresholds) -> Self {
        Self {
            magnify: MagnifyRecognizer::new(thresholds),
            rotate: RotateRecognizer::new(),
            drag: DragRecognizer::new(thresholds),
            double_tap: TapRecognizer::double(thresholds),
            long_press: LongPressRecognizer::new(thresholds),
        }
    }

    fn reset(&mut self, panel: Panel) {
        match panel {
            Panel::Pinch => self.magnify.reset(),
            Panel::Rotate => self.rotate.reset(),
            Panel::Drag => self.drag.reset(),
            Panel::Opacity => self.double_tap.reset(),
            Panel::Hue => self.long_press.reset(),
        }
    }
}

/// Environment required to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Complete gallery component state.
#[derive(Debug, Clone)]
pub struct State {
    gallery: GalleryState,
    recognizers: Recognizers,
    images: Option<GalleryImages>,
    panel_size: f32,
    last_tick: Option<Instant>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&Thresholds::default(), crate::config::DEFAULT_PANEL_SIZE)
    }
}

impl State {
    #[must_use]
    pub fn new(thresholds: &Thresholds, panel_size: f32) -> Self {
        Self {
            gallery: GalleryState::default(),
            recognizers: Recognizers::new(thresholds),
            images: None,
            panel_size,
            last_tick: None,
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    #[must_use]
    pub fn images(&self) -> Option<&GalleryImages> {
        self.images.as_ref()
    }

    #[must_use]
    pub fn panel_size(&self) -> f32 {
        self.panel_size
    }

    /// Whether a pending gesture needs periodic [`Message::Tick`]s.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.recognizers.magnify.needs_tick() || self.recognizers.long_press.needs_tick()
    }

    /// Image shown by `panel`, taking the hue toggle into account.
    #[must_use]
    pub fn image_for(&self, panel: Panel) -> Option<&ImageData> {
        let images = self.images.as_ref()?;
        if panel == Panel::Hue && self.gallery.hue().is_active() {
            Some(images.hue_shifted())
        } else {
            Some(images.get(panel.asset()))
        }
    }

    /// Transform drawn by `panel`: each panel applies only its own property.
    #[must_use]
    pub fn visual(&self, panel: Panel) -> Visual {
        let base = Visual::default();
        match panel {
            Panel::Pinch => Visual {
                scale: self.gallery.scale_factor(),
                ..base
            },
            Panel::Rotate => Visual {
                rotation: self.gallery.rotation(),
                ..base
            },
            Panel::Drag => Visual {
                offset: self.gallery.drag_offset(),
                ..base
            },
            Panel::Opacity => Visual {
                opacity: self.gallery.opacity().value(),
                ..base
            },
            Panel::Hue => base,
        }
    }

    /// Long-press progress for the hue pad while a press is held.
    #[must_use]
    pub fn long_press_progress(&self) -> Option<f32> {
        let now = self.last_tick?;
        self.recognizers
            .long_press
            .needs_tick()
            .then(|| self.recognizers.long_press.progress(now))
    }

    pub fn handle(&mut self, message: Message) {
        self.handle_at(message, Instant::now());
    }

    /// Handles `message` as if it arrived at `now`.
    pub fn handle_at(&mut self, message: Message, now: Instant) {
        match message {
            Message::Pointer { panel, event } => self.handle_pointer(panel, &event, now),
            Message::Reset(panel) => {
                self.gallery.reset(panel);
                self.recognizers.reset(panel);
                debug!(?panel, "panel reset");
            }
            Message::Tick(instant) => self.handle_tick(instant),
            Message::ImagesLoaded(images) => {
                self.images = Some(images);
            }
        }
    }

    fn handle_pointer(&mut self, panel: Panel, event: &PointerEvent, now: Instant) {
        let recognizers = &mut self.recognizers;
        let gallery = &mut self.gallery;

        match panel {
            Panel::Pinch => match recognizers.magnify.handle(event, now) {
                Some(Magnify::Changed(magnitude)) => gallery.set_scale(magnitude),
                Some(Magnify::Ended) => {
                    debug!(scale = gallery.scale_factor(), "pinch ended");
                }
                None => {}
            },
            Panel::Rotate => match recognizers.rotate.handle(event) {
                Some(Rotate::Changed(angle)) => gallery.set_rotation(angle),
                Some(Rotate::Ended) => {
                    debug!(angle = gallery.rotation().0, "rotation ended");
                }
                None => {}
            },
            Panel::Drag => match recognizers.drag.handle(event) {
                Some(Drag::Changed(translation)) => gallery.drag_changed(translation),
                Some(Drag::Ended(_)) => {
                    gallery.drag_ended();
                    debug!(offset = ?gallery.committed_offset(), "drag committed");
                }
                None => {}
            },
            Panel::Opacity => {
                if recognizers.double_tap.handle(event, now).is_some() {
                    gallery.toggle_opacity();
                    debug!(opacity = gallery.opacity().value(), "double tap");
                }
            }
            Panel::Hue => {
                self.last_tick = Some(now);
                if recognizers.long_press.handle(event, now).is_some() {
                    gallery.toggle_hue();
                    debug!(hue = gallery.hue().degrees(), "long press");
                }
            }
        }
    }

    fn handle_tick(&mut self, now: Instant) {
        self.last_tick = Some(now);

        if self.recognizers.magnify.tick(now).is_some() {
            debug!(scale = self.gallery.scale_factor(), "wheel zoom settled");
        }

        if self.recognizers.long_press.tick(now).is_some() {
            self.gallery.toggle_hue();
            debug!(hue = self.gallery.hue().degrees(), "long press");
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        Panel::ALL
            .into_iter()
            .fold(Column::new(), |column, panel| {
                column.push(panel::view(self, panel, ctx.i18n))
            })
            .spacing(spacing::LG)
            .padding(spacing::MD)
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .into()
    }
}
