// SPDX-License-Identifier: MPL-2.0
//! Visual state of the five gallery panels.
//!
//! Each panel owns exactly one property and only its own gesture and its own
//! reset touch it:
//!
//! | Panel     | Property                         | Reset value |
//! |-----------|----------------------------------|-------------|
//! | Pinch     | `scale_factor`                   | 1.0         |
//! | Rotate    | `rotation`                       | 0           |
//! | Drag      | `drag_offset`, `committed_offset`| (0, 0)      |
//! | Opacity   | [`Opacity`]                      | Opaque      |
//! | Hue       | [`HueShift`]                     | Off         |

use crate::media::GalleryAsset;
use iced::{Radians, Vector};

/// The five gesture panels, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Pinch,
    Rotate,
    Drag,
    Opacity,
    Hue,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Pinch,
        Panel::Rotate,
        Panel::Drag,
        Panel::Opacity,
        Panel::Hue,
    ];

    /// Translation key of the panel headline.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Panel::Pinch => "panel-pinch-title",
            Panel::Rotate => "panel-rotate-title",
            Panel::Drag => "panel-drag-title",
            Panel::Opacity => "panel-opacity-title",
            Panel::Hue => "panel-hue-title",
        }
    }

    #[must_use]
    pub fn asset(self) -> GalleryAsset {
        match self {
            Panel::Pinch => GalleryAsset::Bag,
            Panel::Rotate => GalleryAsset::Chair,
            Panel::Drag => GalleryAsset::Sink,
            Panel::Opacity => GalleryAsset::Daido,
            Panel::Hue => GalleryAsset::Wanderer,
        }
    }

    /// Only the pinch pad consumes the mouse wheel; elsewhere it scrolls
    /// the gallery.
    #[must_use]
    pub fn accepts_wheel(self) -> bool {
        self == Panel::Pinch
    }

    /// Whether the secondary mouse button drives this panel's gesture.
    #[must_use]
    pub fn accepts_secondary_button(self) -> bool {
        self == Panel::Rotate
    }
}

/// Two-level opacity toggled by a double tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opacity {
    #[default]
    Opaque,
    Faded,
}

impl Opacity {
    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            Opacity::Opaque => 1.0,
            Opacity::Faded => 0.5,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Opacity::Opaque => Opacity::Faded,
            Opacity::Faded => Opacity::Opaque,
        }
    }
}

/// Hue rotation toggled by a long press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueShift {
    #[default]
    Off,
    On,
}

impl HueShift {
    /// Rotation applied while the shift is on: half of the color wheel.
    pub const SHIFT_DEGREES: f32 = 180.0;

    #[must_use]
    pub fn degrees(self) -> f32 {
        match self {
            HueShift::Off => 0.0,
            HueShift::On => Self::SHIFT_DEGREES,
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self == HueShift::On
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            HueShift::Off => HueShift::On,
            HueShift::On => HueShift::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryState {
    scale_factor: f32,
    rotation: Radians,
    drag_offset: Vector,
    committed_offset: Vector,
    opacity: Opacity,
    hue: HueShift,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            rotation: Radians(0.0),
            drag_offset: Vector::ZERO,
            committed_offset: Vector::ZERO,
            opacity: Opacity::Opaque,
            hue: HueShift::Off,
        }
    }
}

impl GalleryState {
    #[must_use]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    #[must_use]
    pub fn rotation(&self) -> Radians {
        self.rotation
    }

    #[must_use]
    pub fn drag_offset(&self) -> Vector {
        self.drag_offset
    }

    #[must_use]
    pub fn committed_offset(&self) -> Vector {
        self.committed_offset
    }

    #[must_use]
    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    #[must_use]
    pub fn hue(&self) -> HueShift {
        self.hue
    }

    /// Sets the scale to the latest pinch magnitude. Not clamped.
    pub fn set_scale(&mut self, magnitude: f32) {
        self.scale_factor = magnitude;
    }

    /// Sets the rotation to the latest gesture angle.
    pub fn set_rotation(&mut self, angle: Radians) {
        self.rotation = angle;
    }

    /// Moves the image to the committed baseline plus the live translation.
    pub fn drag_changed(&mut self, translation: Vector) {
        self.drag_offset = self.committed_offset + translation;
    }

    /// Makes the current offset the baseline for the next drag.
    pub fn drag_ended(&mut self) {
        self.committed_offset = self.drag_offset;
    }

    pub fn toggle_opacity(&mut self) {
        self.opacity = self.opacity.toggled();
    }

    pub fn toggle_hue(&mut self) {
        self.hue = self.hue.toggled();
    }

    /// Restores the defaults of `panel`'s property, leaving the others alone.
    pub fn reset(&mut self, panel: Panel) {
        let defaults = Self::default();
        match panel {
            Panel::Pinch => self.scale_factor = defaults.scale_factor,
            Panel::Rotate => self.rotation = defaults.rotation,
            Panel::Drag => {
                self.drag_offset = defaults.drag_offset;
                self.committed_offset = defaults.committed_offset;
            }
            Panel::Opacity => self.opacity = defaults.opacity,
            Panel::Hue => self.hue = defaults.hue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reset_values() {
        let state = GalleryState::default();
        assert_eq!(state.scale_factor(), 1.0);
        assert_eq!(state.rotation(), Radians(0.0));
        assert_eq!(state.drag_offset(), Vector::ZERO);
        assert_eq!(state.committed_offset(), Vector::ZERO);
        assert_eq!(state.opacity().value(), 1.0);
        assert!(!state.hue().is_active());
    }

    #[test]
    fn scale_is_set_not_accumulated() {
        let mut state = GalleryState::default();
        state.set_scale(2.0);
        state.set_scale(3.0);
        assert_eq!(state.scale_factor(), 3.0);

        state.set_scale(0.01);
        assert_eq!(state.scale_factor(), 0.01);
    }

    #[test]
    fn drag_moves_relative_to_committed_offset() {
        let mut state = GalleryState::default();
        state.drag_changed(Vector::new(10.0, 5.0));
        state.drag_ended();
        assert_eq!(state.committed_offset(), Vector::new(10.0, 5.0));

        state.drag_changed(Vector::new(-4.0, 1.0));
        assert_eq!(state.drag_offset(), Vector::new(6.0, 6.0));
        // The baseline only moves when a drag ends.
        assert_eq!(state.committed_offset(), Vector::new(10.0, 5.0));
    }

    #[test]
    fn opacity_toggles_between_two_levels() {
        let mut state = GalleryState::default();
        state.toggle_opacity();
        assert_eq!(state.opacity().value(), 0.5);
        state.toggle_opacity();
        assert_eq!(state.opacity().value(), 1.0);
    }

    #[test]
    fn hue_shift_is_half_turn() {
        let mut state = GalleryState::default();
        state.toggle_hue();
        assert_eq!(state.hue().degrees(), 180.0);
        state.toggle_hue();
        assert_eq!(state.hue().degrees(), 0.0);
    }

    #[test]
    fn reset_drag_clears_both_offsets() {
        let mut state = GalleryState::default();
        state.drag_changed(Vector::new(30.0, 40.0));
        state.drag_ended();

        state.reset(Panel::Drag);
        assert_eq!(state.drag_offset(), Vector::ZERO);
        assert_eq!(state.committed_offset(), Vector::ZERO);
    }

    #[test]
    fn panels_map_to_distinct_assets() {
        let mut assets: Vec<_> = Panel::ALL.iter().map(|p| p.asset().stem()).collect();
        assets.dedup();
        assert_eq!(assets.len(), 5);
        assert!(Panel::Pinch.accepts_wheel());
        assert!(!Panel::Drag.accepts_wheel());
    }
}
