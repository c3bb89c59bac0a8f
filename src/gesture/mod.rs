// SPDX-License-Identifier: MPL-2.0
//! Gesture recognizers.
//!
//! Each recognizer is a small finite-state machine fed with raw
//! [`PointerEvent`]s and a timestamp. It moves through
//! `Idle → Active → (Completed | Cancelled)` and only reports the
//! transitions the gallery cares about: progress (`Changed`) and completion.
//!
//! Positions are in logical pixels relative to the center of the gesture
//! pad, so the pad center doubles as the pivot for mouse rotation.
//!
//! - [`magnify`] - pinch (two fingers or mouse wheel) reporting a magnitude
//! - [`rotate`] - two-finger twist or secondary-button drag reporting an angle
//! - [`drag`] - primary-button / single-finger pan reporting a translation
//! - [`tap`] - multi-tap (double tap) completion
//! - [`long_press`] - press held past a minimum duration

pub mod drag;
pub mod long_press;
pub mod magnify;
pub mod rotate;
pub mod tap;

pub use drag::{Drag, DragRecognizer};
pub use long_press::LongPressRecognizer;
pub use magnify::{Magnify, MagnifyRecognizer};
pub use rotate::{Rotate, RotateRecognizer};
pub use tap::TapRecognizer;

use crate::config::{
    GestureConfig, DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_DRAG_MIN_DISTANCE,
    DEFAULT_LONG_PRESS_SECS, DEFAULT_LONG_PRESS_SLOP, DEFAULT_TAP_SLOP, DEFAULT_WHEEL_IDLE_MS,
    DEFAULT_WHEEL_ZOOM_STEP,
};
use iced::{Point, Vector};
use std::f32::consts::PI;
use std::time::Duration;

/// Lifecycle of a single gesture attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Active,
    Completed,
    Cancelled,
}

impl Phase {
    /// Whether a gesture attempt is currently in flight.
    #[must_use]
    pub fn is_active(self) -> bool {
        self == Phase::Active
    }
}

/// Mouse buttons the recognizers distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Secondary,
}

/// Touch point identifier as reported by the platform.
pub type FingerId = u64;

/// Raw input delivered to a recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed { button: Button, position: Point },
    Moved(Point),
    Released { button: Button },
    /// The cursor left the pad without a button held.
    Left,
    /// Mouse wheel, normalized to notches (positive = away from the user).
    Wheel { notches: f32 },
    FingerPressed { id: FingerId, position: Point },
    FingerMoved { id: FingerId, position: Point },
    FingerLifted { id: FingerId },
}

/// Tunable thresholds shared by all recognizers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub long_press: Duration,
    pub long_press_slop: f32,
    pub double_tap_window: Duration,
    pub tap_slop: f32,
    pub drag_min_distance: f32,
    pub wheel_zoom_step: f32,
    pub wheel_idle: Duration,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            long_press: Duration::from_secs_f32(DEFAULT_LONG_PRESS_SECS),
            long_press_slop: DEFAULT_LONG_PRESS_SLOP,
            double_tap_window: Duration::from_millis(DEFAULT_DOUBLE_TAP_WINDOW_MS),
            tap_slop: DEFAULT_TAP_SLOP,
            drag_min_distance: DEFAULT_DRAG_MIN_DISTANCE,
            wheel_zoom_step: DEFAULT_WHEEL_ZOOM_STEP,
            wheel_idle: Duration::from_millis(DEFAULT_WHEEL_IDLE_MS),
        }
    }
}

impl From<&GestureConfig> for Thresholds {
    fn from(config: &GestureConfig) -> Self {
        Self {
            long_press: config.long_press_duration(),
            long_press_slop: config.long_press_slop(),
            double_tap_window: config.double_tap_window(),
            tap_slop: config.tap_slop(),
            drag_min_distance: config.drag_min_distance(),
            wheel_zoom_step: config.wheel_zoom_step(),
            wheel_idle: config.wheel_idle(),
        }
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f32 {
    let delta = b - a;
    (delta.x * delta.x + delta.y * delta.y).sqrt()
}

/// Length of a vector.
#[must_use]
pub fn magnitude(v: Vector) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Wraps an angle difference into `(-π, π]` so successive samples can be
/// accumulated without jumping when the bearing crosses ±π.
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    let mut wrapped = angle % (2.0 * PI);
    if wrapped > PI {
        wrapped -= 2.0 * PI;
    } else if wrapped <= -PI {
        wrapped += 2.0 * PI;
    }
    wrapped
}

// =============================================================================
// Single-pointer tracking
// =============================================================================

/// Normalized single-pointer contact, whether it comes from the mouse or a finger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Contact {
    Down(Point),
    Move(Point),
    Up,
    /// A second finger landed; single-pointer gestures give up.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Mouse,
    Finger(FingerId),
}

/// Follows the one pointer a single-pointer gesture is bound to.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PrimaryPointer {
    source: Option<Source>,
}

impl PrimaryPointer {
    /// Translates a raw event into a contact transition, if it concerns
    /// the tracked pointer.
    pub(crate) fn track(&mut self, event: &PointerEvent) -> Option<Contact> {
        match (*event, self.source) {
            (
                PointerEvent::Pressed {
                    button: Button::Primary,
                    position,
                },
                None,
            ) => {
                self.source = Some(Source::Mouse);
                Some(Contact::Down(position))
            }
            (PointerEvent::Moved(position), Some(Source::Mouse)) => Some(Contact::Move(position)),
            (
                PointerEvent::Released {
                    button: Button::Primary,
                },
                Some(Source::Mouse),
            ) => {
                self.source = None;
                Some(Contact::Up)
            }
            (PointerEvent::FingerPressed { id, position }, None) => {
                self.source = Some(Source::Finger(id));
                Some(Contact::Down(position))
            }
            (PointerEvent::FingerPressed { .. }, Some(Source::Finger(_))) => {
                self.source = None;
                Some(Contact::Cancel)
            }
            (PointerEvent::FingerMoved { id, position }, Some(Source::Finger(tracked)))
                if id == tracked =>
            {
                Some(Contact::Move(position))
            }
            (PointerEvent::FingerLifted { id }, Some(Source::Finger(tracked))) if id == tracked => {
                self.source = None;
                Some(Contact::Up)
            }
            _ => None,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.source = None;
    }
}

// =============================================================================
// Two-finger tracking
// =============================================================================

/// Distance and angle of the line joining two fingers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Span {
    pub distance: f32,
    pub angle: f32,
}

/// Keeps the positions of the first two fingers on the pad.
#[derive(Debug, Clone, Default)]
pub(crate) struct FingerPair {
    fingers: Vec<(FingerId, Point)>,
}

impl FingerPair {
    /// Applies a touch event. Returns `true` if the tracked fingers changed.
    pub(crate) fn apply(&mut self, event: &PointerEvent) -> bool {
        match *event {
            PointerEvent::FingerPressed { id, position } => {
                if self.fingers.len() < 2 && !self.fingers.iter().any(|(f, _)| *f == id) {
                    self.fingers.push((id, position));
                    return true;
                }
                false
            }
            PointerEvent::FingerMoved { id, position } => {
                if let Some(entry) = self.fingers.iter_mut().find(|(f, _)| *f == id) {
                    entry.1 = position;
                    return true;
                }
                false
            }
            PointerEvent::FingerLifted { id } => {
                let before = self.fingers.len();
                self.fingers.retain(|(f, _)| *f != id);
                before != self.fingers.len()
            }
            _ => false,
        }
    }

    /// Geometry of the pair, once two fingers are down.
    pub(crate) fn span(&self) -> Option<Span> {
        match self.fingers.as_slice() {
            [(_, a), (_, b)] => {
                let delta = *b - *a;
                Some(Span {
                    distance: magnitude(delta),
                    angle: delta.y.atan2(delta.x),
                })
            }
            _ => None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.fingers.clear();
    }
}
