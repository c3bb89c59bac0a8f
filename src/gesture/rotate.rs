// SPDX-License-Identifier: MPL-2.0
//! Rotation recognizer.
//!
//! Reports the absolute angle turned since the gesture began. Successive
//! samples are accumulated through [`wrap_angle`], so turning past a half
//! turn keeps growing instead of jumping back.
//!
//! Sources:
//! - two fingers: angle of the line joining them
//! - secondary mouse button held: bearing of the cursor around the pad center

use super::{wrap_angle, Button, FingerPair, Phase, PointerEvent};
use iced::{Point, Radians};

/// Progress reported by [`RotateRecognizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotate {
    Changed(Radians),
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Mouse,
    Fingers,
}

#[derive(Debug, Clone, Default)]
pub struct RotateRecognizer {
    phase: Phase,
    fingers: FingerPair,
    source: Option<Source>,
    last_bearing: f32,
    total: f32,
}

fn bearing(position: Point) -> f32 {
    position.y.atan2(position.x)
}

impl RotateRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn handle(&mut self, event: &PointerEvent) -> Option<Rotate> {
        match *event {
            PointerEvent::Pressed {
                button: Button::Secondary,
                position,
            } if self.source.is_none() => {
                self.begin(Source::Mouse, bearing(position));
                None
            }
            PointerEvent::Moved(position) if self.source == Some(Source::Mouse) => {
                Some(self.advance(bearing(position)))
            }
            PointerEvent::Released {
                button: Button::Secondary,
            } if self.source == Some(Source::Mouse) => Some(self.end()),
            PointerEvent::FingerPressed { .. }
            | PointerEvent::FingerMoved { .. }
            | PointerEvent::FingerLifted { .. } => self.handle_touch(event),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.fingers.clear();
        self.source = None;
        self.last_bearing = 0.0;
        self.total = 0.0;
    }

    fn handle_touch(&mut self, event: &PointerEvent) -> Option<Rotate> {
        if !self.fingers.apply(event) {
            return None;
        }

        match (self.fingers.span(), self.source) {
            (Some(span), None) => {
                self.begin(Source::Fingers, span.angle);
                None
            }
            (Some(span), Some(Source::Fingers)) => Some(self.advance(span.angle)),
            (None, Some(Source::Fingers)) => Some(self.end()),
            _ => None,
        }
    }

    fn begin(&mut self, source: Source, bearing: f32) {
        self.source = Some(source);
        self.last_bearing = bearing;
        self.total = 0.0;
        self.phase = Phase::Active;
    }

    fn advance(&mut self, bearing: f32) -> Rotate {
        self.total += wrap_angle(bearing - self.last_bearing);
        self.last_bearing = bearing;
        Rotate::Changed(Radians(self.total))
    }

    fn end(&mut self) -> Rotate {
        self.source = None;
        self.phase = Phase::Completed;
        Rotate::Ended
    }
}
