// SPDX-License-Identifier: MPL-2.0
//! Pinch / magnify recognizer.
//!
//! Reports the magnitude of the current pinch relative to its start, like a
//! platform magnification gesture: every new pinch starts again from 1.0.
//!
//! Two sources are accepted:
//! - two fingers: magnitude = current finger distance / initial distance
//! - mouse wheel: magnitude = (1 + step)^notches for one wheel burst, which
//!   ends after the configured idle time or when the cursor leaves the pad

use super::{FingerPair, Phase, PointerEvent, Thresholds};
use std::time::{Duration, Instant};

/// Finger spans shorter than this cannot anchor a stable ratio.
const MIN_FINGER_SPAN: f32 = 1.0;

/// Progress reported by [`MagnifyRecognizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Magnify {
    Changed(f32),
    Ended,
}

#[derive(Debug, Clone, Copy)]
struct WheelBurst {
    notches: f32,
    last_event: Instant,
}

#[derive(Debug, Clone)]
pub struct MagnifyRecognizer {
    phase: Phase,
    fingers: FingerPair,
    start_span: Option<f32>,
    wheel: Option<WheelBurst>,
    wheel_step: f32,
    wheel_idle: Duration,
}

impl Default for MagnifyRecognizer {
    fn default() -> Self {
        Self::new(&Thresholds::default())
    }
}

impl MagnifyRecognizer {
    #[must_use]
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            phase: Phase::Idle,
            fingers: FingerPair::default(),
            start_span: None,
            wheel: None,
            wheel_step: thresholds.wheel_zoom_step,
            wheel_idle: thresholds.wheel_idle,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether [`tick`](Self::tick) must be called to close a wheel burst.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.wheel.is_some()
    }

    pub fn handle(&mut self, event: &PointerEvent, now: Instant) -> Option<Magnify> {
        match event {
            PointerEvent::FingerPressed { .. }
            | PointerEvent::FingerMoved { .. }
            | PointerEvent::FingerLifted { .. } => self.handle_touch(event),
            PointerEvent::Wheel { notches } => self.handle_wheel(*notches, now),
            PointerEvent::Left => self.end_wheel(),
            _ => None,
        }
    }

    /// Ends an idle wheel burst.
    pub fn tick(&mut self, now: Instant) -> Option<Magnify> {
        let burst = self.wheel?;
        if now.saturating_duration_since(burst.last_event) >= self.wheel_idle {
            self.end_wheel()
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.fingers.clear();
        self.start_span = None;
        self.wheel = None;
    }

    fn handle_touch(&mut self, event: &PointerEvent) -> Option<Magnify> {
        if !self.fingers.apply(event) {
            return None;
        }

        match (self.fingers.span(), self.start_span) {
            (Some(span), None) => {
                if span.distance >= MIN_FINGER_SPAN {
                    // A touch pinch takes over from any wheel burst.
                    self.wheel = None;
                    self.start_span = Some(span.distance);
                    self.phase = Phase::Active;
                }
                None
            }
            (Some(span), Some(start)) => Some(Magnify::Changed(span.distance / start)),
            (None, Some(_)) => {
                self.start_span = None;
                self.phase = Phase::Completed;
                Some(Magnify::Ended)
            }
            (None, None) => None,
        }
    }

    fn handle_wheel(&mut self, notches: f32, now: Instant) -> Option<Magnify> {
        if self.start_span.is_some() || notches == 0.0 || !notches.is_finite() {
            return None;
        }

        let expired = self.wheel.is_some_and(|burst| {
            now.saturating_duration_since(burst.last_event) >= self.wheel_idle
        });
        if expired {
            self.wheel = None;
        }

        let burst = self.wheel.get_or_insert(WheelBurst {
            notches: 0.0,
            last_event: now,
        });
        burst.notches += notches;
        burst.last_event = now;
        self.phase = Phase::Active;

        Some(Magnify::Changed((1.0 + self.wheel_step).powf(burst.notches)))
    }

    fn end_wheel(&mut self) -> Option<Magnify> {
        self.wheel.take().map(|_| {
            self.phase = Phase::Completed;
            Magnify::Ended
        })
    }
}
