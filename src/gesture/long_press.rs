// SPDX-License-Identifier: MPL-2.0
//! Long-press recognizer.
//!
//! Completes once the pointer has been held for the minimum duration without
//! travelling beyond the slop. Completion is reported as soon as the
//! threshold is crossed, either by [`LongPressRecognizer::tick`] while the
//! pointer is still down or by the next pointer event, whichever comes first.
//! Releasing early or moving too far cancels silently.

use super::{distance, Contact, Phase, PointerEvent, PrimaryPointer, Thresholds};
use iced::Point;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct LongPressRecognizer {
    phase: Phase,
    pointer: PrimaryPointer,
    origin: Option<Point>,
    pressed_at: Option<Instant>,
    minimum: Duration,
    slop: f32,
}

impl Default for LongPressRecognizer {
    fn default() -> Self {
        Self::new(&Thresholds::default())
    }
}

impl LongPressRecognizer {
    #[must_use]
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            phase: Phase::Idle,
            pointer: PrimaryPointer::default(),
            origin: None,
            pressed_at: None,
            minimum: thresholds.long_press,
            slop: thresholds.long_press_slop,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a press is being held and [`tick`](Self::tick) may complete it.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.phase.is_active()
    }

    /// Fraction of the minimum duration held so far, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match (self.phase, self.pressed_at) {
            (Phase::Active, Some(pressed_at)) => {
                let held = now.saturating_duration_since(pressed_at).as_secs_f32();
                (held / self.minimum.as_secs_f32().max(f32::EPSILON)).min(1.0)
            }
            _ => 0.0,
        }
    }

    /// Returns `Some(())` when the press completes.
    pub fn handle(&mut self, event: &PointerEvent, now: Instant) -> Option<()> {
        match self.pointer.track(event)? {
            Contact::Down(position) => {
                self.origin = Some(position);
                self.pressed_at = Some(now);
                self.phase = Phase::Active;
                None
            }
            Contact::Move(position) => {
                if !self.phase.is_active() {
                    return None;
                }
                if let Some(completed) = self.tick(now) {
                    return Some(completed);
                }
                let too_far = self
                    .origin
                    .is_some_and(|origin| distance(origin, position) > self.slop);
                if too_far {
                    self.cancel();
                }
                None
            }
            Contact::Up => {
                let completed = self.tick(now);
                if completed.is_none() && self.phase.is_active() {
                    self.cancel();
                }
                self.origin = None;
                completed
            }
            Contact::Cancel => {
                if self.phase.is_active() {
                    self.cancel();
                }
                None
            }
        }
    }

    /// Completes the press once the minimum duration has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<()> {
        if !self.phase.is_active() {
            return None;
        }
        let pressed_at = self.pressed_at?;
        if now.saturating_duration_since(pressed_at) >= self.minimum {
            self.phase = Phase::Completed;
            self.pressed_at = None;
            Some(())
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.pointer.reset();
        self.origin = None;
        self.pressed_at = None;
    }

    fn cancel(&mut self) {
        self.phase = Phase::Cancelled;
        self.pressed_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Button;

    fn press() -> PointerEvent {
        PointerEvent::Pressed {
            button: Button::Primary,
            position: Point::ORIGIN,
        }
    }

    fn release() -> PointerEvent {
        PointerEvent::Released {
            button: Button::Primary,
        }
    }

    #[test]
    fn early_release_cancels() {
        let mut recognizer = LongPressRecognizer::default();
        let now = Instant::now();
        recognizer.handle(&press(), now);

        let result = recognizer.handle(&release(), now + Duration::from_millis(1500));
        assert_eq!(result, None);
        assert_eq!(recognizer.phase(), Phase::Cancelled);
        assert!(!recognizer.needs_tick());
    }

    #[test]
    fn tick_completes_after_minimum_duration() {
        let mut recognizer = LongPressRecognizer::default();
        let now = Instant::now();
        recognizer.handle(&press(), now);
        assert!(recognizer.needs_tick());

        assert_eq!(recognizer.tick(now + Duration::from_millis(1999)), None);
        assert_eq!(recognizer.tick(now + Duration::from_secs(2)), Some(()));
        assert_eq!(recognizer.phase(), Phase::Completed);

        // Releasing afterwards does not fire a second time.
        assert_eq!(
            recognizer.handle(&release(), now + Duration::from_secs(3)),
            None
        );
    }

    #[test]
    fn late_release_completes_when_tick_lagged() {
        let mut recognizer = LongPressRecognizer::default();
        let now = Instant::now();
        recognizer.handle(&press(), now);

        let result = recognizer.handle(&release(), now + Duration::from_millis(2100));
        assert_eq!(result, Some(()));
    }

    #[test]
    fn moving_beyond_slop_cancels() {
        let mut recognizer = LongPressRecognizer::default();
        let now = Instant::now();
        recognizer.handle(&press(), now);

        recognizer.handle(
            &PointerEvent::Moved(Point::new(30.0, 0.0)),
            now + Duration::from_millis(500),
        );
        assert_eq!(recognizer.phase(), Phase::Cancelled);
        assert_eq!(recognizer.tick(now + Duration::from_secs(5)), None);
    }

    #[test]
    fn jitter_within_slop_is_tolerated() {
        let mut recognizer = LongPressRecognizer::default();
        let now = Instant::now();
        recognizer.handle(&press(), now);

        recognizer.handle(
            &PointerEvent::Moved(Point::new(3.0, 4.0)),
            now + Duration::from_millis(500),
        );
        assert_eq!(recognizer.phase(), Phase::Active);
        assert_eq!(recognizer.tick(now + Duration::from_secs(2)), Some(()));
    }

    #[test]
    fn progress_tracks_hold_time() {
        let mut recognizer = LongPressRecognizer::default();
        let now = Instant::now();
        assert_eq!(recognizer.progress(now), 0.0);

        recognizer.handle(&press(), now);
        let half = recognizer.progress(now + Duration::from_secs(1));
        assert!((half - 0.5).abs() < 1e-3);
        assert_eq!(recognizer.progress(now + Duration::from_secs(10)), 1.0);
    }
}
