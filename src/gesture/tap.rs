// SPDX-License-Identifier: MPL-2.0
//! Multi-tap recognizer.
//!
//! A tap is a press and release that stays within the tap slop. The gesture
//! completes when the required number of taps arrive, each press following
//! the previous release within the tap window. A late press starts a new
//! sequence; a tap that wanders too far resets it.

use super::{distance, Contact, Phase, PointerEvent, PrimaryPointer, Thresholds};
use iced::Point;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TapRecognizer {
    phase: Phase,
    pointer: PrimaryPointer,
    required: u8,
    taps: u8,
    press_origin: Option<Point>,
    wandered: bool,
    last_release: Option<Instant>,
    window: Duration,
    slop: f32,
}

impl TapRecognizer {
    /// Creates a recognizer completing after `required` taps (at least one).
    #[must_use]
    pub fn new(required: u8, thresholds: &Thresholds) -> Self {
        Self {
            phase: Phase::Idle,
            pointer: PrimaryPointer::default(),
            required: required.max(1),
            taps: 0,
            press_origin: None,
            wandered: false,
            last_release: None,
            window: thresholds.double_tap_window,
            slop: thresholds.tap_slop,
        }
    }

    /// Double-tap recognizer with the given thresholds.
    #[must_use]
    pub fn double(thresholds: &Thresholds) -> Self {
        Self::new(2, thresholds)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `Some(())` when the tap sequence completes.
    pub fn handle(&mut self, event: &PointerEvent, now: Instant) -> Option<()> {
        match self.pointer.track(event)? {
            Contact::Down(position) => {
                let expired = self
                    .last_release
                    .is_some_and(|released| now.saturating_duration_since(released) > self.window);
                if expired {
                    self.taps = 0;
                    self.last_release = None;
                }
                self.press_origin = Some(position);
                self.wandered = false;
                self.phase = Phase::Active;
                None
            }
            Contact::Move(position) => {
                if let Some(origin) = self.press_origin {
                    if distance(origin, position) > self.slop {
                        self.wandered = true;
                    }
                }
                None
            }
            Contact::Up => {
                self.press_origin = None;
                if self.wandered {
                    return self.cancel();
                }

                self.taps += 1;
                self.last_release = Some(now);
                if self.taps >= self.required {
                    self.taps = 0;
                    self.last_release = None;
                    self.phase = Phase::Completed;
                    Some(())
                } else {
                    None
                }
            }
            Contact::Cancel => {
                self.press_origin = None;
                self.cancel()
            }
        }
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.pointer.reset();
        self.taps = 0;
        self.press_origin = None;
        self.wandered = false;
        self.last_release = None;
    }

    fn cancel(&mut self) -> Option<()> {
        self.taps = 0;
        self.last_release = None;
        self.phase = Phase::Cancelled;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Button;

    fn tap(recognizer: &mut TapRecognizer, at: Instant) -> Option<()> {
        recognizer.handle(
            &PointerEvent::Pressed {
                button: Button::Primary,
                position: Point::ORIGIN,
            },
            at,
        );
        recognizer.handle(
            &PointerEvent::Released {
                button: Button::Primary,
            },
            at,
        )
    }

    #[test]
    fn two_quick_taps_complete() {
        let mut recognizer = TapRecognizer::double(&Thresholds::default());
        let now = Instant::now();

        assert_eq!(tap(&mut recognizer, now), None);
        assert_eq!(recognizer.phase(), Phase::Active);
        assert_eq!(tap(&mut recognizer, now + Duration::from_millis(120)), Some(()));
        assert_eq!(recognizer.phase(), Phase::Completed);

        // The count starts over after a completed pair.
        assert_eq!(tap(&mut recognizer, now + Duration::from_millis(240)), None);
    }

    #[test]
    fn single_tap_does_not_complete() {
        let mut recognizer = TapRecognizer::double(&Thresholds::default());
        assert_eq!(tap(&mut recognizer, Instant::now()), None);
        assert_ne!(recognizer.phase(), Phase::Completed);
    }

    #[test]
    fn second_tap_outside_window_starts_over() {
        let mut recognizer = TapRecognizer::double(&Thresholds::default());
        let now = Instant::now();

        tap(&mut recognizer, now);
        assert_eq!(tap(&mut recognizer, now + Duration::from_secs(1)), None);

        // The late tap counts as the first of a new pair.
        assert_eq!(
            tap(&mut recognizer, now + Duration::from_millis(1100)),
            Some(())
        );
    }

    #[test]
    fn wandering_press_is_not_a_tap() {
        let mut recognizer = TapRecognizer::double(&Thresholds::default());
        let now = Instant::now();
        tap(&mut recognizer, now);

        recognizer.handle(
            &PointerEvent::Pressed {
                button: Button::Primary,
                position: Point::ORIGIN,
            },
            now,
        );
        recognizer.handle(&PointerEvent::Moved(Point::new(50.0, 0.0)), now);
        let result = recognizer.handle(
            &PointerEvent::Released {
                button: Button::Primary,
            },
            now,
        );

        assert_eq!(result, None);
        assert_eq!(recognizer.phase(), Phase::Cancelled);
        // The tap before the cancelled one no longer counts.
        assert_eq!(tap(&mut recognizer, now), None);
    }

    #[test]
    fn triple_tap_needs_three() {
        let mut recognizer = TapRecognizer::new(3, &Thresholds::default());
        let now = Instant::now();
        assert_eq!(tap(&mut recognizer, now), None);
        assert_eq!(tap(&mut recognizer, now), None);
        assert_eq!(tap(&mut recognizer, now), Some(()));
    }
}
