// SPDX-License-Identifier: MPL-2.0
//! Drag / pan recognizer.
//!
//! Reports the translation of the pointer relative to where it was pressed.
//! The drag only begins once the pointer has travelled the minimum distance;
//! from then on every move is reported, including the initial travel.

use super::{magnitude, Contact, Phase, PointerEvent, PrimaryPointer, Thresholds};
use iced::{Point, Vector};

/// Progress reported by [`DragRecognizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drag {
    Changed(Vector),
    /// Final translation. Also emitted when a second finger interrupts an
    /// active drag, so the last reported position is always settled.
    Ended(Vector),
}

#[derive(Debug, Clone)]
pub struct DragRecognizer {
    phase: Phase,
    pointer: PrimaryPointer,
    origin: Option<Point>,
    translation: Vector,
    min_distance: f32,
}

impl Default for DragRecognizer {
    fn default() -> Self {
        Self::new(&Thresholds::default())
    }
}

impl DragRecognizer {
    #[must_use]
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            phase: Phase::Idle,
            pointer: PrimaryPointer::default(),
            origin: None,
            translation: Vector::ZERO,
            min_distance: thresholds.drag_min_distance,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn handle(&mut self, event: &PointerEvent) -> Option<Drag> {
        match self.pointer.track(event)? {
            Contact::Down(position) => {
                self.origin = Some(position);
                self.translation = Vector::ZERO;
                self.phase = Phase::Idle;
                None
            }
            Contact::Move(position) => {
                let origin = self.origin?;
                let translation = position - origin;

                if !self.phase.is_active() {
                    if magnitude(translation) < self.min_distance {
                        return None;
                    }
                    self.phase = Phase::Active;
                }

                self.translation = translation;
                Some(Drag::Changed(translation))
            }
            Contact::Up => {
                self.origin = None;
                if self.phase.is_active() {
                    self.phase = Phase::Completed;
                    Some(Drag::Ended(self.translation))
                } else {
                    None
                }
            }
            Contact::Cancel => {
                self.origin = None;
                let was_active = self.phase.is_active();
                self.phase = Phase::Cancelled;
                was_active.then_some(Drag::Ended(self.translation))
            }
        }
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.pointer.reset();
        self.origin = None;
        self.translation = Vector::ZERO;
    }
}
