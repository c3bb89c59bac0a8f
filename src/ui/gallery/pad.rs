// SPDX-License-Identifier: MPL-2.0
//! Gesture pad: a canvas drawing one gallery image and turning raw mouse and
//! touch input into [`PointerEvent`]s relative to its center.

use crate::config::PIXELS_PER_WHEEL_NOTCH;
use crate::gesture::{Button, FingerId, PointerEvent};
use crate::media::ImageData;
use crate::ui::design_tokens::{opacity, palette, sizing};
use crate::ui::gallery::component::Message;
use crate::ui::gallery::state::Panel;
use crate::ui::styles::container::pad_outline;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, touch, Point, Radians, Rectangle, Renderer, Size, Theme, Vector};

/// Transform applied to the pad image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub scale: f32,
    pub rotation: Radians,
    pub offset: Vector,
    pub opacity: f32,
}

impl Default for Visual {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: Radians(0.0),
            offset: Vector::ZERO,
            opacity: 1.0,
        }
    }
}

/// Input bookkeeping kept by the canvas between events.
#[derive(Debug, Default)]
pub struct PadState {
    hovered: bool,
    primary_held: bool,
    secondary_held: bool,
    fingers: Vec<FingerId>,
}

impl PadState {
    fn is_pressed(&self) -> bool {
        self.primary_held || self.secondary_held || !self.fingers.is_empty()
    }
}

pub struct GesturePad<'a> {
    pub panel: Panel,
    pub image: &'a ImageData,
    /// Side of the square the image is fitted into before any transform.
    pub frame_size: f32,
    pub visual: Visual,
    /// Long-press progress in `0.0..=1.0`, drawn as a bar along the bottom.
    pub progress: Option<f32>,
}

/// Size of an image fitted inside a `frame` square, keeping its aspect ratio.
#[must_use]
pub fn fit_contain(width: u32, height: u32, frame: f32) -> Size {
    if width == 0 || height == 0 {
        return Size::new(frame, frame);
    }
    let aspect = width as f32 / height as f32;
    if aspect > 1.0 {
        Size::new(frame, frame / aspect)
    } else {
        Size::new(frame * aspect, frame)
    }
}

/// Converts an absolute position to coordinates relative to the pad center.
fn relative(position: Point, bounds: Rectangle) -> Point {
    let center = bounds.center();
    Point::new(position.x - center.x, position.y - center.y)
}

fn wheel_notches(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => y,
        mouse::ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_WHEEL_NOTCH,
    }
}

impl GesturePad<'_> {
    fn publish(&self, event: PointerEvent) -> Option<Action<Message>> {
        Some(
            Action::publish(Message::Pointer {
                panel: self.panel,
                event,
            })
            .and_capture(),
        )
    }

    fn button(&self, button: mouse::Button) -> Option<Button> {
        match button {
            mouse::Button::Left => Some(Button::Primary),
            mouse::Button::Right if self.panel.accepts_secondary_button() => {
                Some(Button::Secondary)
            }
            _ => None,
        }
    }

    fn update_mouse(
        &self,
        state: &mut PadState,
        event: &mouse::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match *event {
            mouse::Event::ButtonPressed(button) => {
                let button = self.button(button)?;
                let position = cursor.position_over(bounds)?;
                match button {
                    Button::Primary => state.primary_held = true,
                    Button::Secondary => state.secondary_held = true,
                }
                self.publish(PointerEvent::Pressed {
                    button,
                    position: relative(position, bounds),
                })
            }
            mouse::Event::ButtonReleased(button) => {
                let button = self.button(button)?;
                let held = match button {
                    Button::Primary => &mut state.primary_held,
                    Button::Secondary => &mut state.secondary_held,
                };
                if !std::mem::take(held) {
                    return None;
                }
                self.publish(PointerEvent::Released { button })
            }
            mouse::Event::CursorMoved { position } => {
                if state.primary_held || state.secondary_held {
                    return self.publish(PointerEvent::Moved(relative(position, bounds)));
                }

                let inside = bounds.contains(position);
                let was_hovered = std::mem::replace(&mut state.hovered, inside);
                match (was_hovered, inside) {
                    (true, false) => Some(Action::publish(Message::Pointer {
                        panel: self.panel,
                        event: PointerEvent::Left,
                    })),
                    (false, true) => Some(Action::request_redraw()),
                    _ => None,
                }
            }
            mouse::Event::CursorLeft => {
                state.hovered = false;
                if std::mem::take(&mut state.primary_held) {
                    return self.publish(PointerEvent::Released {
                        button: Button::Primary,
                    });
                }
                if std::mem::take(&mut state.secondary_held) {
                    return self.publish(PointerEvent::Released {
                        button: Button::Secondary,
                    });
                }
                self.publish(PointerEvent::Left)
            }
            mouse::Event::WheelScrolled { delta } => {
                if !self.panel.accepts_wheel() || !cursor.is_over(bounds) {
                    return None;
                }
                self.publish(PointerEvent::Wheel {
                    notches: wheel_notches(delta),
                })
            }
            _ => None,
        }
    }

    fn update_touch(
        &self,
        state: &mut PadState,
        event: &touch::Event,
        bounds: Rectangle,
    ) -> Option<Action<Message>> {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                if !bounds.contains(position) || state.fingers.contains(&id.0) {
                    return None;
                }
                state.fingers.push(id.0);
                self.publish(PointerEvent::FingerPressed {
                    id: id.0,
                    position: relative(position, bounds),
                })
            }
            touch::Event::FingerMoved { id, position } => {
                if !state.fingers.contains(&id.0) {
                    return None;
                }
                self.publish(PointerEvent::FingerMoved {
                    id: id.0,
                    position: relative(position, bounds),
                })
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                let before = state.fingers.len();
                state.fingers.retain(|finger| *finger != id.0);
                if state.fingers.len() == before {
                    return None;
                }
                self.publish(PointerEvent::FingerLifted { id: id.0 })
            }
        }
    }
}

impl canvas::Program<Message> for GesturePad<'_> {
    type State = PadState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse_event) => self.update_mouse(state, mouse_event, bounds, cursor),
            iced::Event::Touch(touch_event) => self.update_touch(state, touch_event, bounds),
            _ => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let fitted = fit_contain(self.image.width, self.image.height, self.frame_size);
        let center = frame.center();
        let visual = self.visual;

        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y) + visual.offset);
            frame.scale(visual.scale);
            let image_bounds = Rectangle::new(
                Point::new(-fitted.width / 2.0, -fitted.height / 2.0),
                fitted,
            );
            frame.draw_image(
                image_bounds,
                canvas::Image::new(self.image.handle.clone())
                    .rotation(visual.rotation)
                    .opacity(visual.opacity),
            );
        });

        if let Some(progress) = self.progress.filter(|p| *p > 0.0) {
            frame.fill_rectangle(
                Point::new(0.0, bounds.height - sizing::PROGRESS_BAR),
                Size::new(bounds.width * progress.min(1.0), sizing::PROGRESS_BAR),
                palette::PRIMARY_500,
            );
        }

        let alpha = if state.hovered || state.is_pressed() {
            opacity::OUTLINE_HOVER
        } else {
            opacity::OUTLINE
        };
        frame.stroke(
            &Path::rectangle(Point::ORIGIN, bounds.size()),
            Stroke::default()
                .with_width(1.0)
                .with_color(pad_outline(theme, alpha)),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let dragging = self.panel == Panel::Drag;
        if state.primary_held && dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            if dragging {
                mouse::Interaction::Grab
            } else {
                mouse::Interaction::Pointer
            }
        } else {
            mouse::Interaction::default()
        }
    }
}
