// SPDX-License-Identifier: MPL-2.0
//! Timer subscription for time-based gestures.
//!
//! Pointer input reaches the gallery through its canvases; the only thing
//! the application subscribes to is a clock, and only while a long press is
//! held or a wheel zoom burst is open.

use super::Message;
use crate::config::GESTURE_TICK_MS;
use iced::{time, Subscription};
use std::time::Duration;

pub fn create_tick_subscription(gesture_pending: bool) -> Subscription<Message> {
    if gesture_pending {
        time::every(Duration::from_millis(GESTURE_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
