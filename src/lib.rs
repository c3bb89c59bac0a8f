// SPDX-License-Identifier: MPL-2.0
//! `gesture_gallery` is a single-screen gesture playground built with the
//! Iced GUI framework.
//!
//! Five panels each bind one gesture to one visual property of an image
//! (pinch → scale, rotate → rotation, drag → offset, double tap → opacity,
//! long press → hue), with a reset button per panel.

pub mod app;
pub mod config;
pub mod error;
pub mod gesture;
pub mod i18n;
pub mod media;
pub mod ui;
