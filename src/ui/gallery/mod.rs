// SPDX-License-Identifier: MPL-2.0
//! The gesture gallery screen.
//!
//! Five independent panels, each binding one gesture to one visual property
//! of an image:
//!
//! - pinch → scale
//! - rotate → rotation
//! - drag → offset (relative to where the previous drag ended)
//! - double tap → opacity (1.0 / 0.5)
//! - long press → hue rotation (0° / 180°)
//!
//! [`state`] holds the pure visual state, [`component`] routes input to the
//! gesture recognizers, [`pad`] is the canvas that draws and captures input,
//! and [`panel`] lays out one item.

pub mod component;
pub mod pad;
pub mod panel;
pub mod state;

pub use component::{Message, State, ViewContext};
pub use state::{GalleryState, HueShift, Opacity, Panel};
