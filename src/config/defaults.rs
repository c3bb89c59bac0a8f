// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Long press**: Hold duration and movement tolerance
//! - **Taps**: Double-tap window and tap slop
//! - **Drag**: Distance before a drag begins
//! - **Wheel pinch**: Mouse-wheel emulation of the magnify gesture
//! - **Display**: Panel sizing

// ==========================================================================
// Long Press Defaults
// ==========================================================================

/// Minimum hold duration before a long press completes (seconds).
pub const DEFAULT_LONG_PRESS_SECS: f32 = 2.0;

/// Shortest configurable long press (seconds).
pub const MIN_LONG_PRESS_SECS: f32 = 0.2;

/// Longest configurable long press (seconds).
pub const MAX_LONG_PRESS_SECS: f32 = 10.0;

/// Maximum pointer travel (logical pixels) before a long press is cancelled.
pub const DEFAULT_LONG_PRESS_SLOP: f32 = 10.0;

// ==========================================================================
// Tap Defaults
// ==========================================================================

/// Maximum delay between the first release and the second press (milliseconds).
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Shortest configurable double-tap window (milliseconds).
pub const MIN_DOUBLE_TAP_WINDOW_MS: u64 = 100;

/// Longest configurable double-tap window (milliseconds).
pub const MAX_DOUBLE_TAP_WINDOW_MS: u64 = 1000;

/// Maximum pointer travel (logical pixels) for a press/release to count as a tap.
pub const DEFAULT_TAP_SLOP: f32 = 10.0;

// ==========================================================================
// Drag Defaults
// ==========================================================================

/// Distance the pointer must travel before a drag starts (logical pixels).
pub const DEFAULT_DRAG_MIN_DISTANCE: f32 = 10.0;

/// Upper bound shared by every distance threshold (logical pixels).
pub const MAX_SLOP: f32 = 100.0;

// ==========================================================================
// Wheel Pinch Defaults
// ==========================================================================

/// Relative magnitude change per wheel notch.
pub const DEFAULT_WHEEL_ZOOM_STEP: f32 = 0.1;

/// Smallest configurable wheel step.
pub const MIN_WHEEL_ZOOM_STEP: f32 = 0.01;

/// Largest configurable wheel step.
pub const MAX_WHEEL_ZOOM_STEP: f32 = 1.0;

/// Wheel inactivity that ends a wheel-driven pinch (milliseconds).
pub const DEFAULT_WHEEL_IDLE_MS: u64 = 300;

/// Shortest configurable wheel idle timeout (milliseconds).
pub const MIN_WHEEL_IDLE_MS: u64 = 50;

/// Longest configurable wheel idle timeout (milliseconds).
pub const MAX_WHEEL_IDLE_MS: u64 = 2000;

/// Pixel scroll distance that counts as one wheel notch.
pub const PIXELS_PER_WHEEL_NOTCH: f32 = 120.0;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Edge length of the square frame each image is fitted into.
pub const DEFAULT_PANEL_SIZE: f32 = 200.0;

/// Smallest configurable panel size.
pub const MIN_PANEL_SIZE: f32 = 64.0;

/// Largest configurable panel size.
pub const MAX_PANEL_SIZE: f32 = 600.0;

/// Interval of the tick subscription while a timed gesture is pending.
pub const GESTURE_TICK_MS: u64 = 50;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_LONG_PRESS_SECS > 0.0);
    assert!(DEFAULT_LONG_PRESS_SECS >= MIN_LONG_PRESS_SECS);
    assert!(DEFAULT_LONG_PRESS_SECS <= MAX_LONG_PRESS_SECS);

    assert!(MIN_DOUBLE_TAP_WINDOW_MS > 0);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS <= MAX_DOUBLE_TAP_WINDOW_MS);

    assert!(DEFAULT_TAP_SLOP <= MAX_SLOP);
    assert!(DEFAULT_LONG_PRESS_SLOP <= MAX_SLOP);
    assert!(DEFAULT_DRAG_MIN_DISTANCE <= MAX_SLOP);

    assert!(MIN_WHEEL_ZOOM_STEP > 0.0);
    assert!(DEFAULT_WHEEL_ZOOM_STEP >= MIN_WHEEL_ZOOM_STEP);
    assert!(DEFAULT_WHEEL_ZOOM_STEP <= MAX_WHEEL_ZOOM_STEP);
    assert!(DEFAULT_WHEEL_IDLE_MS >= MIN_WHEEL_IDLE_MS);
    assert!(DEFAULT_WHEEL_IDLE_MS <= MAX_WHEEL_IDLE_MS);

    assert!(MIN_PANEL_SIZE > 0.0);
    assert!(DEFAULT_PANEL_SIZE >= MIN_PANEL_SIZE);
    assert!(DEFAULT_PANEL_SIZE <= MAX_PANEL_SIZE);

    // The tick must be fine enough to notice a pending deadline promptly.
    assert!(GESTURE_TICK_MS < DEFAULT_WHEEL_IDLE_MS);
};
