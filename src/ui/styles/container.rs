// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, spacing};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Banner shown above the gallery when the settings file could not be read.
pub fn notice(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        text_color: Some(theme.extended_palette().background.weak.text),
        border: Border {
            color: palette::WARNING_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Padding used inside [`notice`].
pub const NOTICE_PADDING: f32 = spacing::XS;

/// Pad outline color derived from the theme text color.
#[must_use]
pub fn pad_outline(theme: &Theme, alpha: f32) -> Color {
    Color {
        a: alpha,
        ..theme.palette().text
    }
}
