// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Solid blue "Reset" button with white text and rounded corners.
pub fn reset(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_600,
        button::Status::Active => palette::PRIMARY_500,
        button::Status::Disabled => palette::GRAY_200,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if matches!(status, button::Status::Disabled) {
            palette::GRAY_400
        } else {
            WHITE
        },
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        snap: true,
        ..button::Style::default()
    }
}
