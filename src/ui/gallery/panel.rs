// SPDX-License-Identifier: MPL-2.0
//! A single gallery item: headline, gesture pad and reset button.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery::component::{Message, State};
use crate::ui::gallery::pad::GesturePad;
use crate::ui::gallery::state::Panel;
use crate::ui::styles;
use iced::widget::{button, canvas, column, container, text};
use iced::{font, Alignment, Element, Font, Length};

pub fn view<'a>(state: &'a State, panel: Panel, i18n: &'a I18n) -> Element<'a, Message> {
    let headline = text(i18n.tr(panel.title_key()))
        .size(typography::HEADLINE)
        .font(Font {
            weight: font::Weight::Semibold,
            ..Font::DEFAULT
        });

    let pad_extent = Length::Fixed(state.panel_size() * sizing::PAD_HEIGHT_RATIO);
    let pad: Element<'a, Message> = match state.image_for(panel) {
        Some(image) => canvas(GesturePad {
            panel,
            image,
            frame_size: state.panel_size(),
            visual: state.visual(panel),
            progress: if panel == Panel::Hue {
                state.long_press_progress()
            } else {
                None
            },
        })
        .width(pad_extent)
        .height(pad_extent)
        .into(),
        None => container(text(i18n.tr("loading-images")).size(typography::BODY))
            .center_x(pad_extent)
            .center_y(pad_extent)
            .into(),
    };

    let reset = button(text(i18n.tr("reset-button")).size(typography::BODY))
        .padding(spacing::XS)
        .style(styles::button_reset)
        .on_press(Message::Reset(panel));

    column![headline, pad, reset]
        .spacing(spacing::XS)
        .align_x(Alignment::Center)
        .into()
}
