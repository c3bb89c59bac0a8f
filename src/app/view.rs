// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::styles::container::{notice, NOTICE_PADDING};
use iced::widget::{button, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    /// Translation key of a startup warning to show above the gallery.
    pub warning_key: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = ctx
        .gallery
        .view(GalleryViewContext { i18n: ctx.i18n })
        .map(Message::Gallery);

    let mut column = Column::new().width(Length::Fill);
    if let Some(key) = ctx.warning_key {
        column = column.push(warning_banner(ctx.i18n, key));
    }
    column = column.push(gallery);

    scrollable(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn warning_banner<'a>(i18n: &'a I18n, key: &'a str) -> Element<'a, Message> {
    let content = row![
        text(i18n.tr(key)).size(typography::BODY).width(Length::Fill),
        button(text("×").size(typography::BODY))
            .style(button::text)
            .on_press(Message::DismissConfigWarning),
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center);

    container(container(content).padding(NOTICE_PADDING).style(notice))
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}
