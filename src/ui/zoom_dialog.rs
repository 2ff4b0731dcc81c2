// SPDX-License-Identifier: MPL-2.0
//! Image zoom dialog.
//!
//! Shows a vector figure at larger scale together with its caption. The
//! payload is assembled by the slide panel right before the dialog opens;
//! the dialog itself holds no state.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, svg, text, Column, Container};
use iced::{Element, Length};
use std::path::PathBuf;

/// Display payload for the zoom dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomPayload {
    /// Resolved path of the vector image.
    pub source: PathBuf,
    /// Caption drawn from the figure; empty string when it has none.
    pub caption: String,
}

/// Messages emitted by the zoom dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ClosePressed,
}

/// Render the zoom dialog surface.
pub fn view<'a>(payload: &'a ZoomPayload, i18n: &'a I18n) -> Element<'a, Message> {
    let image = svg::Svg::new(svg::Handle::from_path(&payload.source))
        .width(Length::Fixed(sizing::ZOOM_IMAGE_SIZE))
        .height(Length::Fixed(sizing::ZOOM_IMAGE_SIZE * 0.75));

    let caption = text(payload.caption.as_str()).size(typography::BODY);

    let close = button(text(i18n.tr("zoom-close-button")).size(typography::BODY))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::ClosePressed);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(image)
        .push(caption)
        .push(close);

    Container::new(content)
        .padding(spacing::LG)
        .style(styles::container::dialog_surface)
        .into()
}
