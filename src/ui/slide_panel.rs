// SPDX-License-Identifier: MPL-2.0
//! Slide panel rendering.
//!
//! Renders exactly one slide: the one the cursor points at. The panel is a
//! pure projection of the deck and cursor; it never holds its own notion of
//! the active slide. Vector figures get a click handler that opens the zoom
//! dialog; other figures render without one.

use crate::deck::Slide;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::zoom_dialog::ZoomPayload;
use iced::alignment::Horizontal;
use iced::widget::{image, mouse_area, svg, text, Column, Container};
use iced::{Element, Length};
use std::path::Path;

/// Contextual data needed to render the slide panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub slide: &'a Slide,
    /// Directory of the deck file, for resolving relative figure sources.
    pub deck_dir: Option<&'a Path>,
    /// One-based ordinal of the slide, for the fallback title.
    pub ordinal: usize,
}

/// Messages emitted by the slide panel.
#[derive(Debug, Clone)]
pub enum Message {
    /// A zoom-eligible figure was activated.
    FigureActivated(ZoomPayload),
}

/// Render the active slide.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title_text = match &ctx.slide.title {
        Some(title) => title.clone(),
        None => ctx
            .i18n
            .tr_with("slide-fallback-title", &[("ordinal", ctx.ordinal.to_string())]),
    };

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(text(title_text).size(typography::TITLE_LG));

    for line in &ctx.slide.body {
        content = content.push(text(line.as_str()).size(typography::BODY_LG));
    }

    if let Some(figure) = &ctx.slide.figure {
        content = content.push(figure_view(ctx.deck_dir, figure));
        if let Some(caption) = &figure.caption {
            content = content.push(text(caption.as_str()).size(typography::CAPTION));
        }
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(spacing::XL)
        .into()
}

/// Render a figure, attaching the zoom handler only to eligible sources.
fn figure_view<'a>(
    deck_dir: Option<&'a Path>,
    figure: &'a crate::deck::Figure,
) -> Element<'a, Message> {
    match figure.zoom_source(deck_dir) {
        // Vector figure: render from the normalized source and make it zoomable.
        Some(source) => {
            let payload = ZoomPayload {
                source: source.clone(),
                caption: figure.caption_text().to_string(),
            };
            let rendered = svg::Svg::new(svg::Handle::from_path(source))
                .height(Length::Fixed(sizing::FIGURE_HEIGHT));
            mouse_area(rendered)
                .on_press(Message::FigureActivated(payload))
                .into()
        }
        // Anything else renders as a plain raster image, without zoom.
        None => image::Image::new(image::Handle::from_path(figure.resolved_source(deck_dir)))
            .height(Length::Fixed(sizing::FIGURE_HEIGHT))
            .into(),
    }
}
