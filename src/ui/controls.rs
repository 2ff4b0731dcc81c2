// SPDX-License-Identifier: MPL-2.0
//! Bottom controls bar: navigation buttons, slide counter, fullscreen and
//! help triggers.
//!
//! The bar is a pure projection of the cursor; it holds no state of its own.
//! Navigation buttons stay enabled at the deck boundaries because the cursor
//! clamps, making boundary presses harmless no-ops.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, text, tooltip, Container, Row, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render the controls bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Counter text, e.g. `"3 / 12"`.
    pub counter: String,
}

/// Messages emitted by the controls bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PreviousPressed,
    NextPressed,
    OpenDeckPressed,
    FullscreenPressed,
    HelpPressed,
}

/// Render the controls bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let previous = glyph_button(
        "‹",
        ctx.i18n.tr("controls-previous"),
        Message::PreviousPressed,
    );
    let next = glyph_button("›", ctx.i18n.tr("controls-next"), Message::NextPressed);

    let counter = Container::new(Text::new(ctx.counter).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::MD));

    let open_deck = glyph_button(
        "+",
        ctx.i18n.tr("controls-open-deck"),
        Message::OpenDeckPressed,
    );
    let fullscreen = glyph_button(
        "⛶",
        ctx.i18n.tr("controls-fullscreen"),
        Message::FullscreenPressed,
    );
    let help = glyph_button("?", ctx.i18n.tr("controls-help"), Message::HelpPressed);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(previous)
        .push(next)
        .push(Space::new().width(Length::Fill))
        .push(counter)
        .push(Space::new().width(Length::Fill))
        .push(open_deck)
        .push(fullscreen)
        .push(help);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CONTROLS_HEIGHT))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::controls_bar)
        .into()
}

/// A quiet glyph button with a tooltip naming its action.
fn glyph_button<'a>(glyph: &'a str, tip: String, message: Message) -> Element<'a, Message> {
    let inner = button(text(glyph).size(typography::TITLE_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::control)
        .on_press(message);

    styles::tooltip::styled(inner, tip, tooltip::Position::Top).into()
}
