// SPDX-License-Identifier: MPL-2.0
//! Help dialog listing the keyboard shortcuts.
//!
//! The dialog is stateless: it is opened by the help control or the mapped
//! keys and closed by its close button, the backdrop, or Escape.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{Element, Length};

/// Messages emitted by the help dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ClosePressed,
}

/// Render the help dialog surface.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("help-title")).size(typography::TITLE_SM);

    let shortcuts = Column::new()
        .spacing(spacing::XXS)
        .push(shortcut_row("→ / PgDn / Space", i18n.tr("help-key-next")))
        .push(shortcut_row("← / PgUp", i18n.tr("help-key-previous")))
        .push(shortcut_row("Home", i18n.tr("help-key-first")))
        .push(shortcut_row("End", i18n.tr("help-key-last")))
        .push(shortcut_row("F", i18n.tr("help-key-fullscreen")))
        .push(shortcut_row("? / H", i18n.tr("help-key-help")))
        .push(shortcut_row("Esc", i18n.tr("help-key-escape")));

    let close = button(text(i18n.tr("help-close-button")).size(typography::BODY))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::ClosePressed);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(shortcuts)
        .push(close);

    Container::new(content)
        .width(Length::Fixed(sizing::HELP_DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog_surface)
        .into()
}

/// Build a single shortcut row with key badge and description.
fn shortcut_row<'a>(key: &'a str, description: String) -> Element<'a, Message> {
    let key_badge = Container::new(Text::new(key).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::key_badge);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(key_badge).width(Length::Fixed(sizing::KEY_BADGE_WIDTH)))
        .push(Text::new(description).size(typography::BODY))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_view_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n);
    }
}
