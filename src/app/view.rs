// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The whole view is a projection of the deck, the cursor, and the modal
//! state. The active slide is always `deck.slide(cursor.index())`; nothing
//! is read back from what was rendered before.

use super::{App, Message, Modal};
use crate::ui::design_tokens::sizing;
use crate::ui::modal::modal;
use crate::ui::{controls, help_dialog, slide_panel, zoom_dialog};
use iced::widget::{progress_bar, Column, Container};
use iced::{Element, Length};

/// Renders the current application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let slide_view = slide_panel::view(slide_panel::ViewContext {
        i18n: &app.i18n,
        slide: app.deck.slide(app.cursor.index()),
        deck_dir: app.deck_dir.as_deref(),
        ordinal: app.cursor.ordinal(),
    })
    .map(Message::SlidePanel);

    let controls_view = controls::view(controls::ViewContext {
        i18n: &app.i18n,
        counter: app.cursor.counter_text(),
    })
    .map(Message::Controls);

    let mut column = Column::new();
    if app.show_progress {
        column = column.push(
            progress_bar(0.0..=100.0, app.cursor.progress_percent())
                .girth(sizing::PROGRESS_GIRTH),
        );
    }
    column = column
        .push(
            Container::new(slide_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(controls_view);

    let base = Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    match &app.modal {
        Modal::None => base.into(),
        Modal::Help => modal(
            base,
            help_dialog::view(&app.i18n).map(Message::Help),
            Message::ModalBackdropPressed,
        ),
        Modal::ImageZoom(payload) => modal(
            base,
            zoom_dialog::view(payload, &app.i18n).map(Message::Zoom),
            Message::ModalBackdropPressed,
        ),
    }
}
